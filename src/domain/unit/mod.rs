//! Typed views over a resolved subtype group.

pub mod capital_cost;
pub mod removal;
pub mod unit_parameters;
pub mod uv;

pub use capital_cost::{CapitalCost, CostCurve, CurveCoefficient};
pub use removal::RemovalTable;
pub use unit_parameters::{DEFAULT_REMOVAL_KEY, UnitParameters};
pub use uv::UvIrradiation;

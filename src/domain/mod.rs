pub mod error;
pub mod identities;
pub mod parameters;
pub mod unit;

pub use error::AppError;
pub use identities::TechnologyId;
pub use parameters::{
    DEFAULT_SUBTYPE, Entry, Field, Group, Node, NotFoundError, ParamPath, ParamValue, Parameter,
    ParameterStore, SchemaError, Setting,
};
pub use unit::{CapitalCost, CostCurve, RemovalTable, UnitParameters, UvIrradiation};

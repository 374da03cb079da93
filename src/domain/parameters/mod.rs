pub mod error;
pub mod model;
pub mod path;
pub mod schema;
pub mod store;

pub use error::{NotFoundError, SchemaError};
pub use model::{Entry, Field, Group, Node, ParamValue, Parameter, Setting, UNSET_SENTINEL};
pub use path::{InvalidPathError, ParamPath};
pub use schema::{CAPITAL_COST_KEY, FRACTION_PARAMETER_KEYS, REMOVAL_TABLE_KEY};
pub use store::{DEFAULT_SUBTYPE, ParameterStore};

//! unitparams: Load, validate, and inspect zero-order treatment-unit parameter documents.
//!
//! A parameter document maps process subtypes (`default`, ...) to groups of named
//! parameters, each carrying a `value` and `units`. Documents are validated once at
//! load time and are read-only afterwards.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use app::commands::list::TechnologySummary;
pub use app::commands::removal::{RemovalOptions, RemovalRow};
pub use app::commands::show::OutputFormat;
pub use app::commands::validate::ValidateOutcome;
pub use app::{DATABASE_ENV, DatabaseLocation};
pub use domain::{
    AppError, CapitalCost, CostCurve, Entry, Field, Group, Node, NotFoundError, ParamPath,
    ParamValue, Parameter, ParameterStore, RemovalTable, SchemaError, Setting, TechnologyId,
    UnitParameters, UvIrradiation,
};
pub use services::ParameterDatabase;

/// Load and validate a single parameter document from disk.
pub fn load(path: &Path) -> Result<ParameterStore, AppError> {
    debug!(path = %path.display(), "Loading parameter document");
    let content = fs::read_to_string(path)?;
    ParameterStore::from_yaml_str(&content)
        .map_err(|err| AppError::schema_error(path.display().to_string(), err))
}

/// Open the parameter database at the given location.
pub fn open_database(location: &DatabaseLocation) -> Result<ParameterDatabase, AppError> {
    location.open()
}

// =============================================================================
// Inspection API
// =============================================================================

/// List every technology and its process subtypes.
pub fn list(db: &ParameterDatabase) -> Vec<TechnologySummary> {
    app::commands::list::execute(db)
}

/// Render a technology's parameters resolved for the given subtypes.
pub fn show<S: AsRef<str>>(
    db: &ParameterDatabase,
    technology: &str,
    subtypes: &[S],
    format: OutputFormat,
) -> Result<String, AppError> {
    let group = app::commands::show::execute(db, technology, subtypes)?;
    app::commands::show::render(&group, format)
}

/// Render one entry addressed by a dotted path, e.g. `default.capital_cost.cost_factor`.
pub fn get(db: &ParameterDatabase, technology: &str, path: &str) -> Result<String, AppError> {
    app::commands::get::execute(db, technology, path)
}

/// Resolve removal fractions for a technology.
pub fn removal(db: &ParameterDatabase, options: &RemovalOptions) -> Result<Vec<RemovalRow>, AppError> {
    app::commands::removal::execute(db, options)
}

/// Validate standalone documents, collecting diagnostics for every file.
pub fn validate<P: AsRef<Path>>(paths: &[P]) -> ValidateOutcome {
    app::commands::validate::execute(paths)
}

/// Operating parameters of an ultraviolet irradiation unit.
pub fn uv_irradiation<S: AsRef<str>>(
    db: &ParameterDatabase,
    technology: &str,
    subtypes: &[S],
) -> Result<UvIrradiation, AppError> {
    let unit = db.unit_parameters(technology, subtypes)?;
    UvIrradiation::from_unit(&unit)
}

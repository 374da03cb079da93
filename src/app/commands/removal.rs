use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::AppError;
use crate::services::ParameterDatabase;

#[derive(Debug, Clone)]
pub struct RemovalOptions {
    pub technology: String,
    pub subtypes: Vec<String>,
    /// Solutes to resolve; empty means every solute in the table.
    pub solutes: Vec<String>,
    pub use_default_removal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemovalRow {
    pub solute: String,
    pub fraction: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

pub fn execute(db: &ParameterDatabase, options: &RemovalOptions) -> Result<Vec<RemovalRow>, AppError> {
    let unit = db.unit_parameters(&options.technology, &options.subtypes)?;

    let solutes: Vec<String> = if options.solutes.is_empty() {
        unit.removal.solutes().map(str::to_string).collect()
    } else {
        options.solutes.clone()
    };

    let fractions: BTreeMap<String, f64> =
        unit.removal.resolve(&solutes, options.use_default_removal)?;

    Ok(solutes
        .iter()
        .filter_map(|solute| {
            fractions.get(solute).map(|fraction| RemovalRow {
                solute: solute.clone(),
                fraction: *fraction,
                display_name: unit.removal.display_name(solute).map(str::to_string),
            })
        })
        .collect())
}

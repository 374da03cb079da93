use serde::Serialize;

use crate::services::ParameterDatabase;

/// A technology and the process subtypes its document defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologySummary {
    pub technology: String,
    pub subtypes: Vec<String>,
}

pub fn execute(db: &ParameterDatabase) -> Vec<TechnologySummary> {
    db.technologies()
        .filter_map(|technology| {
            let store = db.store(technology.as_str()).ok()?;
            Some(TechnologySummary {
                technology: technology.to_string(),
                subtypes: store.subtypes().map(str::to_string).collect(),
            })
        })
        .collect()
}

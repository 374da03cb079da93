use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{DEFAULT_SUBTYPE, ParameterStore, UnitParameters};

use super::diagnostics::Diagnostics;

#[derive(Debug)]
pub struct ValidateOutcome {
    pub checked: usize,
    pub diagnostics: Diagnostics,
}

impl ValidateOutcome {
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Validate standalone documents. Every file is checked; failures do not stop the run.
pub fn execute<P: AsRef<Path>>(paths: &[P]) -> ValidateOutcome {
    let mut diagnostics = Diagnostics::default();

    for path in paths {
        let path = path.as_ref();
        validate_file(path, &mut diagnostics);
    }

    ValidateOutcome { checked: paths.len(), diagnostics }
}

fn validate_file(path: &Path, diagnostics: &mut Diagnostics) {
    let file = path.display().to_string();
    debug!(file = %file, "Validating parameter document");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            diagnostics.push_error(&file, err.to_string());
            return;
        }
    };

    let store = match ParameterStore::from_yaml_str(&content) {
        Ok(store) => store,
        Err(err) => {
            diagnostics.push_error(&file, err.to_string());
            return;
        }
    };

    if store.subtype(DEFAULT_SUBTYPE).is_err() {
        diagnostics.push_error(&file, "missing 'default' subtype");
        return;
    }

    let subtypes: Vec<&str> = store.subtypes().collect();
    for subtype in subtypes {
        let unit = match UnitParameters::resolve(&store, &[subtype]) {
            Ok(unit) => unit,
            Err(err) => {
                diagnostics.push_error(&file, err.to_string());
                continue;
            }
        };

        if let Some(capital_cost) = &unit.capital_cost
            && !capital_cost.coefficients.is_empty()
            && let Err(err) = capital_cost.curve()
        {
            diagnostics.push_warning(&file, format!("subtype '{}': {}", subtype, err));
        }

        for (name, parameter) in &unit.operating {
            if parameter.value.is_unset() {
                diagnostics.push_warning(
                    &file,
                    format!("subtype '{}': parameter '{}' has no value", subtype, name),
                );
            }
        }
    }
}

use crate::domain::{AppError, Group};
use crate::services::ParameterDatabase;

/// Output encoding for rendered groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Resolve a technology's parameters for the given subtypes.
pub fn execute<S: AsRef<str>>(
    db: &ParameterDatabase,
    technology: &str,
    subtypes: &[S],
) -> Result<Group, AppError> {
    db.unit_operation_parameters(technology, subtypes)
}

pub fn render<T: serde::Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|err| AppError::Render(err.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|err| AppError::Render(err.to_string())),
    }
}

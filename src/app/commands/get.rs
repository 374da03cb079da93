use crate::domain::{AppError, Entry, Field, ParamPath};
use crate::services::ParameterDatabase;

use super::show::{OutputFormat, render};

/// Render a single entry addressed by a dotted path.
///
/// Scalars print bare; parameters and groups print as YAML.
pub fn execute(db: &ParameterDatabase, technology: &str, path: &str) -> Result<String, AppError> {
    let path: ParamPath = path.parse()?;
    let store = db.store(technology)?;

    let rendered = match store.lookup(path.segments())? {
        Entry::Field(Field::Value(value)) => format!("{}\n", value),
        Entry::Field(Field::Text(text)) => format!("{}\n", text),
        Entry::Setting(setting) => format!("{}\n", setting),
        Entry::Parameter(parameter) => render(parameter, OutputFormat::Yaml)?,
        Entry::Group(group) => render(group, OutputFormat::Yaml)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryParameterSource;

    const DOC: &str = r#"
default:
  capital_cost:
    cost_factor: None
  uv_reduced_equivalent_dose:
    value: 100
    units: mJ/cm**2
"#;

    fn db() -> ParameterDatabase {
        ParameterDatabase::open(&MemoryParameterSource::new().with_document("uv", DOC)).unwrap()
    }

    #[test]
    fn prints_scalars_bare() {
        let db = db();
        assert_eq!(execute(&db, "uv", "default.uv_reduced_equivalent_dose.value").unwrap(), "100\n");
        assert_eq!(
            execute(&db, "uv", "default.uv_reduced_equivalent_dose.units").unwrap(),
            "mJ/cm**2\n"
        );
        assert_eq!(execute(&db, "uv", "default.capital_cost.cost_factor").unwrap(), "None\n");
    }

    #[test]
    fn prints_parameter_as_yaml() {
        let output = execute(&db(), "uv", "default.uv_reduced_equivalent_dose").unwrap();
        assert!(output.contains("units: mJ/cm**2"));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let err = execute(&db(), "uv", "default.nonexistent").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn malformed_path_is_rejected() {
        assert!(matches!(execute(&db(), "uv", "default..value"), Err(AppError::InvalidPath(_))));
    }
}

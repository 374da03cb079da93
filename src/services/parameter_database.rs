//! Parameter database service - every technology document, loaded once.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::{AppError, Group, ParameterStore, TechnologyId, UnitParameters};
use crate::ports::ParameterSource;

/// Immutable collection of validated parameter documents keyed by technology.
#[derive(Debug, Clone)]
pub struct ParameterDatabase {
    origin: String,
    stores: BTreeMap<TechnologyId, ParameterStore>,
}

impl ParameterDatabase {
    /// Load and validate every document the source provides.
    ///
    /// The first invalid document aborts the load.
    pub fn open(source: &impl ParameterSource) -> Result<Self, AppError> {
        let origin = source.describe();
        let mut stores = BTreeMap::new();

        for technology in source.technologies()? {
            let content = source.read(&technology)?;
            let store = ParameterStore::from_yaml_str(&content).map_err(|err| {
                AppError::schema_error(format!("'{}' in {}", technology, origin), err)
            })?;
            debug!(
                technology = technology.as_str(),
                subtypes = store.subtypes().count(),
                "Loaded parameter document"
            );
            stores.insert(technology, store);
        }

        info!(origin = %origin, technologies = stores.len(), "Parameter database loaded");
        Ok(Self { origin, stores })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn technologies(&self) -> impl Iterator<Item = &TechnologyId> {
        self.stores.keys()
    }

    pub fn store(&self, technology: &str) -> Result<&ParameterStore, AppError> {
        let id = TechnologyId::new(technology)?;
        self.stores.get(&id).ok_or_else(|| AppError::TechnologyNotFound {
            name: technology.to_string(),
            available: self.available(),
        })
    }

    /// Parameters of a technology: `default` overlaid with the named subtypes.
    pub fn unit_operation_parameters<S: AsRef<str>>(
        &self,
        technology: &str,
        subtypes: &[S],
    ) -> Result<Group, AppError> {
        Ok(self.store(technology)?.resolve_subtypes(subtypes)?)
    }

    pub fn unit_parameters<S: AsRef<str>>(
        &self,
        technology: &str,
        subtypes: &[S],
    ) -> Result<UnitParameters, AppError> {
        UnitParameters::resolve(self.store(technology)?, subtypes)
    }

    fn available(&self) -> String {
        self.stores.keys().map(TechnologyId::as_str).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamValue;
    use crate::testing::MemoryParameterSource;

    const UV: &str = r#"
default:
  uv_transmittance_in:
    value: 0.9
    units: dimensionless
low_transmittance:
  uv_transmittance_in:
    value: 0.7
    units: dimensionless
"#;

    #[test]
    fn opens_every_document() {
        let source = MemoryParameterSource::new()
            .with_document("uv", UV)
            .with_document("ozonation", "default: {}\n");
        let db = ParameterDatabase::open(&source).unwrap();
        let names: Vec<&str> = db.technologies().map(TechnologyId::as_str).collect();
        assert_eq!(names, vec!["ozonation", "uv"]);
        assert_eq!(db.origin(), "memory");
    }

    #[test]
    fn invalid_document_names_technology() {
        let source = MemoryParameterSource::new()
            .with_document("uv", "default:\n  dose:\n    value: 1\n");
        let err = ParameterDatabase::open(&source).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, AppError::Schema { .. }));
        assert!(message.contains("'uv'"), "message was: {message}");
    }

    #[test]
    fn resolves_subtype_overlay() {
        let source = MemoryParameterSource::new().with_document("uv", UV);
        let db = ParameterDatabase::open(&source).unwrap();
        let group = db.unit_operation_parameters("uv", &["low_transmittance"]).unwrap();
        assert_eq!(group.parameter("uv_transmittance_in").unwrap().value, ParamValue::Number(0.7));
    }

    #[test]
    fn unknown_and_invalid_technologies_fail() {
        let source = MemoryParameterSource::new().with_document("uv", UV);
        let db = ParameterDatabase::open(&source).unwrap();
        assert!(matches!(db.store("ozonation"), Err(AppError::TechnologyNotFound { .. })));
        assert!(matches!(db.store("../uv"), Err(AppError::InvalidTechnologyId(_))));
    }
}

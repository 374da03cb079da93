//! Parameter source backed by documents compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TechnologyId};
use crate::ports::ParameterSource;

use super::filesystem_source::DOCUMENT_EXTENSIONS;

/// Embedded database directory.
static DATABASE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/database");

/// Source serving the bundled parameter documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedParameterSource;

impl EmbeddedParameterSource {
    pub fn new() -> Self {
        Self
    }

    fn document(&self, technology: &TechnologyId) -> Option<&'static include_dir::File<'static>> {
        DOCUMENT_EXTENSIONS
            .iter()
            .find_map(|ext| DATABASE_DIR.get_file(format!("{}.{}", technology.as_str(), ext)))
    }
}

impl ParameterSource for EmbeddedParameterSource {
    fn describe(&self) -> String {
        "embedded database".to_string()
    }

    fn technologies(&self) -> Result<Vec<TechnologyId>, AppError> {
        let mut technologies = Vec::new();
        for file in DATABASE_DIR.files() {
            let path = file.path();
            let is_document = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| DOCUMENT_EXTENSIONS.iter().any(|known| *known == ext));
            if !is_document {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                technologies.push(TechnologyId::new(stem)?);
            }
        }
        technologies.sort();
        technologies.dedup();
        Ok(technologies)
    }

    fn read(&self, technology: &TechnologyId) -> Result<String, AppError> {
        let Some(file) = self.document(technology) else {
            let available = self
                .technologies()?
                .iter()
                .map(TechnologyId::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::TechnologyNotFound { name: technology.to_string(), available });
        };

        let content = file.contents_utf8().ok_or_else(|| {
            AppError::config_error(format!("Embedded document for '{}' is not valid UTF-8", technology))
        })?;
        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_uv_document() {
        let source = EmbeddedParameterSource::new();
        let names: Vec<String> = source.technologies().unwrap().into_iter().map(String::from).collect();
        assert!(names.contains(&"uv".to_string()), "should contain 'uv' document");
    }

    #[test]
    fn reads_uv_document() {
        let content = EmbeddedParameterSource::new().read(&TechnologyId::new("uv").unwrap()).unwrap();
        assert!(content.contains("uv_capital_a_parameter"));
    }

    #[test]
    fn unknown_technology_is_not_found() {
        let err = EmbeddedParameterSource::new()
            .read(&TechnologyId::new("reverse_osmosis").unwrap())
            .unwrap_err();
        assert!(matches!(err, AppError::TechnologyNotFound { ref available, .. } if available == "uv"));
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{AppError, TechnologyId};
use crate::ports::ParameterSource;

/// File extensions recognized as parameter documents, in lookup order.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Directory of `<technology>.yaml` documents.
#[derive(Debug, Clone)]
pub struct FilesystemParameterSource {
    root: PathBuf,
}

impl FilesystemParameterSource {
    /// Create a source for the given directory. The directory must exist.
    pub fn new(root: PathBuf) -> Result<Self, AppError> {
        if !root.is_dir() {
            return Err(AppError::DatabaseNotFound(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, technology: &TechnologyId) -> Option<PathBuf> {
        DOCUMENT_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", technology.as_str(), ext)))
            .find(|path| path.is_file())
    }
}

impl ParameterSource for FilesystemParameterSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn technologies(&self) -> Result<Vec<TechnologyId>, AppError> {
        let mut technologies = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let is_document = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| DOCUMENT_EXTENSIONS.iter().any(|known| *known == ext));
            if !is_document || !path.is_file() {
                debug!(path = %path.display(), "Skipping non-document entry");
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match TechnologyId::new(stem) {
                Ok(id) => technologies.push(id),
                Err(_) => warn!(path = %path.display(), "Ignoring document with invalid technology name"),
            }
        }

        technologies.sort();
        technologies.dedup();
        Ok(technologies)
    }

    fn read(&self, technology: &TechnologyId) -> Result<String, AppError> {
        let Some(path) = self.document_path(technology) else {
            let available = self
                .technologies()?
                .iter()
                .map(TechnologyId::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::TechnologyNotFound { name: technology.to_string(), available });
        };
        debug!(path = %path.display(), "Reading parameter document");
        Ok(fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source_with(files: &[(&str, &str)]) -> (TempDir, FilesystemParameterSource) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let source = FilesystemParameterSource::new(dir.path().to_path_buf()).unwrap();
        (dir, source)
    }

    #[test]
    fn lists_yaml_and_yml_documents() {
        let (_dir, source) = source_with(&[
            ("uv.yaml", "default: {}"),
            ("ozonation.yml", "default: {}"),
            ("README.md", "notes"),
            ("bad name.yaml", "default: {}"),
        ]);
        let names: Vec<String> = source.technologies().unwrap().into_iter().map(String::from).collect();
        assert_eq!(names, vec!["ozonation", "uv"]);
    }

    #[test]
    fn reads_document_by_technology() {
        let (_dir, source) = source_with(&[("uv.yml", "default: {}\n")]);
        let content = source.read(&TechnologyId::new("uv").unwrap()).unwrap();
        assert_eq!(content, "default: {}\n");
    }

    #[test]
    fn unknown_technology_lists_available() {
        let (_dir, source) = source_with(&[("uv.yaml", "default: {}")]);
        let err = source.read(&TechnologyId::new("ozonation").unwrap()).unwrap_err();
        match err {
            AppError::TechnologyNotFound { name, available } => {
                assert_eq!(name, "ozonation");
                assert_eq!(available, "uv");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemParameterSource::new(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, AppError::DatabaseNotFound(_)));
    }
}

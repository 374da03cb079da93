use std::collections::BTreeMap;

use crate::domain::{AppError, TechnologyId};
use crate::ports::ParameterSource;

/// In-memory parameter source for tests.
#[derive(Debug, Default)]
pub struct MemoryParameterSource {
    documents: BTreeMap<String, String>,
}

impl MemoryParameterSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, technology: &str, content: &str) -> Self {
        self.documents.insert(technology.to_string(), content.to_string());
        self
    }
}

impl ParameterSource for MemoryParameterSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn technologies(&self) -> Result<Vec<TechnologyId>, AppError> {
        self.documents.keys().map(|name| TechnologyId::new(name)).collect()
    }

    fn read(&self, technology: &TechnologyId) -> Result<String, AppError> {
        self.documents.get(technology.as_str()).cloned().ok_or_else(|| {
            AppError::TechnologyNotFound {
                name: technology.to_string(),
                available: self.documents.keys().cloned().collect::<Vec<_>>().join(", "),
            }
        })
    }
}

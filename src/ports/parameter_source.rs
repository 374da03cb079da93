//! Parameter source port definition.

use crate::domain::{AppError, TechnologyId};

/// Trait for reading raw parameter documents, one per technology.
pub trait ParameterSource {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    /// All technologies this source provides, sorted by name.
    fn technologies(&self) -> Result<Vec<TechnologyId>, AppError>;

    /// Raw document text for a technology.
    fn read(&self, technology: &TechnologyId) -> Result<String, AppError>;
}

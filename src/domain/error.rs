use std::io;

use thiserror::Error;

use crate::domain::parameters::{InvalidPathError, NotFoundError, SchemaError};

/// Library-wide error type for parameter database operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A parameter document failed validation.
    #[error("Invalid parameter document {origin}: {source}")]
    Schema {
        origin: String,
        #[source]
        source: SchemaError,
    },

    /// A lookup path did not resolve.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A dotted path could not be parsed.
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),

    /// Technology identifier is invalid.
    #[error(
        "Invalid technology identifier '{0}': must be alphanumeric with hyphens or underscores"
    )]
    InvalidTechnologyId(String),

    /// No document exists for the technology.
    #[error("Technology '{name}' not found. Available: {available}")]
    TechnologyNotFound { name: String, available: String },

    /// Configured database directory does not exist.
    #[error("Parameter database directory not found: {0}")]
    DatabaseNotFound(String),

    /// No removal fraction for a solute and default removal not requested.
    #[error(
        "No removal fraction defined for solute '{solute}' (enable default removal to fall back to default_removal_frac_mass_solute)"
    )]
    MissingRemovalFraction { solute: String },

    /// Default removal requested but the document defines none.
    #[error("Default removal requested but default_removal_frac_mass_solute is not defined")]
    MissingDefaultRemoval,

    /// Capital cost block lacks one of the four curve coefficients.
    #[error("Capital cost curve is incomplete: missing {missing}")]
    IncompleteCostCurve { missing: String },

    /// A parameter required by the caller carries the `None` sentinel.
    #[error("Parameter '{0}' has no value")]
    UnsetValue(String),

    /// Output rendering failed.
    #[error("Failed to render output: {0}")]
    Render(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn schema_error<S: Into<String>>(origin: S, source: SchemaError) -> Self {
        AppError::Schema { origin: origin.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::Schema { .. }
            | AppError::InvalidPath(_)
            | AppError::InvalidTechnologyId(_)
            | AppError::IncompleteCostCurve { .. }
            | AppError::UnsetValue(_) => io::ErrorKind::InvalidInput,
            AppError::NotFound(_)
            | AppError::TechnologyNotFound { .. }
            | AppError::DatabaseNotFound(_)
            | AppError::MissingRemovalFraction { .. }
            | AppError::MissingDefaultRemoval => io::ErrorKind::NotFound,
            AppError::Render(_) => io::ErrorKind::Other,
        }
    }
}

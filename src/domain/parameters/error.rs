use super::path::ParamPath;

/// A parameter document does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("YAML format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Document root must be a mapping of process subtypes, found {found}")]
    RootNotMapping { found: &'static str },

    #[error("Entry '{path}' is missing required key '{key}'")]
    MissingKey { path: ParamPath, key: &'static str },

    #[error("Entry '{path}' has non-numeric value {found} (expected a number or None)")]
    NonNumericValue { path: ParamPath, found: String },

    #[error("Entry '{path}' has invalid units: {reason}")]
    InvalidUnits { path: ParamPath, reason: String },

    #[error("Entry '{path}' has invalid metadata key '{key}': expected text")]
    InvalidMetadata { path: ParamPath, key: String },

    #[error("Entry '{path}' is a {found}, which is not allowed there")]
    UnexpectedNode { path: ParamPath, found: &'static str },

    #[error("Group '{path}' has a non-text key")]
    NonTextKey { path: ParamPath },

    #[error("Fraction '{path}' must lie in [0, 1], found {value}")]
    FractionOutOfRange { path: ParamPath, value: f64 },

    #[error("Fraction '{path}' must have a numeric value")]
    UnsetFraction { path: ParamPath },
}

/// A lookup path did not resolve to the requested kind of entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("No entry '{segment}' under '{parent}'")]
    MissingEntry { parent: ParamPath, segment: String },

    #[error("Entry '{path}' is a {found}, not a {expected}")]
    WrongKind { path: ParamPath, found: &'static str, expected: &'static str },

    #[error("Empty parameter path")]
    EmptyPath,
}

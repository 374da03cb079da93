use std::fmt;

use super::validation::validate_identifier;
use crate::domain::AppError;

/// A validated treatment technology identifier, e.g. `uv`.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, or `_`
/// - Safe to join onto a database directory (no separators or dot segments)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TechnologyId(String);

impl TechnologyId {
    /// Validate and create a new instance.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_identifier(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidTechnologyId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechnologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TechnologyId> for String {
    fn from(val: TechnologyId) -> Self {
        val.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id() {
        assert_eq!(TechnologyId::new("uv").unwrap().as_str(), "uv");
    }

    #[test]
    fn dot_dot_is_invalid() {
        assert!(matches!(TechnologyId::new(".."), Err(AppError::InvalidTechnologyId(_))));
    }

    #[test]
    fn slash_is_invalid() {
        assert!(TechnologyId::new("../../etc/passwd").is_err());
    }

    #[test]
    fn display_impl() {
        let id = TechnologyId::new("ozonation").unwrap();
        assert_eq!(format!("{}", id), "ozonation");
    }
}

use std::fmt;
use std::str::FromStr;

/// A sequence of key names addressing an entry inside a parameter document.
///
/// Written in dotted form on the command line: `default.capital_cost.uv_capital_a_parameter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParamPath(Vec<String>);

impl ParamPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new<S: AsRef<str>>(segments: &[S]) -> Self {
        Self(segments.iter().map(|s| s.as_ref().to_string()).collect())
    }

    /// Path of a direct child entry.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last key of the path, if any.
    pub fn key(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for ParamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        write!(f, "{}", self.0.join("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid parameter path '{0}': segments must be non-empty and separated by '.'")]
pub struct InvalidPathError(pub String);

impl FromStr for ParamPath {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidPathError(s.to_string()));
        }
        let segments: Vec<String> = trimmed.split('.').map(|segment| segment.trim().to_string()).collect();
        if segments.iter().any(String::is_empty) {
            return Err(InvalidPathError(s.to_string()));
        }
        Ok(Self(segments))
    }
}

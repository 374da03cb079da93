//! Database location resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::services::{EmbeddedParameterSource, FilesystemParameterSource, ParameterDatabase};

/// Environment variable naming a database directory.
pub const DATABASE_ENV: &str = "UNITPARAMS_DATABASE";

/// Where parameter documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    Embedded,
    Directory(PathBuf),
}

impl DatabaseLocation {
    /// `--database` flag, then `UNITPARAMS_DATABASE`, then the embedded database.
    pub fn resolve(flag: Option<&Path>) -> Self {
        Self::from_sources(flag, std::env::var_os(DATABASE_ENV))
    }

    pub fn from_sources(flag: Option<&Path>, env: Option<OsString>) -> Self {
        if let Some(dir) = flag {
            return DatabaseLocation::Directory(dir.to_path_buf());
        }
        match env {
            Some(value) if !value.is_empty() => DatabaseLocation::Directory(PathBuf::from(value)),
            _ => DatabaseLocation::Embedded,
        }
    }

    pub fn open(&self) -> Result<ParameterDatabase, AppError> {
        match self {
            DatabaseLocation::Embedded => ParameterDatabase::open(&EmbeddedParameterSource::new()),
            DatabaseLocation::Directory(dir) => {
                ParameterDatabase::open(&FilesystemParameterSource::new(dir.clone())?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn flag_wins_over_environment() {
        let location =
            DatabaseLocation::from_sources(Some(Path::new("/flag")), Some(OsString::from("/env")));
        assert_eq!(location, DatabaseLocation::Directory(PathBuf::from("/flag")));
    }

    #[test]
    fn environment_used_without_flag() {
        let location = DatabaseLocation::from_sources(None, Some(OsString::from("/env")));
        assert_eq!(location, DatabaseLocation::Directory(PathBuf::from("/env")));
    }

    #[test]
    fn empty_environment_falls_back_to_embedded() {
        assert_eq!(
            DatabaseLocation::from_sources(None, Some(OsString::new())),
            DatabaseLocation::Embedded
        );
        assert_eq!(DatabaseLocation::from_sources(None, None), DatabaseLocation::Embedded);
    }

    #[test]
    #[serial]
    fn resolve_reads_process_environment() {
        unsafe {
            std::env::set_var(DATABASE_ENV, "/from/env");
        }
        let location = DatabaseLocation::resolve(None);
        unsafe {
            std::env::remove_var(DATABASE_ENV);
        }
        assert_eq!(location, DatabaseLocation::Directory(PathBuf::from("/from/env")));
    }

    #[test]
    fn missing_directory_fails_to_open() {
        let location = DatabaseLocation::Directory(PathBuf::from("/definitely/not/here"));
        assert!(matches!(location.open(), Err(AppError::DatabaseNotFound(_))));
    }

    #[test]
    fn embedded_database_opens() {
        let db = DatabaseLocation::Embedded.open().unwrap();
        assert!(db.store("uv").is_ok());
    }
}

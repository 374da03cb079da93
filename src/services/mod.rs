pub mod embedded_source;
pub mod filesystem_source;
pub mod parameter_database;

pub use embedded_source::EmbeddedParameterSource;
pub use filesystem_source::FilesystemParameterSource;
pub use parameter_database::ParameterDatabase;

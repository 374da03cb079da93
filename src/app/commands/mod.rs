pub mod diagnostics;
pub mod get;
pub mod list;
pub mod removal;
pub mod show;
pub mod validate;

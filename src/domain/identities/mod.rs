pub mod technology_id;
pub mod validation;

pub use technology_id::TechnologyId;

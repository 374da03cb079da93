mod parameter_source;

pub use parameter_source::ParameterSource;

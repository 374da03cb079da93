mod memory_parameter_source;

pub use memory_parameter_source::MemoryParameterSource;

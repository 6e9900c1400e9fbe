pub mod openai_provider;
pub mod registry;
pub mod types;

pub use registry::ModelRegistry;
pub use types::*;

pub mod aggregate;
pub mod repository;
pub mod service;

pub use aggregate::Chunk;
pub use repository::DocumentStore;

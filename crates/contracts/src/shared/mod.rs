pub mod llm_options;
pub mod server_response;

pub use server_response::{ErrorResponse, ServerResponse};

//! u601: upload a document to the knowledge base
//!
//! Structure:
//! - api.rs: transport seam and the fetch-backed client
//! - flow.rs: validation, request, status updates
//! - view_model.rs: UploadDocumentVm with RwSignals
//! - view.rs: UploadDocumentPanel component

pub mod api;
pub mod flow;
mod view;
mod view_model;

pub use view::UploadDocumentPanel;
pub use view_model::UploadDocumentVm;

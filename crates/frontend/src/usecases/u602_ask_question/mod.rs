//! u602: ask a question about the uploaded documents
//!
//! Structure:
//! - api.rs: transport seam and the fetch-backed client
//! - flow.rs: validation, request, answer rendering
//! - view_model.rs: AskQuestionVm with RwSignals
//! - view.rs: AskQuestionPanel component

pub mod api;
pub mod flow;
mod view;
mod view_model;

pub use view::AskQuestionPanel;
pub use view_model::AskQuestionVm;

use crate::shared::status::StatusMessage;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UploadDocumentVm {
    pub status: RwSignal<Option<StatusMessage>>,
}

impl UploadDocumentVm {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(None),
        }
    }
}

impl Default for UploadDocumentVm {
    fn default() -> Self {
        Self::new()
    }
}

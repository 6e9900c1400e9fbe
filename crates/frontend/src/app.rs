use crate::usecases::u601_upload_document::UploadDocumentPanel;
use crate::usecases::u602_ask_question::AskQuestionPanel;
use leptos::prelude::*;

/// Single page with the two independent flows: upload a document, ask about it.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <h1 class="app__title">"Pregunta a tus documentos"</h1>
            <UploadDocumentPanel />
            <AskQuestionPanel />
        </main>
    }
}

use super::api::HttpUploadApi;
use super::flow::run_upload;
use super::view_model::UploadDocumentVm;
use crate::shared::components::StatusRegion;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn UploadDocumentPanel() -> impl IntoView {
    let vm = UploadDocumentVm::new();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let handle_upload = move |_: leptos::ev::MouseEvent| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        spawn_local(async move {
            let outcome = run_upload(&HttpUploadApi, file, &vm.status).await;
            log::debug!("u601: finished with {:?}", outcome);
        });
    };

    view! {
        <section id="u601_upload_document--usecase" class="panel">
            <h2 class="panel__title">"1. Sube un documento"</h2>
            <Flex align=FlexAlign::Center style="gap: 8px;">
                <input type="file" id="file-input" accept=".txt,.md,.csv,.json" node_ref=file_input />
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:id="upload-button"
                    on_click=handle_upload
                >
                    "Subir"
                </Button>
            </Flex>
            <StatusRegion id="upload-status" status=vm.status />
        </section>
    }
}

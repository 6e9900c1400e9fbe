use super::api::HttpQueryApi;
use super::flow::run_query;
use super::view_model::AskQuestionVm;
use crate::shared::components::{ChoiceSelect, StatusRegion};
use contracts::shared::llm_options::LLM_OPTIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn AskQuestionPanel() -> impl IntoView {
    let vm = AskQuestionVm::new();
    let options: Vec<(String, String)> = LLM_OPTIONS
        .iter()
        .map(|o| (o.id.to_string(), o.label.to_string()))
        .collect();

    let handle_query = move |_: leptos::ev::MouseEvent| {
        let query = vm.query.get_untracked();
        let llm = vm.llm.get_untracked();

        spawn_local(async move {
            let outcome = run_query(&HttpQueryApi, query, llm, &vm.result).await;
            log::debug!("u602: finished with {:?}", outcome);
        });
    };

    view! {
        <section id="u602_ask_question--usecase" class="panel">
            <h2 class="panel__title">"2. Haz una pregunta"</h2>
            <Textarea
                value=vm.query
                placeholder="Escribe tu pregunta sobre el documento..."
                attr:id="query-input"
                attr:style="width: 100%; min-height: 60px; resize: vertical;"
            />
            <Flex align=FlexAlign::Center style="gap: 8px; margin-top: 8px;">
                <ChoiceSelect id="llm-selector" label="Modelo" value=vm.llm options=options />
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:id="query-button"
                    on_click=handle_query
                >
                    "Preguntar"
                </Button>
            </Flex>
            <StatusRegion id="query-result" status=vm.result />
        </section>
    }
}

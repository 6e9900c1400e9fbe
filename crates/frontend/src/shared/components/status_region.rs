use crate::shared::status::{StatusBody, StatusMessage};
use leptos::prelude::*;

/// Feedback area of one flow; renders the current message, if any
#[component]
pub fn StatusRegion(
    /// DOM id of the region
    #[prop(into)]
    id: String,
    status: RwSignal<Option<StatusMessage>>,
) -> impl IntoView {
    view! {
        <div id=id class="status-region" aria-live="polite">
            {move || {
                status
                    .get()
                    .map(|message| {
                        let style = message
                            .color()
                            .map(|c| format!("color: {};", c))
                            .unwrap_or_default();
                        match message.body {
                            StatusBody::Text(text) => {
                                view! { <p style=style>{text}</p> }.into_any()
                            }
                            StatusBody::Markup(html) => {
                                view! { <p style=style inner_html=html></p> }.into_any()
                            }
                        }
                    })
            }}
        </div>
    }
}

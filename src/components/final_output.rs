//! Final-answer panel.
//!
//! Mounted once in each view; both instances derive from the same run state
//! and update independently. The rendered HTML comes from the in-crate
//! Markdown subset renderer, which entity-escapes its input before any
//! markup handling, so `inner_html` only ever receives markup we emitted.

use leptos::prelude::*;

use crate::state::run::RunState;

#[component]
pub fn FinalOutput() -> impl IntoView {
    let run = expect_context::<RwSignal<RunState>>();

    view! { <div class="final-output" inner_html=move || run.get().final_html()></div> }
}

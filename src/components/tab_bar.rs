//! Tab strip switching between the chat and dashboard views.

use leptos::prelude::*;

use crate::state::ui::{ActiveTab, UiState};

/// Tab strip; each control carries its own target tab.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="tab-bar">
            {ActiveTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || ui.get().active_tab == tab
                            on:click=move |_| ui.update(|u| u.active_tab = tab)
                        >
                            {tab.title()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

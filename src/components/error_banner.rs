//! Persistent error banner.
//!
//! Shows at most one message at a time; whoever sets a new one overwrites
//! the previous. Hidden whenever the message is cleared.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="error-banner" class:error-banner--hidden=move || ui.get().error.is_none()>
            {move || ui.get().error.unwrap_or_default()}
        </div>
    }
}

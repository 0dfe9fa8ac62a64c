//! Toast container and the `notify` helper.
//!
//! Each call appends one toast and schedules its own removal; overlapping
//! toasts simply stack. On the server the timer is skipped; the stack is
//! only ever populated by browser interactions.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION_MS, ToastState};

/// Show a transient notification for the default duration.
pub fn notify(toasts: RwSignal<ToastState>, message: &str) {
    notify_for(toasts, message, TOAST_DURATION_MS);
}

/// Show a transient notification that self-removes after `duration_ms`.
pub fn notify_for(toasts: RwSignal<ToastState>, message: &str, duration_ms: u32) {
    let mut id = 0;
    toasts.update(|t| id = t.push(message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(duration_ms))).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, duration_ms);
    }
}

/// Fixed container rendering the visible toast stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toasts">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| view! { <div class="toast">{toast.message}</div> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

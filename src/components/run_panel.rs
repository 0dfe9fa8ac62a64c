//! Prompt box plus the run/cancel flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! At most one run request is in flight, guarded by the busy flag and the
//! disabled run control rather than a lock. The request body is rebuilt for
//! every attempt, the automatic retry included, so it always reflects the
//! attachment uris at send time. Cancellation aborts the pending fetch
//! through its signal and returns to idle immediately; the aborted attempt's
//! outcome is reported only by toast, never the error banner.

use leptos::prelude::*;

use crate::components::toasts::notify;
#[cfg(feature = "hydrate")]
use crate::net::error::FetchError;
#[cfg(feature = "hydrate")]
use crate::net::types::RunResponse;
use crate::state::attachments::AttachmentState;
use crate::state::run::RunState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

#[component]
pub fn RunPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let attachments = expect_context::<RwSignal<AttachmentState>>();
    let run = expect_context::<RwSignal<RunState>>();

    let query = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let controller = StoredValue::new_local(None::<web_sys::AbortController>);
    #[cfg(not(feature = "hydrate"))]
    let _ = (attachments, run);

    let on_run = move |_| {
        let q = query.get().trim().to_owned();
        if q.is_empty() {
            ui.update(|u| u.set_error("Query is required"));
            return;
        }
        ui.update(|u| {
            u.clear_error();
            u.busy = true;
        });

        #[cfg(feature = "hydrate")]
        {
            let Ok(aborter) = web_sys::AbortController::new() else {
                ui.update(|u| {
                    u.set_error("request could not be started");
                    u.busy = false;
                });
                return;
            };
            let signal = aborter.signal();
            controller.set_value(Some(aborter));

            leptos::task::spawn_local(async move {
                let outcome = request_with_retry(&q, attachments, toasts, &signal).await;
                settle_run(outcome, ui, toasts, attachments, run);
                // Guaranteed cleanup: back to idle whatever the outcome was.
                ui.update(|u| u.busy = false);
                controller.set_value(None);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = q;
            ui.update(|u| u.busy = false);
        }
    };

    let on_cancel = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(aborter) = controller.get_value() {
                aborter.abort();
            }
            controller.set_value(None);
        }
        ui.update(|u| u.busy = false);
        notify(toasts, "Request canceled");
    };

    view! {
        <div class="run-panel">
            <textarea
                class="run-panel__query"
                placeholder="Describe your crop problem..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            ></textarea>
            <div class="run-panel__actions">
                <button
                    class="btn btn--primary run-panel__run"
                    on:click=on_run
                    disabled=move || ui.get().busy
                >
                    "Run"
                </button>
                <button
                    class="btn run-panel__cancel"
                    on:click=on_cancel
                    disabled=move || !ui.get().busy
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

/// Issue the request, retrying once on a transient failure with a freshly
/// built body.
#[cfg(feature = "hydrate")]
async fn request_with_retry(
    query: &str,
    attachments: RwSignal<AttachmentState>,
    toasts: RwSignal<ToastState>,
    signal: &web_sys::AbortSignal,
) -> Result<RunResponse, FetchError> {
    let first = crate::net::api::run_plan(query, &attachments.get_untracked().uris_json(), signal).await;
    match first {
        Err(err) if err.is_transient() => {
            log::warn!("plan request failed ({err}); retrying once");
            notify(toasts, "Transient glitch. Retrying…");
            crate::net::api::run_plan(query, &attachments.get_untracked().uris_json(), signal).await
        }
        other => other,
    }
}

/// Fold the response into the page: state, panels, banner, toasts, and the
/// post-run attachment clear.
#[cfg(feature = "hydrate")]
fn settle_run(
    outcome: Result<RunResponse, FetchError>,
    ui: RwSignal<UiState>,
    toasts: RwSignal<ToastState>,
    attachments: RwSignal<AttachmentState>,
    run: RwSignal<RunState>,
) {
    let outcome = outcome.and_then(|response| {
        if response.ok {
            Ok(response)
        } else {
            let message = response
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "Run failed".to_owned());
            Err(FetchError::ServerReported(message))
        }
    });

    match outcome {
        Ok(response) => {
            // A nominally successful run may still carry an informational
            // error; it is shown alongside the rendered output.
            let info = response.error.clone().unwrap_or_default();
            run.update(|r| r.apply(response));
            ui.update(|u| u.set_error(info));
            notify(toasts, "Done");

            let mut cleared = Vec::new();
            attachments.update(|a| cleared = a.clear());
            for thumb in cleared {
                let _ = web_sys::Url::revoke_object_url(&thumb.preview_url);
            }
        }
        Err(FetchError::Canceled) => {}
        Err(err) => ui.update(|u| u.set_error(err.to_string())),
    }
}

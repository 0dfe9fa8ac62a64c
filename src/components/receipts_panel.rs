//! Tool-call receipt list for the dashboard view.

use leptos::prelude::*;

use crate::state::run::RunState;

/// One row per receipt: tool badge, summary, and an optional "open" link.
/// Links open in a new tab without handing the opened page a reference back
/// to this one.
#[component]
pub fn ReceiptsPanel() -> impl IntoView {
    let run = expect_context::<RwSignal<RunState>>();

    view! {
        <div class="receipts">
            {move || {
                let receipts = run.get().receipts;
                if receipts.is_empty() {
                    return view! { <div class="receipts__empty">"No receipts."</div> }.into_any();
                }

                receipts
                    .into_iter()
                    .map(|receipt| {
                        let tool = receipt.tool_label().to_owned();
                        let summary = receipt.summary_text().to_owned();
                        let link = receipt.link_uri().map(ToOwned::to_owned);

                        view! {
                            <div class="receipts__row">
                                <span class="receipts__tool kbd">{tool}</span>
                                <span class="receipts__summary">{summary}</span>
                                {link.map(|uri| {
                                    view! {
                                        <a href=uri target="_blank" rel="noopener">
                                            "open"
                                        </a>
                                    }
                                })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

//! Dashboard metric counters.
//!
//! All five tiles render as a unit from the same run state; absent or
//! non-finite values show as `0`.

use leptos::prelude::*;

use crate::net::types::metric_text;
use crate::state::run::RunState;

#[component]
pub fn MetricsPanel() -> impl IntoView {
    let run = expect_context::<RwSignal<RunState>>();
    let metrics = move || run.get().metrics;

    view! {
        <div class="metrics">
            <MetricTile label="Prompt tokens" value=Signal::derive(move || metric_text(metrics().tokens_in))/>
            <MetricTile label="Generated tokens" value=Signal::derive(move || metric_text(metrics().tokens_out))/>
            <MetricTile label="Tool calls" value=Signal::derive(move || metric_text(metrics().tool_calls))/>
            <MetricTile label="Receipts" value=Signal::derive(move || metric_text(metrics().receipts))/>
            <MetricTile label="Latency (ms)" value=Signal::derive(move || metric_text(metrics().gen_time_ms))/>
        </div>
    }
}

#[component]
fn MetricTile(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="metrics__tile">
            <span class="metrics__value">{move || value.get()}</span>
            <span class="metrics__label">{label}</span>
        </div>
    }
}

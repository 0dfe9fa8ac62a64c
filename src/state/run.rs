//! Result state of the most recent plan run.
//!
//! Mutated only by the run flow and the one-shot page bootstrap; every
//! panel on both views derives its display text from here.

#[cfg(test)]
#[path = "run_test.rs"]
mod run_test;

use crate::net::types::{Metrics, Receipt, RunResponse};
use crate::util::markdown::md_to_html;

/// The latest run's displayable payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunState {
    /// Serialized plan text; empty until a run succeeds.
    pub plan: String,
    /// Tool-call receipts, in invocation order.
    pub receipts: Vec<Receipt>,
    /// Opaque governor log entries, displayed verbatim.
    pub governor_log: Vec<serde_json::Value>,
    /// Final answer as Markdown.
    pub final_output: String,
    /// Run counters.
    pub metrics: Metrics,
}

impl RunState {
    /// Replace the displayed payload with a successful response's fields,
    /// defaulting whatever the server omitted.
    pub fn apply(&mut self, response: RunResponse) {
        self.plan = response.plan.unwrap_or_default();
        self.receipts = response.receipts.unwrap_or_default();
        self.governor_log = response.governor_log.unwrap_or_default();
        self.final_output = response.final_output.unwrap_or_default();
        self.metrics = response.metrics.unwrap_or_default();
    }

    /// Plan display text; an empty plan shows as an empty JSON list.
    #[must_use]
    pub fn plan_text(&self) -> &str {
        if self.plan.is_empty() { "[]" } else { &self.plan }
    }

    /// Receipts as pretty-printed JSON for the dashboard detail block.
    #[must_use]
    pub fn receipts_json(&self) -> String {
        serde_json::to_string_pretty(&self.receipts).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Governor log as pretty-printed JSON for the dashboard detail block.
    #[must_use]
    pub fn governor_json(&self) -> String {
        serde_json::to_string_pretty(&self.governor_log).unwrap_or_else(|_| "[]".to_owned())
    }

    /// Final answer rendered to HTML, or the awaiting-result placeholder
    /// when there is nothing to show yet.
    #[must_use]
    pub fn final_html(&self) -> String {
        let html = md_to_html(&self.final_output);
        if html.is_empty() { "...".to_owned() } else { html }
    }
}

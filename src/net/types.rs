//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's `/upload` and `/run_plan` payloads.
//! Every field the server may omit is optional with a serde default, so a
//! sparse-but-well-formed response still deserializes; accessors apply the
//! display fallbacks in one place instead of at each render site.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Numeric counters for one run. Values arrive as JSON numbers; anything
/// absent or non-finite renders as `0` via [`metric_text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Prompt-side token count.
    #[serde(default)]
    pub tokens_in: Option<f64>,
    /// Generated token count.
    #[serde(default)]
    pub tokens_out: Option<f64>,
    /// Number of tool invocations during the run.
    #[serde(default)]
    pub tool_calls: Option<f64>,
    /// Number of receipts recorded during the run.
    #[serde(default)]
    pub receipts: Option<f64>,
    /// Wall-clock generation latency in milliseconds.
    #[serde(default)]
    pub gen_time_ms: Option<f64>,
}

/// Render one metric value: finite numbers as-is, everything else as `0`.
#[must_use]
pub fn metric_text(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v}"),
        _ => "0".to_owned(),
    }
}

/// A record of one tool invocation made by the backend during a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Name of the invoked tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    /// Human-readable outcome summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Optional resource link produced by the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Receipt {
    /// Badge label; falls back to `"tool"` when the name is missing or empty.
    #[must_use]
    pub fn tool_label(&self) -> &str {
        self.tool.as_deref().filter(|t| !t.is_empty()).unwrap_or("tool")
    }

    /// Summary text, empty when missing.
    #[must_use]
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// Link target, only when a non-empty uri is present.
    #[must_use]
    pub fn link_uri(&self) -> Option<&str> {
        self.uri.as_deref().filter(|u| !u.is_empty())
    }
}

/// `/run_plan` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RunResponse {
    /// Whether the run succeeded; a falsy value carries `error`.
    #[serde(default)]
    pub ok: bool,
    /// Serialized plan text.
    #[serde(default)]
    pub plan: Option<String>,
    /// Tool-call receipts, in invocation order.
    #[serde(default)]
    pub receipts: Option<Vec<Receipt>>,
    /// Opaque governor log entries, displayed verbatim.
    #[serde(default)]
    pub governor_log: Option<Vec<serde_json::Value>>,
    /// Final answer as Markdown.
    #[serde(default)]
    pub final_output: Option<String>,
    /// Run counters.
    #[serde(default)]
    pub metrics: Option<Metrics>,
    /// Failure message, or an informational note even when `ok` is true.
    #[serde(default)]
    pub error: Option<String>,
}

/// `/upload` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub ok: bool,
    /// Server-assigned URI for the stored image.
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

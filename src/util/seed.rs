//! Initial-paint state embedded in the served page.
//!
//! The server renders a `#seed` element carrying the previous run's state as
//! string attributes. Parsing is best-effort: a missing or unparsable
//! attribute falls back to its default so a bad seed can never break the
//! first paint.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use crate::net::types::{Metrics, Receipt};

/// Raw attribute strings as read off the seed element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedDataset {
    pub metrics: Option<String>,
    pub receipts: Option<String>,
    pub error: Option<String>,
    pub final_output: Option<String>,
}

/// Parsed seed values with defaults applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeedState {
    pub metrics: Metrics,
    pub receipts: Vec<Receipt>,
    /// Seed error, trimmed; `None` when blank.
    pub error: Option<String>,
    /// Initial final-output Markdown; `None` when blank.
    pub final_output: Option<String>,
}

/// Parse the seed attributes, swallowing every parse failure.
#[must_use]
pub fn parse_seed(dataset: &SeedDataset) -> SeedState {
    SeedState {
        metrics: dataset
            .metrics
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default(),
        receipts: dataset
            .receipts
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default(),
        error: dataset
            .error
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(ToOwned::to_owned),
        final_output: dataset.final_output.clone().filter(|f| !f.is_empty()),
    }
}

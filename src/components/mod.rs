//! UI components, one per panel of the page.

pub mod attachments;
pub mod error_banner;
pub mod final_output;
pub mod metrics_panel;
pub mod receipts_panel;
pub mod run_panel;
pub mod tab_bar;
pub mod toasts;

//! Local UI chrome state (active tab, busy flag, persistent error banner).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the run/attachment models so
//! the page chrome can evolve independently of wire data. The busy flag is
//! the single guard for the run flow: controls that could start or mutate a
//! request are disabled while it is set.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Primary view for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// Conversation view with the prompt box and attachments.
    #[default]
    Chat,
    /// Dashboard view with metrics, receipts, and run detail.
    Dash,
}

impl ActiveTab {
    /// All tabs, in display order.
    pub const ALL: [Self; 2] = [Self::Chat, Self::Dash];

    /// Label shown on the tab control.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Dash => "Dashboard",
        }
    }
}

/// UI state for the tab strip, the request-in-flight flag, and the error
/// banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: ActiveTab,
    pub busy: bool,
    /// Persistent error banner text; `None` hides the banner.
    pub error: Option<String>,
}

impl UiState {
    /// Show `message` in the error banner, replacing any previous text.
    /// An empty message hides and clears the banner instead.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error = if message.is_empty() { None } else { Some(message) };
    }

    /// Hide and clear the error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

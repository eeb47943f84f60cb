//! Panel-wide configuration.

use std::time::Duration;

/// Delay between the last keystroke and the committed value.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Configuration shared by every entry of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Debounce delay for text and number inputs.
    pub debounce: Duration,

    /// Prefix for the ids of rendered form controls, so that entry ids can't
    /// collide with other ids on the host's page.
    pub id_prefix: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            id_prefix: "panel".into(),
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce delay.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    /// Commit every keystroke right away.
    pub fn immediate(mut self) -> Self {
        self.debounce = Duration::ZERO;
        self
    }

    /// Set the control id prefix.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Id of the form control rendered for entry `entry_id`.
    pub fn control_id(&self, entry_id: &str) -> String {
        if self.id_prefix.is_empty() {
            entry_id.to_string()
        } else {
            format!("{}-{}", self.id_prefix, entry_id)
        }
    }
}

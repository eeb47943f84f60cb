//! Shared lookups for entries: descriptions, tooltips, and errors reported
//! from outside the entry.

use std::collections::HashMap;

use crate::config::PanelConfig;

type Lookup<E> = Box<dyn Fn(&E) -> Option<String>>;

/// Context every entry of a panel renders against.
///
/// Descriptions and tooltips registered here are used when an entry does
/// not carry its own. Errors set here ("global" errors, e.g. from a model
/// linter) take precedence over an entry's own validation error.
pub struct EntryContext<E> {
    config: PanelConfig,
    descriptions: HashMap<String, Lookup<E>>,
    tooltips: HashMap<String, Lookup<E>>,
    errors: HashMap<String, String>,
}

impl<E> Default for EntryContext<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EntryContext<E> {
    pub fn new() -> Self {
        Self::with_config(PanelConfig::default())
    }

    pub fn with_config(config: PanelConfig) -> Self {
        Self {
            config,
            descriptions: HashMap::new(),
            tooltips: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Register a description provider for an entry id.
    pub fn description<F>(mut self, entry_id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&E) -> Option<String> + 'static,
    {
        self.descriptions.insert(entry_id.into(), Box::new(f));
        self
    }

    /// Register a tooltip provider for an entry id.
    pub fn tooltip<F>(mut self, entry_id: impl Into<String>, f: F) -> Self
    where
        F: Fn(&E) -> Option<String> + 'static,
    {
        self.tooltips.insert(entry_id.into(), Box::new(f));
        self
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    /// Resolve the description of an entry: the explicit one wins over the
    /// registered provider.
    pub fn description_for(&self, entry_id: &str, explicit: Option<&str>, subject: &E) -> Option<String> {
        resolve(&self.descriptions, entry_id, explicit, subject)
    }

    /// Resolve the tooltip of an entry, same precedence as descriptions.
    pub fn tooltip_for(&self, entry_id: &str, explicit: Option<&str>, subject: &E) -> Option<String> {
        resolve(&self.tooltips, entry_id, explicit, subject)
    }

    // -------------------------------------------------------------------------
    // Global errors
    // -------------------------------------------------------------------------

    /// Report an error for an entry from outside the entry.
    pub fn set_error(&mut self, entry_id: impl Into<String>, message: impl Into<String>) {
        let entry_id = entry_id.into();
        log::debug!("[context] global error for '{}'", entry_id);
        self.errors.insert(entry_id, message.into());
    }

    pub fn clear_error(&mut self, entry_id: &str) -> Option<String> {
        self.errors.remove(entry_id)
    }

    pub fn error(&self, entry_id: &str) -> Option<&str> {
        self.errors.get(entry_id).map(String::as_str)
    }
}

fn resolve<E>(
    providers: &HashMap<String, Lookup<E>>,
    entry_id: &str,
    explicit: Option<&str>,
    subject: &E,
) -> Option<String> {
    if let Some(explicit) = explicit {
        return Some(explicit.to_string());
    }
    providers.get(entry_id).and_then(|provider| provider(subject))
}

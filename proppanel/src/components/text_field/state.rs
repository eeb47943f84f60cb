//! Text field state kept between renders.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::config::DEFAULT_DEBOUNCE;
use crate::context::EntryContext;
use crate::debounce::Debouncer;
use crate::validation::merge_errors;

use super::props::TextFieldProps;

/// Unique identifier for a TextField instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextFieldId(usize);

impl TextFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TextFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__text_field_{}", self.0)
    }
}

#[derive(Debug)]
pub(super) struct TextFieldInner {
    /// Text shown in the input.
    pub local_value: String,
    /// Validation error of the last committed or synced value.
    pub local_error: Option<String>,
    /// External value the local text was last synced from.
    pub synced: Option<Option<String>>,
    pub debouncer: Debouncer<Option<String>>,
}

impl Default for TextFieldInner {
    fn default() -> Self {
        Self {
            local_value: String::new(),
            local_error: None,
            synced: None,
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
        }
    }
}

/// A debounced single-line text entry.
///
/// Keystrokes update the local text at once and are committed through
/// `set_value` once the debounce delay passed. Clones share state.
#[derive(Debug, Clone)]
pub struct TextField {
    id: TextFieldId,
    pub(super) inner: Arc<RwLock<TextFieldInner>>,
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl TextField {
    pub fn new() -> Self {
        Self {
            id: TextFieldId::new(),
            inner: Arc::new(RwLock::new(TextFieldInner::default())),
        }
    }

    pub fn id(&self) -> TextFieldId {
        self.id
    }

    /// Text currently shown in the input.
    pub fn local_value(&self) -> String {
        self.inner
            .read()
            .map(|g| g.local_value.clone())
            .unwrap_or_default()
    }

    pub fn local_error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.local_error.clone())
    }

    /// Whether the input holds any text.
    pub fn is_edited(&self) -> bool {
        self.inner
            .read()
            .map(|g| !g.local_value.is_empty())
            .unwrap_or(false)
    }

    /// Error to show: a global error for the entry, else the local one.
    pub fn error<E>(&self, props: &TextFieldProps<'_, E>, cx: &EntryContext<E>) -> Option<String> {
        merge_errors(cx.error(&props.id), self.local_error().as_deref())
    }

    /// When the pending commit becomes due, if one is pending.
    pub fn deadline(&self) -> Option<Instant> {
        self.inner.read().ok().and_then(|g| g.debouncer.deadline())
    }

    // -------------------------------------------------------------------------
    // Value flow
    // -------------------------------------------------------------------------

    /// Pick up the external value if it changed since the last sync.
    pub(super) fn sync<E>(&self, props: &TextFieldProps<'_, E>) {
        let external = props.value();
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if guard.synced.as_ref() == Some(&external) {
            return;
        }
        log::trace!("[text_field] {} synced from subject", self.id);
        guard.local_value = external.clone().unwrap_or_default();
        if props.validate.is_some() {
            guard.local_error = props.run_validate(external.as_deref());
        }
        guard.synced = Some(external);
    }

    /// The user typed: show `text` and schedule its commit.
    pub fn input<E>(
        &self,
        text: &str,
        props: &TextFieldProps<'_, E>,
        cx: &EntryContext<E>,
        now: Instant,
    ) {
        let delay: Duration = props.delay(cx);
        if let Ok(mut guard) = self.inner.write() {
            guard.local_value = text.to_string();
            guard.debouncer.set_delay(delay);
            let value = (!text.is_empty()).then(|| text.to_string());
            if guard.debouncer.schedule(value, now) {
                log::trace!("[text_field] {} superseded pending commit", self.id);
            }
        }
        self.poll(props, now);
    }

    /// Commit the pending value if it is due at `now`.
    /// Returns true if a value was committed.
    pub fn poll<E>(&self, props: &TextFieldProps<'_, E>, now: Instant) -> bool {
        let due = self.inner.write().ok().and_then(|mut g| g.debouncer.take_due(now));
        match due {
            Some(value) => {
                self.commit(value, props);
                true
            }
            None => false,
        }
    }

    /// Commit the pending value right away, e.g. on blur.
    pub fn flush<E>(&self, props: &TextFieldProps<'_, E>) -> bool {
        let pending = self.inner.write().ok().and_then(|mut g| g.debouncer.flush());
        match pending {
            Some(value) => {
                self.commit(value, props);
                true
            }
            None => false,
        }
    }

    /// Activate the trailing button: commit the current text, dropping any
    /// pending commit, then call the button's callback.
    pub fn click_button<E>(&self, props: &TextFieldProps<'_, E>) {
        let Some(button) = &props.button else {
            return;
        };
        let value = self.inner.write().ok().map(|mut g| {
            g.debouncer.cancel();
            Some(g.local_value.clone()).filter(|text| !text.is_empty())
        });
        if let Some(value) = value {
            self.commit(value, props);
        }
        (button.on_click)();
    }

    fn commit<E>(&self, value: Option<String>, props: &TextFieldProps<'_, E>) {
        let error = props.run_validate(value.as_deref());
        log::debug!(
            "[text_field] {} commit '{}' (valid: {})",
            self.id,
            props.id,
            error.is_none()
        );
        (props.set_value)(value, error.clone());
        if let Ok(mut guard) = self.inner.write() {
            guard.local_error = error;
        }
    }
}

//! Number field state kept between renders.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::config::DEFAULT_DEBOUNCE;
use crate::context::EntryContext;
use crate::debounce::Debouncer;
use crate::validation::merge_errors;

use super::constraints::{NumberInputError, format_number};
use super::props::NumberFieldProps;

/// Unique identifier for a NumberField instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberFieldId(usize);

impl NumberFieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for NumberFieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__number_field_{}", self.0)
    }
}

#[derive(Debug)]
pub(super) struct NumberFieldInner {
    pub local_value: String,
    pub local_error: Option<String>,
    /// Why the typed text was not accepted, if it wasn't.
    pub rejection: Option<NumberInputError>,
    pub synced: Option<Option<f64>>,
    pub debouncer: Debouncer<Option<f64>>,
}

impl Default for NumberFieldInner {
    fn default() -> Self {
        Self {
            local_value: String::new(),
            local_error: None,
            rejection: None,
            synced: None,
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
        }
    }
}

/// A debounced numeric entry.
///
/// Text that isn't a number, or falls outside the min, max and step
/// constraints, is kept in the input and reported through
/// [`rejection`](Self::rejection), but never committed.
#[derive(Debug, Clone)]
pub struct NumberField {
    id: NumberFieldId,
    pub(super) inner: Arc<RwLock<NumberFieldInner>>,
}

impl Default for NumberField {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberField {
    pub fn new() -> Self {
        Self {
            id: NumberFieldId::new(),
            inner: Arc::new(RwLock::new(NumberFieldInner::default())),
        }
    }

    pub fn id(&self) -> NumberFieldId {
        self.id
    }

    pub fn local_value(&self) -> String {
        self.inner
            .read()
            .map(|g| g.local_value.clone())
            .unwrap_or_default()
    }

    pub fn local_error(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.local_error.clone())
    }

    /// Why the current text was not accepted.
    pub fn rejection(&self) -> Option<NumberInputError> {
        self.inner.read().ok().and_then(|g| g.rejection.clone())
    }

    pub fn is_edited(&self) -> bool {
        self.inner
            .read()
            .map(|g| !g.local_value.is_empty())
            .unwrap_or(false)
    }

    /// Error to show: a global error for the entry, else the local one.
    pub fn error<E>(&self, props: &NumberFieldProps<'_, E>, cx: &EntryContext<E>) -> Option<String> {
        merge_errors(cx.error(&props.id), self.local_error().as_deref())
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.inner.read().ok().and_then(|g| g.debouncer.deadline())
    }

    // -------------------------------------------------------------------------
    // Value flow
    // -------------------------------------------------------------------------

    pub(super) fn sync<E>(&self, props: &NumberFieldProps<'_, E>) {
        let external = props.value();
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        if guard.synced == Some(external) {
            return;
        }
        log::trace!("[number_field] {} synced from subject", self.id);
        guard.local_value = external.map(format_number).unwrap_or_default();
        guard.rejection = None;
        if props.validate.is_some() {
            guard.local_error = props.run_validate(external);
        }
        guard.synced = Some(external);
    }

    /// The user typed: show `text` and, if it is an acceptable number,
    /// schedule its commit. Unacceptable text drops any pending commit.
    pub fn input<E>(
        &self,
        text: &str,
        props: &NumberFieldProps<'_, E>,
        cx: &EntryContext<E>,
        now: Instant,
    ) {
        let delay = props.delay(cx);
        if let Ok(mut guard) = self.inner.write() {
            guard.local_value = text.to_string();
            guard.debouncer.set_delay(delay);
            match props.constraints.parse(text) {
                Ok(value) => {
                    guard.rejection = None;
                    guard.debouncer.schedule(value, now);
                }
                Err(err) => {
                    log::debug!("[number_field] {} rejected input: {}", self.id, err);
                    guard.rejection = Some(err);
                    guard.debouncer.cancel();
                }
            }
        }
        self.poll(props, now);
    }

    /// Commit the pending value if it is due at `now`.
    pub fn poll<E>(&self, props: &NumberFieldProps<'_, E>, now: Instant) -> bool {
        let due = self.inner.write().ok().and_then(|mut g| g.debouncer.take_due(now));
        match due {
            Some(value) => {
                self.commit(value, props);
                true
            }
            None => false,
        }
    }

    /// Commit the pending value right away.
    pub fn flush<E>(&self, props: &NumberFieldProps<'_, E>) -> bool {
        let pending = self.inner.write().ok().and_then(|mut g| g.debouncer.flush());
        match pending {
            Some(value) => {
                self.commit(value, props);
                true
            }
            None => false,
        }
    }

    fn commit<E>(&self, value: Option<f64>, props: &NumberFieldProps<'_, E>) {
        let error = props.run_validate(value);
        log::debug!("[number_field] {} commit {:?} for '{}'", self.id, value, props.id);
        (props.set_value)(value, error.clone());
        if let Ok(mut guard) = self.inner.write() {
            guard.local_error = error;
        }
    }
}

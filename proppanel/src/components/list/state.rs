//! List entry state kept between renders.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::item::ListItem;
use super::ordering::{Comparator, fresh_ordering, item_ids};

/// Unique identifier for a ListEntry instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListEntryId(usize);

impl ListEntryId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ListEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__list_entry_{}", self.0)
    }
}

/// Internal state for the ListEntry component.
#[derive(Debug, Default)]
pub(super) struct ListEntryInner {
    /// Item ids in display order.
    pub ordering: Vec<String>,
    /// Item ids seen by the previous render, `None` before the first.
    pub prev_items: Option<Vec<String>>,
    /// Subject id seen by the previous render.
    pub prev_subject: Option<String>,
    /// Whether the items are shown.
    pub open: bool,
    /// The add button asked for the list to open once items exist.
    pub open_requested: bool,
}

/// A collapsible, ordered list of sub-entries.
///
/// The component owns what must survive between renders: the display
/// ordering, the open flag and the last seen item ids and subject. All
/// inputs arrive through [`ListEntryProps`](super::ListEntryProps) on each
/// render. Clones share state.
#[derive(Debug, Clone)]
pub struct ListEntry {
    id: ListEntryId,
    pub(super) inner: Arc<RwLock<ListEntryInner>>,
    /// Set when an event changed state and the host should render again.
    pub(super) dirty: Arc<AtomicBool>,
}

impl Default for ListEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl ListEntry {
    pub fn new() -> Self {
        Self {
            id: ListEntryId::new(),
            inner: Arc::new(RwLock::new(ListEntryInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> ListEntryId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Open state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.inner.read().map(|g| g.open).unwrap_or(false)
    }

    /// Flip the open flag.
    ///
    /// Does nothing when `items` is empty. Opening a sorted list re-sorts it
    /// so items edited while it was closed show up in place.
    /// Returns the new open state.
    pub fn toggle<T: ListItem>(&self, items: &[T], comparator: &Comparator<T>) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            return false;
        };
        if items.is_empty() {
            log::trace!("[list] {} toggle ignored, no items", self.id);
            return guard.open;
        }

        guard.open = !guard.open;
        if guard.open && comparator.is_sorted() {
            guard.ordering = fresh_ordering(items, comparator);
            // Keep the next reconcile diffing against what was just sorted
            guard.prev_items = Some(item_ids(items));
        }
        log::debug!("[list] {} open={}", self.id, guard.open);
        self.mark_dirty();
        guard.open
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// Item ids in the order the last render displayed them.
    pub fn ordering(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.ordering.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag and return whether it was set.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

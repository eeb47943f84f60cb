//! Display ordering of list items across renders.
//!
//! The ordering is a list of item ids. It is derived fresh when the list is
//! first shown or its subject changes, and otherwise reconciled against the
//! previous render so that edits to an item never make it jump around.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use super::item::ListItem;

/// How a list orders its items.
pub enum Comparator<T> {
    /// Keep insertion order; new items are appended.
    Unsorted,
    /// Sort with the given comparison; new items trigger a full re-sort.
    By(Rc<dyn Fn(&T, &T) -> Ordering>),
}

impl<T> Comparator<T> {
    /// Sort by an arbitrary comparison.
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::By(Rc::new(compare))
    }

    /// Sort by a key extracted from each item.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self::by(move |a, b| key(a).cmp(&key(b)))
    }

    pub fn is_sorted(&self) -> bool {
        matches!(self, Self::By(_))
    }
}

impl<T> Default for Comparator<T> {
    fn default() -> Self {
        Self::Unsorted
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Unsorted => Self::Unsorted,
            Self::By(compare) => Self::By(Rc::clone(compare)),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsorted => f.write_str("Unsorted"),
            Self::By(_) => f.write_str("By(..)"),
        }
    }
}

/// Ids of `items`, in item order.
pub fn item_ids<T: ListItem>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}

/// Derive an ordering from scratch: sorted by the comparator (stable), or
/// insertion order when unsorted.
pub fn fresh_ordering<T: ListItem>(items: &[T], comparator: &Comparator<T>) -> Vec<String> {
    match comparator {
        Comparator::Unsorted => item_ids(items),
        Comparator::By(compare) => {
            let mut sorted: Vec<&T> = items.iter().collect();
            sorted.sort_by(|a, b| compare(*a, *b));
            sorted.into_iter().map(|item| item.id().to_string()).collect()
        }
    }
}

/// Compute the ordering for this render.
///
/// `prev_items` holds the item ids seen by the previous render (`None` before
/// the first one) and `prev_ordering` the ordering it displayed.
///
/// - first render, or the subject changed: fresh ordering
/// - same id set: `prev_ordering` unchanged, even if item fields changed
/// - items added: full re-sort when sorted, otherwise appended in item order
/// - items removed (with or without additions): survivors keep their
///   previous relative order, then additions are handled as above
pub fn reconcile<T: ListItem>(
    prev_items: Option<&[String]>,
    prev_ordering: &[String],
    current: &[T],
    comparator: &Comparator<T>,
    subject_changed: bool,
) -> Vec<String> {
    let Some(prev_items) = prev_items else {
        return fresh_ordering(current, comparator);
    };
    if subject_changed {
        log::debug!("[list] subject changed, deriving fresh ordering");
        return fresh_ordering(current, comparator);
    }

    let previous: HashSet<&str> = prev_items.iter().map(String::as_str).collect();
    let present: HashSet<&str> = current.iter().map(ListItem::id).collect();

    let added: Vec<&str> = current
        .iter()
        .map(ListItem::id)
        .filter(|id| !previous.contains(id))
        .collect();
    let removed = previous.iter().any(|id| !present.contains(id));

    if added.is_empty() && !removed {
        return prev_ordering.to_vec();
    }

    if !added.is_empty() && comparator.is_sorted() {
        log::trace!("[list] {} item(s) added, re-sorting", added.len());
        return fresh_ordering(current, comparator);
    }

    let mut ordering: Vec<String> = prev_ordering
        .iter()
        .filter(|id| present.contains(id.as_str()))
        .cloned()
        .collect();
    ordering.extend(added.into_iter().map(str::to_string));
    ordering
}

/// Id of the single item added since the previous render, if exactly one was.
pub fn single_addition<'a>(prev_items: &[String], current: &'a [String]) -> Option<&'a str> {
    let previous: HashSet<&str> = prev_items.iter().map(String::as_str).collect();
    let mut added = current.iter().filter(|id| !previous.contains(id.as_str()));
    match (added.next(), added.next()) {
        (Some(id), None) => Some(id),
        _ => None,
    }
}

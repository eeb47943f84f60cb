use std::collections::HashSet;

use proptest::prelude::*;

use proppanel::components::list::{Comparator, ListItem, fresh_ordering, item_ids, reconcile};

#[derive(Debug, Clone)]
struct Item {
    id: String,
    label: String,
}

impl ListItem for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

fn item(id: &str, label: &str) -> Item {
    Item {
        id: id.to_string(),
        label: label.to_string(),
    }
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn by_label() -> Comparator<Item> {
    Comparator::by(|a: &Item, b: &Item| a.label.cmp(&b.label))
}

fn sample() -> Vec<Item> {
    vec![item("1", "xyz"), item("2", "ab"), item("3", "def03")]
}

// ============================================================================
// Initial ordering
// ============================================================================

#[test]
fn test_initial_ordering_sorted() {
    let items = sample();
    let ordering = reconcile(None, &[], &items, &by_label(), false);
    assert_eq!(ordering, ids(&["2", "3", "1"]));
}

#[test]
fn test_initial_ordering_unsorted() {
    let items = sample();
    let ordering = reconcile(None, &[], &items, &Comparator::Unsorted, false);
    assert_eq!(ordering, ids(&["1", "2", "3"]));
}

#[test]
fn test_sort_is_stable() {
    let items = vec![item("a", "same"), item("b", "other"), item("c", "same")];
    let ordering = fresh_ordering(&items, &by_label());
    assert_eq!(ordering, ids(&["b", "a", "c"]));
}

#[test]
fn test_by_key_comparator() {
    let items = sample();
    let comparator = Comparator::by_key(|item: &Item| item.label.len());
    // "ab" (2), "xyz" (3), "def03" (5)
    assert_eq!(fresh_ordering(&items, &comparator), ids(&["2", "1", "3"]));
}

// ============================================================================
// Additions
// ============================================================================

#[test]
fn test_add_unsorted_appends() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["1", "2", "3"]);

    let mut after = before.clone();
    after.push(item("4", "aaa"));

    let ordering = reconcile(
        Some(&prev_items),
        &prev_ordering,
        &after,
        &Comparator::Unsorted,
        false,
    );
    assert_eq!(ordering, ids(&["1", "2", "3", "4"]));
}

#[test]
fn test_add_unsorted_keeps_custom_order() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["3", "1", "2"]);

    let mut after = before.clone();
    after.push(item("4", "aaa"));
    after.push(item("5", "bbb"));

    let ordering = reconcile(
        Some(&prev_items),
        &prev_ordering,
        &after,
        &Comparator::Unsorted,
        false,
    );
    assert_eq!(ordering, ids(&["3", "1", "2", "4", "5"]));
}

#[test]
fn test_add_sorted_resorts() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["2", "3", "1"]);

    let mut after = before.clone();
    after.push(item("4", "aa"));

    let ordering = reconcile(Some(&prev_items), &prev_ordering, &after, &by_label(), false);
    assert_eq!(ordering, ids(&["4", "2", "3", "1"]));
}

#[test]
fn test_add_sorted_discards_stale_order() {
    // Labels edited while the ordering was kept; an add sorts everything again
    let before = vec![item("1", "b"), item("2", "a")];
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["2", "1"]);

    let after = vec![item("1", "b"), item("2", "z"), item("3", "m")];
    let ordering = reconcile(Some(&prev_items), &prev_ordering, &after, &by_label(), false);
    assert_eq!(ordering, ids(&["1", "3", "2"]));
}

// ============================================================================
// Removals
// ============================================================================

#[test]
fn test_remove_keeps_relative_order() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["3", "2", "1"]);

    let after = vec![item("1", "xyz"), item("3", "def03")];

    for comparator in [Comparator::Unsorted, by_label()] {
        let ordering = reconcile(Some(&prev_items), &prev_ordering, &after, &comparator, false);
        assert_eq!(ordering, ids(&["3", "1"]));
    }
}

#[test]
fn test_remove_all() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["2", "3", "1"]);

    let after: Vec<Item> = Vec::new();
    let ordering = reconcile(Some(&prev_items), &prev_ordering, &after, &by_label(), false);
    assert!(ordering.is_empty());
}

#[test]
fn test_mixed_add_and_remove_unsorted() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["3", "2", "1"]);

    let after = vec![item("1", "xyz"), item("3", "def03"), item("5", "a")];
    let ordering = reconcile(
        Some(&prev_items),
        &prev_ordering,
        &after,
        &Comparator::Unsorted,
        false,
    );
    assert_eq!(ordering, ids(&["3", "1", "5"]));
}

#[test]
fn test_mixed_add_and_remove_sorted() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["3", "2", "1"]);

    let after = vec![item("1", "xyz"), item("3", "def03"), item("5", "a")];
    let ordering = reconcile(Some(&prev_items), &prev_ordering, &after, &by_label(), false);
    assert_eq!(ordering, ids(&["5", "3", "1"]));
}

#[test]
fn test_replacement_with_same_count() {
    // Same count, different ids: not an update
    let before = vec![item("1", "a"), item("2", "b")];
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["2", "1"]);

    let after = vec![item("1", "a"), item("3", "c")];
    let ordering = reconcile(
        Some(&prev_items),
        &prev_ordering,
        &after,
        &Comparator::Unsorted,
        false,
    );
    assert_eq!(ordering, ids(&["1", "3"]));
}

// ============================================================================
// Updates and identity
// ============================================================================

#[test]
fn test_update_never_reorders() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["2", "3", "1"]);

    // "xyz" becomes "aaa", which would sort first
    let after = vec![item("1", "aaa"), item("2", "ab"), item("3", "def03")];
    let ordering = reconcile(Some(&prev_items), &prev_ordering, &after, &by_label(), false);
    assert_eq!(ordering, prev_ordering);
}

#[test]
fn test_update_ignores_item_order() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["2", "3", "1"]);

    let mut after = before.clone();
    after.reverse();
    let ordering = reconcile(
        Some(&prev_items),
        &prev_ordering,
        &after,
        &Comparator::Unsorted,
        false,
    );
    assert_eq!(ordering, prev_ordering);
}

#[test]
fn test_idempotent() {
    let before = sample();
    let prev_items = item_ids(&before);
    let prev_ordering = ids(&["3", "2", "1"]);
    let after = vec![item("1", "xyz"), item("3", "def03"), item("4", "b")];

    for comparator in [Comparator::Unsorted, by_label()] {
        let first = reconcile(Some(&prev_items), &prev_ordering, &after, &comparator, false);
        let second = reconcile(Some(&prev_items), &prev_ordering, &after, &comparator, false);
        assert_eq!(first, second);
    }
}

#[test]
fn test_subject_change_rederives() {
    let items = sample();
    let prev_items = item_ids(&items);
    let custom = ids(&["1", "2", "3"]);

    let sorted = reconcile(Some(&prev_items), &custom, &items, &by_label(), true);
    assert_eq!(sorted, ids(&["2", "3", "1"]));

    let custom = ids(&["3", "1", "2"]);
    let unsorted = reconcile(
        Some(&prev_items),
        &custom,
        &items,
        &Comparator::Unsorted,
        true,
    );
    assert_eq!(unsorted, ids(&["1", "2", "3"]));
}

// ============================================================================
// Membership over operation sequences
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(usize),
    Relabel(usize, u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => any::<u8>().prop_map(Op::Add),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), any::<u8>()).prop_map(|(index, label)| Op::Relabel(index, label)),
    ]
}

/// Few distinct labels so sorted lists see ties.
fn label_text(label: u8) -> String {
    format!("{:02}", label % 40)
}

fn apply(op: Op, items: &mut Vec<Item>, next_id: &mut usize) {
    match op {
        Op::Add(label) => {
            *next_id += 1;
            items.push(item(&next_id.to_string(), &label_text(label)));
        }
        Op::Remove(index) if !items.is_empty() => {
            let index = index % items.len();
            items.remove(index);
        }
        Op::Relabel(index, label) if !items.is_empty() => {
            let index = index % items.len();
            items[index].label = label_text(label);
        }
        _ => {}
    }
}

proptest! {
    /// Property: the ordering always holds exactly the current item ids,
    /// reconciling twice changes nothing, and label edits never move items.
    #[test]
    fn prop_ordering_tracks_items(
        sorted in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 1..64),
    ) {
        let comparator = if sorted { by_label() } else { Comparator::Unsorted };
        let mut next_id = 0;
        let mut items: Vec<Item> = Vec::new();
        let mut prev_items: Option<Vec<String>> = None;
        let mut ordering: Vec<String> = Vec::new();

        for op in ops {
            let before = ordering.clone();
            let relabel = matches!(op, Op::Relabel(..));
            apply(op, &mut items, &mut next_id);

            ordering = reconcile(prev_items.as_deref(), &ordering, &items, &comparator, false);
            let current = item_ids(&items);

            let shown: HashSet<&str> = ordering.iter().map(String::as_str).collect();
            let present: HashSet<&str> = current.iter().map(String::as_str).collect();
            prop_assert_eq!(shown, present);
            prop_assert_eq!(ordering.len(), items.len());

            let again = reconcile(Some(current.as_slice()), &ordering, &items, &comparator, false);
            prop_assert_eq!(&again, &ordering);

            if relabel {
                prop_assert_eq!(&ordering, &before);
            }
            prev_items = Some(current);
        }
    }
}

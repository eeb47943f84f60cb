//! List entry rendering.

use propdom::{Element, FocusState};

use super::focus::focus_added;
use super::item::{ItemProps, ListItem};
use super::ordering::{item_ids, reconcile, single_addition};
use super::props::ListEntryProps;
use super::state::ListEntry;

impl ListEntry {
    /// Render the list for `props` and reconcile state with the previous
    /// render.
    ///
    /// If exactly one item was added since the previous render (and the
    /// subject is the same), `props.auto_focus` is applied to `focus`.
    pub fn render<T: ListItem, P>(
        &self,
        props: &ListEntryProps<'_, T, P>,
        focus: &mut FocusState,
    ) -> Element {
        let current = item_ids(props.items);
        let subject_id = props.subject.subject_id();

        let (ordering, open, added) = {
            let Ok(mut guard) = self.inner.write() else {
                log::warn!("[list] {} state poisoned, rendering closed", self.id());
                return self.build(props, &[], false);
            };

            let subject_changed = guard
                .prev_subject
                .as_deref()
                .is_some_and(|prev| prev != subject_id);

            let ordering = reconcile(
                guard.prev_items.as_deref(),
                &guard.ordering,
                props.items,
                &props.comparator,
                subject_changed,
            );
            guard.ordering = ordering;

            // Open state. A pending open request belongs to the old subject.
            if subject_changed {
                guard.open_requested = false;
                if props.open.is_none() && props.comparator.is_sorted() {
                    guard.open = false;
                }
            }
            if guard.open_requested && !current.is_empty() {
                guard.open = true;
                guard.open_requested = false;
            }
            if let Some(open) = props.open {
                guard.open = open;
            }
            if current.is_empty() {
                guard.open = false;
            }

            let added = match &guard.prev_items {
                Some(prev) if !subject_changed => {
                    single_addition(prev, &current).map(str::to_string)
                }
                _ => None,
            };

            guard.prev_items = Some(current);
            guard.prev_subject = Some(subject_id.to_string());
            (guard.ordering.clone(), guard.open, added)
        };

        let element = self.build(props, &ordering, open);

        if let Some(item_id) = added
            && !props.auto_focus.is_off()
        {
            focus_added(&props.auto_focus, &element, &item_id, focus);
        }

        element
    }

    fn build<T: ListItem, P>(
        &self,
        props: &ListEntryProps<'_, T, P>,
        ordering: &[String],
        open: bool,
    ) -> Element {
        let count = props.items.len();

        let mut header = Element::div()
            .id(props.header_id())
            .class("list-entry-header")
            .focusable(true)
            .clickable(true)
            .child(
                Element::div()
                    .class("list-entry-header-title")
                    .attr("title", props.label.as_str())
                    .child(Element::text(props.label.as_str())),
            )
            .child(
                Element::div()
                    .class("list-badge")
                    .class_if(count == 0, "empty")
                    .attr("title", badge_title(&props.label, count))
                    .child(Element::text(count.to_string())),
            );
        if props.on_add.is_some() {
            header = header.child(
                Element::button("+")
                    .id(props.add_id())
                    .class("add-entry")
                    .attr("title", "Create new list item"),
            );
        }

        let items = open.then(|| {
            let rows = ordering.iter().enumerate().filter_map(|(index, item_id)| {
                let (_, item) = props.find_item(item_id)?;
                let content = props.renderer.render(ItemProps {
                    item,
                    index,
                    open,
                    extra: &props.extra,
                });
                let remove = props.on_remove.as_ref().map(|_| {
                    Element::button("-")
                        .id(props.remove_id(item_id))
                        .class("remove-entry")
                        .attr("title", "Delete item")
                });
                Some(
                    Element::li()
                        .id(props.item_element_id(item_id))
                        .class("list-entry-item")
                        .attr("data-item-id", item_id.as_str())
                        .child(content)
                        .child_opt(remove),
                )
            });
            Element::ol().class("list-entry-items").children(rows)
        });

        Element::div()
            .id(props.id.as_str())
            .class("list-entry")
            .class_if(open, "open")
            .class_if(count == 0, "empty")
            .attr("data-entry-id", props.id.as_str())
            .child(header)
            .child_opt(items)
    }
}

/// Title of the item count badge.
pub fn badge_title(label: &str, count: usize) -> String {
    match count {
        0 => label.to_string(),
        1 => "List contains 1 item".to_string(),
        n => format!("List contains {n} items"),
    }
}

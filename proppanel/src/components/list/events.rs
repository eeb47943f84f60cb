//! List entry event handling.

use propdom::Event;

use crate::components::events::EventResult;

use super::item::ListItem;
use super::props::ListEntryProps;
use super::state::ListEntry;

impl ListEntry {
    /// Handle an event aimed at the list's header, add button or one of its
    /// remove buttons.
    ///
    /// Clicks and Enter/Space activate. Events for anything rendered by the
    /// item renderer are left to the host.
    pub fn handle_event<T: ListItem, P>(
        &self,
        event: &Event,
        props: &ListEntryProps<'_, T, P>,
    ) -> EventResult {
        if !event.is_activation() {
            return EventResult::Ignored;
        }
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };

        if target == props.header_id() {
            self.toggle(props.items, &props.comparator);
            return EventResult::Consumed;
        }

        if target == props.add_id() {
            return self.on_add(props);
        }

        let remove_prefix = format!("{}-remove-", props.id);
        if let Some(item_id) = target.strip_prefix(&remove_prefix) {
            return self.on_remove(props, item_id);
        }

        EventResult::Ignored
    }

    fn on_add<T: ListItem, P>(&self, props: &ListEntryProps<'_, T, P>) -> EventResult {
        let Some(on_add) = &props.on_add else {
            return EventResult::Ignored;
        };
        log::debug!("[list] {} add", self.id());
        on_add();
        if props.open_on_add
            && let Ok(mut guard) = self.inner.write()
        {
            guard.open_requested = true;
        }
        self.mark_dirty();
        EventResult::Consumed
    }

    fn on_remove<T: ListItem, P>(
        &self,
        props: &ListEntryProps<'_, T, P>,
        item_id: &str,
    ) -> EventResult {
        let Some(on_remove) = &props.on_remove else {
            return EventResult::Ignored;
        };
        let Some((_, item)) = props.find_item(item_id) else {
            log::warn!("[list] {} remove for unknown item '{}'", self.id(), item_id);
            return EventResult::Ignored;
        };
        log::debug!("[list] {} remove '{}'", self.id(), item_id);
        on_remove(item);
        self.mark_dirty();
        EventResult::Consumed
    }
}

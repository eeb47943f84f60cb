//! Text field event handling.

use std::time::Instant;

use propdom::Event;

use crate::components::events::EventResult;
use crate::context::EntryContext;

use super::props::TextFieldProps;
use super::state::TextField;

impl TextField {
    /// Handle an event aimed at the input or the trailing button.
    ///
    /// Typing schedules a commit, leaving the input flushes it and the
    /// button commits right away.
    pub fn handle_event<E>(
        &self,
        event: &Event,
        props: &TextFieldProps<'_, E>,
        cx: &EntryContext<E>,
        now: Instant,
    ) -> EventResult {
        if props.disabled {
            return EventResult::Ignored;
        }
        let control_id = props.control_id(cx);

        match event {
            Event::Input { target, value } if *target == control_id => {
                self.input(value, props, cx, now);
                EventResult::Consumed
            }
            Event::Blur { target, .. } if *target == control_id => {
                self.flush(props);
                // Blur keeps propagating
                EventResult::Ignored
            }
            _ if props.button.is_some()
                && event.is_activation()
                && event.target() == Some(props.button_id(cx).as_str()) =>
            {
                self.click_button(props);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

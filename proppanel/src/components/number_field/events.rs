//! Number field event handling.

use std::time::Instant;

use propdom::Event;

use crate::components::events::EventResult;
use crate::context::EntryContext;

use super::props::NumberFieldProps;
use super::state::NumberField;

impl NumberField {
    pub fn handle_event<E>(
        &self,
        event: &Event,
        props: &NumberFieldProps<'_, E>,
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
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }
}

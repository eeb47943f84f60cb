//! Text field rendering.

use propdom::Element;

use crate::components::chrome;
use crate::context::EntryContext;

use super::props::TextFieldProps;
use super::state::TextField;

impl TextField {
    /// Render the field, first picking up the subject's value if it changed.
    pub fn render<E>(&self, props: &TextFieldProps<'_, E>, cx: &EntryContext<E>) -> Element {
        self.sync(props);

        let control_id = props.control_id(cx);
        let error = self.error(props, cx);
        let description = cx.description_for(&props.id, props.description.as_deref(), props.subject);
        let tooltip = cx.tooltip_for(&props.id, props.tooltip.as_deref(), props.subject);

        let input = Element::input(self.local_value())
            .id(control_id.as_str())
            .class("input")
            .attr("name", props.id.as_str())
            .attr("type", "text")
            .attr_opt("placeholder", props.placeholder.as_deref())
            .disabled(props.disabled);

        let button = props.button.as_ref().map(|button| {
            Element::button(button.label.as_str())
                .id(props.button_id(cx))
                .class("field-button")
                .disabled(props.disabled)
        });

        chrome::entry_root(&props.id, error.as_deref())
            .class("text-field")
            .child(chrome::label(&control_id, &props.label, tooltip.as_deref()))
            .child(input)
            .child_opt(button)
            .child_opt(chrome::error(error.as_deref()))
            .child_opt(chrome::description(description.as_deref()))
    }
}

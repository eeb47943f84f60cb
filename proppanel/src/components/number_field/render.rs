//! Number field rendering.

use propdom::Element;

use crate::components::chrome;
use crate::context::EntryContext;

use super::constraints::{Step, format_number};
use super::props::NumberFieldProps;
use super::state::NumberField;

impl NumberField {
    pub fn render<E>(&self, props: &NumberFieldProps<'_, E>, cx: &EntryContext<E>) -> Element {
        self.sync(props);

        let control_id = props.control_id(cx);
        let error = self.error(props, cx);
        let description = cx.description_for(&props.id, props.description.as_deref(), props.subject);
        let tooltip = cx.tooltip_for(&props.id, props.tooltip.as_deref(), props.subject);
        let constraints = props.constraints;

        let step = match constraints.step {
            Step::Any => "any".to_string(),
            Step::Value(step) => format_number(step),
        };
        let input = Element::input(self.local_value())
            .id(control_id.as_str())
            .class("input")
            .class_if(self.rejection().is_some(), "invalid")
            .attr("name", props.id.as_str())
            .attr("type", "number")
            .attr_opt("min", constraints.min.map(format_number))
            .attr_opt("max", constraints.max.map(format_number))
            .attr("step", step)
            .disabled(props.disabled);

        chrome::entry_root(&props.id, error.as_deref())
            .class("number-field")
            .child(chrome::label(&control_id, &props.label, tooltip.as_deref()))
            .child(input)
            .child_opt(chrome::error(error.as_deref()))
            .child_opt(chrome::description(description.as_deref()))
    }
}

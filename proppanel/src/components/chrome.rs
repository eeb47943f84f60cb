//! Markup shared by single-value entries: label, error and description.

use propdom::Element;

/// Root element of an entry.
pub(crate) fn entry_root(entry_id: &str, error: Option<&str>) -> Element {
    Element::div()
        .class("entry")
        .class_if(error.is_some(), "has-error")
        .attr("data-entry-id", entry_id)
}

/// Label for the control `control_id`, with the tooltip as its title.
pub(crate) fn label(control_id: &str, text: &str, tooltip: Option<&str>) -> Element {
    Element::label(control_id)
        .class("label")
        .class_if(tooltip.is_some(), "has-tooltip")
        .attr_opt("title", tooltip)
        .child(Element::text(text))
}

pub(crate) fn error(message: Option<&str>) -> Option<Element> {
    message.map(|message| Element::div().class("error").child(Element::text(message)))
}

pub(crate) fn description(text: Option<&str>) -> Option<Element> {
    text.map(|text| Element::div().class("description").child(Element::text(text)))
}

/// Whether a rendered control holds a value.
pub fn is_edited(control: &Element) -> bool {
    control.value.as_deref().is_some_and(|value| !value.is_empty())
}

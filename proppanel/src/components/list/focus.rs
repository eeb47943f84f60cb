//! Moving focus into a freshly added list item.

use propdom::{Element, FocusState, Selector, SelectorError};

/// What to focus after the user adds exactly one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AutoFocus {
    /// Leave focus alone.
    #[default]
    Off,
    /// First `input` or `select` inside the new item.
    Entry,
    /// First focusable match of the selector inside the whole list.
    Selector(Selector),
}

impl AutoFocus {
    /// Auto-focus on a selector match, e.g. `[data-id="name"]`.
    pub fn selector(selector: &str) -> Result<Self, SelectorError> {
        Ok(Self::Selector(Selector::parse(selector)?))
    }

    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }
}

impl From<bool> for AutoFocus {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Entry } else { Self::Off }
    }
}

impl From<Selector> for AutoFocus {
    fn from(selector: Selector) -> Self {
        Self::Selector(selector)
    }
}

/// Apply `auto_focus` for the added item `item_id` to the rendered list.
///
/// `list` is the root element of the list entry. Returns the id of the newly
/// focused element; nothing happens when no element qualifies, e.g. because
/// the list is closed and its items aren't rendered.
pub fn focus_added(
    auto_focus: &AutoFocus,
    list: &Element,
    item_id: &str,
    focus: &mut FocusState,
) -> Option<String> {
    let focused = match auto_focus {
        AutoFocus::Off => return None,
        AutoFocus::Entry => {
            let item = find_item(list, item_id)?;
            focus.focus_first_control(item)
        }
        AutoFocus::Selector(selector) => focus.focus_selector(list, selector),
    };
    match &focused {
        Some(id) => log::debug!("[list] auto-focused '{}' for new item '{}'", id, item_id),
        None => log::trace!("[list] nothing to auto-focus for new item '{}'", item_id),
    }
    focused
}

fn find_item<'a>(list: &'a Element, item_id: &str) -> Option<&'a Element> {
    propdom::find_first(list, &|el| {
        el.has_class("list-entry-item") && el.get_attr("data-item-id") == Some(item_id)
    })
}

use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::element::{Element, find_element, find_first};
use crate::event::{Event, Key, Modifiers};
use crate::selector::Selector;

/// Tracks which element is currently focused and processes key events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Whether `id` holds focus.
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the first focusable descendant of `root` matching `selector`.
    /// Returns the newly focused element ID if one matched.
    pub fn focus_selector(&mut self, root: &Element, selector: &Selector) -> Option<String> {
        let target = selector
            .query_all(root)
            .into_iter()
            .find(|el| el.can_focus())?;
        let id = target.id.clone();
        self.focus(&id);
        Some(id)
    }

    /// Focus the first enabled `input` or `select` inside `root` (root included).
    /// Returns the newly focused element ID if one exists.
    pub fn focus_first_control(&mut self, root: &Element) -> Option<String> {
        let target = find_first(root, &|el| el.tag.is_form_control() && el.can_focus())?;
        let id = target.id.clone();
        self.focus(&id);
        Some(id)
    }

    /// Drop focus if the focused element is no longer part of the tree.
    /// Returns true if focus was dropped.
    pub fn prune(&mut self, root: &Element) -> bool {
        let gone = self
            .focused
            .as_deref()
            .is_some_and(|id| find_element(root, id).is_none());
        if gone {
            log::trace!("[focus] dropping stale focus {:?}", self.focused);
            self.focused = None;
        }
        gone
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.change_to(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.change_to(new_focus)
    }

    fn change_to(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// Tab/Shift+Tab move focus, Escape blurs, every other key press becomes
    /// an `Event::Key` aimed at the focused element.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            let CrosstermEvent::Key(key_event) = raw_event else {
                continue;
            };
            // Only process key press events (not release/repeat on some terminals)
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            let Ok(key) = Key::try_from(key_event.code) else {
                log::trace!("[focus] ignoring unsupported key {:?}", key_event.code);
                continue;
            };
            let modifiers: Modifiers = key_event.modifiers.into();

            match key {
                Key::Tab | Key::BackTab => {
                    let old = self.focused.clone();
                    let moved = if key == Key::Tab {
                        self.focus_next(root)
                    } else {
                        self.focus_prev(root)
                    };
                    if let Some(new) = moved {
                        if let Some(old) = old {
                            events.push(Event::Blur {
                                target: old,
                                new_target: Some(new.clone()),
                            });
                        }
                        events.push(Event::Focus { target: new });
                    }
                }
                Key::Escape if self.focused.is_some() => {
                    if let Some(old) = self.focused.take() {
                        events.push(Event::Blur {
                            target: old,
                            new_target: None,
                        });
                    }
                }
                _ => events.push(Event::Key {
                    target: self.focused.clone(),
                    key,
                    modifiers,
                }),
            }
        }

        events
    }
}

/// Collect all focusable, enabled element IDs in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.can_focus() {
        result.push(element.id.clone());
    }
    for child in element.content.children() {
        collect_focusable_recursive(child, result);
    }
}

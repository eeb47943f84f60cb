//! Per-render props of a list entry.

use crate::subject::Subject;

use super::focus::AutoFocus;
use super::item::{ItemRenderer, ListItem};
use super::ordering::Comparator;

type AddFn<'a> = Box<dyn Fn() + 'a>;
type RemoveFn<'a, T> = Box<dyn Fn(&T) + 'a>;

/// Everything a list entry needs to render once.
///
/// Props are rebuilt by the host on every render; state that must survive
/// between renders lives in [`ListEntry`](super::ListEntry).
pub struct ListEntryProps<'a, T, P = ()> {
    pub(super) id: String,
    pub(super) label: String,
    pub(super) subject: &'a dyn Subject,
    pub(super) items: &'a [T],
    pub(super) renderer: &'a dyn ItemRenderer<T, P>,
    pub(super) extra: P,
    pub(super) comparator: Comparator<T>,
    pub(super) auto_focus: AutoFocus,
    pub(super) open: Option<bool>,
    pub(super) open_on_add: bool,
    pub(super) on_add: Option<AddFn<'a>>,
    pub(super) on_remove: Option<RemoveFn<'a, T>>,
}

impl<'a, T: ListItem, P: Default> ListEntryProps<'a, T, P> {
    pub fn new(
        id: impl Into<String>,
        subject: &'a dyn Subject,
        items: &'a [T],
        renderer: &'a dyn ItemRenderer<T, P>,
    ) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            subject,
            items,
            renderer,
            extra: P::default(),
            comparator: Comparator::Unsorted,
            auto_focus: AutoFocus::Off,
            open: None,
            open_on_add: false,
            on_add: None,
            on_remove: None,
        }
    }
}

impl<'a, T: ListItem, P> ListEntryProps<'a, T, P> {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Props handed to every item renderer as `extra`.
    pub fn extra(mut self, extra: P) -> Self {
        self.extra = extra;
        self
    }

    pub fn comparator(mut self, comparator: Comparator<T>) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn auto_focus(mut self, auto_focus: impl Into<AutoFocus>) -> Self {
        self.auto_focus = auto_focus.into();
        self
    }

    /// Force the open state. Without it the list manages its own.
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Open the list when the add button is activated.
    pub fn open_on_add(mut self, open_on_add: bool) -> Self {
        self.open_on_add = open_on_add;
        self
    }

    /// Show an add button that calls `on_add`.
    pub fn on_add(mut self, on_add: impl Fn() + 'a) -> Self {
        self.on_add = Some(Box::new(on_add));
        self
    }

    /// Show a remove button on every item that calls `on_remove`.
    pub fn on_remove(mut self, on_remove: impl Fn(&T) + 'a) -> Self {
        self.on_remove = Some(Box::new(on_remove));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    // -------------------------------------------------------------------------
    // Element ids
    // -------------------------------------------------------------------------

    pub fn header_id(&self) -> String {
        format!("{}-header", self.id)
    }

    pub fn add_id(&self) -> String {
        format!("{}-add", self.id)
    }

    pub fn remove_id(&self, item_id: &str) -> String {
        format!("{}-remove-{}", self.id, item_id)
    }

    pub(super) fn item_element_id(&self, item_id: &str) -> String {
        format!("{}-item-{}", self.id, item_id)
    }

    pub(super) fn find_item(&self, item_id: &str) -> Option<(usize, &'a T)> {
        self.items
            .iter()
            .enumerate()
            .find(|(_, item)| item.id() == item_id)
    }
}

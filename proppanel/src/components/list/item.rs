//! Items shown by a list entry and how they are rendered.

use propdom::Element;

/// An item of a list entry.
///
/// The id must be unique within the list and stable across renders: it is
/// what the ordering, the remove buttons and auto-focus key on.
pub trait ListItem {
    fn id(&self) -> &str;
}

/// Props handed to an [`ItemRenderer`] for one item.
#[derive(Debug)]
pub struct ItemProps<'a, T, P = ()> {
    /// The item being rendered.
    pub item: &'a T,
    /// Position of the item in the displayed ordering.
    pub index: usize,
    /// Whether the list is open. Items are only rendered while it is, so
    /// this is always true today; renderers may still use it for layout.
    pub open: bool,
    /// Props passed through the list entry untouched.
    pub extra: &'a P,
}

/// Renders the content of one list item.
///
/// Implemented for every `Fn(ItemProps<'_, T, P>) -> Element`, so plain
/// functions work as renderers.
pub trait ItemRenderer<T, P = ()> {
    fn render(&self, props: ItemProps<'_, T, P>) -> Element;
}

impl<T, P, F> ItemRenderer<T, P> for F
where
    F: Fn(ItemProps<'_, T, P>) -> Element,
{
    fn render(&self, props: ItemProps<'_, T, P>) -> Element {
        self(props)
    }
}

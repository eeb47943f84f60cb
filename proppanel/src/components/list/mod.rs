//! Collapsible list of sub-entries with stable ordering.
//!
//! # Example
//!
//! ```ignore
//! let entry = ListEntry::new();
//! let props = ListEntryProps::new("inputs", &subject, &items, &render_input)
//!     .label("Inputs")
//!     .comparator(Comparator::by_key(|item: &Input| item.name.clone()))
//!     .auto_focus(true)
//!     .on_add(|| add_input());
//!
//! let element = entry.render(&props, &mut focus);
//! ```

mod events;
mod focus;
mod item;
mod ordering;
mod props;
mod render;
mod state;

pub use focus::{AutoFocus, focus_added};
pub use item::{ItemProps, ItemRenderer, ListItem};
pub use ordering::{Comparator, fresh_ordering, item_ids, reconcile, single_addition};
pub use props::ListEntryProps;
pub use render::badge_title;
pub use state::{ListEntry, ListEntryId};

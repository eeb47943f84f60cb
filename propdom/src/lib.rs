//! Retained element tree that property panel entries render into.
//!
//! Entries build an [`Element`] tree each render. Hosts map the tree onto
//! their toolkit; [`Selector`] queries and [`FocusState`] work on the tree
//! directly, so focus handling and tests need no real UI.

pub mod element;
pub mod event;
pub mod focus;
pub mod selector;

pub use element::{Content, Element, Tag, ancestors, find_element, find_first};
pub use event::{Event, Key, Modifiers};
pub use focus::{FocusState, collect_focusable};
pub use selector::{Selector, SelectorError};

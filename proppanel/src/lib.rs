//! Property panel entries.
//!
//! Entries render into a [`propdom`] element tree: a collapsible
//! [`ListEntry`](components::list::ListEntry) that keeps its items in a
//! stable order and can move focus into a newly added item, plus debounced
//! text and number fields.
//!
//! Entries are split into a long-lived state object, created once per entry
//! and kept by the host, and props rebuilt on every render.

pub mod components;
pub mod config;
pub mod context;
pub mod debounce;
pub mod prelude;
pub mod subject;
pub mod validation;

pub use propdom;

//! Common imports for building panels.

pub use crate::components::EventResult;
pub use crate::components::list::{
    AutoFocus, Comparator, ItemProps, ItemRenderer, ListEntry, ListEntryProps, ListItem,
};
pub use crate::components::number_field::{
    NumberField, NumberFieldProps, NumberInputError, Step,
};
pub use crate::components::text_field::{TextField, TextFieldProps};
pub use crate::config::PanelConfig;
pub use crate::context::EntryContext;
pub use crate::subject::Subject;
pub use propdom::{Element, Event, FocusState, Selector};

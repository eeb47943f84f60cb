//! Debounced text entry.

mod events;
mod props;
mod render;
mod state;

pub use props::{FieldButton, TextFieldProps};
pub use state::{TextField, TextFieldId};

//! Debounced numeric entry with min, max and step constraints.

mod constraints;
mod events;
mod props;
mod render;
mod state;

pub use constraints::{NumberConstraints, NumberInputError, Step, format_number};
pub use props::NumberFieldProps;
pub use state::{NumberField, NumberFieldId};

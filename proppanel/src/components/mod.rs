//! Property panel entries.

mod chrome;
pub mod events;
pub mod list;
pub mod number_field;
pub mod text_field;

pub use chrome::is_edited;
pub use events::EventResult;
pub use number_field::NumberInputError;

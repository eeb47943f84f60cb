//! Validation of entry values.
//!
//! A validator maps the value about to be committed to an optional error
//! message. [`rules`] has common ones for text values.

mod rules;

pub use rules::{all, max_length, merge_errors, min_length, pattern, required};

/// Validator for text values. `None` is the empty value.
pub type TextValidator<'a> = Box<dyn Fn(Option<&str>) -> Option<String> + 'a>;

/// Validator for numeric values. `None` is the empty value.
pub type NumberValidator<'a> = Box<dyn Fn(Option<f64>) -> Option<String> + 'a>;

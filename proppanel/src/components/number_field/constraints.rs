//! Parsing and range checks for numeric input.

use thiserror::Error;

/// Spacing of valid values, counted from the minimum (or zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Any value is on the grid.
    Any,
    Value(f64),
}

impl Default for Step {
    fn default() -> Self {
        Step::Value(1.0)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Any => f.write_str("any"),
            Step::Value(step) => write!(f, "{step}"),
        }
    }
}

/// Why typed text was not accepted as a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberInputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is below the minimum of {min}")]
    BelowMin { value: f64, min: f64 },

    #[error("{value} is above the maximum of {max}")]
    AboveMax { value: f64, max: f64 },

    #[error("{value} is not a multiple of {step} from {base}")]
    StepMismatch { value: f64, step: f64, base: f64 },
}

/// Bounds a number field enforces before committing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberConstraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Step,
}

impl NumberConstraints {
    /// Parse typed text. Empty text is the empty value.
    pub fn parse(&self, text: &str) -> Result<Option<f64>, NumberInputError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let value: f64 = text
            .parse()
            .ok()
            .filter(|value: &f64| value.is_finite())
            .ok_or_else(|| NumberInputError::NotANumber(text.to_string()))?;
        self.check(value)?;
        Ok(Some(value))
    }

    pub fn check(&self, value: f64) -> Result<(), NumberInputError> {
        if let Some(min) = self.min
            && value < min
        {
            return Err(NumberInputError::BelowMin { value, min });
        }
        if let Some(max) = self.max
            && value > max
        {
            return Err(NumberInputError::AboveMax { value, max });
        }
        if let Step::Value(step) = self.step
            && step > 0.0
        {
            let base = self.min.unwrap_or(0.0);
            let steps = (value - base) / step;
            if (steps - steps.round()).abs() > 1e-9 * steps.abs().max(1.0) {
                return Err(NumberInputError::StepMismatch { value, step, base });
            }
        }
        Ok(())
    }
}

/// Text shown for a stored number.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

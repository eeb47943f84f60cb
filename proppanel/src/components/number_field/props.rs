//! Per-render props of a number field.

use std::time::Duration;

use crate::context::EntryContext;
use crate::validation::NumberValidator;

use super::constraints::{NumberConstraints, Step};

type GetFn<'a, E> = Box<dyn Fn(&E) -> Option<f64> + 'a>;
type SetFn<'a> = Box<dyn Fn(Option<f64>, Option<String>) + 'a>;

/// Everything a number field needs to render once.
pub struct NumberFieldProps<'a, E> {
    pub(super) id: String,
    pub(super) label: String,
    pub(super) subject: &'a E,
    pub(super) get_value: GetFn<'a, E>,
    pub(super) set_value: SetFn<'a>,
    pub(super) constraints: NumberConstraints,
    pub(super) validate: Option<NumberValidator<'a>>,
    pub(super) description: Option<String>,
    pub(super) tooltip: Option<String>,
    pub(super) disabled: bool,
    pub(super) debounce: Option<Duration>,
}

impl<'a, E> NumberFieldProps<'a, E> {
    pub fn new(
        id: impl Into<String>,
        subject: &'a E,
        get_value: impl Fn(&E) -> Option<f64> + 'a,
        set_value: impl Fn(Option<f64>, Option<String>) + 'a,
    ) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            subject,
            get_value: Box::new(get_value),
            set_value: Box::new(set_value),
            constraints: NumberConstraints::default(),
            validate: None,
            description: None,
            tooltip: None,
            disabled: false,
            debounce: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.constraints.max = Some(max);
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.constraints.step = step;
        self
    }

    pub fn validate(mut self, validate: impl Fn(Option<f64>) -> Option<String> + 'a) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Override the panel's debounce delay for this field.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = Some(delay);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn constraints(&self) -> &NumberConstraints {
        &self.constraints
    }

    /// Value currently held by the subject.
    pub fn value(&self) -> Option<f64> {
        (self.get_value)(self.subject)
    }

    pub(super) fn delay(&self, cx: &EntryContext<E>) -> Duration {
        self.debounce.unwrap_or(cx.config().debounce)
    }

    pub(super) fn run_validate(&self, value: Option<f64>) -> Option<String> {
        self.validate.as_ref().and_then(|validate| validate(value))
    }

    pub(super) fn control_id(&self, cx: &EntryContext<E>) -> String {
        cx.config().control_id(&self.id)
    }
}

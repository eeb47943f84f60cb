//! Per-render props of a text field.

use std::time::Duration;

use crate::context::EntryContext;
use crate::validation::TextValidator;

type GetFn<'a, E> = Box<dyn Fn(&E) -> Option<String> + 'a>;
type SetFn<'a> = Box<dyn Fn(Option<String>, Option<String>) + 'a>;

/// Optional button rendered next to the input.
pub struct FieldButton<'a> {
    pub(crate) label: String,
    pub(crate) on_click: Box<dyn Fn() + 'a>,
}

/// Everything a text field needs to render once.
///
/// `get_value` reads the value from the subject. `set_value` receives the
/// committed value (`None` for empty text) and the validation error for it.
pub struct TextFieldProps<'a, E> {
    pub(super) id: String,
    pub(super) label: String,
    pub(super) subject: &'a E,
    pub(super) get_value: GetFn<'a, E>,
    pub(super) set_value: SetFn<'a>,
    pub(super) validate: Option<TextValidator<'a>>,
    pub(super) description: Option<String>,
    pub(super) tooltip: Option<String>,
    pub(super) placeholder: Option<String>,
    pub(super) disabled: bool,
    pub(super) debounce: Option<Duration>,
    pub(super) button: Option<FieldButton<'a>>,
}

impl<'a, E> TextFieldProps<'a, E> {
    pub fn new(
        id: impl Into<String>,
        subject: &'a E,
        get_value: impl Fn(&E) -> Option<String> + 'a,
        set_value: impl Fn(Option<String>, Option<String>) + 'a,
    ) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            subject,
            get_value: Box::new(get_value),
            set_value: Box::new(set_value),
            validate: None,
            description: None,
            tooltip: None,
            placeholder: None,
            disabled: false,
            debounce: None,
            button: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn validate(mut self, validate: impl Fn(Option<&str>) -> Option<String> + 'a) -> Self {
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

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
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

    /// Render a button after the input. Activating it commits the current
    /// text right away, then calls `on_click`.
    pub fn button(mut self, label: impl Into<String>, on_click: impl Fn() + 'a) -> Self {
        self.button = Some(FieldButton {
            label: label.into(),
            on_click: Box::new(on_click),
        });
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value currently held by the subject.
    pub fn value(&self) -> Option<String> {
        (self.get_value)(self.subject)
    }

    pub(super) fn delay(&self, cx: &EntryContext<E>) -> Duration {
        self.debounce.unwrap_or(cx.config().debounce)
    }

    pub(super) fn run_validate(&self, value: Option<&str>) -> Option<String> {
        self.validate.as_ref().and_then(|validate| validate(value))
    }

    pub(super) fn control_id(&self, cx: &EntryContext<E>) -> String {
        cx.config().control_id(&self.id)
    }

    pub(super) fn button_id(&self, cx: &EntryContext<E>) -> String {
        format!("{}-button", self.control_id(cx))
    }
}

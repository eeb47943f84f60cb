use regex::Regex;

use super::TextValidator;

/// Reject the empty value.
pub fn required(message: impl Into<String>) -> impl Fn(Option<&str>) -> Option<String> {
    let message = message.into();
    move |value| match value {
        Some(text) if !text.trim().is_empty() => None,
        _ => Some(message.clone()),
    }
}

/// Reject text shorter than `min` characters. The empty value passes.
pub fn min_length(min: usize, message: impl Into<String>) -> impl Fn(Option<&str>) -> Option<String> {
    let message = message.into();
    move |value| {
        value
            .filter(|text| text.chars().count() < min)
            .map(|_| message.clone())
    }
}

/// Reject text longer than `max` characters.
pub fn max_length(max: usize, message: impl Into<String>) -> impl Fn(Option<&str>) -> Option<String> {
    let message = message.into();
    move |value| {
        value
            .filter(|text| text.chars().count() > max)
            .map(|_| message.clone())
    }
}

/// Reject text not matching `pattern`. The empty value passes.
pub fn pattern(
    pattern: &str,
    message: impl Into<String>,
) -> Result<impl Fn(Option<&str>) -> Option<String>, regex::Error> {
    let regex = Regex::new(pattern)?;
    let message = message.into();
    Ok(move |value: Option<&str>| {
        value
            .filter(|text| !regex.is_match(text))
            .map(|_| message.clone())
    })
}

/// Run validators in order and report the first error.
pub fn all<'a>(validators: Vec<TextValidator<'a>>) -> impl Fn(Option<&str>) -> Option<String> + 'a {
    move |value| validators.iter().find_map(|validate| validate(value))
}

/// The error to show for an entry: a global error wins over the entry's own.
pub fn merge_errors(global: Option<&str>, local: Option<&str>) -> Option<String> {
    global.or(local).map(str::to_string)
}

use std::cell::RefCell;
use std::time::{Duration, Instant};

use propdom::{Element, Event, find_first};
use proppanel::components::is_edited;
use proppanel::components::text_field::{TextField, TextFieldProps};
use proppanel::config::PanelConfig;
use proppanel::context::EntryContext;
use proppanel::prelude::EventResult;
use proppanel::validation;

/// Minimal subject: a task with a name.
struct Task {
    name: RefCell<Option<String>>,
}

impl Task {
    fn new(name: Option<&str>) -> Self {
        Self {
            name: RefCell::new(name.map(str::to_string)),
        }
    }
}

type Commits = RefCell<Vec<(Option<String>, Option<String>)>>;

fn props<'a>(task: &'a Task, commits: &'a Commits) -> TextFieldProps<'a, Task> {
    TextFieldProps::new(
        "name",
        task,
        |task: &Task| task.name.borrow().clone(),
        move |value, error| {
            commits.borrow_mut().push((value.clone(), error));
            *task.name.borrow_mut() = value;
        },
    )
    .label("Name")
}

fn control(element: &Element) -> &Element {
    find_first(element, &|el| el.id == "panel-name").unwrap()
}

fn input(value: &str) -> Event {
    Event::Input {
        target: "panel-name".into(),
        value: value.into(),
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_renders_subject_value() {
    let task = Task::new(Some("Review"));
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();

    let element = field.render(&props(&task, &commits).placeholder("Task name"), &cx);
    assert!(element.has_class("entry"));
    assert_eq!(element.get_attr("data-entry-id"), Some("name"));

    let control = control(&element);
    assert_eq!(control.value.as_deref(), Some("Review"));
    assert_eq!(control.get_attr("placeholder"), Some("Task name"));
    assert!(is_edited(control));

    let label = find_first(&element, &|el| el.has_class("label")).unwrap();
    assert_eq!(label.get_attr("for"), Some("panel-name"));
    assert_eq!(label.text_content(), "Name");
}

#[test]
fn test_empty_value_is_not_edited() {
    let task = Task::new(None);
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();

    let element = field.render(&props(&task, &commits), &cx);
    assert!(!is_edited(control(&element)));
    assert!(!field.is_edited());
}

#[test]
fn test_description_and_tooltip() {
    let task = Task::new(Some("Review"));
    let commits = Commits::default();
    let cx = EntryContext::new()
        .description("name", |task: &Task| {
            task.name.borrow().as_ref().map(|name| format!("Named {name}"))
        })
        .tooltip("name", |_: &Task| Some("Shown in the diagram".to_string()));
    let field = TextField::new();

    let element = field.render(&props(&task, &commits), &cx);
    let description = find_first(&element, &|el| el.has_class("description")).unwrap();
    assert_eq!(description.text_content(), "Named Review");
    let label = find_first(&element, &|el| el.has_class("label")).unwrap();
    assert_eq!(label.get_attr("title"), Some("Shown in the diagram"));

    // Explicit props win over the context
    let element = field.render(&props(&task, &commits).description("Explicit"), &cx);
    let description = find_first(&element, &|el| el.has_class("description")).unwrap();
    assert_eq!(description.text_content(), "Explicit");
}

// ============================================================================
// Debounced commits
// ============================================================================

#[test]
fn test_input_commits_after_delay() {
    let task = Task::new(None);
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();
    let props = props(&task, &commits);
    let start = Instant::now();

    field.render(&props, &cx);
    field.handle_event(&input("Rev"), &props, &cx, start);
    assert_eq!(field.local_value(), "Rev");
    assert!(commits.borrow().is_empty());

    assert!(!field.poll(&props, start + Duration::from_millis(100)));
    assert!(field.poll(&props, start + Duration::from_millis(300)));
    assert_eq!(*commits.borrow(), vec![(Some("Rev".to_string()), None)]);
}

#[test]
fn test_newer_keystroke_supersedes() {
    let task = Task::new(None);
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();
    let props = props(&task, &commits);
    let start = Instant::now();

    field.render(&props, &cx);
    field.input("R", &props, &cx, start);
    field.input("Re", &props, &cx, start + Duration::from_millis(200));
    // The first deadline passed, but it was superseded
    assert!(!field.poll(&props, start + Duration::from_millis(350)));
    assert!(field.poll(&props, start + Duration::from_millis(500)));
    assert_eq!(*commits.borrow(), vec![(Some("Re".to_string()), None)]);
}

#[test]
fn test_empty_text_commits_none() {
    let task = Task::new(Some("Review"));
    let commits = Commits::default();
    let cx = EntryContext::with_config(PanelConfig::new().immediate());
    let field = TextField::new();
    let props = props(&task, &commits);

    field.render(&props, &cx);
    field.input("", &props, &cx, Instant::now());
    assert_eq!(*commits.borrow(), vec![(None, None)]);
    assert_eq!(*task.name.borrow(), None);
}

#[test]
fn test_blur_flushes() {
    let task = Task::new(None);
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();
    let props = props(&task, &commits);
    let now = Instant::now();

    field.render(&props, &cx);
    field.input("Review", &props, &cx, now);
    assert!(field.deadline().is_some());

    let blur = Event::Blur {
        target: "panel-name".into(),
        new_target: None,
    };
    assert_eq!(field.handle_event(&blur, &props, &cx, now), EventResult::Ignored);
    assert_eq!(commits.borrow().len(), 1);
    assert!(field.deadline().is_none());
}

#[test]
fn test_per_field_debounce_override() {
    let task = Task::new(None);
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();
    let props = props(&task, &commits).debounce(Duration::from_millis(50));
    let start = Instant::now();

    field.render(&props, &cx);
    field.input("R", &props, &cx, start);
    assert_eq!(field.deadline(), Some(start + Duration::from_millis(50)));
}

#[test]
fn test_external_change_resyncs() {
    let task = Task::new(Some("Review"));
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();

    field.render(&props(&task, &commits), &cx);
    *task.name.borrow_mut() = Some("Approve".to_string());
    let element = field.render(&props(&task, &commits), &cx);
    assert_eq!(control(&element).value.as_deref(), Some("Approve"));
}

#[test]
fn test_pending_text_survives_rerender() {
    let task = Task::new(Some("Review"));
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();
    let props = props(&task, &commits);

    field.render(&props, &cx);
    field.input("Revi", &props, &cx, Instant::now());
    let element = field.render(&props, &cx);
    assert_eq!(control(&element).value.as_deref(), Some("Revi"));
}

// ============================================================================
// Validation and errors
// ============================================================================

#[test]
fn test_validation_error_is_committed_and_shown() {
    let task = Task::new(Some("ok"));
    let commits = Commits::default();
    let cx = EntryContext::with_config(PanelConfig::new().immediate());
    let field = TextField::new();
    let props = props(&task, &commits).validate(validation::min_length(3, "Too short"));

    field.render(&props, &cx);
    assert_eq!(field.local_error().as_deref(), Some("Too short"));

    field.input("ab", &props, &cx, Instant::now());
    assert_eq!(
        commits.borrow().last(),
        Some(&(Some("ab".to_string()), Some("Too short".to_string())))
    );

    let element = field.render(&props, &cx);
    assert!(element.has_class("has-error"));
    let error = find_first(&element, &|el| el.has_class("error")).unwrap();
    assert_eq!(error.text_content(), "Too short");

    field.input("abc", &props, &cx, Instant::now());
    let element = field.render(&props, &cx);
    assert!(!element.has_class("has-error"));
}

#[test]
fn test_global_error_wins() {
    let task = Task::new(Some("Review"));
    let commits = Commits::default();
    let mut cx = EntryContext::new();
    cx.set_error("name", "Name is already taken");
    let field = TextField::new();
    let props = props(&task, &commits).validate(validation::max_length(3, "Too long"));

    let element = field.render(&props, &cx);
    let error = find_first(&element, &|el| el.has_class("error")).unwrap();
    assert_eq!(error.text_content(), "Name is already taken");

    cx.clear_error("name");
    assert_eq!(field.error(&props, &cx).as_deref(), Some("Too long"));
}

// ============================================================================
// Button
// ============================================================================

#[test]
fn test_button_commits_then_calls_back() {
    let task = Task::new(None);
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();
    let clicked = RefCell::new(Vec::new());
    let props = props(&task, &commits).button("Apply", || {
        clicked
            .borrow_mut()
            .push(task.name.borrow().clone());
    });
    let now = Instant::now();

    let element = field.render(&props, &cx);
    let button = find_first(&element, &|el| el.has_class("field-button")).unwrap();
    assert_eq!(button.id, "panel-name-button");

    field.input("Review", &props, &cx, now);
    let click = Event::Click {
        target: "panel-name-button".into(),
    };
    assert!(field.handle_event(&click, &props, &cx, now).is_handled());

    // Committed before the callback ran, and nothing stays pending
    assert_eq!(*clicked.borrow(), vec![Some("Review".to_string())]);
    assert!(!field.poll(&props, now + Duration::from_secs(1)));
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn test_disabled_ignores_input() {
    let task = Task::new(None);
    let commits = Commits::default();
    let cx = EntryContext::new();
    let field = TextField::new();
    let props = props(&task, &commits).disabled(true);

    let element = field.render(&props, &cx);
    assert!(control(&element).disabled);
    assert_eq!(
        field.handle_event(&input("x"), &props, &cx, Instant::now()),
        EventResult::Ignored
    );
    assert_eq!(field.local_value(), "");
}

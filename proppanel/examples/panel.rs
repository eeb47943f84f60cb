//! Scripted walk through a small panel: a sorted parameter list and a
//! debounced name field, driven by the same events a host would send.

use std::cell::{Cell, RefCell};
use std::fs::File;
use std::time::Instant;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use simplelog::{Config, LevelFilter, WriteLogger};

use proppanel::debounce;
use proppanel::prelude::*;
use proppanel::propdom::Content;

#[derive(Debug, Clone)]
struct Parameter {
    id: String,
    name: String,
}

impl ListItem for Parameter {
    fn id(&self) -> &str {
        &self.id
    }
}

struct Process {
    id: String,
    name: RefCell<Option<String>>,
    parameters: RefCell<Vec<Parameter>>,
    next_id: Cell<usize>,
}

impl Subject for Process {
    fn subject_id(&self) -> &str {
        &self.id
    }
}

impl Process {
    fn add_parameter(&self, name: &str) {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.parameters.borrow_mut().push(Parameter {
            id: format!("param-{id}"),
            name: name.to_string(),
        });
    }
}

fn render_parameter(props: ItemProps<'_, Parameter>) -> Element {
    Element::div().child(
        Element::input(props.item.name.as_str())
            .id(format!("{}-name", props.item.id))
            .attr("data-role", "name"),
    )
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let log_file = File::create("panel.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let process = Process {
        id: "Process_1".into(),
        name: RefCell::new(None),
        parameters: RefCell::new(Vec::new()),
        next_id: Cell::new(0),
    };
    for name in ["timeout", "assignee", "priority"] {
        process.add_parameter(name);
    }

    let cx: EntryContext<Process> = EntryContext::new()
        .description("name", |_: &Process| Some("Shown in the diagram".into()));
    let mut focus = FocusState::new();
    let list = ListEntry::new();
    let name_field = TextField::new();

    // First render: closed, sorted by name
    let items = process.parameters.borrow().clone();
    let element = list.render(&list_props(&process, &items), &mut focus);
    print_tree("initial", &element);

    // Open it with the keyboard
    let raw = [CrosstermEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))];
    focus.process_events(&raw, &element);
    let raw = [CrosstermEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))];
    for event in focus.process_events(&raw, &element) {
        list.handle_event(&event, &list_props(&process, &items));
    }
    let element = list.render(&list_props(&process, &items), &mut focus);
    print_tree("opened", &element);

    // Add a parameter; focus follows it
    let click = Event::Click {
        target: "parameters-add".into(),
    };
    list.handle_event(&click, &list_props(&process, &items));
    let items = process.parameters.borrow().clone();
    let element = list.render(&list_props(&process, &items), &mut focus);
    print_tree("after add", &element);
    println!("focused: {:?}\n", focus.focused());

    // Type a process name and wait for the debounced commit
    let name_props = TextFieldProps::new(
        "name",
        &process,
        |process: &Process| process.name.borrow().clone(),
        |value, _error| *process.name.borrow_mut() = value,
    )
    .label("Name");
    name_field.render(&name_props, &cx);
    let typed = Event::Input {
        target: cx.config().control_id("name"),
        value: "Order handling".into(),
    };
    name_field.handle_event(&typed, &name_props, &cx, Instant::now());

    debounce::wait_until(name_field.deadline()).await;
    name_field.poll(&name_props, Instant::now());
    print_tree("name field", &name_field.render(&name_props, &cx));
    println!("committed name: {:?}", process.name.borrow());

    Ok(())
}

fn list_props<'a>(process: &'a Process, items: &'a [Parameter]) -> ListEntryProps<'a, Parameter> {
    ListEntryProps::new("parameters", process, items, &render_parameter)
        .label("Parameters")
        .comparator(Comparator::by_key(|p: &Parameter| p.name.clone()))
        .auto_focus(true)
        .on_add(|| process.add_parameter(""))
        .on_remove(|p: &Parameter| {
            process.parameters.borrow_mut().retain(|other| other.id != p.id);
        })
}

fn print_tree(title: &str, element: &Element) {
    println!("== {title}");
    print_element(element, 0);
    println!();
}

fn print_element(element: &Element, depth: usize) {
    let mut line = format!("{}<{}", "  ".repeat(depth), element.tag);
    if !is_generated_id(element) {
        line.push_str(&format!(" #{}", element.id));
    }
    for class in &element.classes {
        line.push_str(&format!(" .{class}"));
    }
    if let Some(value) = &element.value {
        line.push_str(&format!(" value={value:?}"));
    }
    line.push('>');
    match &element.content {
        Content::Text(text) => line.push_str(&format!(" {text:?}")),
        Content::Children(_) | Content::None => {}
    }
    println!("{line}");
    for child in element.content.children() {
        print_element(child, depth + 1);
    }
}

fn is_generated_id(element: &Element) -> bool {
    element
        .id
        .strip_prefix(element.tag.as_str())
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|n| n.chars().all(|c| c.is_ascii_digit()))
}

use propdom::{Content, Element, Event, Key, Modifiers, Tag, ancestors, find_element};

#[test]
fn test_builder_sets_markup() {
    let el = Element::input("42")
        .id("amount")
        .class("input")
        .class("input")
        .class_if(false, "hidden")
        .attr("data-id", "x")
        .attr_opt("title", None::<String>)
        .placeholder("Amount");

    assert_eq!(el.tag, Tag::Input);
    assert_eq!(el.classes, vec!["input".to_string()]);
    assert_eq!(el.get_attr("data-id"), Some("x"));
    assert_eq!(el.get_attr("title"), None);
    assert_eq!(el.get_attr("placeholder"), Some("Amount"));
    assert_eq!(el.value.as_deref(), Some("42"));
    assert!(el.can_focus());
    assert!(!el.clone().disabled(true).can_focus());
}

#[test]
fn test_text_content_concatenates() {
    let el = Element::div()
        .child(Element::text("Item "))
        .child(Element::span().child(Element::text("1")));
    assert_eq!(el.text_content(), "Item 1");
}

#[test]
fn test_child_replaces_text() {
    let el = Element::button("x").child(Element::text("y"));
    assert!(matches!(el.content, Content::Children(ref c) if c.len() == 1));
}

#[test]
fn test_find_element_and_ancestors() {
    let root = Element::div().id("a").child(
        Element::div()
            .id("b")
            .child(Element::text("leaf").id("c")),
    );

    assert_eq!(find_element(&root, "c").map(|e| e.text_content()), Some("leaf".into()));
    assert!(find_element(&root, "z").is_none());

    let ids: Vec<&str> = ancestors(&root, "c").iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(ancestors(&root, "a").is_empty());
}

#[test]
fn test_tag_names_round_trip() {
    for tag in [Tag::Div, Tag::Input, Tag::Select, Tag::Li] {
        assert_eq!(Tag::from_name(tag.as_str()), Some(tag));
    }
    assert_eq!(Tag::from_name("INPUT"), Some(Tag::Input));
    assert!(Tag::Select.is_form_control());
    assert!(!Tag::Button.is_form_control());
}

#[test]
fn test_event_activation() {
    let click = Event::Click { target: "x".into() };
    assert!(click.is_activation());
    assert_eq!(click.target(), Some("x"));

    let space = Event::Key {
        target: None,
        key: Key::Char(' '),
        modifiers: Modifiers::new(),
    };
    assert!(space.is_activation());
    assert_eq!(space.target(), None);

    let ctrl_enter = Event::Key {
        target: None,
        key: Key::Enter,
        modifiers: Modifiers::ctrl(),
    };
    assert!(!ctrl_enter.is_activation());
}

#[test]
fn test_trees_compare_structurally() {
    fn assert_total_eq<T: Eq>(_: &T) {}

    let tree = Element::div()
        .id("root")
        .child(Element::input("a").id("in"))
        .child(Element::text("label").id("txt"));
    assert_total_eq(&tree);
    assert_total_eq(&tree.content);
    assert_eq!(tree.clone(), tree);

    let changed = Element::div()
        .id("root")
        .child(Element::input("b").id("in"))
        .child(Element::text("label").id("txt"));
    assert_ne!(changed, tree);
}

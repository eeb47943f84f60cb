use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Markup
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    /// Current value of an `input` or `select`.
    pub value: Option<String>,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// Disabled elements don't receive input or focus.
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            value: None,
            focusable: false,
            clickable: false,
            disabled: false,
        }
    }
}

impl Element {
    fn with_tag(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.as_str()),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::with_tag(Tag::Div)
    }

    pub fn span() -> Self {
        Self::with_tag(Tag::Span)
    }

    pub fn ol() -> Self {
        Self::with_tag(Tag::Ol)
    }

    pub fn li() -> Self {
        Self::with_tag(Tag::Li)
    }

    /// A span holding a run of text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::with_tag(Tag::Span)
        }
    }

    /// A label pointing at the control with id `for_id`.
    pub fn label(for_id: impl Into<String>) -> Self {
        Self::with_tag(Tag::Label).attr("for", for_id)
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            focusable: true,
            ..Self::with_tag(Tag::Input)
        }
    }

    /// Create a select element with the given selected value.
    pub fn select(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            focusable: true,
            ..Self::with_tag(Tag::Select)
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            focusable: true,
            clickable: true,
            ..Self::with_tag(Tag::Button)
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
        self
    }

    /// Add a class only when `condition` holds.
    pub fn class_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition { self.class(name) } else { self }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set an attribute when a value is present.
    pub fn attr_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn placeholder(self, text: impl Into<String>) -> Self {
        self.attr("placeholder", text)
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the element can take focus right now.
    pub fn can_focus(&self) -> bool {
        self.focusable && !self.disabled
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Add a child only when one is given.
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None => {}
    }
}

/// What an element holds: nothing, a run of text, or child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Child elements, empty for text and empty content.
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }
}

/// Element kind, mirrored by the tag names selectors match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Label,
    Input,
    Select,
    Button,
    Ol,
    Li,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Label => "label",
            Self::Input => "input",
            Self::Select => "select",
            Self::Button => "button",
            Self::Ol => "ol",
            Self::Li => "li",
        }
    }

    /// Look up a tag by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name.to_ascii_lowercase().as_str() {
            "div" => Self::Div,
            "span" => Self::Span,
            "label" => Self::Label,
            "input" => Self::Input,
            "select" => Self::Select,
            "button" => Self::Button,
            "ol" => Self::Ol,
            "li" => Self::Li,
            _ => return None,
        };
        Some(tag)
    }

    /// Whether the tag is a form control that accepts typed or picked input.
    pub fn is_form_control(&self) -> bool {
        matches!(self, Self::Input | Self::Select)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

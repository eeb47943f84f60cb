//! A small CSS selector engine over the element tree.
//!
//! Supported syntax: type selectors, `*`, `#id`, `.class`, `[attr]`,
//! `[attr="value"]` (quoted or bare), the descendant (whitespace) and child
//! (`>`) combinators, and selector lists (`,`). Tokenizing is done by
//! `cssparser`.

use std::str::FromStr;

use cssparser::{ParseError, Parser, ParserInput, Token};
use thiserror::Error;

use crate::element::Element;

/// Errors produced while parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("unexpected input at offset {offset} in selector '{selector}'")]
    Unexpected { selector: String, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

/// One compound selector, e.g. `input.field[data-id="a"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    universal: bool,
    /// Lowercase type name.
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        !self.universal
            && self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag
            && element.tag.as_str() != tag.as_str()
        {
            return false;
        }
        if let Some(id) = &self.id
            && &element.id != id
        {
            return false;
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| match (&attr.value, element.get_attr(&attr.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// Compounds joined by combinators, outermost first. `combinators[i]` sits
/// between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
}

impl Complex {
    /// `ancestors` is ordered closest first.
    fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some(last) = self.compounds.last() else {
            return false;
        };
        last.matches(element) && self.matches_outer(self.compounds.len() - 1, ancestors)
    }

    /// Match the compounds left of `index` against `ancestors`.
    fn matches_outer(&self, index: usize, ancestors: &[&Element]) -> bool {
        if index == 0 {
            return true;
        }
        let compound = &self.compounds[index - 1];
        match self.combinators[index - 1] {
            Combinator::Child => ancestors.first().is_some_and(|parent| {
                compound.matches(parent) && self.matches_outer(index - 1, &ancestors[1..])
            }),
            Combinator::Descendant => (0..ancestors.len()).any(|i| {
                compound.matches(ancestors[i]) && self.matches_outer(index - 1, &ancestors[i + 1..])
            }),
        }
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Complex>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        source.parse()
    }

    /// The selector text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `element`, with the given ancestors (closest first), matches.
    pub fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        self.alternatives
            .iter()
            .any(|complex| complex.matches(element, ancestors))
    }

    /// First descendant of `root` (root excluded) matching the selector, in tree order.
    pub fn query<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        let mut stack = vec![root];
        self.query_in(root, &mut stack)
    }

    fn query_in<'a>(&self, parent: &'a Element, stack: &mut Vec<&'a Element>) -> Option<&'a Element> {
        for child in parent.content.children() {
            let ancestors: Vec<&Element> = stack.iter().rev().copied().collect();
            if self.matches(child, &ancestors) {
                return Some(child);
            }
            stack.push(child);
            let found = self.query_in(child, stack);
            stack.pop();
            if found.is_some() {
                return found;
            }
        }
        None
    }

    /// All descendants of `root` (root excluded) matching the selector, in tree order.
    pub fn query_all<'a>(&self, root: &'a Element) -> Vec<&'a Element> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        self.collect_in(root, &mut stack, &mut out);
        out
    }

    fn collect_in<'a>(
        &self,
        parent: &'a Element,
        stack: &mut Vec<&'a Element>,
        out: &mut Vec<&'a Element>,
    ) {
        for child in parent.content.children() {
            let ancestors: Vec<&Element> = stack.iter().rev().copied().collect();
            if self.matches(child, &ancestors) {
                out.push(child);
            }
            stack.push(child);
            self.collect_in(child, stack, out);
            stack.pop();
        }
    }
}

/// Builds one selector list out of the token stream.
#[derive(Default)]
struct Builder {
    alternatives: Vec<Complex>,
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
    current: Compound,
    /// Combinator seen after the last finished compound.
    pending: Option<Combinator>,
}

impl Builder {
    /// Called before a simple selector is added to `current`.
    fn begin(&mut self) {
        if self.current.is_empty()
            && let Some(combinator) = self.pending.take()
        {
            self.combinators.push(combinator);
        }
    }

    fn end_compound(&mut self) {
        if !self.current.is_empty() {
            self.compounds.push(std::mem::take(&mut self.current));
        }
    }

    /// Close the current alternative. Fails on an empty one or a dangling `>`.
    fn end_alternative(&mut self) -> bool {
        self.end_compound();
        if self.compounds.is_empty() || self.pending == Some(Combinator::Child) {
            return false;
        }
        self.pending = None;
        self.alternatives.push(Complex {
            compounds: std::mem::take(&mut self.compounds),
            combinators: std::mem::take(&mut self.combinators),
        });
        true
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let unexpected = |offset: usize| SelectorError::Unexpected {
            selector: trimmed.to_string(),
            offset,
        };

        let mut input = ParserInput::new(trimmed);
        let mut parser = Parser::new(&mut input);
        let mut builder = Builder::default();

        loop {
            let offset = parser.position().byte_index();
            let token = match parser.next_including_whitespace() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                Token::WhiteSpace(_) => {
                    if !builder.current.is_empty() {
                        builder.end_compound();
                        builder.pending = Some(Combinator::Descendant);
                    }
                }
                Token::Delim('>') => {
                    builder.end_compound();
                    if builder.compounds.is_empty() || builder.pending == Some(Combinator::Child) {
                        return Err(unexpected(offset));
                    }
                    builder.pending = Some(Combinator::Child);
                }
                Token::Comma => {
                    if !builder.end_alternative() {
                        return Err(unexpected(offset));
                    }
                }
                Token::Ident(name) => {
                    // A type selector only opens a compound
                    if !builder.current.is_empty() {
                        return Err(unexpected(offset));
                    }
                    builder.begin();
                    builder.current.tag = Some(name.to_ascii_lowercase());
                }
                Token::Delim('*') => {
                    if !builder.current.is_empty() {
                        return Err(unexpected(offset));
                    }
                    builder.begin();
                    builder.current.universal = true;
                }
                Token::IDHash(id) | Token::Hash(id) => {
                    builder.begin();
                    builder.current.id = Some(id.to_string());
                }
                Token::Delim('.') => {
                    let class = match parser.next_including_whitespace() {
                        Ok(Token::Ident(class)) => class.to_string(),
                        _ => return Err(unexpected(offset)),
                    };
                    builder.begin();
                    builder.current.classes.push(class);
                }
                Token::SquareBracketBlock => {
                    let attr = parser
                        .parse_nested_block(|p| parse_attribute(p))
                        .map_err(|_: ParseError<'_, ()>| unexpected(offset))?;
                    builder.begin();
                    builder.current.attrs.push(attr);
                }
                _ => return Err(unexpected(offset)),
            }
        }

        if !builder.end_alternative() {
            return Err(unexpected(trimmed.len()));
        }

        Ok(Self {
            source: trimmed.to_string(),
            alternatives: builder.alternatives,
        })
    }
}

/// Contents of `[...]`: a name, optionally `=` and an identifier or string.
fn parse_attribute<'i>(parser: &mut Parser<'i, '_>) -> Result<AttrMatch, ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_string();
    let value = if parser.try_parse(|p| p.expect_delim('=')).is_ok() {
        Some(parser.expect_ident_or_string()?.to_string())
    } else {
        None
    };
    parser.expect_exhausted()?;
    Ok(AttrMatch { name, value })
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

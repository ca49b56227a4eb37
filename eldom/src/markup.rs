//! Minimal markup parser for widget templates.
//!
//! Parses the small tag/text subset widget templates use into element
//! children: nested `<tag attr="value">…</tag>` elements, self-closing
//! `<tag/>`, and bare text. The `class` attribute feeds the element's
//! class list; any other attribute lands in the element data map.
//!
//! An element body holding a single text run collapses to
//! [`Content::Text`](crate::element::Content) so label sub-elements can
//! be updated in place.

use crate::element::Element;

/// Errors produced while parsing markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// Input ended inside a tag or before a closing tag.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A closing tag did not match the open element.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag { expected: String, found: String },

    /// The input contained a token the subset does not allow.
    #[error("unexpected token at byte {pos}")]
    UnexpectedToken { pos: usize },
}

/// Parse a markup fragment into a list of elements.
pub fn parse(src: &str) -> Result<Vec<Element>, MarkupError> {
    let mut parser = Parser { src, pos: 0 };
    let nodes = parser.parse_nodes(None)?;
    let elements = into_elements(nodes);
    log::trace!("[markup] parsed {} top-level element(s)", elements.len());
    Ok(elements)
}

enum Node {
    Text(String),
    Element(Element),
}

fn into_elements(nodes: Vec<Node>) -> Vec<Element> {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Text(text) => Element::text(text),
            Node::Element(element) => element,
        })
        .collect()
}

fn attach_body(element: &mut Element, mut nodes: Vec<Node>) {
    match nodes.len() {
        0 => {}
        1 => match nodes.remove(0) {
            Node::Text(text) => element.set_text(text),
            Node::Element(child) => element.set_children(vec![child]),
        },
        _ => element.set_children(into_elements(nodes)),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    /// Parse sibling nodes until end of input (top level) or the closing
    /// tag of `enclosing`, which is consumed and verified.
    fn parse_nodes(&mut self, enclosing: Option<&str>) -> Result<Vec<Node>, MarkupError> {
        let mut nodes = Vec::new();

        loop {
            if self.rest().is_empty() {
                return match enclosing {
                    Some(_) => Err(MarkupError::UnexpectedEof),
                    None => Ok(nodes),
                };
            }

            if self.rest().starts_with("</") {
                return match enclosing {
                    Some(expected) => {
                        self.expect_closing(expected)?;
                        Ok(nodes)
                    }
                    None => Err(MarkupError::UnexpectedToken { pos: self.pos }),
                };
            }

            if self.rest().starts_with('<') {
                nodes.push(Node::Element(self.parse_element()?));
            } else {
                let text = self.take_text();
                // Whitespace between tags carries no content
                if !text.trim().is_empty() {
                    nodes.push(Node::Text(text));
                }
            }
        }
    }

    fn parse_element(&mut self) -> Result<Element, MarkupError> {
        self.pos += 1; // consume '<'
        let tag = self.take_name()?;
        let mut element = Element::tag(&tag);

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(MarkupError::UnexpectedEof),
                Some('>') => {
                    self.pos += 1;
                    break;
                }
                Some('/') => {
                    if self.rest().starts_with("/>") {
                        self.pos += 2;
                        return Ok(element);
                    }
                    return Err(MarkupError::UnexpectedToken { pos: self.pos });
                }
                Some(_) => {
                    let (name, value) = self.parse_attribute()?;
                    if name == "class" {
                        for class in value.split_whitespace() {
                            element.add_class(class);
                        }
                    } else {
                        element.data.insert(name, value);
                    }
                }
            }
        }

        let body = self.parse_nodes(Some(&tag))?;
        attach_body(&mut element, body);
        Ok(element)
    }

    /// Consume `</name>` after the caller has seen the `</` prefix.
    fn expect_closing(&mut self, expected: &str) -> Result<(), MarkupError> {
        self.pos += 2; // consume "</"
        let found = self.take_name()?;
        self.skip_whitespace();
        match self.peek() {
            Some('>') => self.pos += 1,
            Some(_) => return Err(MarkupError::UnexpectedToken { pos: self.pos }),
            None => return Err(MarkupError::UnexpectedEof),
        }
        if found != expected {
            return Err(MarkupError::MismatchedClosingTag {
                expected: expected.to_string(),
                found,
            });
        }
        Ok(())
    }

    fn parse_attribute(&mut self) -> Result<(String, String), MarkupError> {
        let name = self.take_name()?;
        self.skip_whitespace();
        match self.peek() {
            Some('=') => self.pos += 1,
            Some(_) => return Err(MarkupError::UnexpectedToken { pos: self.pos }),
            None => return Err(MarkupError::UnexpectedEof),
        }
        self.skip_whitespace();
        match self.peek() {
            Some('"') => self.pos += 1,
            Some(_) => return Err(MarkupError::UnexpectedToken { pos: self.pos }),
            None => return Err(MarkupError::UnexpectedEof),
        }
        let Some(end) = self.rest().find('"') else {
            return Err(MarkupError::UnexpectedEof);
        };
        let value = self.rest()[..end].to_string();
        self.pos += end + 1;
        Ok((name, value))
    }

    /// Take a tag or attribute name: ASCII alphanumerics, `-`, and `_`.
    fn take_name(&mut self) -> Result<String, MarkupError> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '-' && c != '_')
            .unwrap_or(rest.len());
        if end == 0 {
            return match self.peek() {
                Some(_) => Err(MarkupError::UnexpectedToken { pos: self.pos }),
                None => Err(MarkupError::UnexpectedEof),
            };
        }
        let name = rest[..end].to_string();
        self.pos += end;
        Ok(name)
    }

    fn take_text(&mut self) -> String {
        let rest = self.rest();
        let end = rest.find('<').unwrap_or(rest.len());
        let text = rest[..end].to_string();
        self.pos += end;
        text
    }
}

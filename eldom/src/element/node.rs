use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::event::EventKind;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the element tree.
///
/// Widgets own their container element and mutate it through the class,
/// content, and binding methods. Class presence is the mechanism widgets
/// use to expose state to styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Styling hooks
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Named events bound on this element
    pub bindings: Vec<EventKind>,

    // Custom data storage (markup attributes, handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            content: Content::None,
            bindings: Vec::new(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create an element for a markup tag. The tag name seeds the ID and
    /// is retained in the data map under `"tag"`.
    pub fn tag(name: &str) -> Self {
        let mut element = Self {
            id: generate_id(name),
            ..Default::default()
        };
        element.data.insert("tag".into(), name.into());
        element
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    /// Add a class if not already present. Returns whether the class list
    /// changed.
    pub fn add_class(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.classes.iter().any(|c| *c == name) {
            return false;
        }
        self.classes.push(name);
        true
    }

    /// Remove a class if present. Returns whether the class list changed.
    pub fn remove_class(&mut self, name: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != name);
        self.classes.len() != before
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    // Content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    // Event bindings
    pub fn bound(mut self, kind: EventKind) -> Self {
        self.bind_event(kind);
        self
    }

    /// Bind a named event. Returns whether the binding was added.
    pub fn bind_event(&mut self, kind: EventKind) -> bool {
        if self.bindings.contains(&kind) {
            return false;
        }
        self.bindings.push(kind);
        true
    }

    /// Unbind a named event. Returns whether the binding was removed.
    pub fn unbind_event(&mut self, kind: EventKind) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| *b != kind);
        self.bindings.len() != before
    }

    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.bindings.contains(&kind)
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}

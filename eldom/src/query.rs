//! Class-based queries over an element subtree.
//!
//! Widgets locate their sub-elements (icon, label) by class within the
//! scope of their own container, never across the whole tree.

use crate::element::{Content, Element};

/// Find the first element carrying `class` in the subtree rooted at
/// `scope`, depth-first in document order. The scope element itself is
/// considered.
pub fn find_by_class<'a>(scope: &'a Element, class: &str) -> Option<&'a Element> {
    if scope.has_class(class) {
        return Some(scope);
    }

    if let Content::Children(children) = &scope.content {
        for child in children {
            if let Some(found) = find_by_class(child, class) {
                return Some(found);
            }
        }
    }

    None
}

/// Mutable variant of [`find_by_class`].
pub fn find_by_class_mut<'a>(scope: &'a mut Element, class: &str) -> Option<&'a mut Element> {
    if scope.has_class(class) {
        return Some(scope);
    }

    if let Content::Children(children) = &mut scope.content {
        for child in children {
            if let Some(found) = find_by_class_mut(child, class) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element carrying `class` in the subtree rooted at
/// `scope`, depth-first in document order.
pub fn collect_by_class<'a>(scope: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_into(scope, class, &mut found);
    found
}

fn collect_into<'a>(scope: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if scope.has_class(class) {
        found.push(scope);
    }

    if let Content::Children(children) = &scope.content {
        for child in children {
            collect_into(child, class, found);
        }
    }
}

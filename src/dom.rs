//! DOM Traversal Adapter
//!
//! Read-only helpers over the `dom_query` tree. Extraction never mutates the
//! parsed document; it walks it with [`walk`], a depth-first pre-order
//! traversal driven by a visitor that decides per node whether to descend,
//! skip the subtree, or stop.
//!
//! Traversal keeps its own stack instead of recursing, so deeply nested or
//! malformed markup cannot exhaust the thread stack.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

/// Decision returned by a [`walk`] visitor for the node it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Visit this node's children next.
    Descend,
    /// Leave this node's subtree out, continue with its next sibling.
    Skip,
    /// End the traversal.
    Stop,
}

/// Parse HTML string into document.
///
/// Parsing is lenient: unclosed tags, stray end tags and empty input all
/// yield a document (possibly with an empty body).
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Depth-first pre-order traversal starting at (and including) `root`.
pub fn walk<'a, F>(root: NodeRef<'a>, mut visit: F)
where
    F: FnMut(&NodeRef<'a>) -> Visit,
{
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match visit(&node) {
            Visit::Stop => return,
            Visit::Skip => {}
            Visit::Descend => {
                // Reversed so the first child is popped first
                stack.extend(node.children().into_iter().rev());
            }
        }
    }
}

/// Get element tag name (lowercase), `None` for text, comment and document nodes.
#[must_use]
pub fn element_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether `node` is an element with the given tag name.
#[must_use]
pub fn is_element_named(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Text payload of a text node, `None` for any other node type.
#[must_use]
pub fn text_payload(node: &NodeRef) -> Option<String> {
    node.is_text().then(|| node.text().to_string())
}

/// Flattened inner text of a node.
///
/// Text nodes return their payload untouched. For elements, descendant text
/// is concatenated in document order, a single space is appended after each
/// child element's contribution, and each element's result is trimmed.
/// Comments contribute nothing.
///
/// `<h1>Hello <b>big</b> world</h1>` flattens to `"Hello big  world"`.
#[must_use]
pub fn inner_text(node: &NodeRef) -> String {
    if let Some(text) = text_payload(node) {
        return text;
    }

    struct Frame<'a> {
        children: std::vec::IntoIter<NodeRef<'a>>,
        out: String,
    }

    let mut stack = vec![Frame {
        children: node.children().into_iter(),
        out: String::new(),
    }];

    loop {
        let Some(frame) = stack.last_mut() else {
            return String::new();
        };

        match frame.children.next() {
            Some(child) if child.is_text() => frame.out.push_str(&child.text()),
            Some(child) if child.is_element() => stack.push(Frame {
                children: child.children().into_iter(),
                out: String::new(),
            }),
            Some(_) => {}
            None => {
                let finished = stack.pop().map(|f| f.out).unwrap_or_default();
                let trimmed = finished.trim();
                match stack.last_mut() {
                    Some(parent) => {
                        parent.out.push_str(trimmed);
                        parent.out.push(' ');
                    }
                    None => return trimmed.to_string(),
                }
            }
        }
    }
}

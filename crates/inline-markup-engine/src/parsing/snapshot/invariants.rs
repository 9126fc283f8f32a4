use crate::parsing::inline::{Node, is_boundary_whitespace};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Text nodes are non-empty
/// - Bold, italic, strikethrough and code spans have at least one child,
///   and every child is text
/// - Bold, italic and strikethrough spans neither start nor end with
///   whitespace
/// - Link text and url lists are non-empty and text-only
/// - When `normalized` is set, no list at any depth has two adjacent text
///   nodes
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(nodes: &[Node], normalized: bool) {
    if normalized {
        for pair in nodes.windows(2) {
            assert!(
                !(pair[0].is_text() && pair[1].is_text()),
                "adjacent text nodes after normalization: {} {}",
                pair[0],
                pair[1]
            );
        }
    }

    for node in nodes {
        match node {
            Node::Text { content } => {
                assert!(!content.is_empty(), "empty text node");
            }
            Node::Bold { children }
            | Node::Italic { children }
            | Node::Strikethrough { children } => {
                check_text_only(node, children, normalized);
                check_boundaries(node, children);
            }
            Node::Code { children } => {
                check_text_only(node, children, normalized);
            }
            Node::Link { text, url } => {
                check_text_only(node, text, normalized);
                check_text_only(node, url, normalized);
            }
        }
    }
}

fn check_text_only(parent: &Node, children: &[Node], normalized: bool) {
    assert!(!children.is_empty(), "empty child list in {parent}");
    assert!(
        children.iter().all(Node::is_text),
        "non-text child in {parent}"
    );
    check(children, normalized);
}

fn check_boundaries(parent: &Node, children: &[Node]) {
    let first = children
        .first()
        .and_then(Node::as_text)
        .and_then(|s| s.chars().next());
    let last = children
        .last()
        .and_then(Node::as_text)
        .and_then(|s| s.chars().next_back());

    for c in [first, last].into_iter().flatten() {
        assert!(
            !is_boundary_whitespace(c),
            "whitespace boundary character {c:?} in {parent}"
        );
    }
}

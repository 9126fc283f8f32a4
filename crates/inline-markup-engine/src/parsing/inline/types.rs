use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in the parsed inline tree.
///
/// Styled containers hold only [`Node::Text`] children; styles do not nest.
/// Serializes with a `type` tag and stable field names so trees can be
/// compared structurally or dumped as fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Literal text. Before normalization, one node per character.
    Text { content: String },
    /// `**...**` or `__...__`
    Bold { children: Vec<Node> },
    /// `*...*` or `_..._`
    Italic { children: Vec<Node> },
    /// `~...~`
    Strikethrough { children: Vec<Node> },
    /// `` `...` ``
    Code { children: Vec<Node> },
    /// `[text](url)`
    Link { text: Vec<Node>, url: Vec<Node> },
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text {
            content: content.into(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    /// Returns the text content for [`Node::Text`], `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Returns the child list of a single-list container.
    ///
    /// `None` for text and for links, which carry two lists.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Bold { children }
            | Node::Italic { children }
            | Node::Strikethrough { children }
            | Node::Code { children } => Some(children),
            Node::Text { .. } | Node::Link { .. } => None,
        }
    }
}

/// Builds text nodes from `s`.
///
/// With `merged` false this yields one node per character, the shape the
/// matchers produce. With `merged` true it yields a single node, the shape
/// after normalization. An empty string yields no nodes either way.
pub fn text_nodes(s: &str, merged: bool) -> Vec<Node> {
    if s.is_empty() {
        return vec![];
    }
    if merged {
        return vec![Node::text(s)];
    }
    s.chars().map(|c| Node::text(c.to_string())).collect()
}

/// An accepted match: the nodes produced and the cursor just past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub nodes: Vec<Node>,
    pub end: usize,
}

impl Match {
    pub fn new(nodes: Vec<Node>, end: usize) -> Self {
        Self { nodes, end }
    }

    /// A match producing exactly one node.
    pub fn single(node: Node, end: usize) -> Self {
        Self {
            nodes: vec![node],
            end,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    f.write_str("[")?;
    for node in nodes {
        write!(f, "{node}, ")?;
    }
    f.write_str("]")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { content } if content == " " => f.write_str("Text(<space>)"),
            Node::Text { content } => write!(f, "Text({content})"),
            Node::Bold { children } => {
                f.write_str("Bold(")?;
                write_list(f, children)?;
                f.write_str(")")
            }
            Node::Italic { children } => {
                f.write_str("Italic(")?;
                write_list(f, children)?;
                f.write_str(")")
            }
            Node::Strikethrough { children } => {
                f.write_str("Strikethrough(")?;
                write_list(f, children)?;
                f.write_str(")")
            }
            Node::Code { children } => {
                f.write_str("Code(")?;
                write_list(f, children)?;
                f.write_str(")")
            }
            Node::Link { text, url } => {
                f.write_str("Link(text=")?;
                write_list(f, text)?;
                f.write_str(", url=")?;
                write_list(f, url)?;
                f.write_str(")")
            }
        }
    }
}

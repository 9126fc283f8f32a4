use std::fmt;

use crate::parsing::inline::Node;

/// Renders nodes as an indented tree, one node per line.
///
/// Text content is debug-quoted so whitespace is visible:
///
/// ```text
/// Text "foo "
/// Bold
///   Text "bar"
/// Link
///   text:
///     Text "a"
///   url:
///     Text "b"
/// ```
pub fn render_tree(nodes: &[Node]) -> String {
    Tree { nodes, indent: 0 }.to_string()
}

struct Tree<'a> {
    nodes: &'a [Node],
    indent: usize,
}

impl Tree<'_> {
    fn nested(nodes: &[Node], indent: usize) -> Tree<'_> {
        Tree { nodes, indent }
    }
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = "  ".repeat(self.indent);
        for node in self.nodes {
            let (label, children) = match node {
                Node::Text { content } => {
                    writeln!(f, "{prefix}Text {content:?}")?;
                    continue;
                }
                Node::Link { text, url } => {
                    writeln!(f, "{prefix}Link")?;
                    writeln!(f, "{prefix}  text:")?;
                    write!(f, "{}", Tree::nested(text, self.indent + 2))?;
                    writeln!(f, "{prefix}  url:")?;
                    write!(f, "{}", Tree::nested(url, self.indent + 2))?;
                    continue;
                }
                Node::Bold { children } => ("Bold", children),
                Node::Italic { children } => ("Italic", children),
                Node::Strikethrough { children } => ("Strikethrough", children),
                Node::Code { children } => ("Code", children),
            };
            writeln!(f, "{prefix}{label}")?;
            write!(f, "{}", Tree::nested(children, self.indent + 1))?;
        }
        Ok(())
    }
}

use super::inline::Node;

/// Merges runs of adjacent [`Node::Text`] into single text nodes, at every
/// depth.
///
/// Structural nodes keep their position and kind; only their child lists
/// (both lists for a link) are normalized. Idempotent.
pub fn normalize(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut run = String::new();

    for node in nodes {
        let node = match node {
            Node::Text { content } => {
                run.push_str(&content);
                continue;
            }
            Node::Bold { children } => Node::Bold {
                children: normalize(children),
            },
            Node::Italic { children } => Node::Italic {
                children: normalize(children),
            },
            Node::Strikethrough { children } => Node::Strikethrough {
                children: normalize(children),
            },
            Node::Code { children } => Node::Code {
                children: normalize(children),
            },
            Node::Link { text, url } => Node::Link {
                text: normalize(text),
                url: normalize(url),
            },
        };

        flush(&mut out, &mut run);
        out.push(node);
    }

    flush(&mut out, &mut run);
    out
}

fn flush(out: &mut Vec<Node>, run: &mut String) {
    if !run.is_empty() {
        out.push(Node::text(std::mem::take(run)));
    }
}

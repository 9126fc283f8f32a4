use inline_markup_syntax::Token;

use super::{cursor::Cursor, dispatch::match_segment, types::Match};

/// Matches a whole token sequence as one or more segments ending at `End`.
///
/// Applies [`match_segment`] repeatedly from `i`, concatenating the nodes.
/// At least one segment is required, so a sequence that is only `End`
/// rejects. The returned `end` is one past the `End` token.
pub fn match_markdown(i: usize, tokens: &[Token]) -> Option<Match> {
    let first = match_segment(i, tokens)?;
    let mut nodes = first.nodes;
    let mut cur = Cursor::new(tokens, first.end);

    while let Some(segment) = match_segment(cur.pos(), tokens) {
        nodes.extend(segment.nodes);
        cur.i = segment.end;
    }

    if !cur.at_end() {
        return None;
    }
    Some(Match::new(nodes, cur.pos() + 1))
}

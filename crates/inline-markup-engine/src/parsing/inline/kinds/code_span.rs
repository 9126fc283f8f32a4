use inline_markup_syntax::Token;

use crate::parsing::inline::{
    cursor::Cursor,
    primitive::match_char,
    types::{Match, Node},
};

/// Code span inline type with owned delimiter constant.
///
/// Unlike styled spans there is no boundary rule: `` ` foo ` `` is a valid
/// code span. The content must still be non-empty.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick token that delimits code spans.
    pub const TICK: Token = Token::Tick;

    /// Attempts to match a code span starting at `i`.
    ///
    /// Returns `None` if not at a backtick, if nothing literal follows it, or
    /// if the literal run is not closed by another backtick.
    pub fn match_at(i: usize, tokens: &[Token]) -> Option<Match> {
        let mut cur = Cursor::new(tokens, i);
        if !cur.is(Self::TICK) {
            return None;
        }
        cur.bump(); // `

        let mut children = vec![];
        while let Some(ch) = match_char(cur.pos(), tokens) {
            children.extend(ch.nodes);
            cur.bump();
        }

        if children.is_empty() || !cur.is(Self::TICK) {
            return None;
        }
        cur.bump(); // closing `

        Some(Match::single(Node::Code { children }, cur.pos()))
    }
}

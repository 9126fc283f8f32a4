use inline_markup_syntax::Token;

use crate::parsing::inline::{
    cursor::Cursor,
    primitive::match_char,
    types::{Match, Node},
};

/// Markdown-style link `[text](url)`.
///
/// Both parts are literal-only and must be non-empty.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: Token = Token::LBracket;
    pub const TEXT_CLOSE: Token = Token::RBracket;
    pub const URL_OPEN: Token = Token::LParen;
    pub const URL_CLOSE: Token = Token::RParen;

    /// Attempts to match a link starting at `i`.
    ///
    /// Any delimiter missing from its expected position rejects the whole
    /// link; no partial node is produced.
    pub fn match_at(i: usize, tokens: &[Token]) -> Option<Match> {
        let mut cur = Cursor::new(tokens, i);

        let text = Self::delimited(&mut cur, Self::TEXT_OPEN, Self::TEXT_CLOSE)?;
        let url = Self::delimited(&mut cur, Self::URL_OPEN, Self::URL_CLOSE)?;

        Some(Match::single(Node::Link { text, url }, cur.pos()))
    }

    /// Matches `open`, a non-empty literal run, then `close`.
    fn delimited(cur: &mut Cursor<'_>, open: Token, close: Token) -> Option<Vec<Node>> {
        if !cur.is(open) {
            return None;
        }
        cur.bump();

        let mut nodes = vec![];
        while let Some(ch) = match_char(cur.pos(), cur.tokens) {
            nodes.extend(ch.nodes);
            cur.i = ch.end;
        }

        if nodes.is_empty() || !cur.is(close) {
            return None;
        }
        cur.bump();
        Some(nodes)
    }
}

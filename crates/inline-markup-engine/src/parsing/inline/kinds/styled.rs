use inline_markup_syntax::Token;

use crate::parsing::inline::{
    cursor::Cursor,
    primitive::{match_boundary_char, match_char},
    types::{Match, Node},
};

/// Which container node a styled span produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Bold,
    Italic,
    Strikethrough,
}

impl SpanKind {
    fn wrap(self, children: Vec<Node>) -> Node {
        match self {
            SpanKind::Bold => Node::Bold { children },
            SpanKind::Italic => Node::Italic { children },
            SpanKind::Strikethrough => Node::Strikethrough { children },
        }
    }
}

/// A delimited span whose first and last inner characters must not be
/// whitespace.
///
/// The only valid configurations are the associated constants; tilde is
/// never doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    marker: Token,
    arity: usize,
    kind: SpanKind,
}

impl StyledSpan {
    pub const BOLD_ASTERISK: Self = Self::new(Token::Asterisk, 2, SpanKind::Bold);
    pub const BOLD_UNDERLINE: Self = Self::new(Token::Underline, 2, SpanKind::Bold);
    pub const ITALIC_ASTERISK: Self = Self::new(Token::Asterisk, 1, SpanKind::Italic);
    pub const ITALIC_UNDERLINE: Self = Self::new(Token::Underline, 1, SpanKind::Italic);
    pub const STRIKETHROUGH: Self = Self::new(Token::Tilde, 1, SpanKind::Strikethrough);

    const fn new(marker: Token, arity: usize, kind: SpanKind) -> Self {
        Self {
            marker,
            arity,
            kind,
        }
    }

    pub fn marker(&self) -> Token {
        self.marker
    }

    /// Number of marker tokens on each side.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// Attempts to match this span starting at `i`.
    ///
    /// The character right after the opening markers and the character right
    /// before the closing markers must both pass [`match_boundary_char`].
    /// Everything in between must be a literal [`Token::Char`]; a stray marker
    /// or `End` before a valid close rejects the whole span.
    ///
    /// The close is decided by position: a boundary character immediately
    /// followed by `arity` markers ends the span there, and any further
    /// markers are left for the caller.
    pub fn match_at(&self, i: usize, tokens: &[Token]) -> Option<Match> {
        let mut cur = Cursor::new(tokens, i);

        // Leading markers, all but the last one
        if !cur.run_of(0, self.marker, self.arity - 1) {
            return None;
        }
        cur.bump_n(self.arity - 1);

        // Last opening marker, then the opening boundary char
        if !cur.is(self.marker) {
            return None;
        }
        let first = match_boundary_char(cur.pos() + 1, tokens)?;
        let mut children = first.nodes;
        cur.bump_n(2);

        // Single-character span: `*f*`
        if cur.run_of(0, self.marker, self.arity) {
            return Some(self.accept(children, cur.pos() + self.arity));
        }

        loop {
            let pos = cur.pos();
            if let Some(last) = match_boundary_char(pos, tokens)
                && cur.run_of(1, self.marker, self.arity)
            {
                children.extend(last.nodes);
                return Some(self.accept(children, pos + 1 + self.arity));
            }

            let ch = match_char(pos, tokens)?;
            children.extend(ch.nodes);
            cur.bump();
        }
    }

    fn accept(&self, children: Vec<Node>, end: usize) -> Match {
        Match::single(self.kind.wrap(children), end)
    }
}

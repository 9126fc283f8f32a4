//! The public token type produced by [`tokenize`](crate::tokenize).

use std::fmt;

/// A single lexical unit of inline markup.
///
/// Structural markers carry no payload; every other character, whitespace
/// included, arrives as [`Token::Char`]. A token sequence always ends with
/// exactly one [`Token::End`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `*` - bold or italic delimiter
    Asterisk,
    /// `_` - bold or italic delimiter
    Underline,
    /// `~` - strikethrough delimiter
    Tilde,
    /// `` ` `` - code span delimiter
    Tick,
    /// `[` - opens link text
    LBracket,
    /// `]` - closes link text
    RBracket,
    /// `(` - opens link url
    LParen,
    /// `)` - closes link url
    RParen,
    /// Any literal character, including escaped markers.
    Char(char),
    /// End of input.
    End,
}

impl Token {
    /// The printable character this token was lexed from.
    ///
    /// Returns `None` only for [`Token::End`]. Escaped characters come back as
    /// themselves, without the backslash.
    pub fn literal(self) -> Option<char> {
        match self {
            Token::Asterisk => Some('*'),
            Token::Underline => Some('_'),
            Token::Tilde => Some('~'),
            Token::Tick => Some('`'),
            Token::LBracket => Some('['),
            Token::RBracket => Some(']'),
            Token::LParen => Some('('),
            Token::RParen => Some(')'),
            Token::Char(c) => Some(c),
            Token::End => None,
        }
    }

    pub fn is_char(self) -> bool {
        matches!(self, Token::Char(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Asterisk => f.write_str("Asterisk"),
            Token::Underline => f.write_str("Underline"),
            Token::Tilde => f.write_str("Tilde"),
            Token::Tick => f.write_str("Tick"),
            Token::LBracket => f.write_str("LBracket"),
            Token::RBracket => f.write_str("RBracket"),
            Token::LParen => f.write_str("LParen"),
            Token::RParen => f.write_str("RParen"),
            Token::Char(' ') => f.write_str("Char(<space>)"),
            Token::Char(c) => write!(f, "Char({c})"),
            Token::End => f.write_str("End"),
        }
    }
}

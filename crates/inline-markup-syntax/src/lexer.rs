//! # Lexer - Tokenizing Inline Markup
//!
//! A single left-to-right pass built on [Logos]. There is no backtracking
//! here; deciding whether a `*` opens a span is the matchers' job.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Escapes
//!
//! A backslash makes the character after it literal, so `\*` lexes as
//! `Char('*')` rather than [`Token::Asterisk`]. A lone backslash at the very
//! end of the input is kept as a literal `\`.
//!
//! ```
//! use inline_markup_syntax::{Token, tokenize};
//!
//! assert_eq!(
//!     tokenize(r"a\*"),
//!     vec![Token::Char('a'), Token::Char('*'), Token::End],
//! );
//! ```

use logos::Logos;

use crate::token::Token;

/// Raw token kinds recognised by Logos.
///
/// Kept private: Logos needs its own derive target, and the escape variants
/// collapse into [`Token::Char`] before anything outside this module sees them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[token("*")]
    Asterisk,

    #[token("_")]
    Underline,

    #[token("~")]
    Tilde,

    #[token("`")]
    Tick,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// Backslash followed by any character, newline included.
    #[regex(r"\\(.|\n)")]
    Escaped,

    /// Backslash with nothing after it.
    #[token("\\")]
    Backslash,

    /// Any single character that has no structural meaning.
    #[regex(r"[^*_~`\[\]()\\]")]
    Char,
}

impl RawToken {
    /// Convert to the public token, given the slice Logos matched.
    fn to_token(self, slice: &str) -> Token {
        match self {
            RawToken::Asterisk => Token::Asterisk,
            RawToken::Underline => Token::Underline,
            RawToken::Tilde => Token::Tilde,
            RawToken::Tick => Token::Tick,
            RawToken::LBracket => Token::LBracket,
            RawToken::RBracket => Token::RBracket,
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
            RawToken::Escaped => Token::Char(slice.chars().nth(1).unwrap_or('\\')),
            RawToken::Backslash => Token::Char('\\'),
            RawToken::Char => Token::Char(slice.chars().next().unwrap_or('\\')),
        }
    }
}

/// Tokenize `input` into a flat token sequence terminated by [`Token::End`].
///
/// Never fails. The empty string yields `[End]`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(input.len() + 1);
    let mut lexer = RawToken::lexer(input);

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(raw) => tokens.push(raw.to_token(slice)),
            // Unrecognised input is literal text, one char at a time
            Err(()) => tokens.extend(slice.chars().map(Token::Char)),
        }
    }

    tokens.push(Token::End);
    tokens
}

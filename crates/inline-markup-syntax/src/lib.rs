//! # inline-markup-syntax
//!
//! Tokenizer for a small inline markup language: `*italic*`, `**bold**`,
//! `_italic_`, `__bold__`, `~strikethrough~`, `` `code` `` and
//! `[text](url)`.
//!
//! The tokenizer produces a flat `Vec<Token>` that the matchers in
//! `inline-markup-engine` walk by index. Tokens are never mutated after
//! lexing.
//!
//! ```
//! use inline_markup_syntax::{Token, tokenize};
//!
//! let tokens = tokenize("*a*");
//! assert_eq!(tokens, vec![Token::Asterisk, Token::Char('a'), Token::Asterisk, Token::End]);
//! ```

pub mod lexer;
pub mod token;

pub use lexer::tokenize;
pub use token::Token;

//! Ordered dispatch over the inline kinds.
//!
//! Every matcher here has the same shape, [`Matcher`], so alternatives are
//! plain ordered slices tried with [`first_match`]. Order is significant:
//! bold must be tried before italic because `**` also starts an italic
//! attempt.

use inline_markup_syntax::Token;
use log::trace;

use super::{
    kinds::{CodeSpan, Link, StyledSpan},
    primitive::match_any,
    types::Match,
};

/// A matcher tries to accept a construct at a token index.
pub type Matcher = fn(usize, &[Token]) -> Option<Match>;

/// Returns the first acceptance among `matchers`, tried in order.
pub fn first_match(matchers: &[Matcher], i: usize, tokens: &[Token]) -> Option<Match> {
    matchers.iter().find_map(|m| m(i, tokens))
}

pub fn match_bold_asterisk(i: usize, tokens: &[Token]) -> Option<Match> {
    StyledSpan::BOLD_ASTERISK.match_at(i, tokens)
}

pub fn match_bold_underline(i: usize, tokens: &[Token]) -> Option<Match> {
    StyledSpan::BOLD_UNDERLINE.match_at(i, tokens)
}

pub fn match_italic_asterisk(i: usize, tokens: &[Token]) -> Option<Match> {
    StyledSpan::ITALIC_ASTERISK.match_at(i, tokens)
}

pub fn match_italic_underline(i: usize, tokens: &[Token]) -> Option<Match> {
    StyledSpan::ITALIC_UNDERLINE.match_at(i, tokens)
}

pub fn match_strikethrough(i: usize, tokens: &[Token]) -> Option<Match> {
    StyledSpan::STRIKETHROUGH.match_at(i, tokens)
}

pub fn match_bold(i: usize, tokens: &[Token]) -> Option<Match> {
    first_match(&[match_bold_asterisk, match_bold_underline], i, tokens)
}

pub fn match_italic(i: usize, tokens: &[Token]) -> Option<Match> {
    first_match(&[match_italic_asterisk, match_italic_underline], i, tokens)
}

pub fn match_code(i: usize, tokens: &[Token]) -> Option<Match> {
    CodeSpan::match_at(i, tokens)
}

pub fn match_link(i: usize, tokens: &[Token]) -> Option<Match> {
    Link::match_at(i, tokens)
}

/// Style precedence: bold, italic, strikethrough, code, link.
const STYLES: [Matcher; 5] = [
    match_bold,
    match_italic,
    match_strikethrough,
    match_code,
    match_link,
];

/// Tries every style at `i` in precedence order.
pub fn match_style(i: usize, tokens: &[Token]) -> Option<Match> {
    first_match(&STYLES, i, tokens)
}

/// A style, or failing that the single token at `i` as literal text.
///
/// Rejects only when `i` is at `End`.
pub fn match_segment(i: usize, tokens: &[Token]) -> Option<Match> {
    if let Some(style) = match_style(i, tokens) {
        return Some(style);
    }

    let fallback = match_any(i, tokens)?;
    if let Some(token) = tokens.get(i)
        && !token.is_char()
    {
        trace!("no style matched at {i}; {token} kept as literal text");
    }
    Some(fallback)
}

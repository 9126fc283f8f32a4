//! Single-token matchers that every other matcher is built from.

use inline_markup_syntax::Token;

use super::{
    cursor::Cursor,
    types::{Match, Node},
};

/// Accepts a literal [`Token::Char`] at `i`.
pub fn match_char(i: usize, tokens: &[Token]) -> Option<Match> {
    match Cursor::new(tokens, i).peek() {
        Token::Char(c) => Some(Match::single(Node::text(c.to_string()), i + 1)),
        _ => None,
    }
}

/// Whitespace as far as styled-span boundaries are concerned.
///
/// This is the ECMAScript `\s` class: Unicode White_Space plus U+FEFF, minus
/// U+0085.
pub fn is_boundary_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Accepts a non-whitespace literal character at `i`.
///
/// Styled spans use this to check the first and last character inside their
/// delimiters. Markers, whitespace (see [`is_boundary_whitespace`]) and `End`
/// all reject.
pub fn match_boundary_char(i: usize, tokens: &[Token]) -> Option<Match> {
    match Cursor::new(tokens, i).peek() {
        Token::Char(c) if !is_boundary_whitespace(c) => {
            Some(Match::single(Node::text(c.to_string()), i + 1))
        }
        _ => None,
    }
}

/// Accepts any token except `End`, as literal text.
///
/// Markers come back as the character they were lexed from. This is the
/// fallback that lets the driver make progress on every position.
pub fn match_any(i: usize, tokens: &[Token]) -> Option<Match> {
    let c = Cursor::new(tokens, i).peek().literal()?;
    Some(Match::single(Node::text(c.to_string()), i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inline_markup_syntax::tokenize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("d", "d")]
    #[case(" ", " ")]
    #[case(r"\*", "*")]
    fn char_accepts(#[case] input: &str, #[case] expected: &str) {
        let m = match_char(0, &tokenize(input)).expect("char should match");
        assert_eq!(m, Match::single(Node::text(expected), 1));
    }

    #[rstest]
    #[case("*")]
    #[case("_")]
    #[case("~")]
    #[case("`")]
    #[case("")]
    fn char_rejects(#[case] input: &str) {
        assert_eq!(match_char(0, &tokenize(input)), None);
    }

    #[rstest]
    #[case("d", "d")]
    #[case(r"\*", "*")]
    #[case("\u{85}", "\u{85}")]
    fn boundary_char_accepts(#[case] input: &str, #[case] expected: &str) {
        let m = match_boundary_char(0, &tokenize(input)).expect("boundary should match");
        assert_eq!(m.nodes, vec![Node::text(expected)]);
        assert_eq!(m.end, 1);
    }

    #[rstest]
    #[case(" ")]
    #[case(r"\ ")]
    #[case("\t")]
    #[case("\u{a0}")]
    #[case("\u{feff}")]
    #[case("*")]
    #[case("")]
    fn boundary_char_rejects(#[case] input: &str) {
        assert_eq!(match_boundary_char(0, &tokenize(input)), None);
    }

    #[rstest]
    #[case(' ', true)]
    #[case('\n', true)]
    #[case('\u{2028}', true)]
    #[case('\u{feff}', true)]
    #[case('\u{85}', false)]
    #[case('a', false)]
    fn boundary_whitespace_class(#[case] c: char, #[case] expected: bool) {
        assert_eq!(is_boundary_whitespace(c), expected);
    }

    #[test]
    fn boundary_char_out_of_range_rejects() {
        let tokens = tokenize("a");
        assert_eq!(match_boundary_char(7, &tokens), None);
    }

    #[rstest]
    #[case("*", "*")]
    #[case("_", "_")]
    #[case("~", "~")]
    #[case("`", "`")]
    #[case("[", "[")]
    #[case("]", "]")]
    #[case("(", "(")]
    #[case(")", ")")]
    #[case("x", "x")]
    fn any_maps_tokens_to_literal(#[case] input: &str, #[case] expected: &str) {
        let m = match_any(0, &tokenize(input)).expect("any should match");
        assert_eq!(m, Match::single(Node::text(expected), 1));
    }

    #[test]
    fn any_rejects_end() {
        assert_eq!(match_any(0, &tokenize("")), None);
    }
}

//! Tests for the public parsing entry points.

mod properties;

use pretty_assertions::assert_eq;

use crate::{
    error::ParseError,
    parsing::{
        ParseOptions,
        inline::{Node, text_nodes},
        normalize, parse, parse_with,
        snapshot::invariants,
    },
};

#[test]
fn bold_before_and_after_normalization() {
    let raw = parse("**foo**").unwrap();
    assert_eq!(
        raw,
        vec![Node::Bold {
            children: vec![Node::text("f"), Node::text("o"), Node::text("o")]
        }]
    );
    assert_eq!(
        normalize(raw),
        vec![Node::Bold {
            children: vec![Node::text("foo")]
        }]
    );
}

#[test]
fn italic_then_trailing_text() {
    let nodes = normalize(parse("*foo bar* foo bar ").unwrap());
    assert_eq!(
        nodes,
        vec![
            Node::Italic {
                children: vec![Node::text("foo bar")]
            },
            Node::text(" foo bar "),
        ]
    );
}

#[test]
fn link() {
    assert_eq!(
        normalize(parse("[foo](bar)").unwrap()),
        vec![Node::Link {
            text: vec![Node::text("foo")],
            url: vec![Node::text("bar")],
        }]
    );
}

#[test]
fn double_tilde() {
    assert_eq!(
        normalize(parse("~~a~~").unwrap()),
        vec![
            Node::text("~"),
            Node::Strikethrough {
                children: vec![Node::text("a")]
            },
            Node::text("~"),
        ]
    );
}

#[test]
fn empty_input_fails() {
    assert_eq!(parse(""), Err(ParseError::EmptyInput));
}

#[test]
fn escape_passthrough() {
    assert_eq!(parse(r"\*").unwrap(), vec![Node::text("*")]);
}

#[test]
fn empty_delimiters_are_literal() {
    for input in ["****", "____", "``"] {
        assert_eq!(
            normalize(parse(input).unwrap()),
            vec![Node::text(input)],
            "input {input:?}"
        );
    }
}

#[test]
fn whitespace_boundary_is_literal() {
    assert_eq!(
        normalize(parse("** foo**").unwrap()),
        vec![Node::text("** foo**")]
    );
}

#[test]
fn byte_order_mark_is_a_whitespace_boundary() {
    assert_eq!(
        normalize(parse("*\u{feff}a*").unwrap()),
        vec![Node::text("*\u{feff}a*")]
    );
}

#[test]
fn next_line_is_not_a_whitespace_boundary() {
    let nodes = normalize(parse("*a\u{85}*").unwrap());
    invariants(&nodes, true);
    assert_eq!(
        nodes,
        vec![Node::Italic {
            children: vec![Node::text("a\u{85}")]
        }]
    );
}

#[test]
fn parse_with_defaults_normalizes() {
    let nodes = parse_with("a *b*", &ParseOptions::default()).unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::text("a "),
            Node::Italic {
                children: vec![Node::text("b")]
            },
        ]
    );
}

#[test]
fn parse_with_raw_matches_parse() {
    let input = "x `y` [z](w)";
    assert_eq!(
        parse_with(input, &ParseOptions::raw()).unwrap(),
        parse(input).unwrap()
    );
}

#[test]
fn parse_with_markdown_disabled_returns_plain_text() {
    let options = ParseOptions {
        markdown: false,
        normalize: true,
    };
    assert_eq!(
        parse_with("**a** `b`", &options).unwrap(),
        vec![Node::text("**a** `b`")]
    );

    let options = ParseOptions {
        markdown: false,
        normalize: false,
    };
    assert_eq!(
        parse_with("*a*", &options).unwrap(),
        text_nodes("*a*", false)
    );
}

#[test]
fn parse_with_empty_input_fails_regardless_of_options() {
    let options = ParseOptions {
        markdown: false,
        normalize: true,
    };
    assert_eq!(parse_with("", &options), Err(ParseError::EmptyInput));
    assert_eq!(
        parse_with("", &ParseOptions::default()),
        Err(ParseError::EmptyInput)
    );
}

#[test]
fn error_messages() {
    assert_eq!(ParseError::EmptyInput.to_string(), "Cannot parse empty input");
}

//! Exhaustive checks over every short string built from a small alphabet
//! that covers each token kind, whitespace and the escape character.

use crate::parsing::{
    inline::Node,
    normalize, parse,
    snapshot::invariants,
};

const ALPHABET: [char; 11] = ['*', '_', '~', '`', '[', ']', '(', ')', 'a', ' ', '\\'];
const MAX_LEN: u32 = 4;

fn all_inputs() -> impl Iterator<Item = String> {
    (1..=MAX_LEN).flat_map(|len| {
        let base = ALPHABET.len();
        (0..base.pow(len)).map(move |mut n| {
            let mut s = String::new();
            for _ in 0..len {
                s.push(ALPHABET[n % base]);
                n /= base;
            }
            s
        })
    })
}

/// Concatenates every character the tree carries, in order.
fn flatten(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text { content } => out.push_str(content),
            Node::Bold { children }
            | Node::Italic { children }
            | Node::Strikethrough { children }
            | Node::Code { children } => flatten(children, out),
            Node::Link { text, url } => {
                flatten(text, out);
                flatten(url, out);
            }
        }
    }
}

#[test]
fn every_non_empty_input_parses() {
    for input in all_inputs() {
        assert!(parse(&input).is_ok(), "parse rejected {input:?}");
    }
}

#[test]
fn raw_output_satisfies_invariants() {
    for input in all_inputs() {
        let nodes = parse(&input).unwrap();
        invariants(&nodes, false);
    }
}

#[test]
fn normalized_output_has_no_adjacent_text() {
    for input in all_inputs() {
        let nodes = normalize(parse(&input).unwrap());
        invariants(&nodes, true);
    }
}

#[test]
fn normalize_is_idempotent() {
    for input in all_inputs() {
        let once = normalize(parse(&input).unwrap());
        let twice = normalize(once.clone());
        assert_eq!(once, twice, "input {input:?}");
    }
}

#[test]
fn normalize_preserves_characters() {
    for input in all_inputs() {
        let raw = parse(&input).unwrap();
        let mut before = String::new();
        flatten(&raw, &mut before);

        let mut after = String::new();
        flatten(&normalize(raw), &mut after);

        assert_eq!(before, after, "input {input:?}");
    }
}

#[test]
fn unstyled_input_round_trips_as_text() {
    // Without a backslash and without any span, every character survives
    for input in all_inputs().filter(|s| !s.contains('\\')) {
        let nodes = normalize(parse(&input).unwrap());
        if nodes.iter().all(Node::is_text) {
            assert_eq!(nodes, vec![Node::text(input.clone())], "input {input:?}");
        }
    }
}

//! # inline-markup-engine
//!
//! Turns a line of inline markup into a tree of typed [`Node`]s.
//!
//! ```text
//! input → tokenize → match_markdown → nodes → normalize
//!         (syntax)   (segment loop)           (merge text runs)
//! ```
//!
//! ```
//! use inline_markup_engine::{Node, normalize, parse};
//!
//! let nodes = normalize(parse("**foo** bar").unwrap());
//! assert_eq!(
//!     nodes,
//!     vec![
//!         Node::Bold { children: vec![Node::text("foo")] },
//!         Node::text(" bar"),
//!     ]
//! );
//! ```

pub mod error;
pub mod parsing;

pub use error::ParseError;
pub use inline_markup_syntax::{Token, tokenize};
pub use parsing::{
    ParseOptions,
    inline::{Match, Node, text_nodes},
    normalize, parse, parse_with,
};

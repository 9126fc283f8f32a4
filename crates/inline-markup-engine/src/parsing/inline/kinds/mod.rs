//! # Inline Kinds
//!
//! One type per construct, each owning its delimiter tokens and its matcher.
//!
//! ## Types
//!
//! - **`StyledSpan`**: bold, italic and strikethrough, parameterised by marker
//!   token and arity; only the five valid configurations exist as constants
//! - **`CodeSpan`**: `TICK`, no boundary rule inside
//! - **`Link`**: `[`, `]`, `(`, `)`; literal text and url runs
//!
//! ## Design Principle
//!
//! Delimiter tokens live here, not in the dispatchers. The dispatchers only
//! decide the order in which kinds are tried.

pub mod code_span;
pub mod link;
pub mod styled;

pub use code_span::CodeSpan;
pub use link::Link;
pub use styled::{SpanKind, StyledSpan};

//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: Renders a node tree as stable indented text for `insta`
//!   snapshots
//! - **`invariants`**: Runtime checks for parser correctness (no empty spans,
//!   no whitespace boundaries, no adjacent text after normalization)

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::render_tree;

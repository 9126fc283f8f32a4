//! # Inline Matching
//!
//! Backtracking matchers over a tokenized input.
//!
//! ## Architecture
//!
//! Every matcher takes the token slice plus a start index and returns either
//! `Some(Match)` (nodes plus the index just past them) or `None`. Rejection is
//! always local: the caller tries the next alternative, and the segment
//! dispatcher ends with a literal fallback that accepts any token except
//! `End`. The token slice is never mutated.
//!
//! ## Modules
//!
//! - **`types`**: `Node` enum (Text, Bold, Italic, Strikethrough, Code, Link) and `Match`
//! - **`cursor`**: `Cursor` for index-based lookahead over tokens
//! - **`primitive`**: `match_char`, `match_boundary_char`, `match_any`
//! - **`kinds`**: `StyledSpan`, `CodeSpan`, `Link` with their delimiters
//! - **`dispatch`**: named matchers, style and segment dispatch
//! - **`parser`**: `match_markdown()`, the top-level driver
//!
//! ## Precedence
//!
//! Bold, italic, strikethrough, code, link; first acceptance wins. Styled
//! spans hold literal text only, so `**a *b* c**` is not bold.

pub mod cursor;
pub mod dispatch;
pub mod kinds;
pub mod parser;
pub mod primitive;
pub mod types;

pub use dispatch::{
    Matcher, first_match, match_bold, match_bold_asterisk, match_bold_underline, match_code,
    match_italic, match_italic_asterisk, match_italic_underline, match_link, match_segment,
    match_strikethrough, match_style,
};
pub use parser::match_markdown;
pub use primitive::{is_boundary_whitespace, match_any, match_boundary_char, match_char};
pub use types::{Match, Node, text_nodes};

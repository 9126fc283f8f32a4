use serde::{Deserialize, Serialize};

/// Switches applied by [`parse_with`](super::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Recognise inline markup. When off the input comes back as plain text.
    pub markdown: bool,
    /// Merge adjacent text nodes in the result.
    pub normalize: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            markdown: true,
            normalize: true,
        }
    }
}

impl ParseOptions {
    /// Options that reproduce plain [`parse`](super::parse): markup on, no
    /// normalization.
    pub fn raw() -> Self {
        Self {
            markdown: true,
            normalize: false,
        }
    }
}

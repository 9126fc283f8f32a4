/// Failure of the top-level parse.
///
/// Individual matchers never error; they reject and the caller moves on.
/// Only the driver can fail, and given the literal fallback that happens
/// only for empty input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Cannot parse empty input")]
    EmptyInput,
    #[error("Input was not consumed up to the end marker")]
    Incomplete,
}

pub mod inline;
pub mod normalize;
pub mod options;
pub mod snapshot;

#[cfg(test)]
mod tests;

use inline_markup_syntax::{Token, tokenize};
use log::debug;

use crate::error::ParseError;
use inline::{Node, match_markdown, text_nodes};

pub use normalize::normalize;
pub use options::ParseOptions;

/// Parses `input` into inline nodes, one text node per literal character.
///
/// Succeeds for every non-empty input; anything that does not form a
/// well-formed span comes back as literal text. Pass the result through
/// [`normalize`] to merge the text runs.
pub fn parse(input: &str) -> Result<Vec<Node>, ParseError> {
    let tokens = tokenize(input);
    debug!("parsing {} tokens", tokens.len());

    let matched = match_markdown(0, &tokens).ok_or_else(|| failure(&tokens))?;
    debug!("parsed {} top-level nodes", matched.nodes.len());
    Ok(matched.nodes)
}

/// Parses `input` under `options`.
///
/// Empty input still fails, whether or not markup is enabled.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Vec<Node>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if !options.markdown {
        debug!("markup disabled, returning input as text");
        return Ok(text_nodes(input, options.normalize));
    }

    let nodes = parse(input)?;
    Ok(if options.normalize {
        normalize(nodes)
    } else {
        nodes
    })
}

fn failure(tokens: &[Token]) -> ParseError {
    match tokens.first() {
        None | Some(Token::End) => ParseError::EmptyInput,
        Some(_) => ParseError::Incomplete,
    }
}

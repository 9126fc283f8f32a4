use inline_markup_syntax::Token;

/// A read-only position in a token sequence.
///
/// Matchers never mutate the tokens; they clone a cursor, walk it forward and
/// report the final index. Reads past the end of the slice see
/// [`Token::End`], so lookahead never needs a bounds check.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The tokens being matched.
    pub tokens: &'a [Token],
    /// Current index into `tokens`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at index `i`.
    pub fn new(tokens: &'a [Token], i: usize) -> Self {
        Self { tokens, i }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if the current token is [`Token::End`] (or out of range).
    pub fn at_end(&self) -> bool {
        self.peek() == Token::End
    }

    /// Peeks at the current token without advancing.
    pub fn peek(&self) -> Token {
        self.peek_at(0)
    }

    /// Peeks `offset` tokens ahead of the current position.
    pub fn peek_at(&self, offset: usize) -> Token {
        self.tokens
            .get(self.i + offset)
            .copied()
            .unwrap_or(Token::End)
    }

    /// Checks if the current token equals `token`.
    pub fn is(&self, token: Token) -> bool {
        self.peek() == token
    }

    /// Checks that `n` consecutive copies of `token` start at `offset`.
    pub fn run_of(&self, offset: usize, token: Token, n: usize) -> bool {
        (0..n).all(|k| self.peek_at(offset + k) == token)
    }

    /// Advances by one token, returning the consumed token.
    pub fn bump(&mut self) -> Token {
        let t = self.peek();
        self.i += 1;
        t
    }

    /// Advances by `n` tokens.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}

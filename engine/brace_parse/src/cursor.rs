//! Token cursor for navigating the lexer's output.

use brace_ir::Token;

/// Cursor over a token slice.
///
/// Holds the shared "where are we in the stream" state of the recursive
/// section parser: one cursor is threaded through every nesting level by
/// mutable reference, so consumption is global and strictly forward. No
/// construct requires lookahead or backtracking.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Index of the next token to be consumed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The token the cursor sits on, or `None` past the end.
    #[must_use]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// True once every token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume and return the current token.
    ///
    /// Callers check [`is_at_end`](Self::is_at_end) first; the cursor never
    /// steps past the last token.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        debug_assert!(
            self.pos < self.tokens.len(),
            "advance past end of token stream"
        );
        let token = &self.tokens[self.pos];
        self.pos += 1;
        token
    }
}

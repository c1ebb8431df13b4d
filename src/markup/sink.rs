//! Token sinks
//!
//! A sink is the only thing a render pass writes to. The core needs nothing
//! from it besides appending; turning tokens into bytes, escaping text and
//! indenting are all decisions a sink makes on its own.

use super::token::Token;

/// Accepts tokens in the exact order a render pass emits them.
///
/// Implementations must not reorder, drop or deduplicate tokens.
pub trait TokenSink {
    fn append_token(&mut self, token: Token);
}

impl TokenSink for Vec<Token> {
    fn append_token(&mut self, token: Token) {
        self.push(token);
    }
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    fn append_token(&mut self, token: Token) {
        (**self).append_token(token);
    }
}

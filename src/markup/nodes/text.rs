//! Text node
//!
//! Wraps one string-like value. The value is materialized into a `String`
//! only when rendered, and is handed to the sink verbatim.

use crate::markup::context::RenderContext;
use crate::markup::html::Html;
use crate::markup::sink::TokenSink;
use crate::markup::token::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text<S = String> {
    pub text: S,
}

impl<S: Into<String>> Text<S> {
    pub fn new(text: S) -> Self {
        Text { text }
    }
}

impl<S: Into<String>> Html for Text<S> {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        context.assert_no_attributes::<Self>();
        sink.append_token(Token::Text(self.text.into()));
    }
}

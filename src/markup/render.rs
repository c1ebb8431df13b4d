//! Render entry points
//!
//! The per-kind rules live with the node kinds themselves (see
//! [`super::nodes`]). This module starts a pass: it creates the root context,
//! hands the tree and the sink to the root node, and records the pass in the
//! trace log.
//!
//! A pass is one synchronous, depth-first, left-to-right descent. Nothing is
//! buffered or reordered between children, so the sink receives tokens in
//! document order.

use super::context::RenderContext;
use super::html::Html;
use super::sink::TokenSink;
use super::token::Token;
use std::any::type_name;

/// Counts tokens on their way to another sink
struct Tally<'a> {
    sink: &'a mut dyn TokenSink,
    tokens: usize,
}

impl TokenSink for Tally<'_> {
    fn append_token(&mut self, token: Token) {
        self.tokens += 1;
        self.sink.append_token(token);
    }
}

/// Render `node` into `sink`, starting from an empty context
pub fn render_into<H: Html>(node: H, sink: &mut dyn TokenSink) {
    let node_type = type_name::<H>();
    let _span = tracing::trace_span!("render", node = node_type).entered();

    let mut tally = Tally { sink, tokens: 0 };
    node.render(&mut tally, RenderContext::new());
    tracing::trace!(tokens = tally.tokens, "render finished");
}

/// Render `node` and collect its tokens
pub fn render_to_tokens<H: Html>(node: H) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    render_into(node, &mut tokens);
    tokens
}

//! Content traits - the render capability shared by every node kind
//!
//! [`Html`] is the single capability the renderer relies on: take a node by
//! value, a sink and a context, and emit the node's tokens. Each node kind in
//! [`super::nodes`] implements it exactly once.
//!
//! [`Tagged`] is the optional static identity of a node. Rendering never looks
//! at it; it exists so that call sites can require both arms of a
//! [`Conditional`](super::nodes::Conditional) to be "the same thing".

use super::context::RenderContext;
use super::sink::TokenSink;
use std::convert::Infallible;

/// A renderable content node.
///
/// `render` consumes the node: a tree is rendered once and then dropped.
/// Implementations must not have side effects beyond appending to `sink`.
pub trait Html {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext);
}

/// Static identity shared by interchangeable nodes
pub trait Tagged: Html {
    type Tag;
}

// Uninhabited content: a node of this type can never exist, so there is
// nothing to render.
impl Html for Infallible {
    fn render(self, _sink: &mut dyn TokenSink, _context: RenderContext) {
        match self {}
    }
}

impl Tagged for Infallible {
    type Tag = Infallible;
}

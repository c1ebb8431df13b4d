//! Type-erased nodes
//!
//! [`AnyHtml`] boxes a node of any kind behind one type. That is what lets a
//! list assembled at runtime hold a paragraph next to a text next to nothing
//! at all, as an `Array<AnyHtml>`. Per-slot static types are given up in
//! exchange; use a [`Tuple`](super::Tuple) when the shape is known up front.

use crate::markup::context::RenderContext;
use crate::markup::html::Html;
use crate::markup::sink::TokenSink;
use std::fmt;

/// Object-safe view of [`Html`]
trait ErasedHtml {
    fn render_boxed(self: Box<Self>, sink: &mut dyn TokenSink, context: RenderContext);
}

impl<T: Html> ErasedHtml for T {
    fn render_boxed(self: Box<Self>, sink: &mut dyn TokenSink, context: RenderContext) {
        (*self).render(sink, context);
    }
}

pub struct AnyHtml {
    inner: Box<dyn ErasedHtml>,
    type_name: &'static str,
}

impl AnyHtml {
    pub fn new<T: Html + 'static>(node: T) -> Self {
        AnyHtml {
            inner: Box::new(node),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Type name of the boxed node, for diagnostics
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for AnyHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyHtml").field(&self.type_name).finish()
    }
}

impl Html for AnyHtml {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        self.inner.render_boxed(sink, context);
    }
}

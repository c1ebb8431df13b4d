//! Optional content
//!
//! `Option<T>` is itself a node: absent content renders nothing without even
//! looking at the context, present content renders exactly as the wrapped
//! node would.

use crate::markup::context::RenderContext;
use crate::markup::html::Html;
use crate::markup::sink::TokenSink;

impl<T: Html> Html for Option<T> {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        match self {
            None => {}
            Some(content) => content.render(sink, context),
        }
    }
}

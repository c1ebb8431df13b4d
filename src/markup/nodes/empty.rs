//! Empty node

use crate::markup::context::RenderContext;
use crate::markup::html::Html;
use crate::markup::sink::TokenSink;

/// A node that contributes no tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Empty;

impl Html for Empty {
    fn render(self, _sink: &mut dyn TokenSink, context: RenderContext) {
        context.assert_no_attributes::<Self>();
    }
}

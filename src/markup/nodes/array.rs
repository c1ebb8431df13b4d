//! Array node
//!
//! A dynamic-length sequence of nodes that all share one concrete type.
//! Rendering matches a [`Tuple`](super::Tuple) of the same children: each
//! child in order, each with its own clone of the context.

use crate::markup::context::RenderContext;
use crate::markup::html::Html;
use crate::markup::sink::TokenSink;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    pub items: Vec<T>,
}

impl<T: Html> Array<T> {
    pub fn new(items: Vec<T>) -> Self {
        Array { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array { items: Vec::new() }
    }
}

impl<T: Html> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Array { items }
    }
}

impl<T: Html> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Html> Html for Array<T> {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        context.assert_no_attributes::<Self>();
        for item in self.items {
            item.render(sink, context.clone());
        }
    }
}

// A bare vector is the same node as an array of its items
impl<T: Html> Html for Vec<T> {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        Array::from(self).render(sink, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::nodes::{Text, Tuple};
    use crate::markup::token::{Attribute, Token};

    fn render(node: impl Html) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        node.render(&mut tokens, RenderContext::new());
        tokens
    }

    #[test]
    fn test_empty_array_renders_nothing() {
        let array: Array<Text<&str>> = Array::default();
        assert!(array.is_empty());
        assert!(render(array).is_empty());
    }

    #[test]
    fn test_array_renders_in_sequence_order() {
        let array: Array<_> = ["x", "y", "z"].into_iter().map(Text::new).collect();
        assert_eq!(array.len(), 3);
        assert_eq!(
            render(array),
            vec![Token::text("x"), Token::text("y"), Token::text("z")]
        );
    }

    #[test]
    fn test_array_matches_equivalent_tuple() {
        let array = Array::new(vec![Text::new("a"), Text::new("b")]);
        let tuple = Tuple::new((Text::new("a"), Text::new("b")));
        assert_eq!(render(array), render(tuple));
    }

    #[test]
    fn test_vec_is_an_array() {
        let items = vec![Text::new("1"), Text::new("2")];
        assert_eq!(render(items.clone()), render(Array::from(items)));
    }

    #[test]
    #[should_panic(expected = "trellis::markup::nodes::array::Array")]
    fn test_array_rejects_attributes() {
        let mut tokens: Vec<Token> = Vec::new();
        let context = RenderContext::new().with_attribute(Attribute::new("class", "list"));
        Array::new(vec![Text::new("a")]).render(&mut tokens, context);
    }

    #[test]
    #[should_panic(expected = "cannot carry attributes")]
    fn test_empty_array_still_rejects_attributes() {
        let mut tokens: Vec<Token> = Vec::new();
        let context = RenderContext::new().with_attribute(Attribute::flag("hidden"));
        Array::<Text>::default().render(&mut tokens, context);
    }
}

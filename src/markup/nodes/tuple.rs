//! Tuple node
//!
//! A fixed-length, heterogeneous sequence of nodes. Every slot keeps its own
//! static type; the slots live in a plain Rust tuple and are rendered in
//! declaration order, each with a fresh clone of the context.
//!
//! Slot renderers are generated for tuples of up to 16 elements. Longer
//! sequences nest: a tuple slot may itself be a tuple.

use crate::markup::context::RenderContext;
use crate::markup::html::Html;
use crate::markup::sink::TokenSink;

/// A Rust tuple whose elements are all renderable
pub trait TupleContent {
    /// Number of slots
    const LEN: usize;

    fn render_slots(self, sink: &mut dyn TokenSink, context: &RenderContext);
}

impl TupleContent for () {
    const LEN: usize = 0;

    fn render_slots(self, _sink: &mut dyn TokenSink, _context: &RenderContext) {}
}

macro_rules! tuple_content {
    ($len:expr => $($slot:ident),+) => {
        impl<$($slot: Html),+> TupleContent for ($($slot,)+) {
            const LEN: usize = $len;

            #[allow(non_snake_case)]
            fn render_slots(self, sink: &mut dyn TokenSink, context: &RenderContext) {
                let ($($slot,)+) = self;
                $( $slot.render(sink, context.clone()); )+
            }
        }
    };
}

tuple_content!(1 => A);
tuple_content!(2 => A, B);
tuple_content!(3 => A, B, C);
tuple_content!(4 => A, B, C, D);
tuple_content!(5 => A, B, C, D, E);
tuple_content!(6 => A, B, C, D, E, F);
tuple_content!(7 => A, B, C, D, E, F, G);
tuple_content!(8 => A, B, C, D, E, F, G, H);
tuple_content!(9 => A, B, C, D, E, F, G, H, I);
tuple_content!(10 => A, B, C, D, E, F, G, H, I, J);
tuple_content!(11 => A, B, C, D, E, F, G, H, I, J, K);
tuple_content!(12 => A, B, C, D, E, F, G, H, I, J, K, L);
tuple_content!(13 => A, B, C, D, E, F, G, H, I, J, K, L, M);
tuple_content!(14 => A, B, C, D, E, F, G, H, I, J, K, L, M, N);
tuple_content!(15 => A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
tuple_content!(16 => A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tuple<T>(pub T);

impl<T: TupleContent> Tuple<T> {
    pub fn new(slots: T) -> Self {
        Tuple(slots)
    }

    pub fn len(&self) -> usize {
        T::LEN
    }

    pub fn is_empty(&self) -> bool {
        T::LEN == 0
    }
}

impl<T: TupleContent> Html for Tuple<T> {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        context.assert_no_attributes::<Self>();
        self.0.render_slots(sink, &context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::nodes::{Empty, Text};
    use crate::markup::token::{Attribute, Token};
    use crate::markup::testing::TestElement;

    fn render(node: impl Html) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        node.render(&mut tokens, RenderContext::new());
        tokens
    }

    #[test]
    fn test_unit_tuple_behaves_like_empty() {
        let tuple = Tuple::new(());
        assert!(tuple.is_empty());
        assert_eq!(render(tuple), render(Empty));
    }

    #[test]
    fn test_slots_render_in_declaration_order() {
        let tuple = Tuple::new((Text::new("a"), Empty, Text::new("b")));
        assert_eq!(tuple.len(), 3);
        assert_eq!(render(tuple), vec![Token::text("a"), Token::text("b")]);
    }

    #[test]
    fn test_nested_tuples_are_not_flattened_but_concatenate() {
        let inner = Tuple::new((Text::new("b"), Text::new("c")));
        let outer = Tuple::new((Text::new("a"), inner, Text::new("d")));
        assert_eq!(outer.len(), 3);
        assert_eq!(
            render(outer),
            vec![
                Token::text("a"),
                Token::text("b"),
                Token::text("c"),
                Token::text("d"),
            ]
        );
    }

    #[test]
    fn test_sixteen_slots() {
        let tuple = Tuple::new((
            Text::new("0"),
            Text::new("1"),
            Text::new("2"),
            Text::new("3"),
            Text::new("4"),
            Text::new("5"),
            Text::new("6"),
            Text::new("7"),
            Text::new("8"),
            Text::new("9"),
            Text::new("10"),
            Text::new("11"),
            Text::new("12"),
            Text::new("13"),
            Text::new("14"),
            Text::new("15"),
        ));
        let expected: Vec<Token> = (0..16).map(|i| Token::text(i.to_string())).collect();
        assert_eq!(render(tuple), expected);
    }

    #[test]
    fn test_each_slot_gets_its_own_context() {
        // The first element consumes attributes from its copy; the second
        // element must still start from the tuple's (empty) context.
        let tuple = Tuple::new((
            TestElement::new("p", Text::new("x")).attr(Attribute::new("id", "one")),
            TestElement::new("p", Text::new("y")),
        ));
        assert_eq!(
            render(tuple),
            vec![
                Token::StartTag {
                    name: "p".into(),
                    attributes: vec![Attribute::new("id", "one")],
                },
                Token::text("x"),
                Token::EndTag("p".into()),
                Token::StartTag {
                    name: "p".into(),
                    attributes: vec![],
                },
                Token::text("y"),
                Token::EndTag("p".into()),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "cannot carry attributes")]
    fn test_tuple_rejects_attributes() {
        let mut tokens: Vec<Token> = Vec::new();
        let context = RenderContext::new().with_attribute(Attribute::flag("hidden"));
        Tuple::new((Text::new("a"), Text::new("b"))).render(&mut tokens, context);
    }
}

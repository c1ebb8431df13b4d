//! Conditional node
//!
//! Two alternative renderings of one site. The branch is picked when the tree
//! is built; only the chosen branch is ever constructed and stored, and
//! rendering forwards the context to it unchanged.
//!
//! The two branch types may differ. When both are [`Tagged`] with the same
//! tag, the conditional carries that tag too, so call sites that need "an
//! element of kind X" accept either branch.

use crate::markup::context::RenderContext;
use crate::markup::html::{Html, Tagged};
use crate::markup::sink::TokenSink;

/// The realized side of a [`Conditional`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch<A, B> {
    First(A),
    Second(B),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Conditional<A, B> {
    pub branch: Branch<A, B>,
}

impl<A: Html, B: Html> Conditional<A, B> {
    /// The "true" side was taken
    pub fn first(content: A) -> Self {
        Conditional {
            branch: Branch::First(content),
        }
    }

    /// The "false" side was taken
    pub fn second(content: B) -> Self {
        Conditional {
            branch: Branch::Second(content),
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self.branch, Branch::First(_))
    }
}

impl<A: Html, B: Html> Html for Conditional<A, B> {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        match self.branch {
            Branch::First(content) => content.render(sink, context),
            Branch::Second(content) => content.render(sink, context),
        }
    }
}

impl<A, B> Tagged for Conditional<A, B>
where
    A: Tagged,
    B: Tagged<Tag = A::Tag>,
{
    type Tag = A::Tag;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::nodes::{Empty, Text};
    use crate::markup::testing::TestElement;
    use crate::markup::token::{Attribute, Token};

    fn render_with(node: impl Html, context: RenderContext) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        node.render(&mut tokens, context);
        tokens
    }

    #[test]
    fn test_first_branch_renders_first_only() {
        let node: Conditional<Text<&str>, Text<&str>> = Conditional::first(Text::new("yes"));
        assert!(node.is_first());
        assert_eq!(
            render_with(node, RenderContext::new()),
            vec![Token::text("yes")]
        );
    }

    #[test]
    fn test_second_branch_renders_second_only() {
        let node: Conditional<Text<&str>, Empty> = Conditional::second(Empty);
        assert!(!node.is_first());
        assert!(render_with(node, RenderContext::new()).is_empty());
    }

    #[test]
    fn test_wrapper_forwards_attributes_to_branch() {
        // The conditional itself is no attribute target, but it must not
        // reject what its element branch is entitled to consume.
        let node: Conditional<TestElement<Empty>, Empty> =
            Conditional::first(TestElement::new("hr", Empty));
        let context = RenderContext::new().with_attribute(Attribute::flag("hidden"));
        assert_eq!(
            render_with(node, context),
            vec![
                Token::StartTag {
                    name: "hr".into(),
                    attributes: vec![Attribute::flag("hidden")],
                },
                Token::EndTag("hr".into()),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "text::Text")]
    fn test_structural_branch_rejects_forwarded_attributes() {
        let node: Conditional<TestElement<Empty>, Text<&str>> = Conditional::second(Text::new("x"));
        let context = RenderContext::new().with_attribute(Attribute::flag("hidden"));
        render_with(node, context);
    }

    #[test]
    fn test_matching_tags_unify() {
        struct Para;

        fn accepts_para<T: Tagged<Tag = Para>>(_node: &T) {}

        let node: Conditional<TestElement<Text<&str>, Para>, TestElement<Empty, Para>> =
            Conditional::first(TestElement::new("p", Text::new("a")).tagged());
        accepts_para(&node);
    }
}

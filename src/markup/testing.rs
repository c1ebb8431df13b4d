//! Testing support
//!
//! The core defines no elements, yet the interesting parts of the render
//! protocol (attribute propagation, copy-on-descend) only show up once an
//! element is in the tree. [`TestElement`] is the smallest element that
//! honors the contract: it takes the pending attributes from its own copy of
//! the context, emits a start tag, renders its content with what is left, and
//! closes. [`Attributed`] pushes attributes into the context for whatever it
//! wraps, which is how a vocabulary would attach them.
//!
//! Nothing here validates markup; names are emitted as given.

use super::context::RenderContext;
use super::html::{Html, Tagged};
use super::sink::TokenSink;
use super::token::{Attribute, Token};
use std::marker::PhantomData;

/// A minimal element node, optionally tagged with the identity `T`
#[derive(Debug, Clone, PartialEq)]
pub struct TestElement<C, T = ()> {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub content: C,
    tag: PhantomData<T>,
}

impl<C: Html> TestElement<C> {
    pub fn new(name: impl Into<String>, content: C) -> Self {
        TestElement {
            name: name.into(),
            attributes: Vec::new(),
            content,
            tag: PhantomData,
        }
    }
}

impl<C: Html, T> TestElement<C, T> {
    /// Add an attribute owned by the element itself
    pub fn attr(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Re-tag the element with another identity
    pub fn tagged<U>(self) -> TestElement<C, U> {
        TestElement {
            name: self.name,
            attributes: self.attributes,
            content: self.content,
            tag: PhantomData,
        }
    }
}

impl<C: Html, T> Html for TestElement<C, T> {
    fn render(self, sink: &mut dyn TokenSink, mut context: RenderContext) {
        let mut attributes = context.take_attributes();
        attributes.extend(self.attributes);
        sink.append_token(Token::StartTag {
            name: self.name.clone(),
            attributes,
        });
        self.content.render(sink, context);
        sink.append_token(Token::EndTag(self.name));
    }
}

impl<C: Html, T> Tagged for TestElement<C, T> {
    type Tag = T;
}

/// Renders `content` with extra pending attributes in its context
#[derive(Debug, Clone, PartialEq)]
pub struct Attributed<C> {
    pub attributes: Vec<Attribute>,
    pub content: C,
}

impl<C: Html> Html for Attributed<C> {
    fn render(self, sink: &mut dyn TokenSink, context: RenderContext) {
        let context = self
            .attributes
            .into_iter()
            .fold(context, RenderContext::with_attribute);
        self.content.render(sink, context);
    }
}

/// Attach attributes to `content`, whatever kind of node it is
pub fn with_attributes<C: Html>(
    content: C,
    attributes: impl IntoIterator<Item = Attribute>,
) -> Attributed<C> {
    Attributed {
        attributes: attributes.into_iter().collect(),
        content,
    }
}

/// Shorthand for the text tokens of a sequence of strings
pub fn text_tokens<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<Token> {
    texts.into_iter().map(Token::text).collect()
}

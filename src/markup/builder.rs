//! Composer - folding call-site expressions into one node
//!
//! A call site lists expressions; the composer turns that list into exactly
//! one node before anything is rendered:
//!
//! - nothing at all becomes [`Empty`]
//! - a single node is returned unchanged
//! - a single piece of text becomes a [`Text`] node
//! - two or more expressions become a [`Tuple`], slot by slot, in order
//!
//! The first three rules are [`IntoHtml`]; the [`content!`](crate::content)
//! macro applies all four. Collections, branches and optional content go
//! through the functions below.
//!
//! ```ignore
//! use trellis::content;
//! use trellis::markup::builder::{cond, when};
//!
//! let node = content![
//!     "Hello, ",
//!     cond(signed_in, || user.name.clone(), || "guest"),
//!     when(unread > 0, || format!(" ({unread})")),
//! ];
//! ```

use super::html::Html;
use super::nodes::{AnyHtml, Array, Conditional, Empty, Text, Tuple, TupleContent};
use std::borrow::Cow;

/// The one-expression fold: nodes stay as they are, text becomes [`Text`]
pub trait IntoHtml {
    type Output: Html;

    fn into_html(self) -> Self::Output;
}

impl<T: Html> IntoHtml for T {
    type Output = T;

    fn into_html(self) -> T {
        self
    }
}

impl<'a> IntoHtml for &'a str {
    type Output = Text<&'a str>;

    fn into_html(self) -> Self::Output {
        Text::new(self)
    }
}

impl<'a> IntoHtml for &'a String {
    type Output = Text<&'a str>;

    fn into_html(self) -> Self::Output {
        Text::new(self.as_str())
    }
}

impl IntoHtml for String {
    type Output = Text<String>;

    fn into_html(self) -> Self::Output {
        Text::new(self)
    }
}

impl<'a> IntoHtml for Cow<'a, str> {
    type Output = Text<Cow<'a, str>>;

    fn into_html(self) -> Self::Output {
        Text::new(self)
    }
}

/// Fold a list of expressions into one node.
///
/// `content![]` is [`Empty`], `content![x]` is `x` folded on its own, and
/// `content![a, b, ...]` is a [`Tuple`] of the folded slots.
#[macro_export]
macro_rules! content {
    () => {
        $crate::markup::nodes::Empty
    };
    ($single:expr $(,)?) => {
        $crate::markup::builder::IntoHtml::into_html($single)
    };
    ($($slot:expr),+ $(,)?) => {
        $crate::markup::nodes::Tuple::new((
            $($crate::markup::builder::IntoHtml::into_html($slot),)+
        ))
    };
}

pub fn empty() -> Empty {
    Empty
}

pub fn text<S: Into<String>>(text: S) -> Text<S> {
    Text::new(text)
}

/// A fixed set of slots, each with its own type
pub fn tuple<T: TupleContent>(slots: T) -> Tuple<T> {
    Tuple::new(slots)
}

/// A homogeneous list, folding every item on its own
pub fn array<I>(items: I) -> Array<<I::Item as IntoHtml>::Output>
where
    I: IntoIterator,
    I::Item: IntoHtml,
{
    items.into_iter().map(IntoHtml::into_html).collect()
}

/// A list of nodes of mixed kinds, boxed into one array
pub fn fragment<I>(nodes: I) -> Array<AnyHtml>
where
    I: IntoIterator<Item = AnyHtml>,
{
    nodes.into_iter().collect()
}

/// Box a node for use in a [`fragment`]
pub fn any<T>(node: T) -> AnyHtml
where
    T: IntoHtml,
    T::Output: 'static,
{
    AnyHtml::new(node.into_html())
}

/// Pick one of two branches.
///
/// Only the closure for the taken branch runs; the other branch is never
/// built.
pub fn cond<A, B>(
    condition: bool,
    first: impl FnOnce() -> A,
    second: impl FnOnce() -> B,
) -> Conditional<A::Output, B::Output>
where
    A: IntoHtml,
    B: IntoHtml,
{
    if condition {
        Conditional::first(first().into_html())
    } else {
        Conditional::second(second().into_html())
    }
}

/// Content that is only present when `condition` holds.
///
/// The closure is not called otherwise.
pub fn when<T: IntoHtml>(condition: bool, content: impl FnOnce() -> T) -> Option<T::Output> {
    if condition {
        Some(content().into_html())
    } else {
        None
    }
}

/// Content that may be absent
pub fn optional<T: IntoHtml>(content: Option<T>) -> Option<T::Output> {
    content.map(IntoHtml::into_html)
}

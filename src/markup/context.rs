//! Render-time context
//!
//! A [`RenderContext`] travels down the tree alongside the sink. Every child
//! receives its own clone, so whatever one subtree does with its copy (an
//! element taking the pending attributes, for instance) is invisible to its
//! siblings and to the parent once the child returns.
//!
//! The only state carried today is the set of attributes waiting for the next
//! element. Structural nodes never consume them; receiving any is a broken
//! composition and aborts the render.

use super::token::Attribute;
use std::any::type_name;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    attributes: Vec<Attribute>,
}

impl RenderContext {
    /// A fresh context with nothing pending, as used at the root of a render
    pub fn new() -> Self {
        Self::default()
    }

    /// A context carrying the given pending attributes
    pub fn with_attributes(attributes: impl IntoIterator<Item = Attribute>) -> Self {
        RenderContext {
            attributes: attributes.into_iter().collect(),
        }
    }

    /// Return a copy of this context with one more pending attribute
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Move the pending attributes out of this copy of the context.
    ///
    /// Only element nodes call this, on the copy they were handed.
    pub fn take_attributes(&mut self) -> Vec<Attribute> {
        std::mem::take(&mut self.attributes)
    }

    /// Abort the render if attributes are pending for the structural node `T`.
    ///
    /// # Panics
    ///
    /// Panics when the context carries any attribute. Well-typed compositions
    /// never reach this state.
    pub fn assert_no_attributes<T: ?Sized>(&self) {
        if self.attributes.is_empty() {
            return;
        }

        let node = type_name::<T>();
        let pending = self
            .attributes
            .iter()
            .map(|attribute| attribute.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::error!(node, pending = %pending, "attributes pending on structural node");
        panic!("structural node `{node}` cannot carry attributes (pending: {pending})");
    }
}

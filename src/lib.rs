//! # trellis
//!
//! A content-node algebra and renderer for HTML-like markup.
//!
//! Callers compose nested, mixed content (text, branches, optional parts,
//! lists, fixed groups) into a single node, then render it into an ordered
//! stream of tokens. Which elements exist, how attributes are built and how
//! tokens become bytes are left to the layers on top; this crate only
//! defines the node kinds and the traversal contract they all follow.
//!
//! See the [markup module](markup) for the pieces.

pub mod markup;

//! Content node kinds
//!
//!     This module holds the closed set of structural node kinds. Anything that renders is either
//!     one of these or an element defined by a vocabulary outside this crate.
//!
//! Node Kinds
//!
//!     - Empty: renders nothing. See [empty](empty).
//!     - Text: a single string-like value, rendered as one text token. See [text](text).
//!     - Tuple: a fixed number of slots, each of its own type. See [tuple](tuple).
//!     - Array: any number of children, all of the same type. See [array](array).
//!     - Conditional: one of two branches, chosen when the tree was built. See
//!       [conditional](conditional).
//!     - Optional: `Option<T>`, renders the wrapped node when present. See [optional](optional).
//!     - AnyHtml: a boxed node of erased type, so runtime-built lists can mix kinds. See
//!       [any](any).
//!
//! Attributes
//!
//!     None of these kinds is an attribute target. Empty, Text, Tuple and Array check the context
//!     they are handed and abort the render if attributes are pending. Conditional, Optional and
//!     AnyHtml are transparent wrappers: they forward the context unchanged and let the node they
//!     wrap decide.
//!
//! Children
//!
//!     Tuple and Array hand every child its own clone of the context and render children strictly
//!     in order. Their output is the concatenation of their children's output, nothing more.

pub mod any;
pub mod array;
pub mod conditional;
pub mod empty;
pub mod optional;
pub mod text;
pub mod tuple;

pub use any::AnyHtml;
pub use array::Array;
pub use conditional::{Branch, Conditional};
pub use empty::Empty;
pub use text::Text;
pub use tuple::{Tuple, TupleContent};

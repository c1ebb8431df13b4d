//! Main module for trellis library functionality
//!
//! Content is built in two steps. A call site composes expressions into one
//! node ([`builder`], [`nodes`]); a render pass then walks that node once,
//! threading a [`context::RenderContext`] down the tree and appending
//! [`token::Token`]s to a [`sink::TokenSink`].

pub mod builder;
pub mod context;
pub mod formats;
pub mod html;
pub mod nodes;
pub mod render;
pub mod sink;
pub mod testing;
pub mod token;

pub use builder::IntoHtml;
pub use context::RenderContext;
pub use formats::{format_tokens, FormatError, TokenFormat};
pub use html::{Html, Tagged};
pub use render::{render_into, render_to_tokens};
pub use sink::TokenSink;
pub use token::{Attribute, Token};

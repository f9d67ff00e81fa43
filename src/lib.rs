//! Chat text nodes for chat component payloads.
//!
//! Re-exports the [`chat_text`] crate. Most callers want the [`prelude`].

pub use chat_text::*;

/// The types needed to build and inspect text nodes.
pub mod prelude {
    pub use chat_text::{
        ClickAction, ClickEvent, HoverAction, HoverEvent, TextError, TextNode, TranslationArg,
    };
}

//! Rich chat text nodes.
//!
//! This crate models a single chat text node: a literal string plus optional
//! translation, insertion, hover and click metadata, ready to be handed to a
//! chat component serializer.
//!
//! # Overview
//!
//! - [`TextNode`] holds the literal and the optional attributes.
//! - [`HoverEvent`] pairs a [`HoverAction`] with a value shown on hover.
//! - [`ClickEvent`] pairs a [`ClickAction`] with a value used on click.
//! - [`TranslationArg`] is one positional argument of a translated string.
//!
//! Composing nodes into trees, serializing them and resolving translations
//! are left to the caller.
//!
//! # Usage
//!
//! ```
//! use chat_text::{ClickEvent, TextNode};
//!
//! let node = TextNode::new("Shop")
//!     .with_translation("shop.open", ["Alice"])
//!     .with_hover_text("Open the shop")
//!     .with_click(ClickEvent::run_command("/shop"));
//!
//! assert_eq!(node.translation_key(), Some("shop.open"));
//! assert_eq!(node.translation_args().unwrap().len(), 1);
//! assert!(node.is_interactive());
//! ```

pub mod click;
pub mod error;
pub mod hover;
pub mod text;

// Re-export main types at crate root
pub use click::{ClickAction, ClickEvent};
pub use error::{ActionParseError, TextError};
pub use hover::{HoverAction, HoverEvent};
pub use text::{TextNode, TranslationArg};

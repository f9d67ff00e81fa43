//! The text node value model.
//!
//! A [`TextNode`] carries a fixed literal plus optional translation,
//! insertion, hover and click attributes. Nodes are decorated through
//! chained `with_*` calls and then read back by a serializer.

use std::fmt;

use crate::click::{ClickAction, ClickEvent};
use crate::error::TextError;
use crate::hover::{HoverAction, HoverEvent};

/// One positional argument substituted into a translated string.
#[derive(Clone, Debug, PartialEq)]
pub enum TranslationArg {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// A nested node, rendered by the client in place of the placeholder.
    Node(Box<TextNode>),
}

impl fmt::Display for TranslationArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationArg::Text(text) => f.write_str(text),
            TranslationArg::Integer(value) => write!(f, "{}", value),
            TranslationArg::Float(value) => write!(f, "{}", value),
            TranslationArg::Bool(value) => write!(f, "{}", value),
            TranslationArg::Node(node) => write!(f, "{}", node),
        }
    }
}

impl From<&str> for TranslationArg {
    fn from(value: &str) -> Self {
        TranslationArg::Text(value.to_string())
    }
}

impl From<String> for TranslationArg {
    fn from(value: String) -> Self {
        TranslationArg::Text(value)
    }
}

macro_rules! integer_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TranslationArg {
                fn from(value: $ty) -> Self {
                    TranslationArg::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_arg!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for TranslationArg {
    fn from(value: f32) -> Self {
        TranslationArg::Float(f64::from(value))
    }
}

impl From<f64> for TranslationArg {
    fn from(value: f64) -> Self {
        TranslationArg::Float(value)
    }
}

impl From<bool> for TranslationArg {
    fn from(value: bool) -> Self {
        TranslationArg::Bool(value)
    }
}

impl From<TextNode> for TranslationArg {
    fn from(value: TextNode) -> Self {
        TranslationArg::Node(Box::new(value))
    }
}

/// A unit of chat text with optional localization and interaction metadata.
///
/// The literal is fixed at construction. Every other attribute starts unset
/// and is overwritten by the matching `with_*` call; the last write wins.
///
/// # Examples
///
/// ```
/// use chat_text::{ClickAction, TextNode};
///
/// let node = TextNode::new("Click me")
///     .with_hover_text("Go home")
///     .with_click_action(ClickAction::RunCommand, "/home")
///     .with_insertion("/home ");
///
/// assert_eq!(node.literal(), "Click me");
/// assert_eq!(node.click().unwrap().value(), "/home");
/// assert!(node.translation_key().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    literal: String,
    translation_key: Option<String>,
    translation_args: Option<Vec<TranslationArg>>,
    /// Inserted into the chat input on shift-click. Unlike
    /// [`ClickAction::SuggestCommand`] this keeps the existing input.
    insertion: Option<String>,
    hover: Option<HoverEvent>,
    click: Option<ClickEvent>,
}

impl TextNode {
    /// Create a node with the given literal. An empty literal is valid.
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            translation_key: None,
            translation_args: None,
            insertion: None,
            hover: None,
            click: None,
        }
    }

    /// Create a node from a literal that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::InvalidArgument`] if `literal` is `None`.
    ///
    /// ```
    /// use chat_text::{TextError, TextNode};
    ///
    /// assert_eq!(TextNode::create(Some("")).unwrap().literal(), "");
    /// assert!(matches!(
    ///     TextNode::create(None::<String>),
    ///     Err(TextError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn create<S: Into<String>>(literal: Option<S>) -> Result<Self, TextError> {
        match literal {
            Some(literal) => Ok(Self::new(literal)),
            None => {
                log::debug!("rejected text node without a literal");
                Err(TextError::InvalidArgument("text is absent".to_string()))
            }
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn translation_key(&self) -> Option<&str> {
        self.translation_key.as_deref()
    }

    pub fn translation_args(&self) -> Option<&[TranslationArg]> {
        self.translation_args.as_deref()
    }

    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    pub fn hover(&self) -> Option<&HoverEvent> {
        self.hover.as_ref()
    }

    pub fn click(&self) -> Option<&ClickEvent> {
        self.click.as_ref()
    }

    /// Returns true if a translation key is set.
    pub fn is_translatable(&self) -> bool {
        self.translation_key.is_some()
    }

    /// Returns true if an insertion, hover or click is attached.
    pub fn is_interactive(&self) -> bool {
        self.insertion.is_some() || self.hover.is_some() || self.click.is_some()
    }

    #[must_use]
    pub fn with_translation_key(mut self, key: impl Into<String>) -> Self {
        self.translation_key = Some(key.into());
        self
    }

    /// Replace the translation arguments.
    ///
    /// An empty iterator stores an empty argument list, not an absent one.
    #[must_use]
    pub fn with_translation_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TranslationArg>,
    {
        let args: Vec<TranslationArg> = args.into_iter().map(Into::into).collect();
        if self.translation_key.is_none() {
            log::trace!(
                "translation args set without a translation key: literal={:?}, args={}",
                self.literal,
                args.len()
            );
        }
        self.translation_args = Some(args);
        self
    }

    /// Set the translation key and then the translation arguments.
    ///
    /// Both writes always happen, so passing no arguments clears any earlier
    /// ones down to an empty list.
    #[must_use]
    pub fn with_translation<I>(self, key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TranslationArg>,
    {
        self.with_translation_key(key).with_translation_args(args)
    }

    #[must_use]
    pub fn with_insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    #[must_use]
    pub fn with_hover(mut self, hover: HoverEvent) -> Self {
        self.hover = Some(hover);
        self
    }

    #[must_use]
    pub fn with_hover_action(self, action: HoverAction, value: impl Into<String>) -> Self {
        self.with_hover(HoverEvent::new(action, value))
    }

    /// Attach a plain text tooltip.
    #[must_use]
    pub fn with_hover_text(self, text: impl Into<String>) -> Self {
        self.with_hover(HoverEvent::show_text(text))
    }

    #[must_use]
    pub fn with_click(mut self, click: ClickEvent) -> Self {
        self.click = Some(click);
        self
    }

    #[must_use]
    pub fn with_click_action(self, action: ClickAction, value: impl Into<String>) -> Self {
        self.with_click(ClickEvent::new(action, value))
    }
}

impl From<&str> for TextNode {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl From<String> for TextNode {
    fn from(literal: String) -> Self {
        Self::new(literal)
    }
}

impl TryFrom<Option<String>> for TextNode {
    type Error = TextError;

    fn try_from(literal: Option<String>) -> Result<Self, Self::Error> {
        Self::create(literal)
    }
}

/// Write `value` or `null` when absent.
fn write_optional<T: fmt::Display>(f: &mut fmt::Formatter<'_>, value: Option<T>) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{}", value),
        None => f.write_str("null"),
    }
}

// Diagnostic dump of every field; not a serialization format.
impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextNode [literal={}, translation_key=", self.literal)?;
        write_optional(f, self.translation_key())?;
        f.write_str(", translation_args=")?;
        match self.translation_args() {
            Some(args) => {
                f.write_str("[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("null")?,
        }
        f.write_str(", insertion=")?;
        write_optional(f, self.insertion())?;
        f.write_str(", hover=")?;
        write_optional(f, self.hover())?;
        f.write_str(", click=")?;
        write_optional(f, self.click())?;
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_bare() {
        let node = TextNode::new("Hello");
        assert_eq!(node.literal(), "Hello");
        assert!(node.translation_key().is_none());
        assert!(node.translation_args().is_none());
        assert!(node.insertion().is_none());
        assert!(node.hover().is_none());
        assert!(node.click().is_none());
        assert!(!node.is_translatable());
        assert!(!node.is_interactive());
    }

    #[test]
    fn create_rejects_absent_literal() {
        let err = TextNode::create(None::<&str>).unwrap_err();
        assert_eq!(err, TextError::InvalidArgument("text is absent".to_string()));
        assert_eq!(err.to_string(), "invalid argument: text is absent");
    }

    #[test]
    fn try_from_option() {
        let node = TextNode::try_from(Some("hi".to_string())).unwrap();
        assert_eq!(node.literal(), "hi");
        assert!(TextNode::try_from(None::<String>).is_err());
    }

    #[test]
    fn translation_args_convert() {
        let node = TextNode::new("").with_translation_args([
            TranslationArg::from("a"),
            TranslationArg::from(3u8),
            TranslationArg::from(1.5f32),
            TranslationArg::from(true),
            TranslationArg::from(TextNode::new("n")),
        ]);
        let args = node.translation_args().unwrap();
        assert_eq!(args[0], TranslationArg::Text("a".to_string()));
        assert_eq!(args[1], TranslationArg::Integer(3));
        assert_eq!(args[2], TranslationArg::Float(1.5));
        assert_eq!(args[3], TranslationArg::Bool(true));
        assert_eq!(args[4], TranslationArg::Node(Box::new(TextNode::new("n"))));
    }

    #[test]
    fn translation_arg_display() {
        assert_eq!(TranslationArg::from("x").to_string(), "x");
        assert_eq!(TranslationArg::from(-7i32).to_string(), "-7");
        assert_eq!(TranslationArg::from(false).to_string(), "false");
    }

    #[test]
    fn display_empty_args() {
        let node = TextNode::new("a").with_translation_args(Vec::<TranslationArg>::new());
        assert!(node.to_string().contains("translation_args=[]"));
    }
}

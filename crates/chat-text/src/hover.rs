//! Hover payloads.
//!
//! A hover event pairs a [`HoverAction`] with the value the client shows
//! while the pointer rests on a text node.

use std::fmt;
use std::str::FromStr;

use crate::error::ActionParseError;

/// What a client does when the pointer hovers over a text node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoverAction {
    /// Show a text tooltip.
    ShowText,
    /// Show an item tooltip.
    ShowItem,
    /// Show an entity tooltip.
    ShowEntity,
}

impl HoverAction {
    /// Every hover action, in declaration order.
    pub const ALL: [HoverAction; 3] = [
        HoverAction::ShowText,
        HoverAction::ShowItem,
        HoverAction::ShowEntity,
    ];

    /// The protocol identifier of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            HoverAction::ShowText => "show_text",
            HoverAction::ShowItem => "show_item",
            HoverAction::ShowEntity => "show_entity",
        }
    }

    /// Parse a hover action from its protocol identifier.
    ///
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_text::HoverAction;
    ///
    /// assert_eq!(HoverAction::parse("show_text").unwrap(), HoverAction::ShowText);
    /// assert!(HoverAction::parse("show_achievement").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ActionParseError> {
        let name = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| ActionParseError::UnknownHoverAction(input.trim().to_string()))
    }
}

impl fmt::Display for HoverAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoverAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An immutable hover action plus its value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HoverEvent {
    action: HoverAction,
    value: String,
}

impl HoverEvent {
    /// Create a hover event.
    pub fn new(action: HoverAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    /// Create a plain text tooltip.
    pub fn show_text(text: impl Into<String>) -> Self {
        Self::new(HoverAction::ShowText, text)
    }

    pub fn action(&self) -> HoverAction {
        self.action
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for HoverEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HoverEvent [action={}, value={}]",
            self.action, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_text_shortcut() {
        let event = HoverEvent::show_text("Go home");
        assert_eq!(event.action(), HoverAction::ShowText);
        assert_eq!(event.value(), "Go home");
        assert_eq!(event, HoverEvent::new(HoverAction::ShowText, "Go home"));
    }

    #[test]
    fn parse_every_action() {
        for action in HoverAction::ALL {
            assert_eq!(HoverAction::parse(action.as_str()).unwrap(), action);
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(
            " SHOW_ENTITY ".parse::<HoverAction>().unwrap(),
            HoverAction::ShowEntity
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            HoverAction::parse("show_achievement"),
            Err(ActionParseError::UnknownHoverAction(
                "show_achievement".to_string()
            ))
        );
    }

    #[test]
    fn display() {
        let event = HoverEvent::show_text("hi");
        assert_eq!(event.to_string(), "HoverEvent [action=show_text, value=hi]");
    }
}

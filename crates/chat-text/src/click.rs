//! Click payloads.

use std::fmt;
use std::str::FromStr;

use crate::error::ActionParseError;

/// What a client does when a text node is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Open the value as a URL.
    OpenUrl,
    /// Open the value as a local file path.
    OpenFile,
    /// Send the value as a chat command.
    RunCommand,
    /// Replace the chat input with the value.
    SuggestCommand,
    /// Turn a book to the page number in the value.
    ChangePage,
    /// Copy the value to the system clipboard.
    CopyToClipboard,
}

impl ClickAction {
    /// Every click action, in declaration order.
    pub const ALL: [ClickAction; 6] = [
        ClickAction::OpenUrl,
        ClickAction::OpenFile,
        ClickAction::RunCommand,
        ClickAction::SuggestCommand,
        ClickAction::ChangePage,
        ClickAction::CopyToClipboard,
    ];

    /// The protocol identifier of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    /// Parse a click action from its protocol identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use chat_text::ClickAction;
    ///
    /// assert_eq!(ClickAction::parse("run_command").unwrap(), ClickAction::RunCommand);
    /// assert!(ClickAction::parse("teleport").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ActionParseError> {
        let name = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| ActionParseError::UnknownClickAction(input.trim().to_string()))
    }
}

impl fmt::Display for ClickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClickAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// An immutable click action plus its value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    action: ClickAction,
    value: String,
}

impl ClickEvent {
    /// Create a click event.
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }

    /// Run `command` when clicked.
    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::RunCommand, command)
    }

    /// Put `command` into the chat input when clicked.
    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickAction::SuggestCommand, command)
    }

    /// Open `url` when clicked.
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickAction::OpenUrl, url)
    }

    /// Copy `text` to the clipboard when clicked.
    pub fn copy_to_clipboard(text: impl Into<String>) -> Self {
        Self::new(ClickAction::CopyToClipboard, text)
    }

    pub fn action(&self) -> ClickAction {
        self.action
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ClickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClickEvent [action={}, value={}]",
            self.action, self.value
        )
    }
}

//! Outbound seam to the chat platform.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sunrise_error::ResponderError;

/// Body of a rendered page. Visual styling is left to the platform glue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// Optional heading
    pub title: Option<String>,
    /// Main text
    pub description: String,
    /// Optional footer line
    pub footer: Option<String>,
}

impl PageContent {
    /// Content with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
            footer: None,
        }
    }

    /// Set the heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// One clickable control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlButton {
    /// Wire name of the action the control triggers, e.g. `NEXT`
    pub action: String,
    /// Visible label
    pub label: String,
    /// Encoded token delivered back when clicked
    pub custom_id: String,
    /// Whether the control is greyed out
    pub disabled: bool,
}

/// A row of controls under a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRow {
    /// Buttons in display order
    pub buttons: Vec<ControlButton>,
}

/// Page content together with its controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPage {
    /// Page body
    pub content: PageContent,
    /// Navigation controls
    pub controls: ControlRow,
}

/// A short text-entry dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JumpPrompt {
    /// Encoded token delivered back on submission
    pub custom_id: String,
    /// Dialog title
    pub title: String,
    /// Label of the single text input
    pub label: String,
    /// Placeholder shown in the empty input
    pub placeholder: String,
    /// Id under which the submitted value is reported
    pub field_id: String,
}

/// Responds to the interaction currently being handled.
///
/// Implemented by the platform glue, one instance per inbound event.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Replace the message with an interim placeholder and no controls.
    async fn show_placeholder(&self, message: &str) -> Result<(), ResponderError>;

    /// Show a page and its controls.
    async fn update_page(&self, page: &RenderedPage) -> Result<(), ResponderError>;

    /// Open a text-entry dialog.
    async fn open_jump_prompt(&self, prompt: &JumpPrompt) -> Result<(), ResponderError>;

    /// Tell the user something went wrong.
    async fn send_error(&self, message: &str) -> Result<(), ResponderError>;
}

//! Platform-neutral inbound interaction events.

use std::collections::HashMap;

/// Which kind of UI element produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// A message component such as a button.
    Component,
    /// Submission of a text-entry prompt.
    ModalSubmit,
}

/// An inbound UI event, already stripped of platform specifics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    /// A button press.
    Component {
        /// Custom id of the pressed control (a raw token).
        custom_id: String,
        /// User who pressed it.
        user_id: String,
    },
    /// A text-entry prompt submission.
    ModalSubmit {
        /// Custom id of the submitted prompt (a raw token).
        custom_id: String,
        /// User who submitted it.
        user_id: String,
        /// Submitted values keyed by input field id.
        fields: HashMap<String, String>,
    },
}

impl InteractionEvent {
    /// Button press event.
    pub fn component(custom_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::Component {
            custom_id: custom_id.into(),
            user_id: user_id.into(),
        }
    }

    /// Prompt submission event with a single text field.
    pub fn modal_submit(
        custom_id: impl Into<String>,
        user_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::ModalSubmit {
            custom_id: custom_id.into(),
            user_id: user_id.into(),
            fields: HashMap::from([(field_id.into(), value.into())]),
        }
    }

    /// The event kind.
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Component { .. } => InteractionKind::Component,
            Self::ModalSubmit { .. } => InteractionKind::ModalSubmit,
        }
    }

    /// Raw token carried by the event.
    pub fn custom_id(&self) -> &str {
        match self {
            Self::Component { custom_id, .. } | Self::ModalSubmit { custom_id, .. } => custom_id,
        }
    }

    /// Id of the user who produced the event.
    pub fn user_id(&self) -> &str {
        match self {
            Self::Component { user_id, .. } | Self::ModalSubmit { user_id, .. } => user_id,
        }
    }

    /// Submitted value of a prompt field, if this is a submission carrying it.
    pub fn field(&self, field_id: &str) -> Option<&str> {
        match self {
            Self::ModalSubmit { fields, .. } => fields.get(field_id).map(String::as_str),
            Self::Component { .. } => None,
        }
    }
}

use serde::{Deserialize, Serialize};
use url::Url;

/// Role of a canonical message author
///
/// The wire protocol's `developer` and `function` roles collapse into
/// `System` during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction
    System,
    /// User message
    User,
    /// Assistant response
    Assistant,
    /// Tool result
    Tool,
}

/// Canonical message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message author
    pub role: Role,
    /// Message content
    pub content: Content,
}

impl Message {
    /// Build a message with plain text content
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Content::Text(content.into()),
        }
    }
}

/// Message content, either plain text or structured parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text content
    Text(String),
    /// Ordered content parts
    Parts(Vec<ContentPart>),
}

/// Individual part within a multipart message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content block
    Text {
        /// The text string
        text: String,
    },
    /// Image resolved to a URI
    Image {
        /// Parsed image URL
        url: Url,
    },
    /// File payload, inline data or reference
    File {
        /// Inline data (empty when only a reference was supplied)
        data: String,
        /// Resolved MIME type, when known
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_type: Option<String>,
    },
    /// Result of an earlier tool call
    ToolResult {
        /// ID of the tool call this result responds to
        tool_call_id: String,
        /// Tool name (the call id doubles as a placeholder when the wire
        /// message does not carry one)
        name: String,
        /// Result payload
        content: String,
    },
}

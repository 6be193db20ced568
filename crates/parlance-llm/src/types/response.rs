use serde::{Deserialize, Serialize};

/// Provider-agnostic reason the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural end of generation
    Stop,
    /// Hit the output limit
    Length,
    /// Content was filtered
    ContentFilter,
    /// Model requested tool calls
    ToolCalls,
    /// Provider did not report a reason
    Unknown,
    /// Generation ended with an error
    Error,
    /// Provider reported a reason outside this vocabulary
    Other,
}

/// Token usage counters reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the input
    pub input_tokens: u32,
    /// Tokens generated in the output
    pub output_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// A tool invocation requested by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Unique identifier for this call
    pub id: String,
    /// Name of the function to call
    pub name: String,
    /// JSON-encoded arguments, passed through opaquely
    pub arguments: String,
}

/// Completed (non-streaming) generation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Response identifier
    pub id: String,
    /// Model id the provider actually used
    pub model: String,
    /// Creation timestamp in epoch milliseconds
    pub created_ms: u64,
    /// Generated text
    pub text: String,
    /// Why generation stopped
    pub finish_reason: FinishReason,
    /// Usage counters, when the provider reported them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Tool invocations requested by the model
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolInvocation>,
}

use super::response::{FinishReason, ToolInvocation, Usage};

/// Event produced while a model generates a streaming response
///
/// Zero or more `TextDelta`/`ToolCall` events precede exactly one terminal
/// event (`Finish` or `Error`); nothing follows a terminal event.
#[derive(Debug)]
pub enum GenerationEvent {
    /// Incremental text fragment
    TextDelta(String),
    /// A complete tool invocation
    ToolCall(ToolInvocation),
    /// Terminal: generation finished
    Finish {
        /// Why generation stopped
        reason: FinishReason,
        /// Usage counters, when the provider reported them
        usage: Option<Usage>,
    },
    /// Terminal: generation failed
    Error(anyhow::Error),
}

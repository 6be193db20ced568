//! Streaming translation from generation events to wire chunks
//!
//! A two-state pull consumer: `Streaming` until a terminal event (or source
//! exhaustion), then `Done`. The translator owns the event stream, so every
//! exit path — completion, error, or the caller dropping the chunk stream on
//! client disconnect — releases it.

use std::time::{SystemTime, UNIX_EPOCH};

use futures_util::{Stream, StreamExt};

use crate::convert::openai::map_finish_reason;
use crate::protocol::openai::{
    OpenAiFinishReason, OpenAiStreamChoice, OpenAiStreamChunk, OpenAiStreamDelta, OpenAiStreamFunctionCall,
    OpenAiStreamToolCall, OpenAiUsage,
};
use crate::types::{GenerationEvent, ToolInvocation};

/// Translator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TranslatorState {
    /// Pulling events and emitting chunks
    Streaming,
    /// Terminal; no further events are pulled
    Done,
}

/// Translates a generation event sequence into wire protocol chunks
///
/// Events are pulled one at a time and translated in arrival order; nothing
/// is buffered. After a terminal event the source is never polled again.
pub struct StreamTranslator<S> {
    events: S,
    model: String,
    state: TranslatorState,
}

impl<S> StreamTranslator<S>
where
    S: Stream<Item = GenerationEvent> + Unpin,
{
    /// Build a translator over an event source for the given model id
    pub fn new(events: S, model: impl Into<String>) -> Self {
        Self {
            events,
            model: model.into(),
            state: TranslatorState::Streaming,
        }
    }

    /// Pull the next wire chunk, or `None` once the stream is done
    ///
    /// The first tool-call event is treated as terminal; later events in
    /// the source are never pulled.
    pub async fn next_chunk(&mut self) -> Option<OpenAiStreamChunk> {
        if self.state == TranslatorState::Done {
            return None;
        }

        match self.events.next().await {
            None => {
                self.state = TranslatorState::Done;
                None
            }
            Some(GenerationEvent::TextDelta(fragment)) => Some(self.chunk(
                OpenAiStreamDelta {
                    role: Some("assistant".to_owned()),
                    content: Some(fragment),
                    tool_calls: None,
                },
                None,
                None,
            )),
            Some(GenerationEvent::ToolCall(call)) => {
                self.state = TranslatorState::Done;
                Some(self.tool_call_chunk(call))
            }
            Some(GenerationEvent::Finish { reason, usage }) => {
                self.state = TranslatorState::Done;
                Some(self.chunk(
                    OpenAiStreamDelta::default(),
                    Some(map_finish_reason(reason)),
                    usage.map(Into::into),
                ))
            }
            Some(GenerationEvent::Error(error)) => {
                // folded into a well-formed stream tail; the wire format has
                // no mid-stream error field
                tracing::warn!(error = %error, "generation stream failed");
                self.state = TranslatorState::Done;
                Some(self.chunk(OpenAiStreamDelta::default(), Some(OpenAiFinishReason::Stop), None))
            }
        }
    }

    /// Consume the translator, yielding chunks until done
    pub fn into_chunks(self) -> impl Stream<Item = OpenAiStreamChunk> {
        futures_util::stream::unfold(self, |mut translator| async move {
            translator.next_chunk().await.map(|chunk| (chunk, translator))
        })
    }

    fn tool_call_chunk(&self, call: ToolInvocation) -> OpenAiStreamChunk {
        self.chunk(
            OpenAiStreamDelta {
                role: None,
                content: None,
                tool_calls: Some(vec![OpenAiStreamToolCall {
                    index: 0,
                    id: Some(call.id),
                    tool_type: Some("function".to_owned()),
                    function: Some(OpenAiStreamFunctionCall {
                        name: Some(call.name),
                        arguments: Some(call.arguments),
                    }),
                }]),
            },
            Some(OpenAiFinishReason::Stop),
            None,
        )
    }

    fn chunk(
        &self,
        delta: OpenAiStreamDelta,
        finish_reason: Option<OpenAiFinishReason>,
        usage: Option<OpenAiUsage>,
    ) -> OpenAiStreamChunk {
        OpenAiStreamChunk {
            id: chunk_id(),
            object: "chat.completion.chunk".to_owned(),
            created: unix_timestamp(),
            model: self.model.clone(),
            choices: vec![OpenAiStreamChoice {
                index: 0,
                delta,
                finish_reason,
            }],
            usage,
        }
    }
}

/// Fresh identifier for one chunk
fn chunk_id() -> String {
    format!("chatcmpl-{}", uuid::Uuid::new_v4().simple())
}

/// Current time in epoch seconds
fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

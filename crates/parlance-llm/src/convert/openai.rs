//! Conversion between canonical types and the `OpenAI` wire format
//!
//! Inbound: wire request → canonical invocation request, normalizing every
//! message shape. Outbound: completed generation result → wire response.
//! Both directions are exhaustive matches over closed unions; a new wire
//! shape is a compile-time-visible gap here, never a silent drop.

use url::Url;

use crate::error::LlmError;
use crate::protocol::openai::{
    OpenAiAssistantContent, OpenAiAssistantPart, OpenAiChoice, OpenAiChoiceMessage, OpenAiFinishReason,
    OpenAiForcedTool, OpenAiFunctionCall, OpenAiMessage, OpenAiRequest, OpenAiResponse, OpenAiStop,
    OpenAiTextContent, OpenAiTextPart, OpenAiTool, OpenAiToolCall, OpenAiToolChoice, OpenAiToolChoiceMode,
    OpenAiUsage, OpenAiUserContent, OpenAiUserPart,
};
use crate::types::{
    Content, ContentPart, FinishReason, GenerateRequest, GenerationParams, GenerationResult, Message, Role,
    ToolChoice, ToolSpec, Usage,
};

// -- Inbound: wire request -> canonical invocation request --

/// Translate a full wire request body into a canonical invocation request
///
/// Model resolution happens separately; the wire `model` and `stream`
/// fields are the caller's concern.
pub fn translate_request(request: OpenAiRequest) -> Result<GenerateRequest, LlmError> {
    let messages = request
        .messages
        .into_iter()
        .map(normalize_message)
        .collect::<Result<Vec<_>, _>>()?;

    let stop = request.stop.map(|stop| match stop {
        OpenAiStop::One(sequence) => vec![sequence],
        OpenAiStop::Many(sequences) => sequences,
    });

    let tools = request.tools.map(|tools| {
        tools
            .into_iter()
            .map(|tool| {
                let OpenAiTool::Function { function } = tool;
                (
                    function.name,
                    ToolSpec::Function {
                        description: function.description,
                        parameters: function.parameters,
                    },
                )
            })
            .collect()
    });

    let tool_choice = request.tool_choice.map(|choice| match choice {
        OpenAiToolChoice::Mode(OpenAiToolChoiceMode::Auto) => ToolChoice::Auto,
        OpenAiToolChoice::Mode(OpenAiToolChoiceMode::None) => ToolChoice::None,
        OpenAiToolChoice::Mode(OpenAiToolChoiceMode::Required) => ToolChoice::Required,
        OpenAiToolChoice::Forced(OpenAiForcedTool::Function { function }) => {
            ToolChoice::Tool { name: function.name }
        }
    });

    Ok(GenerateRequest {
        messages,
        params: GenerationParams {
            temperature: request.temperature,
            top_p: request.top_p,
            max_tokens: request.max_tokens,
            stop,
            frequency_penalty: request.frequency_penalty,
            presence_penalty: request.presence_penalty,
            seed: request.seed,
        },
        tools,
        tool_choice,
    })
}

/// Normalize one wire message into exactly one canonical message
pub fn normalize_message(message: OpenAiMessage) -> Result<Message, LlmError> {
    let message = match message {
        // developer is the modern spelling of system
        OpenAiMessage::System { content } | OpenAiMessage::Developer { content } => {
            Message::text(Role::System, flatten_text_content(content))
        }

        // compatibility shim for the deprecated function role
        OpenAiMessage::Function { content, .. } => Message::text(Role::System, content.unwrap_or_default()),

        // assistant turns are flattened to text; part boundaries are lost
        OpenAiMessage::Assistant { content } => {
            let text = match content {
                None => String::new(),
                Some(OpenAiAssistantContent::Text(text)) => text,
                Some(OpenAiAssistantContent::Parts(parts)) => parts
                    .into_iter()
                    .map(|part| match part {
                        OpenAiAssistantPart::Text { text } => text,
                        OpenAiAssistantPart::Refusal { refusal } => refusal,
                    })
                    .collect(),
            };
            Message::text(Role::Assistant, text)
        }

        OpenAiMessage::User { content } => {
            let content = match content {
                OpenAiUserContent::Text(text) => Content::Text(text),
                OpenAiUserContent::Parts(parts) => Content::Parts(
                    parts
                        .into_iter()
                        .map(normalize_user_part)
                        .collect::<Result<Vec<_>, _>>()?,
                ),
            };
            Message { role: Role::User, content }
        }

        // plain-string tool results carry no structured payload
        OpenAiMessage::Tool { tool_call_id, content } => {
            let parts = match content {
                None | Some(OpenAiTextContent::Text(_)) => Vec::new(),
                Some(OpenAiTextContent::Parts(parts)) => parts
                    .into_iter()
                    .map(|part| {
                        let OpenAiTextPart::Text { text } = part;
                        ContentPart::ToolResult {
                            tool_call_id: tool_call_id.clone(),
                            name: tool_call_id.clone(),
                            content: text,
                        }
                    })
                    .collect(),
            };
            Message {
                role: Role::Tool,
                content: Content::Parts(parts),
            }
        }
    };

    Ok(message)
}

/// Normalize one multimodal user content part
fn normalize_user_part(part: OpenAiUserPart) -> Result<ContentPart, LlmError> {
    Ok(match part {
        OpenAiUserPart::Text { text } => ContentPart::Text { text },
        OpenAiUserPart::ImageUrl { image_url } => ContentPart::Image {
            url: Url::parse(&image_url.url).map_err(|source| LlmError::MalformedUrl {
                url: image_url.url,
                source,
            })?,
        },
        OpenAiUserPart::File { file } => ContentPart::File {
            data: file.file_data.unwrap_or_default(),
            media_type: None,
        },
        OpenAiUserPart::InputAudio { input_audio } => ContentPart::File {
            data: input_audio.data,
            media_type: Some(audio_media_type(&input_audio.format).to_owned()),
        },
    })
}

/// MIME type for a wire audio format tag
fn audio_media_type(format: &str) -> &'static str {
    match format {
        "mp3" => "audio/mpeg",
        _ => "audio/wav",
    }
}

/// Concatenate text-only content into one string
fn flatten_text_content(content: OpenAiTextContent) -> String {
    match content {
        OpenAiTextContent::Text(text) => text,
        OpenAiTextContent::Parts(parts) => parts
            .into_iter()
            .map(|part| {
                let OpenAiTextPart::Text { text } = part;
                text
            })
            .collect(),
    }
}

// -- Finish reason mapping --

/// Map a canonical finish reason into the wire vocabulary
///
/// The wire protocol has no unspecified terminal state, so the non-specific
/// reasons (`Unknown`, `Error`, `Other`) all resolve to `stop`.
/// `function_call` exists in the wire vocabulary but is never produced.
pub const fn map_finish_reason(reason: FinishReason) -> OpenAiFinishReason {
    match reason {
        FinishReason::Length => OpenAiFinishReason::Length,
        FinishReason::ContentFilter => OpenAiFinishReason::ContentFilter,
        FinishReason::ToolCalls => OpenAiFinishReason::ToolCalls,
        FinishReason::Stop | FinishReason::Unknown | FinishReason::Error | FinishReason::Other => {
            OpenAiFinishReason::Stop
        }
    }
}

// -- Outbound: generation result -> wire response --

/// Assemble the wire response for a completed generation result
pub fn assemble_response(result: GenerationResult) -> OpenAiResponse {
    let tool_calls = if result.tool_calls.is_empty() {
        None
    } else {
        Some(
            result
                .tool_calls
                .into_iter()
                .map(|call| OpenAiToolCall {
                    id: call.id,
                    tool_type: "function".to_owned(),
                    function: OpenAiFunctionCall {
                        name: call.name,
                        arguments: call.arguments,
                    },
                })
                .collect(),
        )
    };

    OpenAiResponse {
        id: result.id,
        object: "chat.completion".to_owned(),
        created: result.created_ms / 1000,
        model: result.model,
        choices: vec![OpenAiChoice {
            index: 0,
            message: OpenAiChoiceMessage {
                role: "assistant".to_owned(),
                content: result.text,
                refusal: String::new(),
                tool_calls,
            },
            logprobs: None,
            finish_reason: map_finish_reason(result.finish_reason),
        }],
        usage: result.usage.map(Into::into),
    }
}

impl From<Usage> for OpenAiUsage {
    fn from(usage: Usage) -> Self {
        Self {
            prompt_tokens: usage.input_tokens,
            completion_tokens: usage.output_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

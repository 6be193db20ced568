//! Stub language model returning canned results and scripted event streams

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parlance_llm::types::{FinishReason, GenerationEvent, GenerationResult, ToolInvocation, Usage};
use parlance_llm::{CompatState, EventStream, GenerateRequest, LanguageModel, LlmError};

/// Scripted stream event; cloneable so one stub can serve many requests
#[derive(Debug, Clone)]
pub enum StubEvent {
    Text(String),
    ToolCall { id: String, name: String, arguments: String },
    Finish { reason: FinishReason, usage: Option<Usage> },
    Error(String),
}

impl StubEvent {
    fn into_event(self) -> GenerationEvent {
        match self {
            Self::Text(fragment) => GenerationEvent::TextDelta(fragment),
            Self::ToolCall { id, name, arguments } => {
                GenerationEvent::ToolCall(ToolInvocation { id, name, arguments })
            }
            Self::Finish { reason, usage } => GenerationEvent::Finish { reason, usage },
            Self::Error(message) => GenerationEvent::Error(anyhow::anyhow!(message)),
        }
    }
}

/// Stub model with a canned result and an optional event script
pub struct StubModel {
    text: String,
    finish_reason: FinishReason,
    usage: Option<Usage>,
    tool_calls: Vec<ToolInvocation>,
    events: Vec<StubEvent>,
    calls: AtomicU32,
}

impl StubModel {
    /// Stub that completes with the given text and finish reason `stop`
    pub fn text(content: &str) -> Self {
        Self {
            text: content.to_owned(),
            finish_reason: FinishReason::Stop,
            usage: None,
            tool_calls: Vec::new(),
            events: Vec::new(),
            calls: AtomicU32::new(0),
        }
    }

    /// Stub whose streaming responses replay the given event script
    pub fn streaming(events: Vec<StubEvent>) -> Self {
        Self {
            events,
            ..Self::text("")
        }
    }

    pub fn with_finish_reason(mut self, reason: FinishReason) -> Self {
        self.finish_reason = reason;
        self
    }

    pub fn with_usage(mut self, input_tokens: u32, output_tokens: u32, total_tokens: u32) -> Self {
        self.usage = Some(Usage {
            input_tokens,
            output_tokens,
            total_tokens,
        });
        self
    }

    pub fn with_tool_call(mut self, id: &str, name: &str, arguments: &str) -> Self {
        self.tool_calls.push(ToolInvocation {
            id: id.to_owned(),
            name: name.to_owned(),
            arguments: arguments.to_owned(),
        });
        self
    }

    /// Number of generate/stream invocations this stub has served
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, _request: &GenerateRequest) -> Result<GenerationResult, LlmError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(GenerationResult {
            id: "gen-test-1".to_owned(),
            model: "stub-model".to_owned(),
            created_ms: 1_700_000_000_123,
            text: self.text.clone(),
            finish_reason: self.finish_reason,
            usage: self.usage,
            tool_calls: self.tool_calls.clone(),
        })
    }

    async fn generate_stream(&self, _request: &GenerateRequest) -> Result<EventStream, LlmError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let events: Vec<GenerationEvent> = self.events.iter().cloned().map(StubEvent::into_event).collect();
        Ok(Box::pin(futures_util::stream::iter(events)))
    }
}

/// State serving exactly one registered model
pub fn single_model(name: &str, model: Arc<StubModel>) -> CompatState {
    let mut models: HashMap<String, Arc<dyn LanguageModel>> = HashMap::new();
    models.insert(name.to_owned(), model);
    CompatState::from_models(models)
}

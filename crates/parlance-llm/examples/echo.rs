//! Minimal host embedding: serve the compatibility router over an echo model
//!
//! ```sh
//! cargo run --example echo
//! curl -s localhost:3000/v1/chat/completions \
//!   -H 'content-type: application/json' \
//!   -d '{"model":"echo","messages":[{"role":"user","content":"hi"}]}'
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use futures_util::stream;
use parlance_llm::types::{Content, FinishReason, GenerationEvent, GenerationResult, Role};
use parlance_llm::{CompatState, EventStream, GenerateRequest, LanguageModel, LlmError, compat_router};

/// Model that repeats the last user message back
struct EchoModel;

impl EchoModel {
    fn last_user_text(request: &GenerateRequest) -> String {
        request
            .messages
            .iter()
            .rev()
            .find(|message| message.role == Role::User)
            .map_or_else(String::new, |message| match &message.content {
                Content::Text(text) => text.clone(),
                Content::Parts(_) => "(multimodal message)".to_owned(),
            })
    }

    fn now_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }
}

#[async_trait]
impl LanguageModel for EchoModel {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResult, LlmError> {
        Ok(GenerationResult {
            id: format!("echo-{}", Self::now_ms()),
            model: "echo".to_owned(),
            created_ms: Self::now_ms(),
            text: Self::last_user_text(request),
            finish_reason: FinishReason::Stop,
            usage: None,
            tool_calls: Vec::new(),
        })
    }

    async fn generate_stream(&self, request: &GenerateRequest) -> Result<EventStream, LlmError> {
        let mut events: Vec<GenerationEvent> = Self::last_user_text(request)
            .split_inclusive(' ')
            .map(|word| GenerationEvent::TextDelta(word.to_owned()))
            .collect();
        events.push(GenerationEvent::Finish {
            reason: FinishReason::Stop,
            usage: None,
        });
        Ok(Box::pin(stream::iter(events)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut models: HashMap<String, Arc<dyn LanguageModel>> = HashMap::new();
    models.insert("echo".to_owned(), Arc::new(EchoModel));

    let router = compat_router(CompatState::from_models(models));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!(addr = %listener.local_addr()?, "serving");
    axum::serve(listener, router).await?;

    Ok(())
}

//! Model-invocation and model-resolution collaborator seams
//!
//! The host supplies implementations; this layer only translates to and
//! from their request/result shapes.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::Stream;

use crate::error::LlmError;
use crate::types::{GenerateRequest, GenerationEvent, GenerationResult};

/// Live sequence of generation events from a streaming invocation
pub type EventStream = Pin<Box<dyn Stream<Item = GenerationEvent> + Send>>;

/// A language model the translation layer can invoke
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a complete response
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResult, LlmError>;

    /// Generate a streaming response
    async fn generate_stream(&self, request: &GenerateRequest) -> Result<EventStream, LlmError>;
}

/// Resolves a wire-level model id to a model handle
#[async_trait]
pub trait ModelResolver: Send + Sync {
    /// Look up a model by id; `None` means the id is not served here
    async fn resolve(&self, model: &str) -> Option<Arc<dyn LanguageModel>>;
}

/// Where model handles come from: a fixed registry or a host resolver
pub enum ModelSource {
    /// Static mapping from model id to handle
    Static(HashMap<String, Arc<dyn LanguageModel>>),
    /// Host-supplied asynchronous resolver
    Resolver(Arc<dyn ModelResolver>),
}

impl ModelSource {
    /// Resolve a model id to a handle
    pub async fn resolve(&self, model: &str) -> Option<Arc<dyn LanguageModel>> {
        match self {
            Self::Static(models) => models.get(model).cloned(),
            Self::Resolver(resolver) => resolver.resolve(model).await,
        }
    }
}

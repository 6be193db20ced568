//! Shared handler state
//!
//! Built once by the host and cloned per request; everything inside is
//! immutable, so no request can observe another.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::KeyVerifier;
use crate::model::{LanguageModel, ModelResolver, ModelSource};

/// State for the compatibility endpoint handlers
#[derive(Clone)]
pub struct CompatState {
    models: Arc<ModelSource>,
    verifier: Option<Arc<dyn KeyVerifier>>,
}

impl CompatState {
    /// Build state over a static model registry
    pub fn from_models(models: HashMap<String, Arc<dyn LanguageModel>>) -> Self {
        Self::from_source(ModelSource::Static(models))
    }

    /// Build state over a host-supplied resolver
    pub fn from_resolver(resolver: Arc<dyn ModelResolver>) -> Self {
        Self::from_source(ModelSource::Resolver(resolver))
    }

    fn from_source(models: ModelSource) -> Self {
        Self {
            models: Arc::new(models),
            verifier: None,
        }
    }

    /// Require bearer keys to pass the given verifier
    #[must_use]
    pub fn with_key_verifier(self, verifier: Arc<dyn KeyVerifier>) -> Self {
        Self {
            verifier: Some(verifier),
            ..self
        }
    }

    /// Resolve a model id to a handle
    pub async fn resolve(&self, model: &str) -> Option<Arc<dyn LanguageModel>> {
        self.models.resolve(model).await
    }

    /// The configured key verifier, if any
    pub fn key_verifier(&self) -> Option<&Arc<dyn KeyVerifier>> {
        self.verifier.as_ref()
    }
}

//! OpenAI-compatible chat-completions front for provider-agnostic language models
//!
//! Accepts requests in the `OpenAI` chat-completion wire format, normalizes
//! them into a canonical internal representation, invokes an abstract
//! [`LanguageModel`], and translates the result (or live event stream) back
//! into the wire protocol's response and SSE chunk formats. The layer is
//! stateless and per-request; providers, retries, and routing live behind
//! the [`LanguageModel`] and [`ModelResolver`] seams supplied by the host.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod auth;
pub mod convert;
pub mod error;
#[cfg(feature = "http")]
pub mod handler;
pub mod model;
pub mod protocol;
pub mod state;
pub mod stream;
pub mod types;

pub use auth::{KeyVerifier, StaticKeys};
pub use error::LlmError;
#[cfg(feature = "http")]
pub use handler::compat_router;
pub use model::{EventStream, LanguageModel, ModelResolver, ModelSource};
pub use state::CompatState;
pub use stream::StreamTranslator;
pub use types::{GenerateRequest, GenerationEvent, GenerationResult};

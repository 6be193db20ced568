//! Axum route handlers for the `OpenAI`-compatible endpoint

use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, middleware, routing};
use futures_util::{Stream, StreamExt, future, stream};
use parlance_core::HttpError;

use crate::convert;
use crate::error::LlmError;
use crate::protocol::openai::{OpenAiErrorDetail, OpenAiErrorResponse, OpenAiRequest};
use crate::state::CompatState;
use crate::stream::StreamTranslator;
use crate::types::GenerationEvent;

/// SSE termination sentinel
const DONE_SENTINEL: &str = "[DONE]";

/// Build the compatibility router
///
/// The host nests this at its preferred mount; the bearer-key check runs
/// before any body handling.
pub fn compat_router(state: CompatState) -> Router {
    Router::new()
        .route("/v1/chat/completions", routing::post(chat_completions))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .with_state(state)
}

/// Reject requests whose bearer key is missing or fails verification
///
/// Runs strictly before body parsing; with no verifier configured every
/// request passes through.
async fn require_api_key(State(state): State<CompatState>, request: Request, next: Next) -> Response {
    let Some(verifier) = state.key_verifier() else {
        return next.run(request).await;
    };

    let key = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(key) = key else {
        return error_response(&LlmError::MissingApiKey);
    };

    if verifier.verify(key).await {
        next.run(request).await
    } else {
        tracing::warn!("bearer key failed verification");
        error_response(&LlmError::InvalidApiKey)
    }
}

/// Handle `POST /v1/chat/completions`
async fn chat_completions(
    State(state): State<CompatState>,
    payload: Result<Json<OpenAiRequest>, JsonRejection>,
) -> Response {
    let Json(wire_request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(&LlmError::InvalidRequest(rejection.body_text())),
    };

    let is_stream = wire_request.stream.unwrap_or(false);
    let model_id = wire_request.model.clone();

    let Some(model) = state.resolve(&model_id).await else {
        tracing::debug!(model = %model_id, "requested model is not served here");
        return error_response(&LlmError::ModelNotFound { model: model_id });
    };

    // translation failures (e.g. a malformed image URL) reject the request
    // before the model is ever invoked
    let request = match convert::openai::translate_request(wire_request) {
        Ok(request) => request,
        Err(error) => return error_response(&error),
    };

    if is_stream {
        match model.generate_stream(&request).await {
            Ok(events) => {
                let translator = StreamTranslator::new(events, model_id);
                Sse::new(sse_events(translator))
                    .keep_alive(KeepAlive::default())
                    .into_response()
            }
            Err(error) => error_response(&error),
        }
    } else {
        match model.generate(&request).await {
            Ok(result) => Json(convert::openai::assemble_response(result)).into_response(),
            Err(error) => error_response(&error),
        }
    }
}

/// Frame translated chunks as SSE events, terminated by the sentinel
fn sse_events<S>(translator: StreamTranslator<S>) -> impl Stream<Item = Result<Event, axum::Error>>
where
    S: Stream<Item = GenerationEvent> + Unpin,
{
    translator
        .into_chunks()
        .map(|chunk| {
            let data = serde_json::to_string(&chunk).unwrap_or_default();
            Ok(Event::default().data(data))
        })
        .chain(stream::once(future::ready(Ok(
            Event::default().data(DONE_SENTINEL)
        ))))
}

/// Render a domain error as a wire-format error response
fn error_response(error: &LlmError) -> Response {
    let body = OpenAiErrorResponse {
        error: OpenAiErrorDetail {
            message: error.client_message(),
            error_type: error.error_type().to_owned(),
            code: None,
        },
    };

    (error.status_code(), Json(body)).into_response()
}

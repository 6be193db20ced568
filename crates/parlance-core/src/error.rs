use http::StatusCode;

/// Trait for domain errors that surface as HTTP responses
///
/// Implemented by each feature crate's error enum. The handler layer turns
/// these into wire-format error bodies, so domain crates never depend on a
/// specific HTTP framework for their error semantics.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

//! HTTP surface: the trigger route and its shared state.
//!
//! Life of a request:
//! 1. Body bytes come in (possibly empty or malformed)
//! 2. Extract the optional `apiKey` credential
//! 3. Ask the [`AuthGate`] for a decision
//! 4. Rejected: 400 `Not authorized`. Fulfilled: the prebuilt payload.
//!
//! Exactly one log line is written per request.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::animation::{WaveParameters, WaveParametersError, led_pattern};
use crate::auth::{AuthDecision, AuthGate, Credential};

/// Route a display polls for its animation.
pub const TRIGGER_PATH: &str = "/api/LEDTrigger";
/// Body of every rejected request.
pub const NOT_AUTHORIZED: &str = "Not authorized";

/// Error returned when the response payload cannot be prepared.
#[derive(Debug)]
pub enum PayloadError {
    /// The wave layers could not be composed.
    Compose(WaveParametersError),
    /// The parameters could not be encoded as JSON.
    Serialize(serde_json::Error),
    /// The computed entity tag is not a valid header value.
    InvalidEtag(String),
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compose(e) => write!(f, "failed to compose waves: {e}"),
            Self::Serialize(e) => write!(f, "failed to serialize wave parameters: {e}"),
            Self::InvalidEtag(tag) => write!(f, "invalid entity tag: {tag}"),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Compose(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::InvalidEtag(_) => None,
        }
    }
}

impl From<WaveParametersError> for PayloadError {
    fn from(e: WaveParametersError) -> Self {
        Self::Compose(e)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriggerResponse<'a> {
    wave_parameters: &'a WaveParameters,
}

/// The success response body, encoded once and reused for every request.
///
/// # Invariants
/// - `body` is the JSON encoding of `{ "waveParameters": parameters }`.
/// - `etag` is derived from `body` alone, so identical bodies share a tag.
///
/// The tag is informational: displays can compare it with the last one they
/// rendered. Conditional request headers such as `If-None-Match` are not
/// evaluated, so an authorized request always gets the full body.
#[derive(Debug, Clone)]
pub struct AnimationPayload {
    parameters: WaveParameters,
    body: Bytes,
    etag: HeaderValue,
}

impl AnimationPayload {
    /// Encode `parameters` as a success response body.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn new(parameters: WaveParameters) -> Result<Self, PayloadError> {
        let body = serde_json::to_vec(&TriggerResponse {
            wave_parameters: &parameters,
        })
        .map_err(PayloadError::Serialize)?;

        let tag = format!("\"{:08x}\"", crc32fast::hash(&body));
        let etag = HeaderValue::try_from(tag.as_str()).map_err(|_| PayloadError::InvalidEtag(tag))?;

        Ok(Self {
            parameters,
            body: Bytes::from(body),
            etag,
        })
    }

    /// The payload for [`led_pattern`].
    ///
    /// # Errors
    /// Returns an error if the pattern cannot be composed or encoded.
    pub fn led_pattern() -> Result<Self, PayloadError> {
        Self::new(led_pattern()?)
    }

    #[must_use]
    pub const fn parameters(&self) -> &WaveParameters {
        &self.parameters
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[must_use]
    pub const fn etag(&self) -> &HeaderValue {
        &self.etag
    }
}

impl IntoResponse for &AnimationPayload {
    fn into_response(self) -> Response {
        (
            [
                (
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                ),
                (header::ETAG, self.etag.clone()),
            ],
            self.body.clone(),
        )
            .into_response()
    }
}

/// State shared by every request. Both fields are read-only.
#[derive(Clone)]
#[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected for shared state
pub struct AppState {
    pub gate: Arc<AuthGate>,
    pub payload: Arc<AnimationPayload>,
}

impl AppState {
    #[must_use]
    pub fn new(gate: AuthGate, payload: AnimationPayload) -> Self {
        Self {
            gate: Arc::new(gate),
            payload: Arc::new(payload),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(TRIGGER_PATH, get(trigger).post(trigger))
        .with_state(state)
}

/// Authorize the caller and, on success, send the animation parameters.
///
/// A body that cannot be read counts as carrying no credential.
pub async fn trigger(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let credential = body.ok().and_then(|body| Credential::from_body(&body));

    match state.gate.authorize(credential.as_ref()) {
        AuthDecision::Rejected => {
            tracing::warn!("Invalid API key");
            (StatusCode::BAD_REQUEST, NOT_AUTHORIZED).into_response()
        }
        AuthDecision::Fulfilled => {
            tracing::info!("Successfully authorized, sending animation parameters");
            state.payload.as_ref().into_response()
        }
    }
}

//! Axum Handlers for the Token API
//!
//! This module contains the liveness probe, the diagnostic probe, and the
//! token-issuance handler, plus the mapping from typed failures to HTTP
//! responses. It uses `utoipa` doc comments to generate OpenAPI documentation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use openai_session::{CreateSessionRequest, SessionError, TurnDetection, consts};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    models::{DiagnosticResponse, ErrorResponse, HealthResponse, TokenResponse},
    state::AppState,
};

/// The persona and turn-detection configuration forwarded verbatim to the
/// provider on every session request.
const SCENE_PARTNER_INSTRUCTIONS: &str = "\
You are an improv comedy scene partner. Follow these rules:
1. Always say \"Yes, and...\" - accept what your scene partner offers and build on it
2. Keep responses under 8 seconds of speech
3. Be witty, playful, and engaging
4. Create characters and scenarios spontaneously
5. Make bold, interesting choices
6. Listen actively and respond to what your partner gives you
7. Have fun and be spontaneous!
Remember: The goal is comedy through collaboration.";

fn scene_partner_session() -> CreateSessionRequest {
    CreateSessionRequest {
        model: consts::DEFAULT_MODEL.to_string(),
        voice: "alloy".to_string(),
        instructions: SCENE_PARTNER_INSTRUCTIONS.to_string(),
        turn_detection: TurnDetection::ServerVad {
            threshold: 0.5,
            prefix_padding_ms: 300,
            silence_duration_ms: 500,
            create_response: true,
            interrupt_response: true,
        },
    }
}

/// First 10 characters of the key plus an ellipsis, or `None` when no key
/// is set. Never the full key.
fn key_preview(key: &str) -> String {
    if key.is_empty() {
        "None".to_string()
    } else {
        let head: String = key.chars().take(10).collect();
        format!("{}...", head)
    }
}

pub enum ApiError {
    MissingApiKey,
    Session(SessionError),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::MissingApiKey => {
                error!("Token requested but no OpenAI API key is configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "OpenAI API key not configured".to_string(),
                )
            }
            ApiError::Session(err) => {
                match &err {
                    SessionError::Rejected { status, .. } => {
                        warn!(status = %status, "Provider rejected the session request");
                    }
                    SessionError::Transport(transport) => {
                        error!("Session request failed: {}", transport);
                    }
                }
                // SessionError and axum may pin different `http` versions, so
                // convert through the raw status number.
                let status = StatusCode::from_u16(err.status().as_u16())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, err.to_string())
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Diagnostic probe reporting whether an API key is configured.
///
/// Discloses a redacted preview of the key, so the route is only mounted
/// outside the production environment.
#[utoipa::path(
    get,
    path = "/api/test",
    tag = "auth",
    responses(
        (status = 200, description = "Key configuration status", body = DiagnosticResponse)
    )
)]
pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticResponse> {
    let key = &state.settings.openai_api_key;
    Json(DiagnosticResponse {
        status: "ok".to_string(),
        api_key_configured: !key.is_empty(),
        api_key_preview: key_preview(key),
    })
}

/// Issue an ephemeral token for the OpenAI Realtime API.
///
/// The frontend uses this token to connect directly to the provider's WebRTC
/// endpoint without ever seeing the long-lived API key.
#[utoipa::path(
    post,
    path = "/api/token",
    tag = "auth",
    responses(
        (status = 200, description = "Ephemeral token issued", body = TokenResponse),
        (status = 500, description = "Missing API key or session failure", body = ErrorResponse)
    )
)]
pub async fn issue_token(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokenResponse>, ApiError> {
    // No client without a key: the missing-key case never reaches the network.
    let client = state.openai.as_ref().ok_or(ApiError::MissingApiKey)?;

    info!("Issuing ephemeral Realtime token");
    let session = client.create_session(&scene_partner_session()).await?;

    Ok(Json(TokenResponse::new(
        session.secret_value(),
        session.rtc_url(),
    )))
}

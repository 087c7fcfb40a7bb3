//! API Response Models
//!
//! This module defines the wire shapes returned by the handlers and used for
//! generating OpenAPI documentation with `utoipa`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifetime of an issued token.
pub const TOKEN_TTL_SECS: i64 = 300;

/// The ephemeral credential handed to the frontend.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TokenResponse {
    #[schema(example = "eph_abc123")]
    pub token: String,
    #[schema(example = "wss://api.openai.com/v1/realtime")]
    pub rtc_url: String,
    #[schema(example = "2024-01-15T10:35:00.000000Z")]
    pub expires_at: String,
}

impl TokenResponse {
    /// Builds a response expiring `TOKEN_TTL_SECS` from now, UTC,
    /// microsecond precision, `Z`-suffixed.
    pub fn new(token: impl Into<String>, rtc_url: impl Into<String>) -> Self {
        let expires_at = (Utc::now() + chrono::Duration::seconds(TOKEN_TTL_SECS))
            .to_rfc3339_opts(SecondsFormat::Micros, true);
        Self {
            token: token.into(),
            rtc_url: rtc_url.into(),
            expires_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DiagnosticResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub api_key_configured: bool,
    #[schema(example = "sk-proj-ab...")]
    pub api_key_preview: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}

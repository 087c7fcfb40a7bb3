//! Request and response shapes for the Realtime sessions endpoint.

use serde::{Deserialize, Serialize};

/// Body of a session-creation request, sent verbatim to the provider.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest {
    pub model: String,
    pub voice: String,
    pub instructions: String,
    pub turn_detection: TurnDetection,
}

/// Provider-side voice-activity detection configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnDetection {
    ServerVad {
        threshold: f32,
        prefix_padding_ms: u32,
        silence_duration_ms: u32,
        create_response: bool,
        interrupt_response: bool,
    },
}

/// Provider reply, modelled only for the fields we consume.
///
/// The fields are optional: an absent `client_secret` or `session` degrades
/// to an empty credential rather than an error. A body that does not match
/// this shape at all fails deserialization and surfaces as a transport error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionResponse {
    #[serde(default)]
    pub client_secret: Option<ClientSecret>,
    #[serde(default)]
    pub session: Option<SessionInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecret {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    #[serde(default)]
    pub rtc_url: String,
}

impl CreateSessionResponse {
    /// The ephemeral client secret, or `""` when the provider omitted it.
    pub fn secret_value(&self) -> &str {
        self.client_secret.as_ref().map_or("", |s| s.value.as_str())
    }

    /// The WebRTC connection URL, or `""` when the provider omitted it.
    pub fn rtc_url(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.rtc_url.as_str())
    }
}

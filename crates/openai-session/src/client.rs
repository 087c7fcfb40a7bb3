//! The HTTP client that mints ephemeral Realtime sessions.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::consts;
use crate::error::SessionError;
use crate::types::{CreateSessionRequest, CreateSessionResponse};

/// Client for the provider's session-creation endpoint.
///
/// Holds the API key as a secret and an overridable API base so tests can
/// point it at a mock server. One call, one attempt, 30-second timeout.
pub struct SessionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: SecretString,
    organization: Option<String>,
}

impl SessionClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: consts::API_BASE.to_string(),
            api_key: SecretString::from(api_key.into()),
            organization: None,
        }
    }

    /// Overrides the API base, e.g. `http://127.0.0.1:9000/v1` for tests.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sends the `OpenAI-Organization` header on every request.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Creates one ephemeral Realtime session.
    ///
    /// A non-200 reply is a [`SessionError::Rejected`] carrying the
    /// provider's status and raw body; a failed exchange (connect error,
    /// timeout, body that does not match the session schema) is a
    /// [`SessionError::Transport`].
    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<CreateSessionResponse, SessionError> {
        let url = format!("{}{}", self.api_base, consts::SESSIONS_PATH);
        debug!(url = %url, model = %request.model, "Creating Realtime session");

        let mut builder = self
            .http
            .post(&url)
            .timeout(consts::REQUEST_TIMEOUT)
            .bearer_auth(self.api_key.expose_secret())
            .json(request);
        if let Some(organization) = &self.organization {
            builder = builder.header(consts::OPENAI_ORGANIZATION_HEADER, organization);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            warn!(status = %status, "Realtime session request rejected");
            return Err(SessionError::Rejected { status, body });
        }

        let session = response.json::<CreateSessionResponse>().await?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TurnDetection;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_request() -> CreateSessionRequest {
        CreateSessionRequest {
            model: consts::DEFAULT_MODEL.to_string(),
            voice: "alloy".to_string(),
            instructions: "Be brief.".to_string(),
            turn_detection: TurnDetection::ServerVad {
                threshold: 0.5,
                prefix_padding_ms: 300,
                silence_duration_ms: 500,
                create_response: true,
                interrupt_response: true,
            },
        }
    }

    #[tokio::test]
    async fn test_create_session_sends_bearer_auth_and_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/realtime/sessions"))
            .and(header("Authorization", "Bearer sk-test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": consts::DEFAULT_MODEL,
                "voice": "alloy",
                "turn_detection": {"type": "server_vad", "threshold": 0.5},
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "client_secret": {"value": "abc"},
                "session": {"rtc_url": "wss://x"},
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SessionClient::new("sk-test-key").with_api_base(server.uri());
        let session = client.create_session(&test_request()).await.unwrap();

        assert_eq!(session.secret_value(), "abc");
        assert_eq!(session.rtc_url(), "wss://x");
    }

    #[tokio::test]
    async fn test_organization_header_sent_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/realtime/sessions"))
            .and(header("OpenAI-Organization", "org-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SessionClient::new("sk-test-key")
            .with_api_base(server.uri())
            .with_organization("org-test");
        client.create_session(&test_request()).await.unwrap();
    }

    #[tokio::test]
    async fn test_organization_header_absent_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/realtime/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SessionClient::new("sk-test-key").with_api_base(server.uri());
        client.create_session(&test_request()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(
            !requests[0]
                .headers
                .contains_key(consts::OPENAI_ORGANIZATION_HEADER)
        );
    }

    #[tokio::test]
    async fn test_rejection_carries_status_and_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/realtime/sessions"))
            .respond_with(
                ResponseTemplate::new(429).set_body_string(r#"{"error":"rate_limited"}"#),
            )
            .mount(&server)
            .await;

        let client = SessionClient::new("sk-test-key").with_api_base(server.uri());
        let err = client.create_session(&test_request()).await.unwrap_err();

        match err {
            SessionError::Rejected { status, ref body } => {
                assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
                assert_eq!(body, r#"{"error":"rate_limited"}"#);
            }
            other => panic!("Expected Rejected, got {:?}", other),
        }
        assert!(
            err.to_string()
                .contains(r#"OpenAI API error: {"error":"rate_limited"}"#)
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/realtime/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = SessionClient::new("sk-test-key").with_api_base(server.uri());
        let err = client.create_session(&test_request()).await.unwrap_err();

        assert!(matches!(err, SessionError::Transport(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

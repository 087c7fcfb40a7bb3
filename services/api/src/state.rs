//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the immutable
//! settings and the provider client, created once at startup and passed to
//! all handlers.

use crate::config::Settings;
use openai_session::SessionClient;

/// The shared application state. `openai` is `None` exactly when no API key
/// is configured, so the missing-key failure is decided before any client
/// exists to call.
pub struct AppState {
    pub settings: Settings,
    pub openai: Option<SessionClient>,
}

impl AppState {
    /// Builds the state from loaded settings, constructing the session
    /// client only when an API key is present.
    pub fn from_settings(settings: Settings) -> Self {
        let openai = if settings.api_key_configured() {
            let mut client = SessionClient::new(settings.openai_api_key.clone());
            if let Some(organization) = &settings.openai_org_id {
                client = client.with_organization(organization.clone());
            }
            Some(client)
        } else {
            None
        };
        Self { settings, openai }
    }
}

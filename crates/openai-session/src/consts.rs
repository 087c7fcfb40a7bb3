use std::time::Duration;

pub const API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-realtime-preview-2024-10-01";

pub const SESSIONS_PATH: &str = "/realtime/sessions";
pub const OPENAI_ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Single-attempt bound on the outbound call; there is no retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

use reqwest::StatusCode;

/// Failure modes of a session-creation call.
///
/// The set is closed so callers can discriminate on the variant instead of
/// matching on message text: the provider either rejected the request with a
/// status of its own, or the exchange itself failed (connect error, timeout,
/// a body that does not match the session schema).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("OpenAI API error: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl SessionError {
    /// HTTP status to surface for this failure: the provider's own status
    /// for a rejection, 500 for everything else.
    pub fn status(&self) -> StatusCode {
        match self {
            SessionError::Rejected { status, .. } => *status,
            SessionError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

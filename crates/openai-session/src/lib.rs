//! Client for the OpenAI Realtime sessions REST endpoint.
//!
//! This crate mints ephemeral session credentials: one `POST` to
//! `/realtime/sessions` with the session configuration, returning a
//! short-lived client secret the browser uses to connect directly to the
//! Realtime API. The long-lived API key never leaves the backend.

pub mod client;
pub mod consts;
pub mod error;
pub mod types;

pub use client::SessionClient;
pub use error::SessionError;
pub use types::{CreateSessionRequest, CreateSessionResponse, TurnDetection};

// Re-exported because `SessionError::Rejected` carries one.
pub use reqwest::StatusCode;

//! Improv API Library Crate
//!
//! This library contains the logic for the improv voice backend: the
//! application settings, the token-issuance handlers, the response models,
//! and the routing. The `api` binary is a thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the token API, the CORS policy, static-file serving in
//! production, and OpenAPI documentation.

use crate::{
    config::Settings,
    handlers,
    models::{DiagnosticResponse, ErrorResponse, HealthResponse, TokenResponse},
    state::AppState,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Improv Comedy Voice App",
        description = "Voice-driven comedy improv with OpenAI Realtime API"
    ),
    paths(handlers::health, handlers::diagnostics, handlers::issue_token),
    components(
        schemas(HealthResponse, DiagnosticResponse, TokenResponse, ErrorResponse)
    ),
    tags(
        (name = "auth", description = "Ephemeral token issuance for the realtime voice frontend")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
///
/// The diagnostic probe partially discloses the API key, so it is only
/// mounted outside the production environment; production instead serves the
/// prebuilt frontend bundle.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let mut token_api = Router::new().route("/token", post(handlers::issue_token));
    if !app_state.settings.environment.is_production() {
        token_api = token_api.route("/test", get(handlers::diagnostics));
    }

    let production = app_state.settings.environment.is_production();
    let static_dir = app_state.settings.static_dir.clone();

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", token_api)
        .with_state(app_state);

    if production {
        app = app
            .nest_service("/static", ServeDir::new(&static_dir))
            .route_service("/", ServeFile::new(static_dir.join("index.html")));
    }

    // Merge the stateful routes with the stateless Swagger UI.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(app)
}

/// CORS policy for the configured origin allowlist, with credentials.
///
/// The CORS protocol forbids combining a wildcard with credentials, so "all
/// methods, all headers" is expressed by mirroring the preflight request.
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .allowed_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

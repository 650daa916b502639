//! HTTP server for the admin configuration endpoint.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use cmsconf_core::Settings;
use tower_http::trace::TraceLayer;

use crate::schema;

/// Path the CMS admin loads its configuration from.
pub const CONFIG_ROUTE: &str = "/admin/config.yml";

/// Content type declared for the configuration document.
pub const YAML_CONTENT_TYPE: &str = "text/yaml";

/// Server state shared by all handlers.
#[derive(Clone)]
pub struct ServerState {
    /// Settings loaded at startup; never mutated.
    pub settings: Arc<Settings>,
}

impl ServerState {
    /// Create a new server state.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

/// Create the application router.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route(CONFIG_ROUTE, get(config_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the admin configuration, rebuilt on every request.
async fn config_handler(State(state): State<ServerState>) -> Response {
    match schema::document(&state.settings).to_yaml() {
        Ok(body) => ([(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize admin configuration: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn health_handler() -> &'static str {
    "ok"
}

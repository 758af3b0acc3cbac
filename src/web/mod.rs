use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::backend::{HttpBackend, MovieBackend};
use crate::config::Config;
use crate::services::{Catalog, Notifier, StatusReflector};

mod assets;
pub mod events;
mod pages;
mod types;

pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub catalog: Arc<Catalog>,

    pub status: Arc<StatusReflector>,

    pub notifier: Arc<Notifier>,
}

impl AppState {
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn MovieBackend> {
        self.catalog.backend()
    }
}

pub fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let backend = HttpBackend::new(&config.backend)
        .map_err(|e| anyhow::anyhow!("Failed to create backend client: {e}"))?;
    Ok(create_app_state_with_backend(config, Arc::new(backend)))
}

#[must_use]
pub fn create_app_state_with_backend(
    config: Config,
    backend: Arc<dyn MovieBackend>,
) -> Arc<AppState> {
    let notifier = Arc::new(Notifier::new(config.notifications.display_duration()));
    let catalog = Arc::new(Catalog::new(backend, Arc::clone(&notifier)));

    Arc::new(AppState {
        config: Arc::new(config),
        catalog,
        status: Arc::new(StatusReflector::new()),
        notifier,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;
    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(pages::index))
        .route("/movies", post(pages::submit_movie))
        .route("/reload", post(pages::reload))
        .route("/fragments/movies", get(pages::movies_fragment))
        .route("/status", get(pages::get_status))
        .route("/notification", get(pages::get_notification))
        .merge(events::router())
        .route("/assets/{*path}", get(assets::serve_asset))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

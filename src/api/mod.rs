use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod error;
mod observability;
mod profiles;
mod system;
mod types;
mod validation;
mod whitelist;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::Config;
use crate::db::{Database, Store};

pub struct AppState {
    pub database: Arc<Database>,

    pub store: Store,

    pub config: Config,

    pub start_time: Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

/// Connects the database, applies the schema and wires up the shared state.
pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let database = Arc::new(Database::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    ));
    let conn = database.connect().await?;
    let store = Store::new(conn);

    Ok(Arc::new(AppState {
        database,
        store,
        config,
        start_time: Instant::now(),
        prometheus_handle,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/profiles", get(profiles::list_profiles))
        .route("/profiles", post(profiles::create_profile))
        .route("/profiles/{id}", get(profiles::get_profile))
        .route("/profiles/{id}", put(profiles::update_profile))
        .route("/profiles/{id}", delete(profiles::delete_profile))
        .route("/profiles/{id}/whitelist", post(whitelist::add_entry))
        .route("/profiles/{id}/whitelist", get(whitelist::list_entries))
        .route("/profiles/{id}/whitelist", delete(whitelist::remove_entry))
        .route("/system/status", get(system::get_status))
        .route("/metrics", get(observability::get_metrics))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

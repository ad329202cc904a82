use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, SystemStatus};

/// Returns version, uptime, database health and row counts.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let database = state.store.ping().await.is_ok();
    let profile_count = state.store.profile_count().await?;
    let whitelist_count = state.store.whitelist_count().await?;

    let status = SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        database,
        profile_count,
        whitelist_count,
    };

    Ok(Json(ApiResponse::success(status)))
}

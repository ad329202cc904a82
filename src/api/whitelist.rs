use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, WhitelistEntryDto};
use crate::api::validation::{validate_media_type, validate_tmdb_id};
use crate::db::StoreError;

#[derive(Debug, Deserialize)]
pub struct WhitelistEntryRequest {
    pub tmdb_id: Option<String>,
    pub media_type: Option<String>,
}

pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    Json(payload): Json<WhitelistEntryRequest>,
) -> Result<Json<ApiResponse<WhitelistEntryDto>>, ApiError> {
    let tmdb_id = validate_tmdb_id(payload.tmdb_id.as_deref())?;
    let media_type = validate_media_type(payload.media_type.as_deref())?;

    match state
        .store
        .add_to_whitelist(&profile_id, tmdb_id, media_type)
        .await
    {
        Ok(entry) => Ok(Json(ApiResponse::success(WhitelistEntryDto::from(entry)))),
        Err(StoreError::UniqueViolation(_)) => Err(ApiError::conflict(
            "Content is already whitelisted for this profile",
        )),
        Err(StoreError::ForeignKeyViolation(_)) => Err(ApiError::validation(format!(
            "Profile {} does not exist",
            profile_id
        ))),
        Err(err) => Err(err.into()),
    }
}

pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<WhitelistEntryDto>>>, ApiError> {
    let entries = state.store.get_whitelist(&profile_id).await?;

    let dtos = entries.into_iter().map(WhitelistEntryDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Entries are addressed by `(profile, tmdb_id, media_type)`, not by row
/// id; removing a missing entry is a no-op.
pub async fn remove_entry(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
    Json(payload): Json<WhitelistEntryRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let tmdb_id = validate_tmdb_id(payload.tmdb_id.as_deref())?;
    let media_type = validate_media_type(payload.media_type.as_deref())?;

    state
        .store
        .remove_from_whitelist(&profile_id, tmdb_id, media_type)
        .await?;

    Ok(Json(ApiResponse::success(())))
}

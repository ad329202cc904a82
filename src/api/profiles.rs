use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, ProfileDto};
use crate::api::validation::validate_profile_name;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub pin: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub pin: Option<String>,
}

pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ProfileDto>>>, ApiError> {
    let profiles = state.store.list_profiles().await?;

    let dtos = profiles.into_iter().map(ProfileDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileDto>>, ApiError> {
    let name = validate_profile_name(payload.name.as_deref())?;

    let profile = state
        .store
        .create_profile(name, payload.avatar, payload.pin)
        .await?;

    Ok(Json(ApiResponse::success(ProfileDto::from(profile))))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProfileDto>>, ApiError> {
    let profile = state
        .store
        .get_profile(&id)
        .await?
        .ok_or_else(|| ApiError::profile_not_found(&id))?;

    Ok(Json(ApiResponse::success(ProfileDto::from(profile))))
}

/// Updating an unknown id is a no-op; the response carries `data: null`.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<Option<ProfileDto>>>, ApiError> {
    let name = validate_profile_name(payload.name.as_deref())?;

    let updated = state
        .store
        .update_profile(&id, name, payload.avatar, payload.pin)
        .await?;

    Ok(Json(ApiResponse::success(updated.map(ProfileDto::from))))
}

/// Deleting an unknown id is a no-op; dependent rows cascade away with the
/// profile.
pub async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.store.delete_profile(&id).await?;

    Ok(Json(ApiResponse::success(())))
}

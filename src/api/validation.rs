use super::ApiError;
use crate::entities::media_type::MediaType;

pub fn validate_profile_name(name: Option<&str>) -> Result<&str, ApiError> {
    let Some(name) = name else {
        return Err(ApiError::validation("name is required"));
    };

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("name cannot be empty"));
    }

    if trimmed.chars().count() > 50 {
        return Err(ApiError::validation("name must be 50 characters or less"));
    }

    Ok(trimmed)
}

pub fn validate_tmdb_id(tmdb_id: Option<&str>) -> Result<&str, ApiError> {
    let Some(tmdb_id) = tmdb_id else {
        return Err(ApiError::validation("tmdb_id is required"));
    };

    let trimmed = tmdb_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("tmdb_id cannot be empty"));
    }

    Ok(trimmed)
}

pub fn validate_media_type(media_type: Option<&str>) -> Result<MediaType, ApiError> {
    match media_type {
        None => Err(ApiError::validation("media_type is required")),
        Some("movie") => Ok(MediaType::Movie),
        Some("tv") => Ok(MediaType::Tv),
        Some(other) => Err(ApiError::validation(format!(
            "Invalid media_type: {}. Must be one of: movie, tv",
            other
        ))),
    }
}

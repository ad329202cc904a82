use serde::Serialize;

use crate::entities::media_type::MediaType;
use crate::entities::{profiles, whitelist_entries};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub pin: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<profiles::Model> for ProfileDto {
    fn from(model: profiles::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            avatar: model.avatar,
            pin: model.pin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WhitelistEntryDto {
    pub id: String,
    pub profile_id: String,
    pub tmdb_id: String,
    pub media_type: MediaType,
    pub added_at: String,
}

impl From<whitelist_entries::Model> for WhitelistEntryDto {
    fn from(model: whitelist_entries::Model) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
            tmdb_id: model.tmdb_id,
            media_type: model.media_type,
            added_at: model.added_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime_seconds: u64,
    pub database: bool,
    pub profile_count: u64,
    pub whitelist_count: u64,
}

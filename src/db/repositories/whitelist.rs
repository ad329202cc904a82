use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::db::error::StoreError;
use crate::entities::media_type::MediaType;
use crate::entities::whitelist_entries;

pub struct WhitelistRepository {
    conn: DatabaseConnection,
}

impl WhitelistRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a whitelist entry and read the stored row back.
    ///
    /// A duplicate `(profile_id, tmdb_id, media_type)` triple surfaces as
    /// [`StoreError::UniqueViolation`], an unknown profile as
    /// [`StoreError::ForeignKeyViolation`].
    pub async fn add(
        &self,
        profile_id: &str,
        tmdb_id: &str,
        media_type: MediaType,
    ) -> Result<whitelist_entries::Model, StoreError> {
        let id = Uuid::new_v4().to_string();

        let entry = whitelist_entries::ActiveModel {
            id: Set(id.clone()),
            profile_id: Set(profile_id.to_owned()),
            tmdb_id: Set(tmdb_id.to_owned()),
            media_type: Set(media_type),
            added_at: Set(chrono::Utc::now().to_rfc3339()),
        };
        whitelist_entries::Entity::insert(entry)
            .exec(&self.conn)
            .await?;

        let created = whitelist_entries::Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| {
                StoreError::Database(DbErr::Custom(
                    "created whitelist entry missing on read-back".to_owned(),
                ))
            })?;
        Ok(created)
    }

    /// All entries for one profile, newest first. Never includes other
    /// profiles' rows.
    pub async fn list_for_profile(
        &self,
        profile_id: &str,
    ) -> Result<Vec<whitelist_entries::Model>, StoreError> {
        Ok(whitelist_entries::Entity::find()
            .filter(whitelist_entries::Column::ProfileId.eq(profile_id))
            .order_by_desc(whitelist_entries::Column::AddedAt)
            .all(&self.conn)
            .await?)
    }

    /// Delete by the composite key, not by row id. Unknown triples are a
    /// no-op.
    pub async fn remove(
        &self,
        profile_id: &str,
        tmdb_id: &str,
        media_type: MediaType,
    ) -> Result<(), StoreError> {
        whitelist_entries::Entity::delete_many()
            .filter(whitelist_entries::Column::ProfileId.eq(profile_id))
            .filter(whitelist_entries::Column::TmdbId.eq(tmdb_id))
            .filter(whitelist_entries::Column::MediaType.eq(media_type))
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    pub async fn is_whitelisted(
        &self,
        profile_id: &str,
        tmdb_id: &str,
        media_type: MediaType,
    ) -> Result<bool, StoreError> {
        let count = whitelist_entries::Entity::find()
            .filter(whitelist_entries::Column::ProfileId.eq(profile_id))
            .filter(whitelist_entries::Column::TmdbId.eq(tmdb_id))
            .filter(whitelist_entries::Column::MediaType.eq(media_type))
            .count(&self.conn)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(whitelist_entries::Entity::find().count(&self.conn).await?)
    }
}

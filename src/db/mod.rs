use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

pub mod connection;
pub mod error;
pub mod migrator;
pub mod repositories;

pub use connection::Database;
pub use error::StoreError;

use crate::entities::media_type::MediaType;
use crate::entities::{profiles, whitelist_entries};

/// Facade over the repositories. Holds a clone of the shared connection
/// handed out by [`Database`]; it never owns the lifecycle.
#[derive(Clone)]
pub struct Store {
    conn: DatabaseConnection,
}

impl Store {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_owned()))
            .await
            .map_err(StoreError::from)?;
        Ok(())
    }

    fn profile_repo(&self) -> repositories::profile::ProfileRepository {
        repositories::profile::ProfileRepository::new(self.conn.clone())
    }

    fn whitelist_repo(&self) -> repositories::whitelist::WhitelistRepository {
        repositories::whitelist::WhitelistRepository::new(self.conn.clone())
    }

    pub async fn create_profile(
        &self,
        name: &str,
        avatar: Option<String>,
        pin: Option<String>,
    ) -> Result<profiles::Model, StoreError> {
        self.profile_repo().create(name, avatar, pin).await
    }

    pub async fn get_profile(&self, id: &str) -> Result<Option<profiles::Model>, StoreError> {
        self.profile_repo().get_by_id(id).await
    }

    pub async fn list_profiles(&self) -> Result<Vec<profiles::Model>, StoreError> {
        self.profile_repo().list().await
    }

    pub async fn update_profile(
        &self,
        id: &str,
        name: &str,
        avatar: Option<String>,
        pin: Option<String>,
    ) -> Result<Option<profiles::Model>, StoreError> {
        self.profile_repo().update(id, name, avatar, pin).await
    }

    pub async fn delete_profile(&self, id: &str) -> Result<(), StoreError> {
        self.profile_repo().delete(id).await
    }

    pub async fn profile_count(&self) -> Result<u64, StoreError> {
        self.profile_repo().count().await
    }

    pub async fn add_to_whitelist(
        &self,
        profile_id: &str,
        tmdb_id: &str,
        media_type: MediaType,
    ) -> Result<whitelist_entries::Model, StoreError> {
        self.whitelist_repo()
            .add(profile_id, tmdb_id, media_type)
            .await
    }

    pub async fn get_whitelist(
        &self,
        profile_id: &str,
    ) -> Result<Vec<whitelist_entries::Model>, StoreError> {
        self.whitelist_repo().list_for_profile(profile_id).await
    }

    pub async fn remove_from_whitelist(
        &self,
        profile_id: &str,
        tmdb_id: &str,
        media_type: MediaType,
    ) -> Result<(), StoreError> {
        self.whitelist_repo()
            .remove(profile_id, tmdb_id, media_type)
            .await
    }

    pub async fn is_whitelisted(
        &self,
        profile_id: &str,
        tmdb_id: &str,
        media_type: MediaType,
    ) -> Result<bool, StoreError> {
        self.whitelist_repo()
            .is_whitelisted(profile_id, tmdb_id, media_type)
            .await
    }

    pub async fn whitelist_count(&self) -> Result<u64, StoreError> {
        self.whitelist_repo().count().await
    }
}

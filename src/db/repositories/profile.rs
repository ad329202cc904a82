use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::db::error::StoreError;
use crate::entities::profiles;

pub struct ProfileRepository {
    conn: DatabaseConnection,
}

impl ProfileRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a new profile and read the stored row back.
    pub async fn create(
        &self,
        name: &str,
        avatar: Option<String>,
        pin: Option<String>,
    ) -> Result<profiles::Model, StoreError> {
        let id = Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();

        let profile = profiles::ActiveModel {
            id: Set(id.clone()),
            name: Set(name.to_owned()),
            avatar: Set(avatar),
            pin: Set(pin),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };
        profiles::Entity::insert(profile).exec(&self.conn).await?;

        let created = profiles::Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .ok_or_else(|| {
                StoreError::Database(DbErr::Custom(
                    "created profile missing on read-back".to_owned(),
                ))
            })?;
        Ok(created)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<profiles::Model>, StoreError> {
        Ok(profiles::Entity::find_by_id(id).one(&self.conn).await?)
    }

    /// All profiles, newest first.
    pub async fn list(&self) -> Result<Vec<profiles::Model>, StoreError> {
        Ok(profiles::Entity::find()
            .order_by_desc(profiles::Column::CreatedAt)
            .all(&self.conn)
            .await?)
    }

    /// Overwrite name/avatar/pin and bump `updated_at`, then read the row
    /// back. A missing id is a zero-row write and yields `None`.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        avatar: Option<String>,
        pin: Option<String>,
    ) -> Result<Option<profiles::Model>, StoreError> {
        profiles::Entity::update_many()
            .col_expr(profiles::Column::Name, sea_orm::sea_query::Expr::value(name))
            .col_expr(
                profiles::Column::Avatar,
                sea_orm::sea_query::Expr::value(avatar),
            )
            .col_expr(profiles::Column::Pin, sea_orm::sea_query::Expr::value(pin))
            .col_expr(
                profiles::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().to_rfc3339()),
            )
            .filter(profiles::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        self.get_by_id(id).await
    }

    /// Delete a profile; dependent whitelist, time-limit and activity rows
    /// go with it via cascade. Unknown ids are a no-op.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        profiles::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        use sea_orm::PaginatorTrait;

        Ok(profiles::Entity::find().count(&self.conn).await?)
    }
}

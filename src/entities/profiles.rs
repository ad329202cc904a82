use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    /// UUIDv4, generated by the store, never user-supplied.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    /// Emoji or avatar identifier token.
    pub avatar: Option<String>,

    /// Short numeric code; format is enforced by the client UI, not here.
    pub pin: Option<String>,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::whitelist_entries::Entity")]
    WhitelistEntries,

    #[sea_orm(has_many = "super::time_limits::Entity")]
    TimeLimits,

    #[sea_orm(has_many = "super::activity_log::Entity")]
    ActivityLog,
}

impl Related<super::whitelist_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WhitelistEntries.def()
    }
}

impl Related<super::time_limits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeLimits.def()
    }
}

impl Related<super::activity_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Discriminator for whitelisted and logged content, stored as a string
/// column (`movie` / `tv`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[sea_orm(string_value = "movie")]
    Movie,

    #[sea_orm(string_value = "tv")]
    Tv,
}

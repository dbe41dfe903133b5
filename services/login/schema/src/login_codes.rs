use sea_orm::entity::prelude::*;

/// Row-per-phone login code store. `code` holds either the current one-time
/// code (written by the delivery collaborator) or a `USED_`-prefixed sentinel
/// once consumed. Rows are recycled across logins, never deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "login_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    /// Stored in whatever format onboarding used — digits-only local,
    /// `55`-prefixed, or `+55`-prefixed. Lookups match all three.
    #[sea_orm(unique)]
    pub phone: String,
    pub code: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

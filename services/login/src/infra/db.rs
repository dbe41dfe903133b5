use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use conecta_login_schema::login_codes;

use crate::domain::phone::PhoneCandidates;
use crate::domain::repository::LoginCodeRepository;
use crate::domain::types::LoginCode;
use crate::error::LoginServiceError;

#[derive(Clone)]
pub struct DbLoginCodeRepository {
    pub db: DatabaseConnection,
}

impl LoginCodeRepository for DbLoginCodeRepository {
    async fn find_by_phone(
        &self,
        phone: &PhoneCandidates,
    ) -> Result<Option<LoginCode>, LoginServiceError> {
        let model = login_codes::Entity::find()
            .filter(login_codes::Column::Phone.is_in(phone.all()))
            .one(&self.db)
            .await
            .context("find login code by phone")?;
        Ok(model.map(login_code_from_model))
    }

    async fn consume(
        &self,
        phone: &PhoneCandidates,
        code: &str,
        sentinel: &str,
    ) -> Result<Option<LoginCode>, LoginServiceError> {
        // Match and overwrite in one statement. Two concurrent attempts with
        // the same code race on the row lock; the loser's WHERE no longer
        // matches and it updates nothing.
        let updated = login_codes::Entity::update_many()
            .col_expr(login_codes::Column::Code, Expr::value(sentinel))
            .col_expr(login_codes::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(login_codes::Column::Phone.is_in(phone.all()))
            .filter(login_codes::Column::Code.eq(code))
            .exec_with_returning(&self.db)
            .await
            .context("consume login code")?;
        Ok(updated.into_iter().next().map(login_code_from_model))
    }

    async fn reassign_phone(
        &self,
        user_id: Uuid,
        phone: &str,
    ) -> Result<u64, LoginServiceError> {
        let result = login_codes::Entity::update_many()
            .col_expr(login_codes::Column::Phone, Expr::value(phone))
            .col_expr(login_codes::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(login_codes::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("reassign login code phone")?;
        Ok(result.rows_affected)
    }
}

fn login_code_from_model(model: login_codes::Model) -> LoginCode {
    LoginCode {
        id: model.id,
        user_id: model.user_id,
        phone: model.phone,
        code: model.code,
        updated_at: model.updated_at,
        created_at: model.created_at,
    }
}

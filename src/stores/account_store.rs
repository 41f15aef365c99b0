use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;
use chrono::Utc;
use crate::types::db::account::{self, ActiveModel, Entity as Account};
use crate::errors::InternalError;
use crate::errors::internal::AccountError;

/// AccountStore manages account records in the database
///
/// The unique index on `email` is authoritative: any insert or update that
/// would create a second account with the same email fails with
/// `AccountError::DuplicateEmail`, regardless of what callers checked first.
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up an account by exact email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<account::Model>, InternalError> {
        Account::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_account_by_email", e))
    }

    /// Look up an account by id
    pub async fn find_by_id(&self, account_id: &str) -> Result<Option<account::Model>, InternalError> {
        Account::find_by_id(account_id.to_owned())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_account_by_id", e))
    }

    /// Insert a new account with score 0
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address, must be unused
    /// * `password_hash` - Digest produced by `CredentialHasher`
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored account, including its generated id
    /// * `Err(InternalError)` - DuplicateEmail if the email is taken, or a database error
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<account::Model, InternalError> {
        let now = Utc::now().timestamp();

        let new_account = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name),
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            score: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = new_account
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error("insert_account", &email, e))?;

        tracing::debug!("Created account {}", created.id);

        Ok(created)
    }

    /// Overwrite email and/or password digest of an existing account
    ///
    /// `None` leaves the corresponding column untouched.
    pub async fn update_credentials(
        &self,
        account_id: &str,
        email: Option<String>,
        password_hash: Option<String>,
    ) -> Result<account::Model, InternalError> {
        let existing = self
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AccountError::NotFound(account_id.to_owned()))?;

        let mut active: ActiveModel = existing.into();
        let new_email = email.clone();

        if let Some(email) = email {
            active.email = Set(email);
        }
        if let Some(password_hash) = password_hash {
            active.password_hash = Set(password_hash);
        }
        active.updated_at = Set(Utc::now().timestamp());

        active
            .update(&self.db)
            .await
            .map_err(|e| map_write_error("update_account_credentials", new_email.as_deref().unwrap_or_default(), e))
    }

    /// Add `points` to an account's score, saturating at the i64 bounds
    ///
    /// The increment is a single `score = score + points` statement. When the
    /// sum would leave the i64 range the row is pinned to the bound instead.
    pub async fn add_to_score(&self, account_id: &str, points: i64) -> Result<account::Model, InternalError> {
        let now = Utc::now().timestamp();

        let mut increment = Account::update_many()
            .col_expr(account::Column::Score, Expr::col(account::Column::Score).add(points))
            .col_expr(account::Column::UpdatedAt, Expr::value(now))
            .filter(account::Column::Id.eq(account_id));

        // Only rows whose sum stays in range take the increment
        if points > 0 {
            increment = increment.filter(account::Column::Score.lte(i64::MAX - points));
        } else if points < 0 {
            increment = increment.filter(account::Column::Score.gte(i64::MIN - points));
        }

        let result = increment
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_account_score", e))?;

        if result.rows_affected == 0 {
            let bound = if points < 0 { i64::MIN } else { i64::MAX };

            let result = Account::update_many()
                .col_expr(account::Column::Score, Expr::value(bound))
                .col_expr(account::Column::UpdatedAt, Expr::value(now))
                .filter(account::Column::Id.eq(account_id))
                .exec(&self.db)
                .await
                .map_err(|e| InternalError::database("saturate_account_score", e))?;

            if result.rows_affected == 0 {
                return Err(AccountError::NotFound(account_id.to_owned()).into());
            }
        }

        self.find_by_id(account_id)
            .await?
            .ok_or_else(|| AccountError::NotFound(account_id.to_owned()).into())
    }
}

/// A unique violation on write can only come from the email index
fn map_write_error(operation: &str, email: &str, err: DbErr) -> InternalError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AccountError::DuplicateEmail(email.to_owned()).into(),
        _ => InternalError::database(operation, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_db;

    async fn setup_store() -> AccountStore {
        AccountStore::new(setup_test_db().await)
    }

    #[tokio::test]
    async fn test_create_sets_defaults() {
        let store = setup_store().await;

        let account = store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        assert_eq!(account.score, 0);
        assert_eq!(account.email, "a@x.com");
        assert!(Uuid::parse_str(&account.id).is_ok());
        assert_eq!(account.created_at, account.updated_at);
    }

    #[tokio::test]
    async fn test_find_by_email_and_id() {
        let store = setup_store().await;
        let created = store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        let by_email = store.find_by_email("a@x.com").await.unwrap();
        let by_id = store.find_by_id(&created.id).await.unwrap();

        assert_eq!(by_email, Some(created.clone()));
        assert_eq!(by_id, Some(created));
        assert_eq!(store.find_by_email("b@x.com").await.unwrap(), None);
        assert_eq!(store.find_by_id("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let store = setup_store().await;
        store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        assert_eq!(store.find_by_email("A@X.COM").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicate_insert() {
        let store = setup_store().await;
        store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        let result = store
            .create("B".to_string(), "a@x.com".to_string(), "other".to_string())
            .await;

        assert!(matches!(
            result,
            Err(InternalError::Account(AccountError::DuplicateEmail(ref email))) if email == "a@x.com"
        ));
    }

    #[tokio::test]
    async fn test_update_credentials_none_keeps_values() {
        let store = setup_store().await;
        let created = store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        let updated = store.update_credentials(&created.id, None, None).await.unwrap();

        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.password_hash, "digest");
    }

    #[tokio::test]
    async fn test_update_credentials_to_taken_email_fails() {
        let store = setup_store().await;
        store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();
        let second = store
            .create("B".to_string(), "b@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        let result = store
            .update_credentials(&second.id, Some("a@x.com".to_string()), None)
            .await;

        assert!(matches!(result, Err(InternalError::Account(AccountError::DuplicateEmail(_)))));
    }

    #[tokio::test]
    async fn test_add_to_score_accumulates_and_saturates() {
        let store = setup_store().await;
        let created = store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        store.add_to_score(&created.id, 5).await.unwrap();
        let after = store.add_to_score(&created.id, -2).await.unwrap();
        assert_eq!(after.score, 3);

        let maxed = store.add_to_score(&created.id, i64::MAX).await.unwrap();
        assert_eq!(maxed.score, i64::MAX);

        let lowered = store.add_to_score(&created.id, -1).await.unwrap();
        assert_eq!(lowered.score, i64::MAX - 1);

        store.add_to_score(&created.id, i64::MIN).await.unwrap();
        let floored = store.add_to_score(&created.id, i64::MIN).await.unwrap();
        assert_eq!(floored.score, i64::MIN);
    }

    #[tokio::test]
    async fn test_interleaved_score_updates_are_not_lost() {
        let store = setup_store().await;
        let created = store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();

        let (first, second, third) = tokio::join!(
            store.add_to_score(&created.id, 1),
            store.add_to_score(&created.id, 2),
            store.add_to_score(&created.id, 4),
        );
        first.unwrap();
        second.unwrap();
        third.unwrap();

        let account = store.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(account.score, 7);
    }

    #[tokio::test]
    async fn test_add_zero_points_touches_only_timestamp() {
        let store = setup_store().await;
        let created = store
            .create("A".to_string(), "a@x.com".to_string(), "digest".to_string())
            .await
            .unwrap();
        store.add_to_score(&created.id, 7).await.unwrap();

        let unchanged = store.add_to_score(&created.id, 0).await.unwrap();

        assert_eq!(unchanged.score, 7);
        assert!(unchanged.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_add_to_score_unknown_account() {
        let store = setup_store().await;

        let result = store.add_to_score("missing", 1).await;

        assert!(matches!(result, Err(InternalError::Account(AccountError::NotFound(_)))));
    }
}

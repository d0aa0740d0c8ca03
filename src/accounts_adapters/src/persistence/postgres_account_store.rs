use accounts_core::{
    Account, AccountId, AccountName, AccountStore, AccountStoreError, Email, NewAccount,
    PasswordHash,
};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

/// Account store backed by the `accounts` table.
///
/// Email uniqueness is enforced by the table's `UNIQUE` constraint.
#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresAccountStore { pool }
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO accounts (id, email, name, password_hash)
                VALUES ($1, $2, $3, $4)
                RETURNING id, email, name, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(account.email.as_ref().expose_secret())
        .bind(account.name.as_ref())
        .bind(account.password_hash.as_ref().expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::DuplicateEmail;
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        account_from_row(&row)
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip(self))]
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, password_hash, created_at
                FROM accounts
                WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };

        account_from_row(&row)
    }

    #[tracing::instrument(name = "Retrieving account by email from PostgreSQL", skip_all)]
    async fn get_account_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, password_hash, created_at
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };

        account_from_row(&row)
    }

    #[tracing::instrument(name = "Listing accounts in PostgreSQL", skip_all)]
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError> {
        let rows = sqlx::query(
            r#"
                SELECT id, email, name, password_hash, created_at
                FROM accounts
                ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        rows.iter().map(account_from_row).collect()
    }

    #[tracing::instrument(name = "Delete account from PostgreSQL", skip(self))]
    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                DELETE FROM accounts
                WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }
}

fn account_from_row(row: &PgRow) -> Result<Account, AccountStoreError> {
    let unexpected = |e: sqlx::Error| AccountStoreError::UnexpectedError(e.to_string());

    let id: Uuid = row.try_get("id").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let name: String = row.try_get("name").map_err(unexpected)?;
    let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(unexpected)?;

    let email = Email::parse(Secret::from(email))
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
    let name =
        AccountName::parse(name).map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

    Ok(Account::new(
        AccountId::from(id),
        email,
        name,
        PasswordHash::new(Secret::from(password_hash)),
        created_at,
    ))
}

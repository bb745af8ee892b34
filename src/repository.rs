use crate::models::{LoanApplication, LoanStatus, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// StoreError
///
/// Failure surface of the persistence layer. A duplicate-key collision on the
/// loan identifier is the only classified condition; everything else maps to
/// a generic persistence failure at the API boundary. No retries anywhere —
/// every store failure is terminal for its request.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key")]
    Duplicate,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("document codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository Trait
///
/// The abstract contract for the loan record store and the user directory,
/// letting handlers interact with persistence without knowing the concrete
/// engine (Postgres, in-memory mock, etc.).
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's async task
/// boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Loan record store ---

    /// Persists a freshly built aggregate. A loan_id collision yields
    /// `StoreError::Duplicate`.
    async fn insert_loan(&self, loan: &LoanApplication) -> StoreResult<()>;
    /// All records owned by `user_id`, application date descending.
    async fn loans_for_user(&self, user_id: Uuid) -> StoreResult<Vec<LoanApplication>>;
    /// Every record in the store, application date descending.
    async fn all_loans(&self) -> StoreResult<Vec<LoanApplication>>;
    async fn loan_by_id(&self, loan_id: Uuid) -> StoreResult<Option<LoanApplication>>;
    /// Overwrites the flat status field (and last_updated). Returns the
    /// updated record, or None when the id is unmatched. Deliberately does
    /// not append to status_history.
    async fn update_loan_status(
        &self,
        loan_id: Uuid,
        status: LoanStatus,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<Option<LoanApplication>>;
    /// Removes the record; false when the id is unmatched.
    async fn delete_loan(&self, loan_id: Uuid) -> StoreResult<bool>;

    // --- Dashboard counters ---
    async fn count_users(&self) -> StoreResult<i64>;
    async fn count_loans(&self) -> StoreResult<i64>;
    async fn count_loans_with_status(&self, status: LoanStatus) -> StoreResult<i64>;
    async fn total_loan_amount(&self) -> StoreResult<f64>;
    async fn loan_count_for_user(&self, user_id: Uuid) -> StoreResult<i64>;

    // --- User directory ---
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>>;
    /// Batched directory lookup for joined admin views: one round-trip for
    /// the whole id set instead of one per record.
    async fn users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>>;
    async fn recent_users(&self, limit: i64) -> StoreResult<Vec<User>>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete `Repository` backed by PostgreSQL. Loan aggregates are stored
/// as documents: a JSONB column holds the full serialized record while a few
/// scalar columns (`loan_id`, `user_id`, `status`, `application_date`,
/// `loan_amount`) are projected out for filtering, ordering and aggregation.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance over the initialized pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the backing tables if absent. Intended for local development
    /// and test databases; production schemas are managed externally.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                role TEXT NOT NULL DEFAULT 'user',
                password_hash TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS loans (
                loan_id UUID PRIMARY KEY,
                user_id UUID NOT NULL,
                status TEXT NOT NULL,
                application_date TIMESTAMPTZ NOT NULL,
                loan_amount DOUBLE PRECISION NOT NULL,
                document JSONB NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS loans_user_id_idx ON loans (user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS loans_application_date_idx ON loans (application_date DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn decode_documents(rows: Vec<serde_json::Value>) -> StoreResult<Vec<LoanApplication>> {
        rows.into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }
}

#[async_trait]
impl Repository for PostgresRepository {
    async fn insert_loan(&self, loan: &LoanApplication) -> StoreResult<()> {
        let document = serde_json::to_value(loan)?;

        let result = sqlx::query(
            r#"
            INSERT INTO loans (loan_id, user_id, status, application_date, loan_amount, document)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(loan.loan_id)
        .bind(loan.user_id)
        .bind(loan.status.as_str())
        .bind(loan.application_date)
        .bind(loan.loan_amount)
        .bind(&document)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::Duplicate)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn loans_for_user(&self, user_id: Uuid) -> StoreResult<Vec<LoanApplication>> {
        let rows: Vec<serde_json::Value> = sqlx::query_scalar(
            "SELECT document FROM loans WHERE user_id = $1 ORDER BY application_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Self::decode_documents(rows)
    }

    async fn all_loans(&self) -> StoreResult<Vec<LoanApplication>> {
        let rows: Vec<serde_json::Value> =
            sqlx::query_scalar("SELECT document FROM loans ORDER BY application_date DESC")
                .fetch_all(&self.pool)
                .await?;

        Self::decode_documents(rows)
    }

    async fn loan_by_id(&self, loan_id: Uuid) -> StoreResult<Option<LoanApplication>> {
        let row: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT document FROM loans WHERE loan_id = $1")
                .bind(loan_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .transpose()
    }

    async fn update_loan_status(
        &self,
        loan_id: Uuid,
        status: LoanStatus,
        updated_at: DateTime<Utc>,
    ) -> StoreResult<Option<LoanApplication>> {
        // Read-modify-write on the document. Not transactional with respect
        // to a concurrent delete of the same loan: the UPDATE then affects
        // zero rows, which we report as not-found.
        let Some(mut loan) = self.loan_by_id(loan_id).await? else {
            return Ok(None);
        };

        loan.status = status;
        loan.last_updated = updated_at;
        let document = serde_json::to_value(&loan)?;

        let result = sqlx::query("UPDATE loans SET status = $2, document = $3 WHERE loan_id = $1")
            .bind(loan_id)
            .bind(status.as_str())
            .bind(&document)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            Ok(Some(loan))
        } else {
            Ok(None)
        }
    }

    async fn delete_loan(&self, loan_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM loans WHERE loan_id = $1")
            .bind(loan_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_users(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_loans(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn count_loans_with_status(&self, status: LoanStatus) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn total_loan_amount(&self) -> StoreResult<f64> {
        let total: f64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(loan_amount), 0)::float8 FROM loans")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    async fn loan_count_for_user(&self, user_id: Uuid) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn users_by_ids(&self, ids: &[Uuid]) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn recent_users(&self, limit: i64) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }
}

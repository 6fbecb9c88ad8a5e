use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use motorpool_core::error::AppError;
use motorpool_core::models::{Administrator, NewAdministrator, Page, Profile};
use motorpool_core::traits::AdministratorStore;

/// Repository for administrator accounts in PostgreSQL.
#[derive(Clone)]
pub struct AdministratorRepository {
    pool: Pool<Postgres>,
}

impl AdministratorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new administrator. Returns the persisted record with its
    /// generated id.
    pub async fn create(&self, new: &NewAdministrator) -> Result<Administrator, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            INSERT INTO administrators (email, password, profile)
            VALUES ($1, $2, $3)
            RETURNING id, email, password, profile, created_at
            "#,
        )
        .bind(&new.email)
        .bind(&new.password)
        .bind(new.profile.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Administrator>, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password, profile, created_at
            FROM administrators
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Login lookup. Emails are unique, so at most one record matches.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Administrator>, AppError> {
        let row = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password, profile, created_at
            FROM administrators
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// One page of administrators in insertion order.
    pub async fn list(&self, page: Page) -> Result<Vec<Administrator>, AppError> {
        let rows = sqlx::query_as::<_, AdministratorRow>(
            r#"
            SELECT id, email, password, profile, created_at
            FROM administrators
            ORDER BY created_at ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Delete by id. Returns false if no row matched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM administrators WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct AdministratorRow {
    id: Uuid,
    email: String,
    password: String,
    profile: String,
    created_at: DateTime<Utc>,
}

impl From<AdministratorRow> for Administrator {
    fn from(row: AdministratorRow) -> Self {
        Administrator {
            id: row.id,
            email: row.email,
            password: row.password,
            // The column carries a CHECK constraint matching the enum.
            profile: row.profile.parse().unwrap_or(Profile::Editor),
            created_at: row.created_at,
        }
    }
}

// -- Trait implementation --

impl AdministratorStore for AdministratorRepository {
    async fn create(&self, new: &NewAdministrator) -> Result<Administrator, AppError> {
        AdministratorRepository::create(self, new).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Administrator>, AppError> {
        AdministratorRepository::get_by_id(self, id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Administrator>, AppError> {
        AdministratorRepository::find_by_email(self, email).await
    }

    async fn list(&self, page: Page) -> Result<Vec<Administrator>, AppError> {
        AdministratorRepository::list(self, page).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        AdministratorRepository::delete(self, id).await
    }
}

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use motorpool_core::error::AppError;
use motorpool_core::models::{NewVehicle, Page, Vehicle, VehicleFilter};
use motorpool_core::traits::VehicleStore;

/// Repository for vehicles in PostgreSQL.
#[derive(Clone)]
pub struct VehicleRepository {
    pool: Pool<Postgres>,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new vehicle. Returns the persisted record with its
    /// generated id.
    pub async fn create(&self, new: &NewVehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (name, brand, year)
            VALUES ($1, $2, $3)
            RETURNING id, name, brand, year, created_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.brand)
        .bind(new.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, brand, year, created_at
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// One page of vehicles in insertion order, optionally narrowed by
    /// case-insensitive name/brand substring filters.
    pub async fn list(&self, page: Page, filter: &VehicleFilter) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, name, brand, year, created_at
            FROM vehicles
            WHERE ($1::varchar IS NULL OR name ILIKE '%' || $1 || '%')
              AND ($2::varchar IS NULL OR brand ILIKE '%' || $2 || '%')
            ORDER BY created_at ASC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.name.as_deref())
        .bind(filter.brand.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Replace the mutable fields of an existing vehicle. Returns None if
    /// the id does not exist.
    pub async fn update(&self, id: Uuid, fields: &NewVehicle) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles
            SET name = $2, brand = $3, year = $4
            WHERE id = $1
            RETURNING id, name, brand, year, created_at
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.brand)
        .bind(fields.year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Delete by id. Returns false if no row matched.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    name: String,
    brand: String,
    year: i32,
    created_at: DateTime<Utc>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle {
            id: row.id,
            name: row.name,
            brand: row.brand,
            year: row.year,
            created_at: row.created_at,
        }
    }
}

// -- Trait implementation --

impl VehicleStore for VehicleRepository {
    async fn create(&self, new: &NewVehicle) -> Result<Vehicle, AppError> {
        VehicleRepository::create(self, new).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        VehicleRepository::get_by_id(self, id).await
    }

    async fn list(&self, page: Page, filter: &VehicleFilter) -> Result<Vec<Vehicle>, AppError> {
        VehicleRepository::list(self, page, filter).await
    }

    async fn update(&self, id: Uuid, fields: &NewVehicle) -> Result<Option<Vehicle>, AppError> {
        VehicleRepository::update(self, id, fields).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        VehicleRepository::delete(self, id).await
    }
}

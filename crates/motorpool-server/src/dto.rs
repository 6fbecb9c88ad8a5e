use serde::{Deserialize, Serialize};
use uuid::Uuid;

use motorpool_core::models::{Administrator, Vehicle};
use motorpool_core::validate::ValidationErrors;

// ---------------------------------------------------------------------------
// Administrators
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned on a successful login.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoggedAdministrator {
    pub email: String,
    pub profile: String,
    pub token: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AdministratorRequest {
    pub email: String,
    pub password: String,
    /// Role literal: "Admin" or "Editor"
    pub profile: String,
}

/// Administrator view model. The password column is never exposed.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AdministratorResponse {
    pub id: Uuid,
    pub email: String,
    pub profile: String,
}

impl From<Administrator> for AdministratorResponse {
    fn from(admin: Administrator) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            profile: admin.profile.to_string(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AdministratorListResponse {
    pub administrators: Vec<AdministratorResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct VehicleRequest {
    pub name: String,
    pub brand: String,
    /// Model year, 1950 or later
    pub year: i32,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            brand: vehicle.brand,
            year: vehicle.year,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VehicleListResponse {
    pub vehicles: Vec<VehicleResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// 1-based page index; absent means page 1
    pub page: Option<u32>,
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HomeResponse {
    pub message: &'static str,
    pub documentation: &'static str,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Complete list of field violations for a rejected payload.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub messages: Vec<String>,
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            messages: errors.messages,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

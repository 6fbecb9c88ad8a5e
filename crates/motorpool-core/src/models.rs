use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted to an administrator account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    Admin,
    Editor,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Admin => "Admin",
            Profile::Editor => "Editor",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Profile::Admin),
            "Editor" => Ok(Profile::Editor),
            _ => Err(format!("Unknown profile: {}", s)),
        }
    }
}

/// An administrator account able to authenticate against the API.
#[derive(Debug, Clone, Serialize)]
pub struct Administrator {
    pub id: Uuid,
    pub email: String,
    /// Stored as given. Never exposed through view models.
    pub password: String,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
}

/// DTO for inserting a new administrator.
#[derive(Debug, Clone)]
pub struct NewAdministrator {
    pub email: String,
    pub password: String,
    pub profile: Profile,
}

/// A registered vehicle.
#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

/// DTO for inserting or replacing a vehicle.
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

/// Oldest registrable vehicle model year.
pub const MIN_VEHICLE_YEAR: i32 = 1950;

/// Rows returned per page by every list operation.
pub const PAGE_SIZE: i64 = 10;

/// 1-based page index. Out-of-range input is clamped to page 1;
/// an absent query parameter also means page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub fn new(page: Option<u32>) -> Self {
        Page(page.unwrap_or(1).max(1))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.0) - 1) * PAGE_SIZE
    }
}

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

/// Optional substring filters for vehicle listings.
/// Matching is case-insensitive, per the repository implementation.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub name: Option<String>,
    pub brand: Option<String>,
}

impl VehicleFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            brand: None,
        }
    }

    pub fn by_brand(brand: impl Into<String>) -> Self {
        Self {
            name: None,
            brand: Some(brand.into()),
        }
    }
}

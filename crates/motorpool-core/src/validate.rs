//! Request validation policy.
//!
//! Pure and stateless: every violation is collected into an ordered
//! message list, never short-circuited, so a single 400 response can
//! report the complete set of problems.

use std::str::FromStr;

use crate::models::{MIN_VEHICLE_YEAR, Profile};

/// Ordered list of human-readable validation messages. Empty = valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// Validate an administrator creation payload.
///
/// `profile` is the raw request string; it must match one of the
/// enumerated role literals exactly.
pub fn validate_administrator(email: &str, password: &str, profile: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if email.is_empty() {
        errors.push("Email cannot be empty");
    } else if !email.contains('@') {
        errors.push("Email must contain '@'");
    }

    if password.is_empty() {
        errors.push("Password cannot be empty");
    }

    if Profile::from_str(profile).is_err() {
        errors.push("Profile must be either 'Admin' or 'Editor'");
    }

    errors
}

/// Validate a vehicle creation/update payload.
pub fn validate_vehicle(name: &str, brand: &str, year: i32) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if name.is_empty() {
        errors.push("Name cannot be empty");
    }

    if brand.is_empty() {
        errors.push("Brand cannot be empty");
    }

    if year < MIN_VEHICLE_YEAR {
        errors.push(format!("Year must be {} or later", MIN_VEHICLE_YEAR));
    }

    errors
}

pub mod error;
pub mod models;
pub mod traits;
pub mod validate;

pub use error::AppError;
pub use models::{
    Administrator, NewAdministrator, NewVehicle, Page, Profile, Vehicle, VehicleFilter,
};
pub use traits::{AdministratorStore, VehicleStore};
pub use validate::{ValidationErrors, validate_administrator, validate_vehicle};

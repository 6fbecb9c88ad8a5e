use std::future::Future;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Administrator, NewAdministrator, NewVehicle, Page, Vehicle, VehicleFilter};

/// Persists and retrieves administrator accounts.
///
/// Handlers only depend on these narrow traits, so the storage
/// technology can be swapped without touching the endpoint layer.
pub trait AdministratorStore: Send + Sync + Clone {
    /// Insert a new administrator. Returns the persisted record with its
    /// generated id.
    fn create(
        &self,
        new: &NewAdministrator,
    ) -> impl Future<Output = Result<Administrator, AppError>> + Send;

    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Administrator>, AppError>> + Send;

    /// Login lookup. Emails are unique, so at most one record matches.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Administrator>, AppError>> + Send;

    /// One page of administrators in insertion order.
    fn list(&self, page: Page) -> impl Future<Output = Result<Vec<Administrator>, AppError>> + Send;

    /// Delete by id. Returns false if no row matched.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<bool, AppError>> + Send;
}

/// Persists and retrieves vehicles.
pub trait VehicleStore: Send + Sync + Clone {
    /// Insert a new vehicle. Returns the persisted record with its
    /// generated id.
    fn create(&self, new: &NewVehicle) -> impl Future<Output = Result<Vehicle, AppError>> + Send;

    fn get_by_id(&self, id: Uuid)
    -> impl Future<Output = Result<Option<Vehicle>, AppError>> + Send;

    /// One page of vehicles in insertion order, optionally narrowed by
    /// name/brand substring filters.
    fn list(
        &self,
        page: Page,
        filter: &VehicleFilter,
    ) -> impl Future<Output = Result<Vec<Vehicle>, AppError>> + Send;

    /// Replace the mutable fields of an existing vehicle. Returns None if
    /// the id does not exist.
    fn update(
        &self,
        id: Uuid,
        fields: &NewVehicle,
    ) -> impl Future<Output = Result<Option<Vehicle>, AppError>> + Send;

    /// Delete by id. Returns false if no row matched.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<bool, AppError>> + Send;
}

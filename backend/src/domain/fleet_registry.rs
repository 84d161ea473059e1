//! Car registration per owning user.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{CarRepository, CarRepositoryError, IdIssuer, UserRepository};
use crate::domain::user_registry::require_user;
use crate::domain::{Car, CarId, DomainError, DomainResult, UserId};

fn map_car_repository_error(error: CarRepositoryError) -> DomainError {
    match error {
        CarRepositoryError::Store { message } => {
            DomainError::internal(format!("car store unavailable: {message}"))
        }
        CarRepositoryError::Decode { message } => {
            DomainError::internal(format!("car record invalid: {message}"))
        }
    }
}

/// Associates cars with the users who own them.
#[derive(Clone)]
pub struct FleetRegistry<C, U> {
    cars: Arc<C>,
    users: Arc<U>,
    ids: Arc<dyn IdIssuer>,
}

impl<C, U> FleetRegistry<C, U> {
    /// Create a registry over the car and user repositories.
    pub fn new(cars: Arc<C>, users: Arc<U>, ids: Arc<dyn IdIssuer>) -> Self {
        Self { cars, users, ids }
    }
}

impl<C, U> FleetRegistry<C, U>
where
    C: CarRepository,
    U: UserRepository,
{
    /// Register a car for `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the owner is not a registered user, or an
    /// internal error when either table cannot be read or written.
    pub fn add_car(
        &self,
        owner_id: &UserId,
        plate: impl Into<String>,
        model: impl Into<String>,
    ) -> DomainResult<Car> {
        require_user(self.users.as_ref(), owner_id, "owner")?;

        let car = Car::new(
            CarId::from_uuid(self.ids.issue()),
            owner_id.clone(),
            plate,
            model,
        );
        self.cars.insert(&car).map_err(map_car_repository_error)?;

        info!(car_id = %car.id(), owner_id = %owner_id, plate = car.plate(), "car added");
        Ok(car)
    }

    /// Cars registered by `owner_id`, oldest first; empty if none.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the cars table cannot be read.
    pub fn list_cars_for(&self, owner_id: &UserId) -> DomainResult<Vec<Car>> {
        self.cars
            .list_for_owner(owner_id)
            .map_err(map_car_repository_error)
    }
}

#[cfg(test)]
#[path = "fleet_registry_tests.rs"]
mod tests;

//! Port abstraction for car persistence adapters and their errors.

use crate::domain::{Car, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by car repository adapters.
    pub enum CarRepositoryError {
        /// The backing store failed to load or save the cars table.
        Store {
            /// Failure detail.
            message: String,
        } => "car repository store failed: {message}",
        /// A stored row could not be turned back into a car.
        Decode {
            /// Failure detail.
            message: String,
        } => "car repository row is invalid: {message}",
    }
}

/// Port for writing cars and reading them per owner.
#[cfg_attr(test, mockall::automock)]
pub trait CarRepository: Send + Sync {
    /// Append a car record.
    fn insert(&self, car: &Car) -> Result<(), CarRepositoryError>;

    /// Cars owned by `owner_id`, in insertion order.
    fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<Car>, CarRepositoryError>;
}

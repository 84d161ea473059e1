//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports only: the registries in [`crate::domain`] depend on these
//! traits, and adapters in [`crate::outbound`] implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod car_repository;
mod id_issuer;
mod job_repository;
mod record_store;
mod user_repository;

#[cfg(test)]
pub use car_repository::MockCarRepository;
pub use car_repository::{CarRepository, CarRepositoryError};
#[cfg(test)]
pub use id_issuer::MockIdIssuer;
pub use id_issuer::{IdIssuer, RandomIdIssuer};
#[cfg(test)]
pub use job_repository::MockJobRepository;
pub use job_repository::{JobRepository, JobRepositoryError};
pub use record_store::{RecordStore, RecordStoreError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};

//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed car-wash entities and the registries that
//! record and transition them. Types here know nothing about files, JSON, or
//! terminals; persistence is reached only through [`ports`].
//!
//! Public surface:
//! - `User`, `Car`, `Job`: the three record kinds, with typed ids.
//! - `JobStatus`: the `Pending` → `InProgress` → `Completed` lifecycle.
//! - `Table`: tabular payload exchanged with record stores.
//! - `UserRegistry`, `FleetRegistry`, `JobLifecycle`: domain services.
//! - `DomainError` / `ErrorCode`: transport-agnostic failures.

pub mod car;
pub mod error;
pub mod ids;
pub mod job;
pub mod ports;
pub mod table;
pub mod user;

mod fleet_registry;
mod job_lifecycle;
mod user_registry;

pub use self::car::Car;
pub use self::error::{DomainError, ErrorCode};
pub use self::fleet_registry::FleetRegistry;
pub use self::ids::{CarId, IdValidationError, JobId, UserId};
pub use self::job::{Job, JobDraft, JobFilter, JobStatus, JobTransitionError, UnknownJobStatus};
pub use self::job_lifecycle::JobLifecycle;
pub use self::table::{Table, TableError};
pub use self::user::{User, UserRole, UserValidationError};
pub use self::user_registry::{RegisterUserRequest, UserRegistry};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use carwash::domain::{DomainError, DomainResult};
///
/// fn lookup() -> DomainResult<()> {
///     Err(DomainError::not_found("no such job"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, DomainError>;

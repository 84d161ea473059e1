//! Port abstraction for user persistence adapters and their errors.

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The backing store failed to load or save the users table.
        Store {
            /// Failure detail.
            message: String,
        } => "user repository store failed: {message}",
        /// A stored row could not be turned back into a user.
        Decode {
            /// Failure detail.
            message: String,
        } => "user repository row is invalid: {message}",
    }
}

/// Port for writing and reading registered users.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Append a user record.
    fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Every stored user, in registration order.
    fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}

//! User registration and lookup.

use std::sync::Arc;

use tracing::info;

use crate::domain::ports::{IdIssuer, UserRepository, UserRepositoryError};
use crate::domain::{DomainError, DomainResult, User, UserId, UserRole};

pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> DomainError {
    match error {
        UserRepositoryError::Store { message } => {
            DomainError::internal(format!("user store unavailable: {message}"))
        }
        UserRepositoryError::Decode { message } => {
            DomainError::internal(format!("user record invalid: {message}"))
        }
    }
}

/// Resolve a foreign user reference, failing with `NotFound` when absent.
///
/// `reference` names the role the id plays at the call site (owner,
/// customer, cleaner) so the error tells the caller which id was wrong.
pub(crate) fn require_user<U>(users: &U, id: &UserId, reference: &str) -> DomainResult<User>
where
    U: UserRepository + ?Sized,
{
    users
        .find_by_id(id)
        .map_err(map_user_repository_error)?
        .ok_or_else(|| DomainError::not_found(format!("{reference} {id} is not registered")))
}

/// Input for [`UserRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    /// Name as entered.
    pub name: String,
    /// Phone number as entered.
    pub phone: String,
    /// Claimed role.
    pub role: UserRole,
}

/// Registers customers and cleaners and resolves them by id.
#[derive(Clone)]
pub struct UserRegistry<U> {
    users: Arc<U>,
    ids: Arc<dyn IdIssuer>,
}

impl<U> UserRegistry<U> {
    /// Create a registry over the user repository.
    pub fn new(users: Arc<U>, ids: Arc<dyn IdIssuer>) -> Self {
        Self { users, ids }
    }
}

impl<U> UserRegistry<U>
where
    U: UserRepository,
{
    /// Record a new user and return the identifier they must keep.
    ///
    /// No duplicate detection: registering the same name and phone twice
    /// yields two users.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the users table cannot be persisted.
    pub fn register(&self, request: RegisterUserRequest) -> DomainResult<UserId> {
        let RegisterUserRequest { name, phone, role } = request;
        let user = User::new(UserId::from_uuid(self.ids.issue()), name, role, phone);

        self.users
            .insert(&user)
            .map_err(map_user_repository_error)?;

        info!(user_id = %user.id(), role = %user.role(), "user registered");
        Ok(user.id().clone())
    }

    /// Look a user up by id.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the users table cannot be read.
    pub fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>> {
        self.users.find_by_id(id).map_err(map_user_repository_error)
    }

    /// Look a user up by id, failing when it does not resolve.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or an internal error when the
    /// users table cannot be read.
    pub fn get_user(&self, id: &UserId) -> DomainResult<User> {
        require_user(self.users.as_ref(), id, "user")
    }

    /// Every registered user, in registration order.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the users table cannot be read.
    pub fn list_users(&self) -> DomainResult<Vec<User>> {
        self.users.list().map_err(map_user_repository_error)
    }
}

#[cfg(test)]
#[path = "user_registry_tests.rs"]
mod tests;

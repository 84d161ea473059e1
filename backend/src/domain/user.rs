//! User data model.

use std::fmt;
use std::str::FromStr;

use super::ids::UserId;

/// Validation errors returned when parsing a [`UserRole`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The role label is not one of the known roles.
    #[error("unknown user role: {value}")]
    UnknownRole {
        /// Label that failed to parse.
        value: String,
    },
}

/// Role claimed by a user at registration.
///
/// The claim is recorded as given; nothing checks it when the user later acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Books washes for their own cars.
    Customer,
    /// Accepts and completes wash jobs.
    Cleaner,
}

impl UserRole {
    /// Persisted label for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Cleaner => "Cleaner",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "cleaner" => Ok(Self::Cleaner),
            _ => Err(UserValidationError::UnknownRole {
                value: s.to_owned(),
            }),
        }
    }
}

/// Registered customer or cleaner.
///
/// ## Invariants
/// - Users are created once and never mutated or deleted.
/// - `name` and `phone` are stored verbatim; no format checks apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    role: UserRole,
    phone: String,
}

impl User {
    /// Build a new [`User`] from its components.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        role: UserRole,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            phone: phone.into(),
        }
    }

    /// Stable user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Name given at registration.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Claimed role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }
}

#[cfg(test)]
mod tests;

//! Typed identifiers for users, cars, and wash jobs.
//!
//! Each identifier keeps the parsed UUID alongside its lowercase hyphenated
//! text. Any spelling `Uuid::parse_str` accepts (uppercase, simple, braced,
//! URN) maps to that one form, so lookups by id text agree with UUID
//! equality.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Validation errors returned when parsing an identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    /// The identifier text was empty.
    #[error("{entity} id must not be empty")]
    Empty {
        /// Entity the identifier belongs to.
        entity: &'static str,
    },
    /// The identifier text was not a UUID.
    #[error("{entity} id must be a valid UUID")]
    Invalid {
        /// Entity the identifier belongs to.
        entity: &'static str,
    },
}

fn parse_uuid(entity: &'static str, raw: &str) -> Result<Uuid, IdValidationError> {
    if raw.is_empty() {
        return Err(IdValidationError::Empty { entity });
    }
    if raw.trim() != raw {
        return Err(IdValidationError::Invalid { entity });
    }
    Uuid::parse_str(raw).map_err(|_| IdValidationError::Invalid { entity })
}

macro_rules! define_entity_id {
    (
        $(#[$outer:meta])*
        $name:ident => $entity:literal
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(Uuid, String);

        impl $name {
            /// Validate and construct an identifier from borrowed input.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdValidationError> {
                parse_uuid($entity, id.as_ref()).map(Self::from_uuid)
            }

            /// Wrap an already generated UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid, uuid.hyphenated().to_string())
            }

            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self::from_uuid(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.1.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.1
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl FromStr for $name {
            type Err = IdValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_entity_id! {
    /// Stable user identifier, shared by customers and cleaners.
    UserId => "user"
}

define_entity_id! {
    /// Identifier of a registered car.
    CarId => "car"
}

define_entity_id! {
    /// Identifier of a wash job.
    JobId => "job"
}

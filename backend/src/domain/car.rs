//! Car data model.

use super::ids::{CarId, UserId};

/// Vehicle registered by a user.
///
/// Cars are never mutated or deleted, and plates are not unique: two owners,
/// or the same owner twice, may register the same plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    id: CarId,
    owner_id: UserId,
    plate: String,
    model: String,
}

impl Car {
    /// Build a new [`Car`] owned by `owner_id`.
    pub fn new(
        id: CarId,
        owner_id: UserId,
        plate: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner_id,
            plate: plate.into(),
            model: model.into(),
        }
    }

    /// Stable car identifier.
    #[must_use]
    pub const fn id(&self) -> &CarId {
        &self.id
    }

    /// Identifier of the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Licence plate as entered.
    #[must_use]
    pub fn plate(&self) -> &str {
        self.plate.as_str()
    }

    /// Make or model description.
    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_str()
    }
}

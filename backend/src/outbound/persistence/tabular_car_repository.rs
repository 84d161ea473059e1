//! Car repository over the `cars` resource.

use std::sync::Arc;

use super::table_gateway::{
    RowDecodeError, TableFault, TableGateway, TableRecord, cells, map_table_fault,
};
use crate::domain::ports::{CarRepository, CarRepositoryError, RecordStore};
use crate::domain::{Car, CarId, UserId};

impl TableRecord for Car {
    const RESOURCE: &'static str = "cars";
    const COLUMNS: &'static [&'static str] = &["car_id", "user_id", "plate", "model"];

    fn key(&self) -> String {
        self.id().to_string()
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.owner_id().to_string(),
            self.plate().to_owned(),
            self.model().to_owned(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self, RowDecodeError> {
        let [id, owner_id, plate, model] = cells::<4>(Self::RESOURCE, row)?;
        let id =
            CarId::new(id).map_err(|err| RowDecodeError::field(Self::RESOURCE, "car_id", err))?;
        let owner_id = UserId::new(owner_id)
            .map_err(|err| RowDecodeError::field(Self::RESOURCE, "user_id", err))?;
        Ok(Self::new(id, owner_id, plate.as_str(), model.as_str()))
    }
}

fn map_fault(fault: TableFault) -> CarRepositoryError {
    map_table_fault(fault, CarRepositoryError::store, CarRepositoryError::decode)
}

/// [`CarRepository`] persisting one row per car.
pub struct TabularCarRepository<S> {
    gateway: TableGateway<S>,
}

impl<S: RecordStore> TabularCarRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            gateway: TableGateway::new(store),
        }
    }
}

impl<S: RecordStore> CarRepository for TabularCarRepository<S> {
    fn insert(&self, car: &Car) -> Result<(), CarRepositoryError> {
        self.gateway.append(car).map_err(map_fault)
    }

    fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<Car>, CarRepositoryError> {
        self.gateway
            .load_matching(|car: &Car| car.owner_id() == owner_id)
            .map_err(map_fault)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::outbound::persistence::MemoryRecordStore;

    fn repository() -> TabularCarRepository<MemoryRecordStore> {
        TabularCarRepository::new(Arc::new(MemoryRecordStore::default()))
    }

    #[rstest]
    fn list_for_owner_returns_only_that_owners_cars_in_order() {
        let repo = repository();
        let ana = UserId::random();
        let bo = UserId::random();
        let civic = Car::new(CarId::random(), ana.clone(), "XYZ-123", "Civic");
        let golf = Car::new(CarId::random(), bo.clone(), "ABC-987", "Golf");
        let second_civic = Car::new(CarId::random(), ana.clone(), "XYZ-123", "Civic");
        for car in [&civic, &golf, &second_civic] {
            repo.insert(car).expect("insert");
        }

        assert_eq!(
            repo.list_for_owner(&ana).expect("list"),
            vec![civic, second_civic]
        );
        assert_eq!(repo.list_for_owner(&bo).expect("list"), vec![golf]);
    }

    #[rstest]
    fn list_for_owner_without_cars_is_empty() {
        let repo = repository();

        assert!(
            repo.list_for_owner(&UserId::random())
                .expect("list")
                .is_empty()
        );
    }

    #[rstest]
    fn malformed_owner_cell_is_a_decode_error() {
        let row = vec![
            CarId::random().to_string(),
            "not-a-uuid".to_owned(),
            "XYZ-123".to_owned(),
            "Civic".to_owned(),
        ];

        let error = Car::from_row(&row).expect_err("owner rejected");

        assert!(matches!(
            error,
            RowDecodeError::Field {
                column: "user_id",
                ..
            }
        ));
    }
}

//! User repository over the `users` resource.

use std::sync::Arc;

use super::table_gateway::{
    RowDecodeError, TableFault, TableGateway, TableRecord, cells, map_table_fault,
};
use crate::domain::ports::{RecordStore, UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, UserRole};

impl TableRecord for User {
    const RESOURCE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["user_id", "name", "role", "phone"];

    fn key(&self) -> String {
        self.id().to_string()
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.name().to_owned(),
            self.role().as_str().to_owned(),
            self.phone().to_owned(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self, RowDecodeError> {
        let [id, name, role, phone] = cells::<4>(Self::RESOURCE, row)?;
        let id = UserId::new(id)
            .map_err(|err| RowDecodeError::field(Self::RESOURCE, "user_id", err))?;
        let role: UserRole = role
            .parse()
            .map_err(|err| RowDecodeError::field(Self::RESOURCE, "role", err))?;
        Ok(Self::new(id, name.as_str(), role, phone.as_str()))
    }
}

fn map_fault(fault: TableFault) -> UserRepositoryError {
    map_table_fault(fault, UserRepositoryError::store, UserRepositoryError::decode)
}

/// [`UserRepository`] persisting one row per user.
pub struct TabularUserRepository<S> {
    gateway: TableGateway<S>,
}

impl<S: RecordStore> TabularUserRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            gateway: TableGateway::new(store),
        }
    }
}

impl<S: RecordStore> UserRepository for TabularUserRepository<S> {
    fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        self.gateway.append(user).map_err(map_fault)
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        self.gateway.find::<User>(id.as_ref()).map_err(map_fault)
    }

    fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.gateway.load_all::<User>().map_err(map_fault)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::Table;
    use crate::outbound::persistence::MemoryRecordStore;

    struct Harness {
        store: Arc<MemoryRecordStore>,
        repo: TabularUserRepository<MemoryRecordStore>,
    }

    #[fixture]
    fn harness() -> Harness {
        let store = Arc::new(MemoryRecordStore::default());
        let repo = TabularUserRepository::new(Arc::clone(&store));
        Harness { store, repo }
    }

    #[rstest]
    fn insert_then_find_returns_fields_unchanged(harness: Harness) {
        let user = User::new(UserId::random(), "Ana", UserRole::Customer, "+1 555 0100");

        harness.repo.insert(&user).expect("insert");

        assert_eq!(
            harness.repo.find_by_id(user.id()).expect("find"),
            Some(user)
        );
    }

    #[rstest]
    fn stored_row_uses_users_schema(harness: Harness) {
        let user = User::new(UserId::random(), "Bo", UserRole::Cleaner, "555-0199");
        harness.repo.insert(&user).expect("insert");

        let table = harness
            .store
            .table("users")
            .expect("inspect")
            .expect("users saved");

        assert_eq!(table.columns(), ["user_id", "name", "role", "phone"]);
        assert_eq!(
            table.rows(),
            [vec![
                user.id().to_string(),
                "Bo".to_owned(),
                "Cleaner".to_owned(),
                "555-0199".to_owned(),
            ]]
        );
    }

    #[rstest]
    fn list_preserves_insertion_order(harness: Harness) {
        let first = User::new(UserId::random(), "Ana", UserRole::Customer, "1");
        let second = User::new(UserId::random(), "Bo", UserRole::Cleaner, "2");
        harness.repo.insert(&first).expect("insert first");
        harness.repo.insert(&second).expect("insert second");

        assert_eq!(harness.repo.list().expect("list"), vec![first, second]);
    }

    #[rstest]
    fn unknown_role_cell_is_a_decode_error(harness: Harness) {
        let mut table = Table::empty(User::COLUMNS);
        table
            .push_row(vec![
                UserId::random().to_string(),
                "Cy".to_owned(),
                "Manager".to_owned(),
                "3".to_owned(),
            ])
            .expect("row fits");
        harness.store.save(&table, "users").expect("seed");

        let error = harness.repo.list().expect_err("role rejected");

        assert!(matches!(error, UserRepositoryError::Decode { .. }));
    }
}

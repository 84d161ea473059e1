//! Service wiring shared by every inbound adapter.
//!
//! All three services read and write through the same record store, so a
//! user registered through [`CarwashState::users`] is immediately visible to
//! the existence checks in the fleet and job services.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{IdIssuer, RandomIdIssuer, RecordStore};
use crate::domain::{FleetRegistry, JobLifecycle, UserRegistry};
use crate::outbound::persistence::{
    TabularCarRepository, TabularJobRepository, TabularUserRepository,
};

/// Dependency bundle for the CLI and tests.
pub struct CarwashState<S> {
    /// Registration and lookup of customers and cleaners.
    pub users: UserRegistry<TabularUserRepository<S>>,
    /// Car registration per owner.
    pub fleet: FleetRegistry<TabularCarRepository<S>, TabularUserRepository<S>>,
    /// Wash requests and their lifecycle.
    pub jobs: JobLifecycle<TabularJobRepository<S>, TabularUserRepository<S>>,
}

impl<S: RecordStore> CarwashState<S> {
    /// Wire the services over `store` with explicit id and time sources.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use carwash::domain::ports::RandomIdIssuer;
    /// use carwash::outbound::persistence::MemoryRecordStore;
    /// use carwash::state::CarwashState;
    /// use mockable::DefaultClock;
    ///
    /// let state = CarwashState::new(
    ///     Arc::new(MemoryRecordStore::default()),
    ///     Arc::new(RandomIdIssuer),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert!(state.users.list_users().expect("empty store").is_empty());
    /// ```
    pub fn new(store: Arc<S>, ids: Arc<dyn IdIssuer>, clock: Arc<dyn Clock>) -> Self {
        let users = Arc::new(TabularUserRepository::new(Arc::clone(&store)));
        let cars = Arc::new(TabularCarRepository::new(Arc::clone(&store)));
        let jobs = Arc::new(TabularJobRepository::new(store));

        Self {
            users: UserRegistry::new(Arc::clone(&users), Arc::clone(&ids)),
            fleet: FleetRegistry::new(cars, Arc::clone(&users), Arc::clone(&ids)),
            jobs: JobLifecycle::new(jobs, users, ids, clock),
        }
    }

    /// Wire the services with random v4 ids and the system clock.
    pub fn with_system_sources(store: Arc<S>) -> Self {
        Self::new(store, Arc::new(RandomIdIssuer), Arc::new(DefaultClock))
    }
}

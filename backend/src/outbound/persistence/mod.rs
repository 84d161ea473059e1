//! Record store adapters and the table-backed repositories built on them.
//!
//! # Architecture
//!
//! - **Whole-table cycle**: every repository call loads the full resource,
//!   edits it in memory, and overwrites it. There is no cache, no locking,
//!   and the last writer wins.
//! - **Thin adapters**: repositories only translate between rows of string
//!   cells and domain types. No business logic resides here.
//! - **Schema-on-read**: stores project loaded tables onto the columns each
//!   repository declares, so older documents with missing or extra columns
//!   still load.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use carwash::domain::ports::UserRepository;
//! use carwash::domain::{User, UserId, UserRole};
//! use carwash::outbound::persistence::{MemoryRecordStore, TabularUserRepository};
//!
//! let repo = TabularUserRepository::new(Arc::new(MemoryRecordStore::default()));
//! let user = User::new(UserId::random(), "Ana", UserRole::Customer, "555-0100");
//! repo.insert(&user).expect("insert user");
//! assert_eq!(repo.list().expect("list users"), vec![user]);
//! ```

mod atomic_io;
mod file_record_store;
mod memory_record_store;
mod table_gateway;
mod tabular_car_repository;
mod tabular_job_repository;
mod tabular_user_repository;

pub use file_record_store::FileRecordStore;
pub use memory_record_store::MemoryRecordStore;
pub use tabular_car_repository::TabularCarRepository;
pub use tabular_job_repository::TabularJobRepository;
pub use tabular_user_repository::TabularUserRepository;

//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: record stores (JSON files or memory) and the
//!   table-backed user, car, and job repositories.
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod persistence;

//! Car-wash job matching: customers register cars and request washes,
//! cleaners accept and complete them, and every record lives in a tabular
//! record store.
//!
//! - [`domain`]: entities, lifecycle rules, services, and ports.
//! - [`outbound`]: record stores and table-backed repositories.
//! - [`inbound`]: the command-line adapter.
//! - [`config`] and [`state`]: settings and service wiring.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod state;

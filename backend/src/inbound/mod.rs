//! Inbound adapters that translate external requests into domain service
//! calls while keeping framework details at the edge.
//!
//! The command-line interface lives under [`cli`].

pub mod cli;

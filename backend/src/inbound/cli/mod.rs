//! Command-line adapter translating role screens into domain service calls.
//!
//! Parsing lives in `args`, dispatch in `commands`, and table output in
//! `render`. Ids are validated by clap, so a malformed id never reaches a
//! service.

mod args;
mod commands;
mod render;

pub use args::{
    AdminView, CleanerAction, CleanerArgs, Cli, Command, CustomerAction, CustomerArgs,
    RegisterArgs, RoleArg,
};
pub use commands::{CliError, run};

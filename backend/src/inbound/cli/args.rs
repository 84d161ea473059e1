//! Command-line grammar: one subcommand per role screen.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::{JobId, UserId, UserRole};

/// `carwash` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "carwash",
    about = "Match customers who need a car wash with cleaners who perform it",
    version
)]
pub struct Cli {
    /// Directory holding the users, cars, and jobs tables.
    #[arg(long = "data-dir", value_name = "path", global = true)]
    pub data_dir: Option<PathBuf>,
    /// Screen to act on.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level screens.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register as a customer or cleaner and print the new id.
    Register(RegisterArgs),
    /// Manage your cars and wash requests.
    Customer(CustomerArgs),
    /// Browse, accept, and complete wash jobs.
    Cleaner(CleanerArgs),
    /// Inspect every stored job or user.
    Admin {
        /// Table to show.
        #[command(subcommand)]
        view: AdminView,
    },
}

/// Role chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Books washes.
    Customer,
    /// Performs washes.
    Cleaner,
}

impl From<RoleArg> for UserRole {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Customer => Self::Customer,
            RoleArg::Cleaner => Self::Cleaner,
        }
    }
}

/// Arguments for `register`.
#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    /// Your name.
    #[arg(long)]
    pub name: String,
    /// Phone number.
    #[arg(long)]
    pub phone: String,
    /// Role to register as.
    #[arg(long, value_enum)]
    pub role: RoleArg,
}

/// Arguments for `customer`.
#[derive(Debug, Clone, Args)]
pub struct CustomerArgs {
    /// Id printed at registration.
    #[arg(long = "user-id", value_name = "id")]
    pub user_id: UserId,
    /// Customer action.
    #[command(subcommand)]
    pub action: CustomerAction,
}

/// Customer actions.
#[derive(Debug, Clone, Subcommand)]
pub enum CustomerAction {
    /// Register a car.
    AddCar {
        /// Licence plate.
        #[arg(long)]
        plate: String,
        /// Make or model.
        #[arg(long)]
        model: String,
    },
    /// List your cars.
    Cars,
    /// Ask for a wash at a location.
    RequestWash {
        /// Plate of the car to wash; defaults to your first car.
        #[arg(long)]
        plate: Option<String>,
        /// Where the car is.
        #[arg(long)]
        location: String,
    },
    /// Show your wash requests.
    History,
}

/// Arguments for `cleaner`.
#[derive(Debug, Clone, Args)]
pub struct CleanerArgs {
    /// Id printed at registration.
    #[arg(long = "cleaner-id", value_name = "id")]
    pub cleaner_id: UserId,
    /// Cleaner action.
    #[command(subcommand)]
    pub action: CleanerAction,
}

/// Cleaner actions.
#[derive(Debug, Clone, Subcommand)]
pub enum CleanerAction {
    /// List jobs waiting for a cleaner.
    Available,
    /// Take a pending job.
    Accept {
        /// Job to accept.
        #[arg(long = "job-id", value_name = "id")]
        job_id: JobId,
    },
    /// List jobs assigned to you.
    Mine,
    /// Mark an in-progress job done.
    Complete {
        /// Job to complete.
        #[arg(long = "job-id", value_name = "id")]
        job_id: JobId,
    },
}

/// Admin tables.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum AdminView {
    /// Every wash job.
    Jobs,
    /// Every registered user.
    Users,
}

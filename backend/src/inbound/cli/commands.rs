//! Dispatch parsed commands to the domain services.

use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use super::args::{AdminView, CleanerAction, CleanerArgs, Command, CustomerAction, CustomerArgs};
use super::render::{write_cars, write_jobs, write_users};
use crate::domain::ports::RecordStore;
use crate::domain::{DomainError, RegisterUserRequest, UserId};
use crate::state::CarwashState;

/// Failures surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// A domain service refused the request or hit a storage failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// `request-wash` was called without `--plate` by a user with no cars.
    #[error("user {user_id} has no registered cars; add one first or pass --plate")]
    NoCarRegistered {
        /// Requesting customer.
        user_id: UserId,
    },
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Execute `command` against `state`, writing user-facing text to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when a service rejects the request or output cannot
/// be written. Nothing is printed to `out` for a rejected mutation.
pub fn run<S>(
    command: Command,
    state: &CarwashState<S>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: RecordStore,
{
    match command {
        Command::Register(args) => {
            let user_id = state.users.register(RegisterUserRequest {
                name: args.name,
                phone: args.phone,
                role: args.role.into(),
            })?;
            writeln!(out, "Registered! Your ID: {user_id}")?;
        }
        Command::Customer(args) => run_customer(args, state, out)?,
        Command::Cleaner(args) => run_cleaner(args, state, out)?,
        Command::Admin { view } => match view {
            AdminView::Jobs => write_jobs(out, &state.jobs.all_jobs()?)?,
            AdminView::Users => write_users(out, &state.users.list_users()?)?,
        },
    }
    Ok(())
}

fn run_customer<S>(
    args: CustomerArgs,
    state: &CarwashState<S>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: RecordStore,
{
    let CustomerArgs { user_id, action } = args;
    match action {
        CustomerAction::AddCar { plate, model } => {
            state.fleet.add_car(&user_id, plate, model)?;
            writeln!(out, "Car added!")?;
        }
        CustomerAction::Cars => write_cars(out, &state.fleet.list_cars_for(&user_id)?)?,
        CustomerAction::RequestWash { plate, location } => {
            let plate = match plate {
                Some(plate) => plate,
                None => default_plate(state, &user_id)?,
            };
            state.jobs.request_wash(&user_id, plate, location)?;
            writeln!(out, "Wash requested! Waiting for cleaner.")?;
        }
        CustomerAction::History => write_jobs(out, &state.jobs.jobs_for_customer(&user_id)?)?,
    }
    Ok(())
}

/// Plate of the customer's first registered car.
fn default_plate<S>(state: &CarwashState<S>, user_id: &UserId) -> Result<String, CliError>
where
    S: RecordStore,
{
    state.users.get_user(user_id)?;
    let cars = state.fleet.list_cars_for(user_id)?;
    let plate = cars
        .first()
        .map(|car| car.plate().to_owned())
        .ok_or_else(|| CliError::NoCarRegistered {
            user_id: user_id.clone(),
        })?;
    debug!(user_id = %user_id, plate = %plate, "defaulted wash plate to first car");
    Ok(plate)
}

fn run_cleaner<S>(
    args: CleanerArgs,
    state: &CarwashState<S>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: RecordStore,
{
    let CleanerArgs { cleaner_id, action } = args;
    match action {
        CleanerAction::Available => write_jobs(out, &state.jobs.pending_jobs()?)?,
        CleanerAction::Accept { job_id } => {
            state.jobs.accept_job(&job_id, &cleaner_id)?;
            writeln!(out, "Job accepted!")?;
        }
        CleanerAction::Mine => write_jobs(out, &state.jobs.jobs_for_cleaner(&cleaner_id)?)?,
        CleanerAction::Complete { job_id } => {
            state.jobs.complete_job(&job_id)?;
            writeln!(out, "Job completed!")?;
        }
    }
    Ok(())
}

//! `carwash` entry-point: loads settings, installs tracing, opens the data
//! directory, and dispatches one command.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use carwash::config::CarwashSettings;
use carwash::inbound::cli::{Cli, run};
use carwash::outbound::persistence::FileRecordStore;
use carwash::state::CarwashState;
use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Settings come from the environment and config files only; the CLI
    // grammar belongs to clap.
    let settings = CarwashSettings::load_from_iter([OsString::from("carwash")])
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    init_tracing(settings.json_logs);

    let data_dir = settings.resolve_data_dir(cli.data_dir.as_deref());
    let store = FileRecordStore::open(&data_dir)
        .wrap_err_with(|| format!("failed to open data directory {}", data_dir.display()))?;
    let state = CarwashState::with_system_sources(Arc::new(store));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &state, &mut out)?;
    Ok(())
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        warn!(error = %e, "tracing init failed");
    }
}

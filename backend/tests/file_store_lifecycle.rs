//! Integration tests for the JSON file record store behind the services.
//!
//! Each test opens a fresh data directory, acts through the public service
//! wiring, then reopens the directory to check what actually reached disk.
#![expect(clippy::expect_used, reason = "integration tests fail fast on setup errors")]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use carwash::domain::{ErrorCode, JobStatus, RegisterUserRequest, UserId, UserRole};
use carwash::inbound::cli::{Cli, CliError, run};
use carwash::outbound::persistence::FileRecordStore;
use carwash::state::CarwashState;
use clap::Parser;
use rstest::{fixture, rstest};

struct DataDir {
    _temp: tempfile::TempDir,
    path: PathBuf,
}

#[fixture]
fn data_dir() -> DataDir {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = temp.path().join("nested").join("data");
    DataDir { _temp: temp, path }
}

fn open_state(path: &Path) -> CarwashState<FileRecordStore> {
    let store = FileRecordStore::open(path).expect("open record store");
    CarwashState::with_system_sources(Arc::new(store))
}

fn register(state: &CarwashState<FileRecordStore>, name: &str, role: UserRole) -> UserId {
    state
        .users
        .register(RegisterUserRequest {
            name: name.to_owned(),
            phone: "555-0100".to_owned(),
            role,
        })
        .expect("registration succeeds")
}

fn cli(state: &CarwashState<FileRecordStore>, args: &[&str]) -> Result<String, CliError> {
    let parsed = Cli::try_parse_from(std::iter::once("carwash").chain(args.iter().copied()))
        .expect("arguments parse");
    let mut out = Vec::new();
    run(parsed.command, state, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[rstest]
fn records_survive_reopening_the_directory(data_dir: DataDir) {
    let (ana, job_id) = {
        let state = open_state(&data_dir.path);
        let ana = register(&state, "Ana", UserRole::Customer);
        state
            .fleet
            .add_car(&ana, "XYZ-123", "Civic")
            .expect("car added");
        let job = state
            .jobs
            .request_wash(&ana, "XYZ-123", "Downtown")
            .expect("wash requested");
        (ana, job.id().clone())
    };

    let reopened = open_state(&data_dir.path);
    let user = reopened.users.get_user(&ana).expect("user persisted");
    assert_eq!(user.name(), "Ana");
    assert_eq!(user.role(), UserRole::Customer);
    let cars = reopened.fleet.list_cars_for(&ana).expect("cars readable");
    assert_eq!(cars.len(), 1);
    let jobs = reopened.jobs.jobs_for_customer(&ana).expect("jobs readable");
    let ids: Vec<_> = jobs.iter().map(|job| job.id().clone()).collect();
    assert_eq!(ids, vec![job_id]);
    assert_eq!(
        jobs.first().map(carwash::domain::Job::status),
        Some(JobStatus::Pending)
    );
}

#[rstest]
fn each_resource_is_a_json_table(data_dir: DataDir) {
    let state = open_state(&data_dir.path);
    register(&state, "Bo", UserRole::Cleaner);

    let raw = std::fs::read_to_string(data_dir.path.join("users.json")).expect("users file");
    let document: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");

    assert_eq!(
        document["columns"],
        serde_json::json!(["user_id", "name", "role", "phone"])
    );
    assert_eq!(document["rows"][0][1], "Bo");
    assert_eq!(document["rows"][0][2], "Cleaner");
    assert!(!data_dir.path.join("cars.json").exists());
}

#[rstest]
fn unknown_job_transitions_leave_jobs_file_byte_identical(data_dir: DataDir) {
    let state = open_state(&data_dir.path);
    let ana = register(&state, "Ana", UserRole::Customer);
    let bo = register(&state, "Bo", UserRole::Cleaner);
    state
        .jobs
        .request_wash(&ana, "XYZ-123", "Downtown")
        .expect("wash requested");
    let jobs_path = data_dir.path.join("jobs.json");
    let before = std::fs::read(&jobs_path).expect("jobs file");
    let missing = UserId::random().to_string();
    let cleaner = bo.to_string();

    let accept = cli(
        &state,
        &["cleaner", "--cleaner-id", &cleaner, "accept", "--job-id", &missing],
    )
    .expect_err("unknown job cannot be accepted");
    let complete = cli(
        &state,
        &["cleaner", "--cleaner-id", &cleaner, "complete", "--job-id", &missing],
    )
    .expect_err("unknown job cannot be completed");

    for error in [accept, complete] {
        assert!(matches!(error, CliError::Domain(ref err) if err.code() == ErrorCode::NotFound));
    }
    assert_eq!(std::fs::read(&jobs_path).expect("jobs file"), before);
}

#[rstest]
fn corrupt_table_surfaces_as_internal_error(data_dir: DataDir) {
    let state = open_state(&data_dir.path);
    std::fs::write(data_dir.path.join("users.json"), "{ not json").expect("write garbage");

    let error = state.users.list_users().expect_err("corrupt table");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

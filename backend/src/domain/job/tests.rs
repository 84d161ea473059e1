//! Tests for the wash job state machine.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;

fn requested_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn pending_job() -> Job {
    Job::request(
        JobId::random(),
        UserId::random(),
        "XYZ-123",
        "Downtown",
        requested_at(),
    )
}

fn job_in(status: JobStatus) -> Job {
    Job::from_draft(JobDraft {
        id: JobId::random(),
        customer_id: UserId::random(),
        plate: "XYZ-123".to_owned(),
        location: "Downtown".to_owned(),
        status,
        cleaner_id: None,
        requested_at: requested_at(),
    })
}

#[rstest]
fn request_opens_pending_job_without_cleaner(pending_job: Job) {
    assert_eq!(pending_job.status(), JobStatus::Pending);
    assert!(pending_job.cleaner_id().is_none());
    assert_eq!(pending_job.plate(), "XYZ-123");
    assert_eq!(pending_job.location(), "Downtown");
    assert_eq!(pending_job.requested_at(), requested_at());
}

#[rstest]
fn accept_then_complete_keeps_cleaner(mut pending_job: Job) {
    let cleaner = UserId::random();

    pending_job.accept(cleaner.clone()).expect("pending job accepts");
    assert_eq!(pending_job.status(), JobStatus::InProgress);
    assert_eq!(pending_job.cleaner_id(), Some(&cleaner));

    pending_job.complete().expect("in-progress job completes");
    assert_eq!(pending_job.status(), JobStatus::Completed);
    assert_eq!(pending_job.cleaner_id(), Some(&cleaner));
}

#[rstest]
#[case(JobStatus::InProgress)]
#[case(JobStatus::Completed)]
fn accept_is_rejected_after_pending(#[case] status: JobStatus) {
    let mut job = job_in(status);
    let err = job
        .accept(UserId::random())
        .expect_err("only pending jobs accept");

    assert_eq!(
        err,
        JobTransitionError {
            from: status,
            to: JobStatus::InProgress,
        }
    );
    assert_eq!(job.status(), status);
    assert!(job.cleaner_id().is_none());
}

#[rstest]
#[case(JobStatus::Pending)]
#[case(JobStatus::Completed)]
fn complete_requires_in_progress(#[case] status: JobStatus) {
    let mut job = job_in(status);
    let err = job.complete().expect_err("only in-progress jobs complete");

    assert_eq!(err.from, status);
    assert_eq!(job.status(), status);
}

#[rstest]
fn transition_error_names_both_states() {
    let err = JobTransitionError {
        from: JobStatus::Completed,
        to: JobStatus::InProgress,
    };
    assert_eq!(err.to_string(), "cannot move job from Completed to In Progress");
}

#[rstest]
#[case("Pending", JobStatus::Pending)]
#[case("In Progress", JobStatus::InProgress)]
#[case("InProgress", JobStatus::InProgress)]
#[case("Completed", JobStatus::Completed)]
fn status_parses_persisted_labels(#[case] raw: &str, #[case] expected: JobStatus) {
    assert_eq!(raw.parse::<JobStatus>(), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_label() {
    let err = "Cancelled"
        .parse::<JobStatus>()
        .expect_err("unknown status");
    assert_eq!(err.value, "Cancelled");
}

#[rstest]
fn filters_select_by_participant_and_status(mut pending_job: Job) {
    let customer = pending_job.customer_id().clone();
    let cleaner = UserId::random();

    assert!(JobFilter::Status(JobStatus::Pending).matches(&pending_job));
    assert!(!JobFilter::Cleaner(cleaner.clone()).matches(&pending_job));

    pending_job.accept(cleaner.clone()).expect("accept");

    assert!(JobFilter::All.matches(&pending_job));
    assert!(JobFilter::Customer(customer).matches(&pending_job));
    assert!(JobFilter::Cleaner(cleaner).matches(&pending_job));
    assert!(!JobFilter::Status(JobStatus::Pending).matches(&pending_job));
    assert!(!JobFilter::Customer(UserId::random()).matches(&pending_job));
}

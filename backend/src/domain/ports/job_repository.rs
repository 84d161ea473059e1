//! Port abstraction for wash job persistence adapters and their errors.

use crate::domain::{Job, JobFilter, JobId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by job repository adapters.
    pub enum JobRepositoryError {
        /// The backing store failed to load or save the jobs table.
        Store {
            /// Failure detail.
            message: String,
        } => "job repository store failed: {message}",
        /// A stored row could not be turned back into a job.
        Decode {
            /// Failure detail.
            message: String,
        } => "job repository row is invalid: {message}",
        /// An update targeted a job that is not stored.
        Missing {
            /// Identifier of the job that was not found.
            job_id: String,
        } => "job {job_id} is not stored",
    }
}

/// Port for writing wash jobs and reading them back by filter.
#[cfg_attr(test, mockall::automock)]
pub trait JobRepository: Send + Sync {
    /// Append a new job record.
    fn insert(&self, job: &Job) -> Result<(), JobRepositoryError>;

    /// Overwrite the stored row of `job` in place.
    ///
    /// Fails with [`JobRepositoryError::Missing`] and leaves storage untouched
    /// when no row carries the job's id.
    fn update(&self, job: &Job) -> Result<(), JobRepositoryError>;

    /// Fetch a job by identifier.
    fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, JobRepositoryError>;

    /// Jobs selected by `filter`, in insertion order.
    fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, JobRepositoryError>;
}

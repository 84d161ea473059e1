//! Wash job requests, lifecycle transitions, and participant queries.
//!
//! Every transition follows the same cycle: load the job, apply the state
//! machine rule on [`Job`], then write the row back. Nothing is written when
//! the job is missing or the transition is refused.

use std::sync::Arc;

use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{IdIssuer, JobRepository, JobRepositoryError, UserRepository};
use crate::domain::user_registry::require_user;
use crate::domain::{
    DomainError, DomainResult, Job, JobFilter, JobId, JobStatus, JobTransitionError, UserId,
};

fn map_job_repository_error(error: JobRepositoryError) -> DomainError {
    match error {
        JobRepositoryError::Store { message } => {
            DomainError::internal(format!("job store unavailable: {message}"))
        }
        JobRepositoryError::Decode { message } => {
            DomainError::internal(format!("job record invalid: {message}"))
        }
        JobRepositoryError::Missing { job_id } => {
            DomainError::not_found(format!("job {job_id} not found"))
        }
    }
}

fn map_transition_error(job_id: &JobId, error: JobTransitionError) -> DomainError {
    DomainError::conflict(format!("job {job_id}: {error}"))
}

/// Creates wash jobs and moves them through their lifecycle.
#[derive(Clone)]
pub struct JobLifecycle<J, U> {
    jobs: Arc<J>,
    users: Arc<U>,
    ids: Arc<dyn IdIssuer>,
    clock: Arc<dyn Clock>,
}

impl<J, U> JobLifecycle<J, U> {
    /// Create the lifecycle manager.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use carwash::domain::JobLifecycle;
    /// use carwash::domain::ports::RandomIdIssuer;
    /// use carwash::outbound::persistence::{
    ///     MemoryRecordStore, TabularJobRepository, TabularUserRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let store = Arc::new(MemoryRecordStore::default());
    /// let lifecycle = JobLifecycle::new(
    ///     Arc::new(TabularJobRepository::new(Arc::clone(&store))),
    ///     Arc::new(TabularUserRepository::new(store)),
    ///     Arc::new(RandomIdIssuer),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert!(lifecycle.pending_jobs().expect("empty store").is_empty());
    /// ```
    pub fn new(
        jobs: Arc<J>,
        users: Arc<U>,
        ids: Arc<dyn IdIssuer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            jobs,
            users,
            ids,
            clock,
        }
    }
}

impl<J, U> JobLifecycle<J, U>
where
    J: JobRepository,
    U: UserRepository,
{
    /// Open a pending wash request for `customer_id`.
    ///
    /// The plate is not checked against the customer's cars.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the customer is not registered, or an internal
    /// error when a table cannot be read or written.
    pub fn request_wash(
        &self,
        customer_id: &UserId,
        plate: impl Into<String>,
        location: impl Into<String>,
    ) -> DomainResult<Job> {
        require_user(self.users.as_ref(), customer_id, "customer")?;

        let job = Job::request(
            JobId::from_uuid(self.ids.issue()),
            customer_id.clone(),
            plate,
            location,
            self.clock.utc(),
        );
        self.jobs.insert(&job).map_err(map_job_repository_error)?;

        info!(job_id = %job.id(), customer_id = %customer_id, "wash requested");
        Ok(job)
    }

    /// Assign `cleaner_id` to a pending job and mark it in progress.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown job or cleaner, `Conflict` when the
    /// job is no longer pending, or an internal error on storage failure.
    pub fn accept_job(&self, job_id: &JobId, cleaner_id: &UserId) -> DomainResult<Job> {
        let mut job = self.load_job(job_id)?;
        require_user(self.users.as_ref(), cleaner_id, "cleaner")?;

        job.accept(cleaner_id.clone()).map_err(|error| {
            warn!(job_id = %job_id, status = %job.status(), "accept refused");
            map_transition_error(job_id, error)
        })?;
        self.jobs.update(&job).map_err(map_job_repository_error)?;

        info!(job_id = %job_id, cleaner_id = %cleaner_id, "job accepted");
        Ok(job)
    }

    /// Mark an in-progress job completed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown job, `Conflict` unless the job is in
    /// progress, or an internal error on storage failure.
    pub fn complete_job(&self, job_id: &JobId) -> DomainResult<Job> {
        let mut job = self.load_job(job_id)?;

        job.complete().map_err(|error| {
            warn!(job_id = %job_id, status = %job.status(), "completion refused");
            map_transition_error(job_id, error)
        })?;
        self.jobs.update(&job).map_err(map_job_repository_error)?;

        info!(job_id = %job_id, "job completed");
        Ok(job)
    }

    /// Jobs requested by `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the jobs table cannot be read.
    pub fn jobs_for_customer(&self, customer_id: &UserId) -> DomainResult<Vec<Job>> {
        self.list(&JobFilter::Customer(customer_id.clone()))
    }

    /// Jobs assigned to `cleaner_id`.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the jobs table cannot be read.
    pub fn jobs_for_cleaner(&self, cleaner_id: &UserId) -> DomainResult<Vec<Job>> {
        self.list(&JobFilter::Cleaner(cleaner_id.clone()))
    }

    /// Jobs waiting for a cleaner.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the jobs table cannot be read.
    pub fn pending_jobs(&self) -> DomainResult<Vec<Job>> {
        self.list(&JobFilter::Status(JobStatus::Pending))
    }

    /// Every job, for the admin view.
    ///
    /// # Errors
    ///
    /// Returns an internal error when the jobs table cannot be read.
    pub fn all_jobs(&self) -> DomainResult<Vec<Job>> {
        self.list(&JobFilter::All)
    }

    fn list(&self, filter: &JobFilter) -> DomainResult<Vec<Job>> {
        self.jobs.list(filter).map_err(map_job_repository_error)
    }

    fn load_job(&self, job_id: &JobId) -> DomainResult<Job> {
        self.jobs
            .find_by_id(job_id)
            .map_err(map_job_repository_error)?
            .ok_or_else(|| DomainError::not_found(format!("job {job_id} not found")))
    }
}

#[cfg(test)]
#[path = "job_lifecycle_tests.rs"]
mod tests;

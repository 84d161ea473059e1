//! Wash job model and lifecycle state machine.
//!
//! A job moves strictly forward: `Pending` → `InProgress` → `Completed`.
//! Transitions are methods on [`Job`] so every caller shares the same rules;
//! services only decide when to call them and how to persist the result.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::ids::{JobId, UserId};

/// Lifecycle state of a wash job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    /// Requested by a customer and waiting for a cleaner.
    Pending,
    /// Accepted by a cleaner.
    InProgress,
    /// Finished. Terminal.
    Completed,
}

impl JobStatus {
    /// Persisted label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Whether a job in this status may move to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::InProgress) | (Self::InProgress, Self::Completed)
        )
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job status: {value}")]
pub struct UnknownJobStatus {
    /// Label that failed to parse.
    pub value: String,
}

impl FromStr for JobStatus {
    type Err = UnknownJobStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pending" => Ok(Self::Pending),
            "In Progress" | "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            _ => Err(UnknownJobStatus {
                value: s.to_owned(),
            }),
        }
    }
}

/// Rejected lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move job from {from} to {to}")]
pub struct JobTransitionError {
    /// Status the job was in.
    pub from: JobStatus,
    /// Status the caller asked for.
    pub to: JobStatus,
}

/// Field values used to restore a [`Job`] from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    /// Job identifier.
    pub id: JobId,
    /// Requesting customer.
    pub customer_id: UserId,
    /// Plate of the car to wash.
    pub plate: String,
    /// Free-text location of the car.
    pub location: String,
    /// Current status.
    pub status: JobStatus,
    /// Assigned cleaner, absent until accepted.
    pub cleaner_id: Option<UserId>,
    /// When the wash was requested.
    pub requested_at: DateTime<Utc>,
}

/// Wash job requested by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: JobId,
    customer_id: UserId,
    plate: String,
    location: String,
    status: JobStatus,
    cleaner_id: Option<UserId>,
    requested_at: DateTime<Utc>,
}

impl Job {
    /// Open a new pending job with no cleaner assigned.
    pub fn request(
        id: JobId,
        customer_id: UserId,
        plate: impl Into<String>,
        location: impl Into<String>,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            plate: plate.into(),
            location: location.into(),
            status: JobStatus::Pending,
            cleaner_id: None,
            requested_at,
        }
    }

    /// Restore a job exactly as it was stored.
    ///
    /// No cross-field checks apply here: rows written by earlier tooling may
    /// hold combinations the transitions below would never produce.
    #[must_use]
    pub fn from_draft(draft: JobDraft) -> Self {
        let JobDraft {
            id,
            customer_id,
            plate,
            location,
            status,
            cleaner_id,
            requested_at,
        } = draft;
        Self {
            id,
            customer_id,
            plate,
            location,
            status,
            cleaner_id,
            requested_at,
        }
    }

    /// Assign `cleaner_id` and move the job to [`JobStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// Returns [`JobTransitionError`] unless the job is pending.
    pub fn accept(&mut self, cleaner_id: UserId) -> Result<(), JobTransitionError> {
        self.transition(JobStatus::InProgress)?;
        self.cleaner_id = Some(cleaner_id);
        Ok(())
    }

    /// Move the job to [`JobStatus::Completed`].
    ///
    /// # Errors
    ///
    /// Returns [`JobTransitionError`] unless the job is in progress.
    pub fn complete(&mut self) -> Result<(), JobTransitionError> {
        self.transition(JobStatus::Completed)
    }

    fn transition(&mut self, to: JobStatus) -> Result<(), JobTransitionError> {
        if !self.status.can_transition_to(to) {
            return Err(JobTransitionError {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Stable job identifier.
    #[must_use]
    pub const fn id(&self) -> &JobId {
        &self.id
    }

    /// Customer who requested the wash.
    #[must_use]
    pub const fn customer_id(&self) -> &UserId {
        &self.customer_id
    }

    /// Plate of the car to wash.
    #[must_use]
    pub fn plate(&self) -> &str {
        self.plate.as_str()
    }

    /// Where the car is.
    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Cleaner working the job, if any.
    #[must_use]
    pub const fn cleaner_id(&self) -> Option<&UserId> {
        self.cleaner_id.as_ref()
    }

    /// Request timestamp.
    #[must_use]
    pub const fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
}

/// Selection applied when listing jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobFilter {
    /// Every job.
    All,
    /// Jobs requested by this customer.
    Customer(UserId),
    /// Jobs assigned to this cleaner.
    Cleaner(UserId),
    /// Jobs in this status.
    Status(JobStatus),
}

impl JobFilter {
    /// Whether `job` is selected by the filter.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            Self::All => true,
            Self::Customer(customer_id) => job.customer_id() == customer_id,
            Self::Cleaner(cleaner_id) => job.cleaner_id() == Some(cleaner_id),
            Self::Status(status) => job.status() == *status,
        }
    }
}

#[cfg(test)]
mod tests;

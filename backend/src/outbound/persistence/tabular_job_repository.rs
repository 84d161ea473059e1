//! Job repository over the `jobs` resource.
//!
//! Timestamps are written as RFC 3339 in UTC. Rows carried over from the
//! earlier spreadsheet format hold `YYYY-MM-DD HH:MM:SS[.ffffff]` without an
//! offset; those are read as UTC.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};

use super::table_gateway::{
    RowDecodeError, TableFault, TableGateway, TableRecord, cells, map_table_fault,
};
use crate::domain::ports::{JobRepository, JobRepositoryError, RecordStore};
use crate::domain::{Job, JobDraft, JobFilter, JobId, JobStatus, UserId};

const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, LEGACY_TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
        })
}

impl TableRecord for Job {
    const RESOURCE: &'static str = "jobs";
    const COLUMNS: &'static [&'static str] = &[
        "job_id",
        "customer_id",
        "plate",
        "location",
        "status",
        "cleaner_id",
        "timestamp",
    ];

    fn key(&self) -> String {
        self.id().to_string()
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.customer_id().to_string(),
            self.plate().to_owned(),
            self.location().to_owned(),
            self.status().as_str().to_owned(),
            self.cleaner_id().map(ToString::to_string).unwrap_or_default(),
            self.requested_at().to_rfc3339(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self, RowDecodeError> {
        let [id, customer_id, plate, location, status, cleaner_id, timestamp] =
            cells::<7>(Self::RESOURCE, row)?;
        let id = JobId::new(id)
            .map_err(|err| RowDecodeError::field(Self::RESOURCE, "job_id", err))?;
        let customer_id = UserId::new(customer_id)
            .map_err(|err| RowDecodeError::field(Self::RESOURCE, "customer_id", err))?;
        let status = status
            .parse::<JobStatus>()
            .map_err(|err| RowDecodeError::field(Self::RESOURCE, "status", err))?;
        let cleaner_id = if cleaner_id.trim().is_empty() {
            None
        } else {
            let cleaner_id = UserId::new(cleaner_id)
                .map_err(|err| RowDecodeError::field(Self::RESOURCE, "cleaner_id", err))?;
            Some(cleaner_id)
        };
        let requested_at = parse_timestamp(timestamp)
            .map_err(|err| RowDecodeError::field(Self::RESOURCE, "timestamp", err))?;

        Ok(Self::from_draft(JobDraft {
            id,
            customer_id,
            plate: plate.clone(),
            location: location.clone(),
            status,
            cleaner_id,
            requested_at,
        }))
    }
}

fn map_fault(fault: TableFault) -> JobRepositoryError {
    map_table_fault(fault, JobRepositoryError::store, JobRepositoryError::decode)
}

/// [`JobRepository`] persisting one row per wash job.
pub struct TabularJobRepository<S> {
    gateway: TableGateway<S>,
}

impl<S: RecordStore> TabularJobRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            gateway: TableGateway::new(store),
        }
    }
}

impl<S: RecordStore> JobRepository for TabularJobRepository<S> {
    fn insert(&self, job: &Job) -> Result<(), JobRepositoryError> {
        self.gateway.append(job).map_err(map_fault)
    }

    fn update(&self, job: &Job) -> Result<(), JobRepositoryError> {
        if self.gateway.replace(job).map_err(map_fault)? {
            Ok(())
        } else {
            Err(JobRepositoryError::missing(job.id().to_string()))
        }
    }

    fn find_by_id(&self, id: &JobId) -> Result<Option<Job>, JobRepositoryError> {
        self.gateway.find::<Job>(id.as_ref()).map_err(map_fault)
    }

    fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, JobRepositoryError> {
        self.gateway
            .load_matching(|job: &Job| filter.matches(job))
            .map_err(map_fault)
    }
}

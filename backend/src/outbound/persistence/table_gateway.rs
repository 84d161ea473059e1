//! Shared load/append/replace cycle for repositories backed by a record store.
//!
//! Each repository describes its resource through [`TableRecord`] and lets
//! [`TableGateway`] drive the whole-table load, in-memory edit, and
//! overwrite save.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{RecordStore, RecordStoreError};
use crate::domain::{Table, TableError};

/// Failure to turn a stored row into a domain record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RowDecodeError {
    /// The row does not have one cell per schema column.
    #[error("{resource} row has {found} cells, expected {expected}")]
    Arity {
        resource: &'static str,
        expected: usize,
        found: usize,
    },
    /// A cell holds a value the domain rejects.
    #[error("{resource}.{column}: {message}")]
    Field {
        resource: &'static str,
        column: &'static str,
        message: String,
    },
}

impl RowDecodeError {
    pub(crate) fn field(
        resource: &'static str,
        column: &'static str,
        error: impl std::fmt::Display,
    ) -> Self {
        Self::Field {
            resource,
            column,
            message: error.to_string(),
        }
    }
}

/// Everything that can go wrong between a repository and its table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum TableFault {
    #[error(transparent)]
    Store(#[from] RecordStoreError),
    #[error(transparent)]
    Decode(#[from] RowDecodeError),
    #[error(transparent)]
    Shape(#[from] TableError),
}

/// Map a table fault onto a repository's store/decode constructors.
pub(crate) fn map_table_fault<E, S, D>(fault: TableFault, store: S, decode: D) -> E
where
    S: FnOnce(String) -> E,
    D: FnOnce(String) -> E,
{
    match fault {
        TableFault::Store(error) => store(error.to_string()),
        TableFault::Decode(error) => decode(error.to_string()),
        TableFault::Shape(error) => decode(error.to_string()),
    }
}

/// Domain record stored as one row of a named resource.
///
/// The first column of [`TableRecord::COLUMNS`] is the record key.
pub(crate) trait TableRecord: Sized {
    /// Resource name passed to the record store.
    const RESOURCE: &'static str;
    /// Column schema, key first.
    const COLUMNS: &'static [&'static str];

    /// Key cell value.
    fn key(&self) -> String;

    /// Cells in [`TableRecord::COLUMNS`] order.
    fn to_row(&self) -> Vec<String>;

    /// Rebuild the record from cells in [`TableRecord::COLUMNS`] order.
    fn from_row(row: &[String]) -> Result<Self, RowDecodeError>;
}

/// Drives whole-table reads and writes for one record type.
pub(crate) struct TableGateway<S> {
    store: Arc<S>,
}

impl<S> Clone for TableGateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> TableGateway<S>
where
    S: RecordStore,
{
    pub(crate) fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn load_table<T: TableRecord>(&self) -> Result<Table, TableFault> {
        Ok(self.store.load(T::RESOURCE, T::COLUMNS)?)
    }

    /// Decode every stored row, in insertion order.
    pub(crate) fn load_all<T: TableRecord>(&self) -> Result<Vec<T>, TableFault> {
        let table = self.load_table::<T>()?;
        table
            .rows()
            .iter()
            .map(|row| T::from_row(row).map_err(TableFault::from))
            .collect()
    }

    /// Decode the rows accepted by `keep`.
    pub(crate) fn load_matching<T, F>(&self, keep: F) -> Result<Vec<T>, TableFault>
    where
        T: TableRecord,
        F: Fn(&T) -> bool,
    {
        let records = self.load_all::<T>()?;
        Ok(records.into_iter().filter(|record| keep(record)).collect())
    }

    /// Decode the row whose key cell equals `key`.
    pub(crate) fn find<T: TableRecord>(&self, key: &str) -> Result<Option<T>, TableFault> {
        let table = self.load_table::<T>()?;
        let Some(key_column) = T::COLUMNS.first() else {
            return Ok(None);
        };
        let Some(index) = table.position(key_column, key) else {
            return Ok(None);
        };
        table
            .rows()
            .get(index)
            .map(|row| T::from_row(row))
            .transpose()
            .map_err(TableFault::from)
    }

    /// Append `record` and overwrite the resource.
    pub(crate) fn append<T: TableRecord>(&self, record: &T) -> Result<(), TableFault> {
        let mut table = self.load_table::<T>()?;
        table.push_row(record.to_row())?;
        self.store.save(&table, T::RESOURCE)?;
        debug!(resource = T::RESOURCE, rows = table.len(), "row appended");
        Ok(())
    }

    /// Replace the row keyed like `record`.
    ///
    /// Returns `false` without saving when no row has that key.
    pub(crate) fn replace<T: TableRecord>(&self, record: &T) -> Result<bool, TableFault> {
        let mut table = self.load_table::<T>()?;
        let key = record.key();
        let position = T::COLUMNS
            .first()
            .and_then(|key_column| table.position(key_column, &key));
        let Some(index) = position else {
            debug!(resource = T::RESOURCE, key = %key, "no row to replace");
            return Ok(false);
        };
        if !table.replace_row(index, record.to_row())? {
            return Ok(false);
        }
        self.store.save(&table, T::RESOURCE)?;
        debug!(resource = T::RESOURCE, key = %key, "row replaced");
        Ok(true)
    }
}

/// Split a row into exactly `N` cells.
pub(crate) fn cells<'a, const N: usize>(
    resource: &'static str,
    row: &'a [String],
) -> Result<&'a [String; N], RowDecodeError> {
    row.try_into().map_err(|_| RowDecodeError::Arity {
        resource,
        expected: N,
        found: row.len(),
    })
}

//! Process-local record store used by tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::Table;
use crate::domain::ports::{RecordStore, RecordStoreError};

/// [`RecordStore`] holding tables in memory with the same load semantics as
/// the file store: absent means empty, and loads are projected onto the
/// requested schema.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    tables: Mutex<HashMap<String, Table>>,
}

impl MemoryRecordStore {
    /// Snapshot of `resource` exactly as last saved.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Io`] if the lock was poisoned.
    pub fn table(&self, resource: &str) -> Result<Option<Table>, RecordStoreError> {
        Ok(self.lock(resource)?.get(resource).cloned())
    }

    fn lock(
        &self,
        resource: &str,
    ) -> Result<MutexGuard<'_, HashMap<String, Table>>, RecordStoreError> {
        self.tables
            .lock()
            .map_err(|_| RecordStoreError::io(resource, "memory store lock poisoned"))
    }
}

impl RecordStore for MemoryRecordStore {
    fn load(&self, resource: &str, schema: &[&'static str]) -> Result<Table, RecordStoreError> {
        let tables = self.lock(resource)?;
        Ok(tables
            .get(resource)
            .cloned()
            .map_or_else(|| Table::empty(schema), |table| table.project(schema)))
    }

    fn save(&self, table: &Table, resource: &str) -> Result<(), RecordStoreError> {
        self.lock(resource)?
            .insert(resource.to_owned(), table.clone());
        Ok(())
    }
}

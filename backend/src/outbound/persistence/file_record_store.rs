//! Record store keeping one JSON document per resource in a data directory.
//!
//! Resource `jobs` lives at `<data_dir>/jobs.json` as
//! `{"columns": [...], "rows": [[...], ...]}`. Saves go through
//! `write_atomic` so a crash mid-save never leaves a truncated table.

use std::io;
use std::path::{Path, PathBuf};

use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::{debug, warn};

use super::atomic_io::write_atomic;
use crate::domain::Table;
use crate::domain::ports::{RecordStore, RecordStoreError};

/// [`RecordStore`] backed by JSON files under a single directory.
#[derive(Debug)]
pub struct FileRecordStore {
    root: PathBuf,
    dir: Dir,
}

impl FileRecordStore {
    /// Open `root`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, RecordStoreError> {
        let root = root.as_ref();
        let describe =
            |err: io::Error| RecordStoreError::io(root.display().to_string(), err.to_string());

        Dir::create_ambient_dir_all(root, ambient_authority()).map_err(describe)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(describe)?;
        debug!(data_dir = %root.display(), "record store opened");
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// Directory holding the resource files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(resource: &str) -> String {
        format!("{resource}.json")
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self, resource: &str, schema: &[&'static str]) -> Result<Table, RecordStoreError> {
        let contents = match self.dir.read_to_string(Self::file_name(resource)) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(resource, "resource absent; starting empty");
                return Ok(Table::empty(schema));
            }
            Err(err) => {
                warn!(resource, error = %err, "resource read failed");
                return Err(RecordStoreError::io(resource, err.to_string()));
            }
        };

        let table: Table = serde_json::from_str(&contents).map_err(|err| {
            warn!(resource, error = %err, "resource is not a valid table");
            RecordStoreError::corrupt(resource, err.to_string())
        })?;
        Ok(table.project(schema))
    }

    fn save(&self, table: &Table, resource: &str) -> Result<(), RecordStoreError> {
        let contents = serde_json::to_string_pretty(table)
            .map_err(|err| RecordStoreError::io(resource, err.to_string()))?;
        write_atomic(&self.dir, &Self::file_name(resource), &contents).map_err(|err| {
            warn!(resource, error = %err, "resource write failed");
            RecordStoreError::io(resource, err.to_string())
        })?;
        debug!(resource, rows = table.len(), "resource saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    struct Workspace {
        _temp: tempfile::TempDir,
        store: FileRecordStore,
    }

    #[fixture]
    fn workspace() -> Workspace {
        let temp = tempfile::tempdir().expect("create temp dir");
        let store = FileRecordStore::open(temp.path().join("data")).expect("open store");
        Workspace { _temp: temp, store }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| (*cell).to_owned()).collect()
    }

    #[rstest]
    fn open_creates_missing_directories(workspace: Workspace) {
        assert!(workspace.store.root().is_dir());
    }

    #[rstest]
    fn load_of_absent_resource_is_empty_with_schema(workspace: Workspace) {
        let table = workspace
            .store
            .load("cars", &["car_id", "user_id"])
            .expect("absent resource loads");

        assert!(table.is_empty());
        assert_eq!(table.columns(), ["car_id", "user_id"]);
    }

    #[rstest]
    fn save_then_load_returns_same_rows(workspace: Workspace) {
        let mut table = Table::empty(&["user_id", "name"]);
        table.push_row(row(&["u1", "Ana"])).expect("row fits");
        table.push_row(row(&["u2", "Bo"])).expect("row fits");

        workspace.store.save(&table, "users").expect("save");
        let loaded = workspace
            .store
            .load("users", &["user_id", "name"])
            .expect("load");

        assert_eq!(loaded, table);
    }

    #[rstest]
    fn load_projects_onto_requested_schema(workspace: Workspace) {
        let mut table = Table::empty(&["name", "legacy", "user_id"]);
        table.push_row(row(&["Ana", "x", "u1"])).expect("row fits");
        workspace.store.save(&table, "users").expect("save");

        let loaded = workspace
            .store
            .load("users", &["user_id", "name", "phone"])
            .expect("load");

        assert_eq!(loaded.columns(), ["user_id", "name", "phone"]);
        assert_eq!(loaded.rows(), [row(&["u1", "Ana", ""])]);
    }

    #[rstest]
    fn load_reports_corrupt_document(workspace: Workspace) {
        std::fs::write(workspace.store.root().join("jobs.json"), "not json")
            .expect("write garbage");

        let error = workspace
            .store
            .load("jobs", &["job_id"])
            .expect_err("garbage must not load");

        assert!(matches!(error, RecordStoreError::Corrupt { .. }));
    }

    #[rstest]
    fn load_reports_ragged_rows_as_corrupt(workspace: Workspace) {
        std::fs::write(
            workspace.store.root().join("jobs.json"),
            r#"{"columns":["job_id","status"],"rows":[["j1"]]}"#,
        )
        .expect("write ragged table");

        let error = workspace
            .store
            .load("jobs", &["job_id", "status"])
            .expect_err("ragged rows must not load");

        assert!(matches!(error, RecordStoreError::Corrupt { .. }));
    }
}

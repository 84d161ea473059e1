//! Port abstraction for named tabular resources and their errors.

use crate::domain::Table;

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    pub enum RecordStoreError {
        /// The resource exists but could not be read or written.
        Io {
            /// Resource name.
            resource: String,
            /// Underlying failure.
            message: String,
        } => "record store I/O failed for {resource}: {message}",
        /// The stored document could not be decoded as a table.
        Corrupt {
            /// Resource name.
            resource: String,
            /// Decoder failure.
            message: String,
        } => "resource {resource} is corrupt: {message}",
    }
}

/// Whole-table load and save over named resources.
///
/// Implementations must treat an absent resource as an empty table with the
/// requested schema, and must project loaded tables onto that schema.
/// `save` replaces the stored table wholesale; there is no locking, so
/// concurrent writers race and the last one wins.
pub trait RecordStore: Send + Sync {
    /// Load `resource`, or an empty table with `schema` if none exists yet.
    fn load(&self, resource: &str, schema: &[&'static str]) -> Result<Table, RecordStoreError>;

    /// Overwrite `resource` with `table`.
    fn save(&self, table: &Table, resource: &str) -> Result<(), RecordStoreError>;
}

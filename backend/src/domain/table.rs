//! In-memory tabular resource exchanged with record stores.
//!
//! A [`Table`] is an ordered list of column names and an ordered list of rows.
//! Every row holds exactly one string cell per column.

use serde::{Deserialize, Serialize};

/// Errors raised when building or reshaping a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A row had a different number of cells than the table has columns.
    #[error("row {index} has {found} cells but the table has {expected} columns")]
    RowArity {
        /// Zero-based row position.
        index: usize,
        /// Column count.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },
    /// A column name appeared twice.
    #[error("duplicate column: {name}")]
    DuplicateColumn {
        /// Repeated column name.
        name: String,
    },
}

/// Named-column table of string cells.
///
/// # Examples
/// ```
/// use carwash::domain::Table;
///
/// let mut table = Table::empty(&["car_id", "plate"]);
/// table
///     .push_row(vec!["c1".to_owned(), "XYZ-123".to_owned()])
///     .expect("row matches schema");
///
/// let projected = table.project(&["plate", "model"]);
/// assert_eq!(projected.columns(), ["plate", "model"]);
/// assert_eq!(projected.rows(), [vec!["XYZ-123".to_owned(), String::new()]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableDto", into = "TableDto")]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build an empty table with the given column schema.
    #[must_use]
    pub fn empty(schema: &[&str]) -> Self {
        Self {
            columns: schema.iter().map(|column| (*column).to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from columns and rows, checking row arity.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if a column repeats or a row has the wrong
    /// number of cells.
    pub fn try_new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        for (position, name) in columns.iter().enumerate() {
            if columns.iter().take(position).any(|earlier| earlier == name) {
                return Err(TableError::DuplicateColumn { name: name.clone() });
            }
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::RowArity {
                    index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowArity`] if the row does not match the schema.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), TableError> {
        self.check_arity(self.rows.len(), &row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Replace the row at `index`, returning `false` if there is no such row.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RowArity`] if the row does not match the schema.
    pub fn replace_row(&mut self, index: usize, row: Vec<String>) -> Result<bool, TableError> {
        self.check_arity(index, &row)?;
        let Some(slot) = self.rows.get_mut(index) else {
            return Ok(false);
        };
        *slot = row;
        Ok(true)
    }

    /// Position of the first row whose `column` cell equals `value`.
    #[must_use]
    pub fn position(&self, column: &str, value: &str) -> Option<usize> {
        let column_index = self.column_index(column)?;
        self.rows
            .iter()
            .position(|row| row.get(column_index).is_some_and(|cell| cell == value))
    }

    /// Reshape the table onto `schema` by column name.
    ///
    /// Columns missing from the table become empty cells; columns not named
    /// in `schema` are dropped.
    #[must_use]
    pub fn project(self, schema: &[&str]) -> Self {
        if self.columns.iter().map(String::as_str).eq(schema.iter().copied()) {
            return self;
        }
        let sources: Vec<Option<usize>> = schema
            .iter()
            .map(|column| self.column_index(column))
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                sources
                    .iter()
                    .map(|source| {
                        source
                            .and_then(|index| row.get(index))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Self {
            columns: schema.iter().map(|column| (*column).to_owned()).collect(),
            rows,
        }
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    fn check_arity(&self, index: usize, row: &[String]) -> Result<(), TableError> {
        if row.len() == self.columns.len() {
            Ok(())
        } else {
            Err(TableError::RowArity {
                index,
                expected: self.columns.len(),
                found: row.len(),
            })
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableDto {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

impl From<Table> for TableDto {
    fn from(value: Table) -> Self {
        let Table { columns, rows } = value;
        Self { columns, rows }
    }
}

impl TryFrom<TableDto> for Table {
    type Error = TableError;

    fn try_from(value: TableDto) -> Result<Self, Self::Error> {
        Self::try_new(value.columns, value.rows)
    }
}

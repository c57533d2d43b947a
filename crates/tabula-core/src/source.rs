//! Building a concrete table from the tables found in a named source.
//!
//! Parsing files is the job of a [`FileAdapter`]; this module only selects
//! one table from what the adapter produced and recovers its concrete type.

use std::collections::BTreeMap;

use log::debug;

use crate::Element;
use crate::error::{Result, TableError};
use crate::table::{AbstractTable, DataTable, IndependentKey, RowPolicy};

/// Tables read from one source, keyed by table name.
pub type TableMap = BTreeMap<String, Box<dyn AbstractTable>>;

/// Reads every table contained in a source (a file path or stream name).
pub trait FileAdapter {
    fn read(&self, source: &str) -> Result<TableMap>;
}

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> DataTable<X, E, P> {
    /// Take the table called `name` out of `tables`, or the only table when
    /// `name` is `None`.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidArgument`] when `tables` is empty, holds several
    /// tables and no name was given, or has no table called `name`.
    /// [`TableError::TypeMismatch`] when the selected table is not a
    /// `DataTable<X, E, P>`.
    pub fn from_tables(source: &str, mut tables: TableMap, name: Option<&str>) -> Result<Self> {
        let (name, table) = match name {
            Some(name) => {
                let table = tables.remove(name).ok_or_else(|| {
                    TableError::invalid_argument(format!(
                        "source '{source}' has no table named '{name}'"
                    ))
                })?;
                (name.to_owned(), table)
            }
            None if tables.len() > 1 => {
                return Err(TableError::invalid_argument(format!(
                    "source '{source}' contains {} tables; a table name is required",
                    tables.len()
                )));
            }
            None => tables.pop_first().ok_or_else(|| {
                TableError::invalid_argument(format!("source '{source}' contains no tables"))
            })?,
        };
        debug!(
            "extracting table '{name}' ({} x {}) from '{source}'",
            table.num_rows(),
            table.num_columns()
        );
        Self::try_from_abstract(table)
    }

    /// Read `source` with `adapter` and extract one table as in
    /// [`from_tables`](Self::from_tables).
    pub fn from_adapter<A>(adapter: &A, source: &str, name: Option<&str>) -> Result<Self>
    where
        A: FileAdapter + ?Sized,
    {
        let tables = adapter.read(source)?;
        Self::from_tables(source, tables, name)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::element::vec3;
    use crate::table::{AcceptAll, DataTableVec3};

    /// Serves a fixed set of tables for one known source.
    struct FixedAdapter {
        source: &'static str,
        tables: TableMap,
    }

    impl FileAdapter for FixedAdapter {
        fn read(&self, source: &str) -> Result<TableMap> {
            if source == self.source {
                Ok(self.tables.clone())
            } else {
                Err(TableError::key_not_found(source))
            }
        }
    }

    fn markers() -> Box<dyn AbstractTable> {
        let mut table = DataTableVec3::new();
        table.set_column_labels(["toe"]).unwrap();
        table.append_row(0.0, [vec3(0.1, 0.0, 0.2)]).unwrap();
        Box::new(table)
    }

    fn forces() -> Box<dyn AbstractTable> {
        let mut table = DataTable::<f64, f64, AcceptAll>::new();
        table.set_column_labels(["fx", "fy"]).unwrap();
        table.append_row(0.0, [10.0, 20.0]).unwrap();
        Box::new(table)
    }

    fn adapter() -> FixedAdapter {
        let mut tables = TableMap::new();
        tables.insert("markers".into(), markers());
        tables.insert("forces".into(), forces());
        FixedAdapter {
            source: "walk.trc",
            tables,
        }
    }

    #[test]
    fn test_named_extraction() {
        let forces =
            DataTable::<f64, f64, AcceptAll>::from_adapter(&adapter(), "walk.trc", Some("forces"))
                .unwrap();
        assert_eq!(forces.column_labels().unwrap(), ["fx", "fy"]);
        let markers =
            DataTableVec3::from_adapter(&adapter(), "walk.trc", Some("markers")).unwrap();
        assert_eq!(markers.get_row_at_index(0).unwrap()[0], vec3(0.1, 0.0, 0.2));
    }

    #[test]
    fn test_single_table_needs_no_name() {
        let mut tables = TableMap::new();
        tables.insert("markers".into(), markers());
        let table = DataTableVec3::from_tables("static.trc", tables, None).unwrap();
        assert_eq!(table.num_rows(), 1);
    }

    #[test]
    fn test_selection_errors() {
        let ambiguous = DataTableVec3::from_adapter(&adapter(), "walk.trc", None);
        assert!(matches!(ambiguous, Err(TableError::InvalidArgument { .. })));

        let missing = DataTableVec3::from_adapter(&adapter(), "walk.trc", Some("emg"));
        assert!(matches!(missing, Err(TableError::InvalidArgument { .. })));

        let empty = DataTableVec3::from_tables("empty.sto", TableMap::new(), None);
        assert!(matches!(empty, Err(TableError::InvalidArgument { .. })));

        let unreadable = DataTableVec3::from_adapter(&adapter(), "run.trc", None);
        assert!(matches!(unreadable, Err(TableError::KeyNotFound { .. })));
    }

    #[test]
    fn test_wrong_element_type() {
        let err = DataTableVec3::from_adapter(&adapter(), "walk.trc", Some("forces")).unwrap_err();
        assert!(matches!(err, TableError::TypeMismatch { .. }));
    }

    #[test]
    fn test_adapter_as_trait_object() {
        let adapter: Box<dyn FileAdapter> = Box::new(adapter());
        let table = DataTableVec3::from_adapter(adapter.as_ref(), "walk.trc", Some("markers"));
        assert!(table.is_ok());
    }
}

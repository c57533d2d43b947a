//! Column labels: translation between a label and its column index.
//!
//! Labels are stored as a string [`ValueArray`] under [`LABELS`] in the
//! dependents metadata. Lookups are linear and resolve to the first match;
//! uniqueness is not enforced.

use log::trace;

use crate::Element;
use crate::error::{Result, TableError};
use crate::metadata::{MetaValue, ValueArray};

use super::{DataTable, IndependentKey, LABELS, RowPolicy};

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> DataTable<X, E, P> {
    pub fn has_column_labels(&self) -> bool {
        self.dependents_meta.has_key(LABELS)
    }

    /// All column labels in column order.
    pub fn column_labels(&self) -> Result<Vec<String>> {
        self.dependents_meta
            .get_value_array_for_key(LABELS)?
            .to_vec::<String>()
    }

    /// Replace every column label.
    ///
    /// The dependents metadata is validated with the new labels in place; on
    /// failure the previous labels are restored and the error returned. On a
    /// table without rows this only fixes the width the first row must have.
    pub fn set_column_labels<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let previous = self.dependents_meta.remove_value_array_for_key(LABELS);
        self.dependents_meta
            .set_value_array_for_key(LABELS, ValueArray::strings(labels));
        if let Err(err) = self.validate_dependents_meta_data() {
            trace!("rejected column labels: {err}");
            match previous {
                Some(previous) => self.dependents_meta.set_value_array_for_key(LABELS, previous),
                None => {
                    self.dependents_meta.remove_value_array_for_key(LABELS);
                }
            }
            return Err(err);
        }
        Ok(())
    }

    /// Rename the column at `index`.
    pub fn set_column_label(&mut self, index: usize, label: impl Into<String>) -> Result<()> {
        self.dependents_meta
            .upd_value_array_for_key(LABELS)?
            .set(index, MetaValue::Str(label.into()))
    }

    pub fn column_label(&self, index: usize) -> Result<String> {
        self.dependents_meta
            .get_value_array_for_key(LABELS)?
            .get_as::<String>(index)
            .cloned()
    }

    /// Index of the first column labelled `label`.
    pub fn column_index(&self, label: &str) -> Result<usize> {
        let labels = self
            .dependents_meta
            .get_value_array_for_key(LABELS)
            .map_err(|_| TableError::key_not_found(label))?;
        labels
            .values()
            .iter()
            .position(|v| matches!(v, MetaValue::Str(s) if s == label))
            .ok_or_else(|| TableError::key_not_found(label))
    }

    pub fn has_column(&self, label: &str) -> bool {
        self.column_index(label).is_ok()
    }

    /// Whether `index` is below the current column count.
    pub fn has_column_at_index(&self, index: usize) -> bool {
        index < self.num_columns()
    }

    /// Drop the label registry.
    pub fn remove_column_labels(&mut self) {
        self.dependents_meta.remove_value_array_for_key(LABELS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::AcceptAll;

    fn labelled() -> DataTable {
        let mut table = DataTable::new();
        table.set_column_labels(["0", "1", "2", "3"]).unwrap();
        table.append_row(0.0, [0.0, 1.0, 2.0, 3.0]).unwrap();
        table
    }

    #[test]
    fn test_label_index_round_trip() {
        let table = labelled();
        for i in 0..table.num_columns() {
            let label = table.column_label(i).unwrap();
            assert_eq!(table.column_index(&label).unwrap(), i);
        }
    }

    #[test]
    fn test_column_by_label() {
        let table = labelled();
        assert!(table.get_dependent_column("2").unwrap() == [2.0]);
        assert_eq!(
            table.get_dependent_column("9").unwrap_err(),
            TableError::KeyNotFound { key: "9".into() }
        );
    }

    #[test]
    fn test_has_column() {
        let table = labelled();
        assert!(table.has_column_labels());
        assert!(table.has_column("3"));
        assert!(!table.has_column("4"));
        assert!(table.has_column_at_index(3));
        assert!(!table.has_column_at_index(4));
    }

    #[test]
    fn test_set_single_label() {
        let mut table = labelled();
        table.set_column_label(1, "one").unwrap();
        assert_eq!(table.column_labels().unwrap(), ["0", "one", "2", "3"]);
        assert_eq!(table.column_index("one").unwrap(), 1);
        assert!(matches!(
            table.set_column_label(4, "four"),
            Err(TableError::ColumnIndexOutOfRange { index: 4, extent: 4 })
        ));
    }

    #[test]
    fn test_set_labels_width_mismatch_restores() {
        let mut table = labelled();
        let err = table.set_column_labels(["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            TableError::IncorrectMetaDataLength {
                key: LABELS.into(),
                expected: 4,
                got: 2,
            }
        );
        assert_eq!(table.column_labels().unwrap(), ["0", "1", "2", "3"]);
    }

    #[test]
    fn test_set_labels_without_previous_rolls_back_to_none() {
        let mut table = DataTable::<f64, f64, AcceptAll>::new();
        table.append_row(0.0, [1.0, 2.0]).unwrap();
        assert!(table.set_column_labels(["a"]).is_err());
        assert!(!table.has_column_labels());
    }

    #[test]
    fn test_duplicate_labels_resolve_to_first() {
        let mut table = DataTable::<f64, f64, AcceptAll>::new();
        table.set_column_labels(["x", "x"]).unwrap();
        assert_eq!(table.column_index("x").unwrap(), 0);
    }

    #[test]
    fn test_without_labels() {
        let mut table = DataTable::<f64, f64, AcceptAll>::new();
        assert!(!table.has_column_labels());
        assert!(matches!(table.column_labels(), Err(TableError::KeyNotFound { .. })));
        assert!(table.set_column_label(0, "a").is_err());
        assert!(!table.has_column("a"));
        table.set_column_labels(["a"]).unwrap();
        table.remove_column_labels();
        assert!(!table.has_column_labels());
    }
}

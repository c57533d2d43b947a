//! The [`DataTable`] container.
//!
//! A table holds one independent column (e.g. time) of type `X`, a dense
//! matrix of dependent elements of type `E`, and three metadata stores: one
//! for the whole table, one for the independent column, and one for the
//! dependent columns. Column labels live in the dependents store under the
//! key [`LABELS`].
//!
//! Metadata is validated lazily: appends only check what they need, and the
//! full structural checks run through
//! [`validate_dependents_meta_data`](DataTable::validate_dependents_meta_data)
//! and the metadata setters.

mod display;
mod flatten;
mod handle;
mod labels;
mod validate;

use core::borrow::Borrow;
use core::fmt;

pub use handle::AbstractTable;
pub use validate::{AcceptAll, RowPolicy, StrictlyIncreasing};

use crate::element::Vec3;
use crate::error::{Result, TableError};
use crate::matrix::{Matrix, MatrixView, MatrixViewMut};
use crate::metadata::MetadataStore;
use crate::Element;

/// Reserved metadata key holding column labels.
pub const LABELS: &str = "labels";

/// Types usable as the independent column.
pub trait IndependentKey: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> IndependentKey for T where T: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// In-memory table of an independent column plus a matrix of dependent
/// columns.
///
/// # Type Parameters
///
/// - `X`: independent column type, one entry per row.
/// - `E`: dependent element type, see [`Element`].
/// - `P`: row policy consulted before appends and independent-value updates.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable<X = f64, E = f64, P = AcceptAll> {
    table_meta: MetadataStore,
    independent_meta: MetadataStore,
    dependents_meta: MetadataStore,
    independent: Vec<X>,
    matrix: Matrix<E>,
    policy: P,
}

/// Table whose elements are 3-vectors.
pub type DataTableVec3 = DataTable<f64, Vec3>;

/// Table indexed by strictly increasing time.
pub type TimeSeriesTable<E = f64> = DataTable<f64, E, StrictlyIncreasing>;

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> Default for DataTable<X, E, P> {
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> DataTable<X, E, P> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// An empty table with the default row policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty table that validates rows with `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self {
            table_meta: MetadataStore::new(),
            independent_meta: MetadataStore::new(),
            dependents_meta: MetadataStore::new(),
            independent: Vec::new(),
            matrix: Matrix::new(),
            policy,
        }
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // ------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.independent.len()
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.matrix.ncols()
    }

    /// Number of scalar components in one element; fixed by `E`.
    #[inline]
    pub fn num_components_per_element(&self) -> usize {
        E::NUM_COMPONENTS
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    pub fn table_meta_data(&self) -> &MetadataStore {
        &self.table_meta
    }

    pub fn upd_table_meta_data(&mut self) -> &mut MetadataStore {
        &mut self.table_meta
    }

    pub fn independent_meta_data(&self) -> &MetadataStore {
        &self.independent_meta
    }

    /// Unchecked mutable access; call
    /// [`validate_independent_meta_data`](Self::validate_independent_meta_data)
    /// when done.
    pub fn upd_independent_meta_data(&mut self) -> &mut MetadataStore {
        &mut self.independent_meta
    }

    pub fn dependents_meta_data(&self) -> &MetadataStore {
        &self.dependents_meta
    }

    /// Unchecked mutable access; call
    /// [`validate_dependents_meta_data`](Self::validate_dependents_meta_data)
    /// when done.
    pub fn upd_dependents_meta_data(&mut self) -> &mut MetadataStore {
        &mut self.dependents_meta
    }

    // ------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------

    /// Append a row from any sequence of elements: an array, a `Vec`, a
    /// slice, an iterator, or a view of another table.
    pub fn append_row<R>(&mut self, key: X, row: R) -> Result<()>
    where
        R: IntoIterator,
        R::Item: Borrow<E>,
    {
        let row: Vec<E> = row.into_iter().map(|e| *e.borrow()).collect();
        self.append_row_slice(key, &row)
    }

    /// Append a row.
    ///
    /// Fails without modifying the table when the row policy rejects the row
    /// ([`TableError::InvalidRow`]), or when its width disagrees with the
    /// declared column labels (first row) or the current column count
    /// ([`TableError::IncorrectNumColumns`]).
    pub fn append_row_slice(&mut self, key: X, row: &[E]) -> Result<()> {
        let width = row.len();
        self.policy
            .validate_row(self.independent.len(), &key, row, &self.independent)?;

        if self.independent.is_empty() {
            if let Ok(labels) = self.dependents_meta.get_value_array_for_key(LABELS) {
                if labels.len() != width {
                    return Err(TableError::IncorrectNumColumns {
                        expected: labels.len(),
                        got: width,
                    });
                }
            }
            self.matrix.resize(1, width);
        } else if width != self.matrix.ncols() {
            return Err(TableError::IncorrectNumColumns {
                expected: self.matrix.ncols(),
                got: width,
            });
        } else {
            self.matrix
                .resize_keep(self.matrix.nrows() + 1, self.matrix.ncols());
        }

        self.independent.push(key);
        let last = self.matrix.nrows() - 1;
        self.matrix.row_mut(last).copy_from_slice(row);
        Ok(())
    }

    /// Dependent row at `index`.
    pub fn get_row_at_index(&self, index: usize) -> Result<MatrixView<'_, E>> {
        self.check_row(index)?;
        Ok(self.matrix.row(index))
    }

    /// Writable dependent row at `index`.
    pub fn upd_row_at_index(&mut self, index: usize) -> Result<MatrixViewMut<'_, E>> {
        self.check_row(index)?;
        Ok(self.matrix.row_mut(index))
    }

    /// Dependent row of the first entry in the independent column equal to
    /// `key`.
    pub fn get_row(&self, key: &X) -> Result<MatrixView<'_, E>> {
        let index = self.row_index(key)?;
        Ok(self.matrix.row(index))
    }

    /// Writable dependent row of the first entry equal to `key`.
    pub fn upd_row(&mut self, key: &X) -> Result<MatrixViewMut<'_, E>> {
        let index = self.row_index(key)?;
        Ok(self.matrix.row_mut(index))
    }

    /// Index of the first row whose independent value equals `key`.
    pub fn row_index(&self, key: &X) -> Result<usize> {
        self.independent
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| TableError::key_not_found(key))
    }

    // ------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------

    pub fn independent_column(&self) -> &[X] {
        &self.independent
    }

    /// Replace the independent value of row `index`.
    ///
    /// The row policy sees the new value together with the existing
    /// dependent row and may reject the change.
    pub fn set_independent_value_at_index(&mut self, index: usize, value: X) -> Result<()> {
        self.check_row(index)?;
        self.policy
            .validate_row(index, &value, self.matrix.row_slice(index), &self.independent)?;
        self.independent[index] = value;
        Ok(())
    }

    pub fn get_dependent_column_at_index(&self, index: usize) -> Result<MatrixView<'_, E>> {
        self.check_column(index)?;
        Ok(self.matrix.col(index))
    }

    pub fn upd_dependent_column_at_index(&mut self, index: usize) -> Result<MatrixViewMut<'_, E>> {
        self.check_column(index)?;
        Ok(self.matrix.col_mut(index))
    }

    /// Dependent column labelled `label`.
    pub fn get_dependent_column(&self, label: &str) -> Result<MatrixView<'_, E>> {
        let index = self.column_index(label)?;
        self.get_dependent_column_at_index(index)
    }

    pub fn upd_dependent_column(&mut self, label: &str) -> Result<MatrixViewMut<'_, E>> {
        let index = self.column_index(label)?;
        self.upd_dependent_column_at_index(index)
    }

    // ------------------------------------------------------------------
    // Matrix
    // ------------------------------------------------------------------

    pub fn get_matrix(&self) -> MatrixView<'_, E> {
        self.matrix.view()
    }

    pub fn upd_matrix(&mut self) -> MatrixViewMut<'_, E> {
        self.matrix.view_mut()
    }

    /// Read-only block of `num_rows x num_columns` starting at
    /// `(row_start, column_start)`.
    pub fn get_matrix_block(
        &self,
        row_start: usize,
        column_start: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> Result<MatrixView<'_, E>> {
        self.check_block(row_start, column_start, num_rows, num_columns)?;
        Ok(self
            .matrix
            .block(row_start, column_start, num_rows, num_columns))
    }

    /// Writable block of `num_rows x num_columns` starting at
    /// `(row_start, column_start)`.
    pub fn upd_matrix_block(
        &mut self,
        row_start: usize,
        column_start: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> Result<MatrixViewMut<'_, E>> {
        self.check_block(row_start, column_start, num_rows, num_columns)?;
        Ok(self
            .matrix
            .block_mut(row_start, column_start, num_rows, num_columns))
    }

    // ------------------------------------------------------------------
    // Bounds checks
    // ------------------------------------------------------------------

    fn check_row(&self, index: usize) -> Result<()> {
        if index < self.num_rows() {
            Ok(())
        } else {
            Err(TableError::RowIndexOutOfRange {
                index,
                extent: self.num_rows(),
            })
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < self.num_columns() {
            Ok(())
        } else {
            Err(TableError::ColumnIndexOutOfRange {
                index,
                extent: self.num_columns(),
            })
        }
    }

    /// Validates a block request. All four edges are checked before any
    /// error is returned; the first failing edge (row start, row end,
    /// column start, column end) is reported.
    fn check_block(
        &self,
        row_start: usize,
        column_start: usize,
        num_rows: usize,
        num_columns: usize,
    ) -> Result<()> {
        if num_rows == 0 || num_columns == 0 {
            return Err(TableError::invalid_argument(
                "either num_rows or num_columns is zero",
            ));
        }
        let row_end = row_start.saturating_add(num_rows - 1);
        let column_end = column_start.saturating_add(num_columns - 1);
        let edges = [
            self.check_row(row_start),
            self.check_row(row_end),
            self.check_column(column_start),
            self.check_column(column_end),
        ];
        edges.into_iter().collect()
    }
}

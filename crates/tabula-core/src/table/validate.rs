//! Row policies and structural metadata checks.
//!
//! A [`RowPolicy`] is consulted before a row is appended and before an
//! independent value is replaced. The metadata checks are never run
//! implicitly on append; call them explicitly, or go through the validating
//! setters.

use core::cmp::Ordering;
use core::fmt;
use core::mem;

use log::trace;

use crate::Element;
use crate::error::{Result, TableError};
use crate::metadata::MetadataStore;

use super::{DataTable, IndependentKey, LABELS};

/// Rule deciding whether a row may enter a table.
pub trait RowPolicy<X>: Clone + fmt::Debug + Default + PartialEq + Send + Sync + 'static {
    /// Check the row that is about to occupy `row_index`.
    ///
    /// `independent` is the current independent column: for an append
    /// `row_index == independent.len()`, for an update it is the index being
    /// replaced.
    fn validate_row<E: Element>(
        &self,
        row_index: usize,
        key: &X,
        row: &[E],
        independent: &[X],
    ) -> Result<()>;
}

/// Accepts every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl<X> RowPolicy<X> for AcceptAll {
    #[inline]
    fn validate_row<E: Element>(&self, _: usize, _: &X, _: &[E], _: &[X]) -> Result<()> {
        Ok(())
    }
}

/// Requires the independent column to be strictly increasing, as for time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictlyIncreasing;

impl<X: IndependentKey + PartialOrd> RowPolicy<X> for StrictlyIncreasing {
    fn validate_row<E: Element>(
        &self,
        row_index: usize,
        key: &X,
        _: &[E],
        independent: &[X],
    ) -> Result<()> {
        if let Some(prev) = row_index.checked_sub(1).and_then(|i| independent.get(i)) {
            if key.partial_cmp(prev) != Some(Ordering::Greater) {
                return Err(TableError::InvalidRow {
                    index: row_index,
                    reason: format!("{key} is not greater than the previous value {prev}"),
                });
            }
        }
        if let Some(next) = independent.get(row_index + 1) {
            if key.partial_cmp(next) != Some(Ordering::Less) {
                return Err(TableError::InvalidRow {
                    index: row_index,
                    reason: format!("{key} is not less than the next value {next}"),
                });
            }
        }
        Ok(())
    }
}

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> DataTable<X, E, P> {
    /// Check that the independent column carries exactly one label.
    pub fn validate_independent_meta_data(&self) -> Result<()> {
        let labels = self
            .independent_meta
            .get_value_array_for_key(LABELS)
            .map_err(|_| missing(LABELS))?;
        match labels.len() {
            0 => Err(TableError::MetaDataLengthZero { key: LABELS.into() }),
            1 => Ok(()),
            got => Err(TableError::IncorrectMetaDataLength {
                key: LABELS.into(),
                expected: 1,
                got,
            }),
        }
    }

    /// Check the dependents metadata against the matrix.
    ///
    /// Column labels must exist and be non-empty. Once the table has columns
    /// the label count must equal the column count. Every other entry must
    /// have one value per label.
    pub fn validate_dependents_meta_data(&self) -> Result<()> {
        let labels = self
            .dependents_meta
            .get_value_array_for_key(LABELS)
            .map_err(|_| missing(LABELS))?;
        if labels.is_empty() {
            return Err(TableError::MetaDataLengthZero { key: LABELS.into() });
        }
        let ncols = self.num_columns();
        if ncols != 0 && labels.len() != ncols {
            return Err(TableError::IncorrectMetaDataLength {
                key: LABELS.into(),
                expected: ncols,
                got: labels.len(),
            });
        }
        for (key, values) in self.dependents_meta.iter() {
            if values.len() != labels.len() {
                return Err(TableError::IncorrectMetaDataLength {
                    key: key.to_owned(),
                    expected: labels.len(),
                    got: values.len(),
                });
            }
        }
        Ok(())
    }

    /// Replace the dependents metadata, keeping the old store if the new one
    /// does not validate.
    pub fn set_dependents_meta_data(&mut self, meta: MetadataStore) -> Result<()> {
        let previous = mem::replace(&mut self.dependents_meta, meta);
        if let Err(err) = self.validate_dependents_meta_data() {
            trace!("rejected dependents metadata: {err}");
            self.dependents_meta = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Replace the independent metadata, keeping the old store if the new
    /// one does not validate.
    pub fn set_independent_meta_data(&mut self, meta: MetadataStore) -> Result<()> {
        let previous = mem::replace(&mut self.independent_meta, meta);
        if let Err(err) = self.validate_independent_meta_data() {
            trace!("rejected independent metadata: {err}");
            self.independent_meta = previous;
            return Err(err);
        }
        Ok(())
    }
}

fn missing(key: &str) -> TableError {
    TableError::MissingMetaData { key: key.into() }
}

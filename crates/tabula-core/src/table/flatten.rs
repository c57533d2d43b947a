//! Flattening a table of composite elements into a table of scalars.
//!
//! Each source column labelled `L` becomes `K` scalar columns, where `K` is
//! the element's component count. Rows keep their order and independent
//! values.

use log::{debug, warn};

use crate::element::Composite;
use crate::error::{Result, TableError};
use crate::metadata::ValueKind;

use super::{DataTable, IndependentKey, LABELS, RowPolicy};

impl<X: IndependentKey, E: Composite, P: RowPolicy<X>> DataTable<X, E, P> {
    /// Flatten with the numeric suffixes `_1` .. `_K`.
    pub fn flatten(&self) -> Result<DataTable<X, f64, P>> {
        self.flatten_with_suffixes::<&str>(&[])
    }

    /// Flatten, naming the expanded columns `label + suffix` for each of the
    /// `K` suffixes. An empty `suffixes` falls back to `_1` .. `_K`.
    ///
    /// Table and independent metadata are copied. Dependents metadata holding
    /// strings is repeated once per component; entries of any other kind are
    /// dropped.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidArgument`] when the table has no string column
    /// labels, no rows or no columns, or when `suffixes` is non-empty and its
    /// length differs from `K`.
    pub fn flatten_with_suffixes<S: AsRef<str>>(
        &self,
        suffixes: &[S],
    ) -> Result<DataTable<X, f64, P>> {
        let k = E::NUM_COMPONENTS;
        let labels = self.column_labels().map_err(|err| {
            TableError::invalid_argument(format!("table has no usable column labels: {err}"))
        })?;
        if self.num_rows() == 0 || self.num_columns() == 0 {
            return Err(TableError::invalid_argument("table has zero rows or columns"));
        }
        if !suffixes.is_empty() && suffixes.len() != k {
            return Err(TableError::invalid_argument(format!(
                "expected {k} suffixes, one per element component, got {}",
                suffixes.len()
            )));
        }
        let suffixes: Vec<String> = if suffixes.is_empty() {
            (1..=k).map(|i| format!("_{i}")).collect()
        } else {
            suffixes.iter().map(|s| s.as_ref().to_owned()).collect()
        };

        let mut out: DataTable<X, f64, P> = DataTable::with_policy(self.policy.clone());
        out.table_meta = self.table_meta.clone();
        out.independent_meta = self.independent_meta.clone();
        for (key, values) in self.dependents_meta.iter() {
            if key == LABELS {
                continue;
            }
            if values.kind() == ValueKind::Str {
                out.dependents_meta
                    .set_value_array_for_key(key, values.repeat_each(k));
            } else {
                warn!(
                    "dropping dependents metadata '{key}' of kind {} while flattening",
                    values.kind()
                );
            }
        }

        let labels: Vec<String> = labels
            .iter()
            .flat_map(|label| suffixes.iter().map(move |s| format!("{label}{s}")))
            .collect();
        out.set_column_labels(labels)?;

        let mut row = Vec::with_capacity(self.num_columns() * k);
        for (r, key) in self.independent.iter().enumerate() {
            row.clear();
            for element in self.matrix.row_slice(r) {
                element.split_into(&mut row);
            }
            out.append_row_slice(key.clone(), &row)?;
        }

        debug!(
            "flattened {} x {} table of {} into {} x {} scalars",
            self.num_rows(),
            self.num_columns(),
            core::any::type_name::<E>(),
            out.num_rows(),
            out.num_columns()
        );
        Ok(out)
    }
}

//! Type-erased access to tables of any key, element, and policy type.
//!
//! A [`Box<dyn AbstractTable>`] carries a table whose concrete type the
//! holder does not know, e.g. one produced by a file adapter. It answers
//! shape questions, clones deeply, and can be turned back into the concrete
//! [`DataTable`] with [`DataTable::try_from_abstract`].

use core::any::{Any, type_name};
use core::fmt;

use crate::Element;
use crate::error::{Result, TableError};
use crate::metadata::MetadataStore;

use super::{DataTable, IndependentKey, RowPolicy};

/// Operations available on every table regardless of its type parameters.
pub trait AbstractTable: fmt::Debug + Send + Sync + 'static {
    fn num_rows(&self) -> usize;

    fn num_columns(&self) -> usize;

    /// Scalar components per dependent element.
    fn num_components_per_element(&self) -> usize;

    fn column_labels(&self) -> Result<Vec<String>>;

    fn has_column_labels(&self) -> bool;

    fn table_meta_data(&self) -> &MetadataStore;

    /// Name of the dependent element type.
    fn element_type_name(&self) -> &'static str;

    /// Name of the concrete table type.
    fn table_type_name(&self) -> &'static str;

    /// Deep copy behind a new handle.
    fn clone_boxed(&self) -> Box<dyn AbstractTable>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl Clone for Box<dyn AbstractTable> {
    fn clone(&self) -> Self {
        (**self).clone_boxed()
    }
}

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> AbstractTable for DataTable<X, E, P> {
    fn num_rows(&self) -> usize {
        self.independent.len()
    }

    fn num_columns(&self) -> usize {
        self.matrix.ncols()
    }

    fn num_components_per_element(&self) -> usize {
        E::NUM_COMPONENTS
    }

    fn column_labels(&self) -> Result<Vec<String>> {
        DataTable::column_labels(self)
    }

    fn has_column_labels(&self) -> bool {
        DataTable::has_column_labels(self)
    }

    fn table_meta_data(&self) -> &MetadataStore {
        &self.table_meta
    }

    fn element_type_name(&self) -> &'static str {
        type_name::<E>()
    }

    fn table_type_name(&self) -> &'static str {
        type_name::<Self>()
    }

    fn clone_boxed(&self) -> Box<dyn AbstractTable> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<X: IndependentKey, E: Element, P: RowPolicy<X>> DataTable<X, E, P> {
    /// Recover the concrete table from a handle.
    ///
    /// Fails with [`TableError::TypeMismatch`] when the handle holds a table
    /// of another type.
    pub fn try_from_abstract(table: Box<dyn AbstractTable>) -> Result<Self> {
        let found = table.table_type_name();
        table
            .into_any()
            .downcast::<Self>()
            .map(|table| *table)
            .map_err(|_| TableError::TypeMismatch {
                expected: type_name::<Self>(),
                found,
            })
    }

    /// Borrow the concrete table behind a handle.
    pub fn try_ref_from_abstract(table: &dyn AbstractTable) -> Result<&Self> {
        table
            .as_any()
            .downcast_ref::<Self>()
            .ok_or_else(|| TableError::TypeMismatch {
                expected: type_name::<Self>(),
                found: table.table_type_name(),
            })
    }
}

//! `tabula-core`: in-memory data tables for the Tabula ecosystem.
//!
//! A [`DataTable`] pairs an independent column (e.g. time) with a dense
//! matrix of dependent elements and three metadata stores. Elements can be
//! scalars or fixed-size composites such as [`Vec3`] or [`Quaternion`];
//! composite tables can be flattened into scalar tables.
//!
//! # Design
//!
//! - Element shape, independent key type, and row policy are generic
//!   parameters, so component counts are compile-time constants.
//! - Metadata is validated on demand, not on every append.
//! - Tables of unknown concrete type travel as [`Box<dyn AbstractTable>`].

pub mod element;
pub mod error;
pub mod matrix;
pub mod metadata;
pub mod source;
pub mod table;

// Re-export key types at crate root for convenience.
pub use element::{Composite, Element, Quaternion, SpatialVec, Vec3, Vec6, Vector};
pub use error::{Result, TableError};
pub use matrix::{Matrix, MatrixView, MatrixViewMut};
pub use metadata::{MetaType, MetaValue, MetadataStore, ValueArray, ValueKind};
pub use source::{FileAdapter, TableMap};
pub use table::{
    AbstractTable, AcceptAll, DataTable, DataTableVec3, RowPolicy, StrictlyIncreasing,
    TimeSeriesTable,
};

/// Items intended for glob-import: `use tabula_core::prelude::*;`
pub mod prelude {
    pub use crate::element::{Composite, Element, Quaternion, SpatialVec, Vec3, Vec6, Vector, vec3};
    pub use crate::error::{Result, TableError};
    pub use crate::metadata::{MetaValue, MetadataStore, ValueArray};
    pub use crate::source::{FileAdapter, TableMap};
    pub use crate::table::{
        AbstractTable, AcceptAll, DataTable, DataTableVec3, RowPolicy, StrictlyIncreasing,
        TimeSeriesTable,
    };
}

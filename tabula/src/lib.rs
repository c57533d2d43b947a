//! # Tabula
//!
//! Typed in-memory tables for scientific measurement data: an independent
//! column such as time, a matrix of scalar or vector measurements, and
//! metadata describing both.
//!
//! One `use tabula::prelude::*;` gives you tables, element shapes, metadata
//! stores, and the table-source interface.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Tables, element shapes, metadata, flattening |
//!
//! ```
//! # #[cfg(feature = "core")] {
//! use tabula::prelude::*;
//!
//! let mut markers = DataTableVec3::new();
//! markers.set_column_labels(["toe", "heel"]).unwrap();
//! markers
//!     .append_row(0.0, [vec3(0.1, 0.0, 0.2), vec3(-0.1, 0.0, 0.2)])
//!     .unwrap();
//!
//! let flat = markers.flatten_with_suffixes(&["_x", "_y", "_z"]).unwrap();
//! assert_eq!(flat.num_columns(), 6);
//! assert_eq!(flat.column_label(3).unwrap(), "heel_x");
//! # }
//! ```

#[cfg(feature = "core")]
pub use tabula_core as core;

/// Glob-import convenience: `use tabula::prelude::*;`
pub mod prelude {
    #[cfg(feature = "core")]
    pub use tabula_core::prelude::*;
}

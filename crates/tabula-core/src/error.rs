/// All errors returned by `tabula-core`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A metadata key, independent-column key, or column label was not found.
    #[error("key '{key}' not found")]
    KeyNotFound { key: String },

    /// A row index is past the last row of the table.
    #[error("row index {index} out of range {}", bound(.extent))]
    RowIndexOutOfRange { index: usize, extent: usize },

    /// A column index is past the last column of the table.
    #[error("column index {index} out of range {}", bound(.extent))]
    ColumnIndexOutOfRange { index: usize, extent: usize },

    /// The first appended row disagrees with the declared column labels.
    #[error("incorrect number of columns: expected {expected}, got {got}")]
    IncorrectNumColumns { expected: usize, got: usize },

    /// A row policy rejected an append or an independent-column update.
    #[error("invalid row {index}: {reason}")]
    InvalidRow { index: usize, reason: String },

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A required metadata entry is absent.
    #[error("missing metadata '{key}'")]
    MissingMetaData { key: String },

    /// A metadata value-array that must be non-empty is empty.
    #[error("metadata '{key}' has length zero")]
    MetaDataLengthZero { key: String },

    /// A metadata value-array has the wrong length.
    #[error("metadata '{key}' has incorrect length: expected {expected}, got {got}")]
    IncorrectMetaDataLength {
        key: String,
        expected: usize,
        got: usize,
    },

    /// A typed metadata retrieval targeted a value of another kind.
    #[error("bad cast: requested {expected}, stored {found}")]
    BadCast {
        expected: &'static str,
        found: &'static str,
    },

    /// A type-erased table is not of the requested concrete type.
    #[error("type mismatch: expected table of {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl TableError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn key_not_found(key: impl ToString) -> Self {
        Self::KeyNotFound {
            key: key.to_string(),
        }
    }
}

/// Inclusive index bound for an extent, used in out-of-range messages.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn bound(extent: &usize) -> String {
    match *extent {
        0 => "(extent is empty)".to_string(),
        n => format!("[0, {}]", n - 1),
    }
}

/// Convenience alias used throughout `tabula-core`.
pub type Result<T> = std::result::Result<T, TableError>;

//! Dense 2-D storage for dependent data.
//!
//! [`Matrix`] stores elements contiguously in row-major order. Rows, columns
//! and rectangular blocks are exposed as strided [`MatrixView`] /
//! [`MatrixViewMut`] borrows; none of them copy.
//!
//! Accessors at this layer do not return `Result`: an out-of-range request
//! panics. Checked access with descriptive errors lives on
//! [`DataTable`](crate::table::DataTable).

mod display;
mod ops;
mod view;

pub use view::{MatrixView, MatrixViewMut};

use crate::Element;
use crate::error::{Result, TableError};

/// A dense row-major matrix of elements.
///
/// Appending one row at a time through [`resize_keep`](Self::resize_keep) is
/// amortized O(columns) because the backing `Vec` grows geometrically.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<E> {
    data: Vec<E>,
    nrows: usize,
    ncols: usize,
}

impl<E: Element> Default for Matrix<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element> Matrix<E> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// An empty `0 x 0` matrix.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols: 0,
        }
    }

    /// A matrix with every element set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: E) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from row-major data.
    ///
    /// Returns an error if `nrows * ncols` does not equal `data.len()`.
    pub fn from_vec(data: Vec<E>, nrows: usize, ncols: usize) -> Result<Self> {
        if nrows * ncols != data.len() {
            return Err(TableError::invalid_argument(format!(
                "{nrows} x {ncols} matrix cannot hold {} elements",
                data.len()
            )));
        }
        Ok(Self { data, nrows, ncols })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }

    // ------------------------------------------------------------------
    // Resizing
    // ------------------------------------------------------------------

    /// Resize to `nrows x ncols`, discarding the current content.
    pub fn resize(&mut self, nrows: usize, ncols: usize) {
        self.data.clear();
        self.data.resize(nrows * ncols, E::default());
        self.nrows = nrows;
        self.ncols = ncols;
    }

    /// Resize to `nrows x ncols`, keeping the overlapping content.
    ///
    /// Growing or shrinking the row count with an unchanged column count
    /// only touches the new tail of the buffer.
    pub fn resize_keep(&mut self, nrows: usize, ncols: usize) {
        if ncols == self.ncols {
            self.data.resize(nrows * ncols, E::default());
        } else {
            let mut data = vec![E::default(); nrows * ncols];
            let keep_cols = ncols.min(self.ncols);
            for r in 0..nrows.min(self.nrows) {
                let src = r * self.ncols;
                data[r * ncols..r * ncols + keep_cols]
                    .copy_from_slice(&self.data[src..src + keep_cols]);
            }
            self.data = data;
        }
        self.nrows = nrows;
        self.ncols = ncols;
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Read-only view of the whole matrix.
    pub fn view(&self) -> MatrixView<'_, E> {
        self.block(0, 0, self.nrows, self.ncols)
    }

    /// Writable view of the whole matrix.
    pub fn view_mut(&mut self) -> MatrixViewMut<'_, E> {
        let (nrows, ncols) = (self.nrows, self.ncols);
        self.block_mut(0, 0, nrows, ncols)
    }

    /// Row `r` as a `1 x ncols` view.
    ///
    /// # Panics
    ///
    /// Panics if `r >= nrows`.
    pub fn row(&self, r: usize) -> MatrixView<'_, E> {
        assert!(r < self.nrows, "row {r} out of bounds for {} rows", self.nrows);
        self.block(r, 0, 1, self.ncols)
    }

    /// Writable row `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= nrows`.
    pub fn row_mut(&mut self, r: usize) -> MatrixViewMut<'_, E> {
        assert!(r < self.nrows, "row {r} out of bounds for {} rows", self.nrows);
        let ncols = self.ncols;
        self.block_mut(r, 0, 1, ncols)
    }

    /// Row `r` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= nrows`.
    pub fn row_slice(&self, r: usize) -> &[E] {
        assert!(r < self.nrows, "row {r} out of bounds for {} rows", self.nrows);
        &self.data[r * self.ncols..(r + 1) * self.ncols]
    }

    /// Column `c` as an `nrows x 1` view.
    ///
    /// # Panics
    ///
    /// Panics if `c >= ncols`.
    pub fn col(&self, c: usize) -> MatrixView<'_, E> {
        assert!(c < self.ncols, "column {c} out of bounds for {} columns", self.ncols);
        self.block(0, c, self.nrows, 1)
    }

    /// Writable column `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= ncols`.
    pub fn col_mut(&mut self, c: usize) -> MatrixViewMut<'_, E> {
        assert!(c < self.ncols, "column {c} out of bounds for {} columns", self.ncols);
        let nrows = self.nrows;
        self.block_mut(0, c, nrows, 1)
    }

    /// Rectangular view starting at `(r0, c0)` spanning `nr x nc`.
    ///
    /// # Panics
    ///
    /// Panics if the block extends past the matrix.
    pub fn block(&self, r0: usize, c0: usize, nr: usize, nc: usize) -> MatrixView<'_, E> {
        self.check_block(r0, c0, nr, nc);
        let span = block_span(self.ncols, r0, c0, nr, nc);
        MatrixView::new(&self.data[span], self.ncols, nr, nc)
    }

    /// Writable rectangular view starting at `(r0, c0)` spanning `nr x nc`.
    ///
    /// # Panics
    ///
    /// Panics if the block extends past the matrix.
    pub fn block_mut(&mut self, r0: usize, c0: usize, nr: usize, nc: usize) -> MatrixViewMut<'_, E> {
        self.check_block(r0, c0, nr, nc);
        let span = block_span(self.ncols, r0, c0, nr, nc);
        MatrixViewMut::new(&mut self.data[span], self.ncols, nr, nc)
    }

    fn check_block(&self, r0: usize, c0: usize, nr: usize, nc: usize) {
        let fits = |start: usize, len: usize, extent: usize| {
            start.checked_add(len).is_some_and(|end| end <= extent)
        };
        assert!(
            fits(r0, nr, self.nrows) && fits(c0, nc, self.ncols),
            "block ({r0}, {c0}) + {nr} x {nc} out of bounds for {} x {} matrix",
            self.nrows,
            self.ncols,
        );
    }
}

/// Range of the row-major buffer covered by a block.
fn block_span(stride: usize, r0: usize, c0: usize, nr: usize, nc: usize) -> core::ops::Range<usize> {
    if nr == 0 || nc == 0 {
        let start = r0 * stride;
        return start..start;
    }
    r0 * stride + c0..(r0 + nr - 1) * stride + c0 + nc
}

//! Strided read-only and writable views into a [`Matrix`](super::Matrix).
//!
//! A view covers `nrows x ncols` elements; element `(r, c)` lives at
//! `r * stride + c` in the borrowed slice. Linear indexing with a single
//! `usize` walks the view in row-major order, which for a row or a column
//! is simply the position along it.

use core::ops::{Index, IndexMut};

use crate::Element;

use super::Matrix;

/// Read-only view of a row, a column, a block, or a whole matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, E> {
    data: &'a [E],
    stride: usize,
    nrows: usize,
    ncols: usize,
}

/// Writable view of a row, a column, a block, or a whole matrix.
#[derive(Debug)]
pub struct MatrixViewMut<'a, E> {
    data: &'a mut [E],
    stride: usize,
    nrows: usize,
    ncols: usize,
}

impl<'a, E: Element> MatrixView<'a, E> {
    pub(crate) fn new(data: &'a [E], stride: usize, nrows: usize, ncols: usize) -> Self {
        Self {
            data,
            stride,
            nrows,
            ncols,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of elements covered by the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.nrows * self.ncols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `(r, c)`, or `None` when outside the view.
    pub fn get(&self, r: usize, c: usize) -> Option<&'a E> {
        (r < self.nrows && c < self.ncols).then(|| &self.data[r * self.stride + c])
    }

    /// Row `r` of the view as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= nrows`.
    pub fn row_slice(&self, r: usize) -> &'a [E] {
        assert!(r < self.nrows, "row {r} out of bounds for view with {} rows", self.nrows);
        let start = r * self.stride;
        &self.data[start..start + self.ncols]
    }

    /// Iterate over the rows of the view.
    pub fn rows(&self) -> impl Iterator<Item = &'a [E]> + use<'a, E> {
        let view = *self;
        (0..view.nrows).map(move |r| view.row_slice(r))
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &'a E> + use<'a, E> {
        self.rows().flatten()
    }

    /// Copy the elements out in row-major order.
    pub fn to_vec(&self) -> Vec<E> {
        self.iter().copied().collect()
    }

    /// Copy the view into an owned matrix.
    pub fn to_matrix(&self) -> Matrix<E> {
        Matrix {
            data: self.to_vec(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    #[inline]
    fn offset(&self, i: usize) -> usize {
        assert!(i < self.len(), "index {i} out of bounds for view of {} elements", self.len());
        (i / self.ncols) * self.stride + i % self.ncols
    }
}

impl<'a, E: Element> MatrixViewMut<'a, E> {
    pub(crate) fn new(data: &'a mut [E], stride: usize, nrows: usize, ncols: usize) -> Self {
        Self {
            data,
            stride,
            nrows,
            ncols,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nrows * self.ncols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> MatrixView<'_, E> {
        MatrixView::new(self.data, self.stride, self.nrows, self.ncols)
    }

    pub fn get(&self, r: usize, c: usize) -> Option<&E> {
        (r < self.nrows && c < self.ncols).then(|| &self.data[r * self.stride + c])
    }

    pub fn get_mut(&mut self, r: usize, c: usize) -> Option<&mut E> {
        if r < self.nrows && c < self.ncols {
            Some(&mut self.data[r * self.stride + c])
        } else {
            None
        }
    }

    /// Iterate mutably over all elements in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut E> + '_ {
        let ncols = self.ncols;
        self.data
            .chunks_mut(self.stride.max(1))
            .take(self.nrows)
            .flat_map(move |row| row.iter_mut().take(ncols))
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: E) {
        for x in self.iter_mut() {
            *x = value;
        }
    }

    /// Overwrite the view with `values` in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the view's length.
    pub fn copy_from_slice(&mut self, values: &[E]) {
        assert_eq!(
            values.len(),
            self.len(),
            "cannot copy {} elements into a view of {}",
            values.len(),
            self.len()
        );
        for (dst, &src) in self.iter_mut().zip(values) {
            *dst = src;
        }
    }

    /// Apply a function to every element in place.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(E) -> E,
    {
        for x in self.iter_mut() {
            *x = f(*x);
        }
    }

    #[inline]
    fn offset(&self, i: usize) -> usize {
        assert!(i < self.len(), "index {i} out of bounds for view of {} elements", self.len());
        (i / self.ncols) * self.stride + i % self.ncols
    }
}

impl<E: Element> Index<usize> for MatrixView<'_, E> {
    type Output = E;

    fn index(&self, i: usize) -> &E {
        &self.data[self.offset(i)]
    }
}

impl<E: Element> Index<(usize, usize)> for MatrixView<'_, E> {
    type Output = E;

    fn index(&self, (r, c): (usize, usize)) -> &E {
        self.get(r, c)
            .unwrap_or_else(|| panic!("({r}, {c}) out of bounds for {} x {} view", self.nrows, self.ncols))
    }
}

impl<E: Element> Index<usize> for MatrixViewMut<'_, E> {
    type Output = E;

    fn index(&self, i: usize) -> &E {
        &self.data[self.offset(i)]
    }
}

impl<E: Element> IndexMut<usize> for MatrixViewMut<'_, E> {
    fn index_mut(&mut self, i: usize) -> &mut E {
        let offset = self.offset(i);
        &mut self.data[offset]
    }
}

impl<E: Element> PartialEq for MatrixView<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows && self.ncols == other.ncols && self.iter().eq(other.iter())
    }
}

impl<E: Element> PartialEq<[E]> for MatrixView<'_, E> {
    fn eq(&self, other: &[E]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<E: Element, const N: usize> PartialEq<[E; N]> for MatrixView<'_, E> {
    fn eq(&self, other: &[E; N]) -> bool {
        self == other.as_slice()
    }
}

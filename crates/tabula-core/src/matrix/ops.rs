//! In-place element-wise arithmetic for matrices and writable views.
//!
//! Implements `AddAssign` and `SubAssign` for:
//! - `Matrix<E> op= E` and `MatrixViewMut<E> op= E` (broadcast to every element)
//! - `MatrixViewMut<E> op= MatrixView<E>` (element-wise, same shape)

use core::ops::{AddAssign, SubAssign};

use crate::Element;
use crate::error::{Result, TableError};

use super::{Matrix, MatrixView, MatrixViewMut};

// ======================================================================
// view op= element  (broadcast to every element of a row, column, block)
// ======================================================================

macro_rules! impl_broadcast_assign {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<E: Element> $trait<E> for MatrixViewMut<'_, E> {
            fn $method(&mut self, rhs: E) {
                for x in self.iter_mut() {
                    *x $op rhs;
                }
            }
        }

        impl<E: Element> $trait<E> for Matrix<E> {
            fn $method(&mut self, rhs: E) {
                for x in &mut self.data {
                    *x $op rhs;
                }
            }
        }
    };
}

impl_broadcast_assign!(AddAssign, add_assign, +=);
impl_broadcast_assign!(SubAssign, sub_assign, -=);

// ======================================================================
// view op= view  (element-wise, same shape; panics on mismatch)
// ======================================================================

macro_rules! impl_view_assign {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<E: Element> $trait<MatrixView<'_, E>> for MatrixViewMut<'_, E> {
            fn $method(&mut self, rhs: MatrixView<'_, E>) {
                assert_eq!(
                    (self.nrows(), self.ncols()),
                    (rhs.nrows(), rhs.ncols()),
                    "shape mismatch in element-wise {}",
                    stringify!($method),
                );
                for (x, &y) in self.iter_mut().zip(rhs.iter()) {
                    *x $op y;
                }
            }
        }
    };
}

impl_view_assign!(AddAssign, add_assign, +=);
impl_view_assign!(SubAssign, sub_assign, -=);

// ======================================================================
// Fallible (Result-returning) variants for non-panicking callers
// ======================================================================

impl<E: Element> MatrixViewMut<'_, E> {
    /// Element-wise `+=`, returning `Err` on shape mismatch.
    pub fn add_assign_checked(&mut self, rhs: MatrixView<'_, E>) -> Result<()> {
        self.check_shape(&rhs)?;
        *self += rhs;
        Ok(())
    }

    /// Element-wise `-=`, returning `Err` on shape mismatch.
    pub fn sub_assign_checked(&mut self, rhs: MatrixView<'_, E>) -> Result<()> {
        self.check_shape(&rhs)?;
        *self -= rhs;
        Ok(())
    }

    fn check_shape(&self, rhs: &MatrixView<'_, E>) -> Result<()> {
        if (self.nrows(), self.ncols()) == (rhs.nrows(), rhs.ncols()) {
            Ok(())
        } else {
            Err(TableError::invalid_argument(format!(
                "shape mismatch: {} x {} vs {} x {}",
                self.nrows(),
                self.ncols(),
                rhs.nrows(),
                rhs.ncols()
            )))
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::element::{Vec3, vec3};

    fn sample() -> Matrix<f64> {
        Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap()
    }

    #[test]
    fn test_row_add_assign() {
        let mut m = sample();
        let mut row = m.row_mut(1);
        row += 10.0;
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 14.0, 15.0, 16.0]);
    }

    #[test]
    fn test_col_sub_assign() {
        let mut m = sample();
        let mut col = m.col_mut(0);
        col -= 1.0;
        assert_eq!(m.as_slice(), &[0.0, 2.0, 3.0, 3.0, 5.0, 6.0]);
    }

    #[test]
    fn test_matrix_then_block_restores() {
        let mut m = sample();
        let original = m.clone();
        m += 2.0;
        let mut all = m.block_mut(0, 0, 2, 3);
        all -= 2.0;
        assert_eq!(m, original);
    }

    #[test]
    fn test_view_add_view() {
        let mut m = sample();
        let other = Matrix::filled(2, 2, 1.0);
        let mut block = m.block_mut(0, 1, 2, 2);
        block += other.view();
        assert_eq!(m.as_slice(), &[1.0, 3.0, 4.0, 4.0, 6.0, 7.0]);
    }

    #[test]
    fn test_checked_shape_mismatch() {
        let mut m = sample();
        let other = Matrix::filled(1, 3, 1.0);
        assert!(m.view_mut().add_assign_checked(other.view()).is_err());
        assert!(m.row_mut(0).sub_assign_checked(other.view()).is_ok());
        assert_eq!(m.row(0).to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_vector_broadcast() {
        let mut m = Matrix::filled(2, 2, Vec3::default());
        m += vec3(1.0, 2.0, 3.0);
        assert!(m.as_slice().iter().all(|v| *v == vec3(1.0, 2.0, 3.0)));
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn test_view_add_panics_on_mismatch() {
        let mut m = sample();
        let other = Matrix::filled(1, 1, 1.0);
        let mut v = m.view_mut();
        v += other.view();
    }
}

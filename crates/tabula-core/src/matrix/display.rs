//! `Display` formatting for matrices and views.
//!
//! Each row renders as `[e0 e1 ...]`; rows are separated by newlines.

use core::fmt;

use crate::Element;

use super::{Matrix, MatrixView, MatrixViewMut};

impl<E: Element> fmt::Display for MatrixView<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nrows() == 0 {
            return write!(f, "[]");
        }
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<E: Element> fmt::Display for MatrixViewMut<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_view().fmt(f)
    }
}

impl<E: Element> fmt::Display for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.view().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::vec3;

    #[test]
    fn test_display_row() {
        let m = Matrix::from_vec(vec![1.0, 2.5, 3.0], 1, 3).unwrap();
        assert_eq!(format!("{}", m.row(0)), "[1 2.5 3]");
    }

    #[test]
    fn test_display_block() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        assert_eq!(m.to_string(), "[1 2]\n[3 4]");
    }

    #[test]
    fn test_display_vector_elements() {
        let m = Matrix::filled(1, 2, vec3(1.0, 0.0, 0.0));
        assert_eq!(m.to_string(), "[(1, 0, 0) (1, 0, 0)]");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Matrix::<f64>::new().to_string(), "[]");
    }
}

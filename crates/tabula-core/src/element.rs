//! Element shapes storable in a table's dependent matrix.
//!
//! The hierarchy is:
//! ```text
//! Element
//!   ├── f64, f32                 (1 component)
//!   └── Composite
//!         ├── Vector<E, N>       (N x E components)
//!         └── Quaternion         (4 components)
//! ```
//!
//! The component count of a shape is an associated constant, so asking a
//! table for it never touches the stored data. Only [`Composite`] shapes can
//! be flattened into a scalar table; flattening a scalar table does not
//! compile.

use core::fmt;
use core::ops::{AddAssign, Index, IndexMut, SubAssign};

// ---------------------------------------------------------------------------
// Element: the root trait for every dependent-matrix element
// ---------------------------------------------------------------------------

/// Base trait for every type storable in the dependent matrix.
///
/// Elements are plain values: no references, no shared ownership. Cloning a
/// table copies every element.
pub trait Element:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + AddAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
    /// Number of scalar components making up one element.
    const NUM_COMPONENTS: usize;

    /// Append the scalar components of `self` to `out`, outer index first.
    fn split_into(&self, out: &mut Vec<f64>);
}

/// Marker for element shapes with more than one scalar component.
pub trait Composite: Element {}

/// Number of scalar components of `E`.
#[inline]
pub const fn num_components<E: Element>() -> usize {
    E::NUM_COMPONENTS
}

macro_rules! impl_scalar_element {
    ($ty:ty) => {
        impl Element for $ty {
            const NUM_COMPONENTS: usize = 1;

            #[inline]
            fn split_into(&self, out: &mut Vec<f64>) {
                out.push(f64::from(*self));
            }
        }
    };
}

impl_scalar_element!(f64);
impl_scalar_element!(f32);

// ---------------------------------------------------------------------------
// Vector: fixed-size vector over any element
// ---------------------------------------------------------------------------

/// A fixed-size vector of `N` elements.
///
/// Nesting is allowed: `Vector<Vec3, 2>` has six scalar components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<E, const N: usize>(pub [E; N]);

/// Three-component vector, e.g. a marker position.
pub type Vec3 = Vector<f64, 3>;

/// Six-component flat vector.
pub type Vec6 = Vector<f64, 6>;

/// Pair of 3-vectors (angular, linear), six components in total.
pub type SpatialVec = Vector<Vec3, 2>;

impl<E: Element, const N: usize> Vector<E, N> {
    /// Create a vector from its elements.
    #[inline]
    pub const fn new(values: [E; N]) -> Self {
        Self(values)
    }

    /// A vector with every element set to `value`.
    #[inline]
    pub fn splat(value: E) -> Self {
        Self([value; N])
    }

    /// The elements as an array.
    #[inline]
    pub fn as_array(&self) -> &[E; N] {
        &self.0
    }
}

/// Shorthand for building a [`Vec3`].
#[inline]
pub const fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vector([x, y, z])
}

impl<E: Element, const N: usize> Default for Vector<E, N> {
    fn default() -> Self {
        Self([E::default(); N])
    }
}

impl<E: Element, const N: usize> From<[E; N]> for Vector<E, N> {
    fn from(values: [E; N]) -> Self {
        Self(values)
    }
}

impl<E, const N: usize> Index<usize> for Vector<E, N> {
    type Output = E;

    #[inline]
    fn index(&self, i: usize) -> &E {
        &self.0[i]
    }
}

impl<E, const N: usize> IndexMut<usize> for Vector<E, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut E {
        &mut self.0[i]
    }
}

impl<E: Element, const N: usize> AddAssign for Vector<E, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl<E: Element, const N: usize> SubAssign for Vector<E, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
    }
}

impl<E: Element, const N: usize> fmt::Display for Vector<E, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

impl<E: Element, const N: usize> Element for Vector<E, N> {
    const NUM_COMPONENTS: usize = N * E::NUM_COMPONENTS;

    fn split_into(&self, out: &mut Vec<f64>) {
        for e in &self.0 {
            e.split_into(out);
        }
    }
}

impl<E: Element, const N: usize> Composite for Vector<E, N> {}

// ---------------------------------------------------------------------------
// Quaternion
// ---------------------------------------------------------------------------

/// An orientation quaternion stored as `(w, x, y, z)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self::new(w, x, y, z)
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        self.w += rhs.w;
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        self.w -= rhs.w;
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

impl Element for Quaternion {
    const NUM_COMPONENTS: usize = 4;

    fn split_into(&self, out: &mut Vec<f64>) {
        out.extend([self.w, self.x, self.y, self.z]);
    }
}

impl Composite for Quaternion {}

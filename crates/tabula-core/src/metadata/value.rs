//! Type-tagged metadata values and homogeneous value-arrays.

use core::fmt;

use crate::error::{Result, TableError};

/// The concrete type of a stored metadata value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    UInt,
    Float,
    Str,
}

impl ValueKind {
    /// Name of the Rust type carried by this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "i64",
            Self::UInt => "u64",
            Self::Float => "f64",
            Self::Str => "String",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A single metadata value that remembers its concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl MetaValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::UInt(_) => ValueKind::UInt,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
        }
    }

    /// Typed view of the value.
    ///
    /// Fails with [`TableError::BadCast`] when `T` is not the stored type.
    pub fn get<T: MetaType>(&self) -> Result<&T> {
        T::from_meta(self).ok_or(TableError::BadCast {
            expected: T::KIND.type_name(),
            found: self.kind().type_name(),
        })
    }
}

impl From<i32> for MetaValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for MetaValue {
    fn from(v: u32) -> Self {
        Self::UInt(u64::from(v))
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

/// Rust types that can be stored in and recovered from a [`MetaValue`].
pub trait MetaType: Clone + 'static {
    /// The kind tag this type is stored under.
    const KIND: ValueKind;

    fn from_meta(value: &MetaValue) -> Option<&Self>;

    fn into_meta(self) -> MetaValue;
}

macro_rules! impl_meta_type {
    ($ty:ty, $variant:ident) => {
        impl MetaType for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            #[inline]
            fn from_meta(value: &MetaValue) -> Option<&Self> {
                match value {
                    MetaValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            #[inline]
            fn into_meta(self) -> MetaValue {
                MetaValue::$variant(self)
            }
        }

        impl From<$ty> for MetaValue {
            fn from(v: $ty) -> Self {
                MetaValue::$variant(v)
            }
        }
    };
}

impl_meta_type!(bool, Bool);
impl_meta_type!(i64, Int);
impl_meta_type!(u64, UInt);
impl_meta_type!(f64, Float);
impl_meta_type!(String, Str);

/// An array of metadata values that all share one [`ValueKind`].
///
/// Used for per-column metadata, where entry `i` describes column `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueArray {
    kind: ValueKind,
    values: Vec<MetaValue>,
}

impl ValueArray {
    /// Create an empty array of the given kind.
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
        }
    }

    /// Build an array from typed values.
    pub fn from_values<T: MetaType>(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            kind: T::KIND,
            values: values.into_iter().map(MetaType::into_meta).collect(),
        }
    }

    /// Build a string array.
    pub fn strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::from_values::<String>(values.into_iter().map(Into::into))
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[MetaValue] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&MetaValue> {
        self.values.get(index)
    }

    /// Typed view of the value at `index`.
    pub fn get_as<T: MetaType>(&self, index: usize) -> Result<&T> {
        self.values
            .get(index)
            .ok_or(TableError::ColumnIndexOutOfRange {
                index,
                extent: self.len(),
            })?
            .get::<T>()
    }

    /// Copy all values out as `T`.
    pub fn to_vec<T: MetaType>(&self) -> Result<Vec<T>> {
        if T::KIND != self.kind {
            return Err(TableError::BadCast {
                expected: T::KIND.type_name(),
                found: self.kind.type_name(),
            });
        }
        Ok(self
            .values
            .iter()
            .filter_map(T::from_meta)
            .cloned()
            .collect())
    }

    /// Append a value, which must match the array's kind.
    pub fn push(&mut self, value: impl Into<MetaValue>) -> Result<()> {
        let value = value.into();
        self.check_kind(value.kind())?;
        self.values.push(value);
        Ok(())
    }

    /// Replace the value at `index`, which must match the array's kind.
    pub fn set(&mut self, index: usize, value: impl Into<MetaValue>) -> Result<()> {
        let value = value.into();
        self.check_kind(value.kind())?;
        let extent = self.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(TableError::ColumnIndexOutOfRange { index, extent })?;
        *slot = value;
        Ok(())
    }

    /// A new array in which every value appears `times` times in a row.
    pub fn repeat_each(&self, times: usize) -> Self {
        let values = self
            .values
            .iter()
            .flat_map(|v| std::iter::repeat_n(v, times))
            .cloned()
            .collect();
        Self {
            kind: self.kind,
            values,
        }
    }

    /// Incoming values must match the stored kind.
    fn check_kind(&self, found: ValueKind) -> Result<()> {
        if found == self.kind {
            Ok(())
        } else {
            Err(TableError::BadCast {
                expected: self.kind.type_name(),
                found: found.type_name(),
            })
        }
    }
}

impl<T: MetaType> From<Vec<T>> for ValueArray {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl From<Vec<&str>> for ValueArray {
    fn from(values: Vec<&str>) -> Self {
        Self::strings(values)
    }
}

impl From<MetaValue> for ValueArray {
    fn from(value: MetaValue) -> Self {
        Self {
            kind: value.kind(),
            values: vec![value],
        }
    }
}

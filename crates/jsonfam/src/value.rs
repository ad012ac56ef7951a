//! The JSON value representation shared by every family.
//!
//! [`Value`] is the owned form, parameterized by the [`Family`] that supplies
//! its container types. [`ValueRef`] is the borrowed form every read path
//! returns: its compound variants are already wrapped in read-only views, so
//! code that only inspects values never needs to know which family produced
//! them.

use std::fmt;

use crate::{
    family::Family,
    view::{ArrayView, ObjectView},
};

/// An owned JSON value whose containers belong to the family `F`.
///
/// The `Null` variant is JSON's explicit null and is distinct from a key
/// being absent altogether. Numbers keep the tag they were built or parsed
/// with: decimal integer text narrows to `Int` when it fits, stays `Long`
/// otherwise, and anything fractional or exponential is a `Double`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<F: Family> {
    /// The explicit null sentinel.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A 64-bit integer that does not fit in 32 bits.
    Long(i64),
    /// A finite double (builders reject NaN and the infinities).
    Double(f64),
    /// A string.
    String(String),
    /// An object belonging to `F`.
    Object(F::Object),
    /// An array belonging to `F`.
    Array(F::Array),
}

impl<F: Family> Default for Value<F> {
    fn default() -> Self {
        Self::Null
    }
}

impl<F: Family> Value<F> {
    /// Returns `true` if the value is the null sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrows the value in the family-independent form used by every read
    /// path. Compound variants come back pre-wrapped in read-only views.
    #[must_use]
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Null => ValueRef::Null,
            Self::Bool(b) => ValueRef::Bool(*b),
            Self::Int(n) => ValueRef::Int(*n),
            Self::Long(n) => ValueRef::Long(*n),
            Self::Double(d) => ValueRef::Double(*d),
            Self::String(s) => ValueRef::Str(s),
            Self::Object(object) => ValueRef::Object(ObjectView::of(object)),
            Self::Array(array) => ValueRef::Array(ArrayView::of(array)),
        }
    }
}

impl<F: Family> From<bool> for Value<F> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<F: Family> From<i32> for Value<F> {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl<F: Family> From<i64> for Value<F> {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl<F: Family> From<f64> for Value<F> {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl<F: Family> From<&str> for Value<F> {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl<F: Family> From<String> for Value<F> {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<F: Family> fmt::Display for Value<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(self.as_value_ref(), f)
    }
}

/// A borrowed JSON value.
///
/// Every accessor in the crate returns this type, with objects and arrays
/// already behind [`ObjectView`]/[`ArrayView`], so the serializer and any
/// generic read code work identically over all families.
#[derive(Clone, Copy, Debug)]
pub enum ValueRef<'a> {
    /// The explicit null sentinel.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A 32-bit integer.
    Int(i32),
    /// A 64-bit integer.
    Long(i64),
    /// A finite double.
    Double(f64),
    /// A borrowed string.
    Str(&'a str),
    /// A read-only view of an object.
    Object(ObjectView<'a>),
    /// A read-only view of an array.
    Array(ArrayView<'a>),
}

impl ValueRef<'_> {
    /// Returns `true` if the value is the null sentinel.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl<'a> From<ObjectView<'a>> for ValueRef<'a> {
    fn from(view: ObjectView<'a>) -> Self {
        Self::Object(view)
    }
}

impl<'a> From<ArrayView<'a>> for ValueRef<'a> {
    fn from(view: ArrayView<'a>) -> Self {
        Self::Array(view)
    }
}

impl PartialEq for ValueRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(*self, f)
    }
}

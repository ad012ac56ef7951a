//! Read-only views over objects and arrays of any family.
//!
//! A view borrows the underlying container and exposes only the shared read
//! contract, so handing one out cannot leak mutation. Views are `Copy`;
//! re-wrapping a view yields a view of the same underlying container rather
//! than a view of a view, so repeated wrapping never builds up indirection.

use std::{fmt, ptr};

use crate::{
    read::{JsonArray, JsonObject, Keys},
    value::ValueRef,
};

/// A borrowed, read-only object.
#[derive(Clone, Copy)]
pub struct ObjectView<'a> {
    inner: &'a dyn JsonObject,
}

impl<'a> ObjectView<'a> {
    /// Wraps any object in a read-only view.
    #[must_use]
    pub fn of(inner: &'a dyn JsonObject) -> Self {
        Self { inner }
    }

    /// The wrapped object as a trait object.
    #[must_use]
    pub fn as_dyn(self) -> &'a dyn JsonObject {
        self.inner
    }

    /// Returns `true` when both views wrap the same underlying object.
    #[must_use]
    pub fn ptr_eq(self, other: ObjectView<'_>) -> bool {
        ptr::addr_eq(self.inner, other.inner)
    }
}

impl JsonObject for ObjectView<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn opt(&self, key: &str) -> Option<ValueRef<'_>> {
        self.inner.opt(key)
    }

    fn keys(&self) -> Keys<'_> {
        self.inner.keys()
    }

    // Re-wrapping returns the same view, not a view of a view.
    fn view(&self) -> ObjectView<'_> {
        *self
    }
}

/// Structural equality through the read contract: same key set, equal values
/// key by key. Entry order is not significant for objects.
impl PartialEq for ObjectView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .keys()
                .all(|key| match (self.opt(key), other.opt(key)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                })
    }
}

impl fmt::Debug for ObjectView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Object(*self), f)
    }
}

impl fmt::Display for ObjectView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Object(*self), f)
    }
}

/// A borrowed, read-only array.
#[derive(Clone, Copy)]
pub struct ArrayView<'a> {
    inner: &'a dyn JsonArray,
}

impl<'a> ArrayView<'a> {
    /// Wraps any array in a read-only view.
    #[must_use]
    pub fn of(inner: &'a dyn JsonArray) -> Self {
        Self { inner }
    }

    /// The wrapped array as a trait object.
    #[must_use]
    pub fn as_dyn(self) -> &'a dyn JsonArray {
        self.inner
    }

    /// Returns `true` when both views wrap the same underlying array.
    #[must_use]
    pub fn ptr_eq(self, other: ArrayView<'_>) -> bool {
        ptr::addr_eq(self.inner, other.inner)
    }
}

impl JsonArray for ArrayView<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn opt(&self, index: usize) -> Option<ValueRef<'_>> {
        self.inner.opt(index)
    }

    // Re-wrapping returns the same view, not a view of a view.
    fn view(&self) -> ArrayView<'_> {
        *self
    }
}

/// Structural equality through the read contract: same length, equal
/// elements in order.
impl PartialEq for ArrayView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && (0..self.len()).all(|i| match (self.opt(i), other.opt(i)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
    }
}

impl fmt::Debug for ArrayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Array(*self), f)
    }
}

impl fmt::Display for ArrayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Array(*self), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::{JsonArray, JsonObject, Writable, WritableObject, family::Family, value::ValueRef};

    fn sample() -> WritableObject {
        Writable::object_from_str(r#"{"name": "ada", "tags": ["x", "y"], "meta": {"id": 7}}"#)
            .unwrap()
    }

    #[test]
    fn rewrapping_is_pointer_identical() {
        let object = sample();
        let first = object.view();
        let second = first.view();
        assert!(first.ptr_eq(second));
        assert!(first.ptr_eq(crate::ObjectView::of(first.as_dyn())));
    }

    #[test]
    fn compound_reads_come_back_wrapped() {
        let object = sample();
        let view = object.view();
        assert!(matches!(view.opt("tags"), Some(ValueRef::Array(_))));
        assert!(matches!(view.opt("meta"), Some(ValueRef::Object(_))));
        assert_eq!(view.get_object("meta").unwrap().get_i32("id").unwrap(), 7);
    }

    #[test]
    fn iteration_yields_wrapped_elements() {
        let object = sample();
        let tags = object.get_array("tags").unwrap();
        let texts: Vec<_> = tags
            .iter()
            .map(|v| match v {
                ValueRef::Str(s) => s.to_owned(),
                other => panic!("unexpected element {other}"),
            })
            .collect();
        assert_eq!(texts, ["x", "y"]);
    }

    #[test]
    fn views_compare_structurally() {
        let a = sample();
        let b = sample();
        assert_eq!(a.view(), b.view());
        let c = Writable::object_from_str(r#"{"name": "ada"}"#).unwrap();
        assert_ne!(a.view(), c.view());
    }
}

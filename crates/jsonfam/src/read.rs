//! The shared read-only contract over objects and arrays.
//!
//! [`JsonObject`] and [`JsonArray`] are object-safe, so a read-only view can
//! hold `&dyn JsonObject` and serve any family behind one pointer. The typed
//! `get_*` accessors fail loudly with [`Error::Missing`]/[`Error::Mismatch`];
//! the `opt_*` accessors swallow both absence and conversion failure and
//! return a default instead. Both apply the same lenient coercions the
//! parser's value coercion uses in reverse: booleans from `"true"`/`"false"`
//! text and numbers from numeric strings.

use crate::{
    error::{Error, Result},
    ser,
    value::ValueRef,
    view::{ArrayView, ObjectView},
    writable::WritableArray,
};

/// Boxed key iterator returned by [`JsonObject::keys`].
pub type Keys<'a> = Box<dyn Iterator<Item = &'a str> + 'a>;

/// Boxed element iterator returned by [`JsonArray::iter`].
pub type Elements<'a> = Box<dyn Iterator<Item = ValueRef<'a>> + 'a>;

fn coerce_bool(value: ValueRef<'_>) -> Option<bool> {
    match value {
        ValueRef::Bool(b) => Some(b),
        ValueRef::Str(s) if s.eq_ignore_ascii_case("true") => Some(true),
        ValueRef::Str(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn coerce_f64(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Int(n) => Some(f64::from(n)),
        ValueRef::Long(n) => Some(n as f64),
        ValueRef::Double(d) => Some(d),
        ValueRef::Str(s) => s.parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_i64(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Int(n) => Some(i64::from(n)),
        ValueRef::Long(n) => Some(n),
        ValueRef::Double(d) => Some(d as i64),
        ValueRef::Str(s) => s.parse().ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn coerce_i32(value: ValueRef<'_>) -> Option<i32> {
    match value {
        ValueRef::Int(n) => Some(n),
        ValueRef::Long(n) => Some(n as i32),
        ValueRef::Double(d) => Some(d as i32),
        ValueRef::Str(s) => s.parse().ok(),
        _ => None,
    }
}

/// The textual rendition of a value: strings verbatim, everything else in
/// compact JSON form.
fn plain_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Str(s) => s.to_owned(),
        other => ser::to_compact_string(other),
    }
}

fn mismatch(target: String, expected: &'static str) -> Error {
    Error::Mismatch { target, expected }
}

/// Read-only access to a JSON object.
///
/// Implemented by the concrete objects of every family and by
/// [`ObjectView`]; only `len`, `opt`, and `keys` are required.
pub trait JsonObject {
    /// Number of key/value entries.
    fn len(&self) -> usize;

    /// Looks a key up, or `None` when it is absent. An explicit null entry
    /// is `Some(ValueRef::Null)`, not `None`.
    fn opt(&self, key: &str) -> Option<ValueRef<'_>>;

    /// Iterates keys in insertion order.
    fn keys(&self) -> Keys<'_>;

    /// Returns `true` when there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when the key is present, even if its value is null.
    fn has(&self, key: &str) -> bool {
        self.opt(key).is_some()
    }

    /// Returns `true` when the key is absent or maps to the null sentinel.
    fn is_null(&self, key: &str) -> bool {
        matches!(self.opt(key), None | Some(ValueRef::Null))
    }

    /// Keys in lexicographic order, as the pretty printer emits them.
    fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    /// All keys as owned strings, in insertion order.
    fn names(&self) -> Vec<String> {
        self.keys().map(ToOwned::to_owned).collect()
    }

    /// The values for `names`, in that order, with absent keys rendered as
    /// explicit nulls.
    fn to_array(&self, names: &[&str]) -> Result<WritableArray> {
        use crate::family::Family as _;
        let mut values = WritableArray::new();
        for name in names {
            match self.opt(name) {
                Some(value) => values.push(crate::writable::Writable::wrap(value)?)?,
                None => values.push(crate::value::Value::Null)?,
            }
        }
        Ok(values)
    }

    /// Looks a key up, failing with [`Error::Missing`] when absent.
    fn get(&self, key: &str) -> Result<ValueRef<'_>> {
        self.opt(key)
            .ok_or_else(|| Error::Missing(format!("object[{key:?}]")))
    }

    /// A boolean, coercing `"true"`/`"false"` text.
    fn get_bool(&self, key: &str) -> Result<bool> {
        coerce_bool(self.get(key)?).ok_or_else(|| mismatch(format!("object[{key:?}]"), "a boolean"))
    }

    /// A double, coercing other numbers and numeric text.
    fn get_f64(&self, key: &str) -> Result<f64> {
        coerce_f64(self.get(key)?).ok_or_else(|| mismatch(format!("object[{key:?}]"), "a number"))
    }

    /// A 32-bit integer, truncating wider numbers like the typed accessors
    /// always have.
    fn get_i32(&self, key: &str) -> Result<i32> {
        coerce_i32(self.get(key)?).ok_or_else(|| mismatch(format!("object[{key:?}]"), "a number"))
    }

    /// A 64-bit integer, truncating doubles.
    fn get_i64(&self, key: &str) -> Result<i64> {
        coerce_i64(self.get(key)?).ok_or_else(|| mismatch(format!("object[{key:?}]"), "a number"))
    }

    /// The textual form of the value, or `None` for an explicit null.
    /// Non-string values render in compact JSON form.
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        match self.get(key)? {
            ValueRef::Null => Ok(None),
            value => Ok(Some(plain_text(value))),
        }
    }

    /// A nested object, as a read-only view.
    fn get_object(&self, key: &str) -> Result<ObjectView<'_>> {
        match self.get(key)? {
            ValueRef::Object(view) => Ok(view),
            _ => Err(mismatch(format!("object[{key:?}]"), "an object")),
        }
    }

    /// A nested array, as a read-only view.
    fn get_array(&self, key: &str) -> Result<ArrayView<'_>> {
        match self.get(key)? {
            ValueRef::Array(view) => Ok(view),
            _ => Err(mismatch(format!("object[{key:?}]"), "an array")),
        }
    }

    /// Like [`get_bool`](Self::get_bool) but defaulting to `false`.
    fn opt_bool(&self, key: &str) -> bool {
        self.opt_bool_or(key, false)
    }

    /// Like [`get_bool`](Self::get_bool) but with a caller default.
    fn opt_bool_or(&self, key: &str, default: bool) -> bool {
        self.opt(key).and_then(coerce_bool).unwrap_or(default)
    }

    /// Like [`get_f64`](Self::get_f64) but defaulting to NaN.
    fn opt_f64(&self, key: &str) -> f64 {
        self.opt_f64_or(key, f64::NAN)
    }

    /// Like [`get_f64`](Self::get_f64) but with a caller default.
    fn opt_f64_or(&self, key: &str, default: f64) -> f64 {
        self.opt(key).and_then(coerce_f64).unwrap_or(default)
    }

    /// Like [`get_i32`](Self::get_i32) but defaulting to 0.
    fn opt_i32(&self, key: &str) -> i32 {
        self.opt_i32_or(key, 0)
    }

    /// Like [`get_i32`](Self::get_i32) but with a caller default.
    fn opt_i32_or(&self, key: &str, default: i32) -> i32 {
        self.opt(key).and_then(coerce_i32).unwrap_or(default)
    }

    /// Like [`get_i64`](Self::get_i64) but defaulting to 0.
    fn opt_i64(&self, key: &str) -> i64 {
        self.opt_i64_or(key, 0)
    }

    /// Like [`get_i64`](Self::get_i64) but with a caller default.
    fn opt_i64_or(&self, key: &str, default: i64) -> i64 {
        self.opt(key).and_then(coerce_i64).unwrap_or(default)
    }

    /// Like [`get_string`](Self::get_string) but defaulting to `""`.
    fn opt_string(&self, key: &str) -> String {
        self.opt_string_or(key, "")
    }

    /// Like [`get_string`](Self::get_string) but with a caller default.
    fn opt_string_or(&self, key: &str, default: &str) -> String {
        match self.opt(key) {
            None | Some(ValueRef::Null) => default.to_owned(),
            Some(value) => plain_text(value),
        }
    }

    /// A nested object view, or `None` when absent or not an object.
    fn opt_object(&self, key: &str) -> Option<ObjectView<'_>> {
        match self.opt(key) {
            Some(ValueRef::Object(view)) => Some(view),
            _ => None,
        }
    }

    /// A nested array view, or `None` when absent or not an array.
    fn opt_array(&self, key: &str) -> Option<ArrayView<'_>> {
        match self.opt(key) {
            Some(ValueRef::Array(view)) => Some(view),
            _ => None,
        }
    }

    /// Wraps the object in a read-only view.
    fn view(&self) -> ObjectView<'_>
    where
        Self: Sized,
    {
        ObjectView::of(self)
    }
}

/// Read-only access to a JSON array.
///
/// Implemented by the concrete arrays of every family and by [`ArrayView`];
/// only `len` and `opt` are required.
pub trait JsonArray {
    /// Number of elements.
    fn len(&self) -> usize;

    /// The element at `index`, or `None` when out of range.
    fn opt(&self, index: usize) -> Option<ValueRef<'_>>;

    /// Returns `true` when there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when the index is out of range or holds the null
    /// sentinel.
    fn is_null(&self, index: usize) -> bool {
        matches!(self.opt(index), None | Some(ValueRef::Null))
    }

    /// Iterates elements in order.
    fn iter(&self) -> Elements<'_> {
        Box::new((0..self.len()).filter_map(move |i| self.opt(i)))
    }

    /// The element at `index`, failing with [`Error::Missing`] when out of
    /// range.
    fn get(&self, index: usize) -> Result<ValueRef<'_>> {
        self.opt(index)
            .ok_or_else(|| Error::Missing(format!("array[{index}]")))
    }

    /// A boolean, coercing `"true"`/`"false"` text.
    fn get_bool(&self, index: usize) -> Result<bool> {
        coerce_bool(self.get(index)?).ok_or_else(|| mismatch(format!("array[{index}]"), "a boolean"))
    }

    /// A double, coercing other numbers and numeric text.
    fn get_f64(&self, index: usize) -> Result<f64> {
        coerce_f64(self.get(index)?).ok_or_else(|| mismatch(format!("array[{index}]"), "a number"))
    }

    /// A 32-bit integer, truncating wider numbers.
    fn get_i32(&self, index: usize) -> Result<i32> {
        coerce_i32(self.get(index)?).ok_or_else(|| mismatch(format!("array[{index}]"), "a number"))
    }

    /// A 64-bit integer, truncating doubles.
    fn get_i64(&self, index: usize) -> Result<i64> {
        coerce_i64(self.get(index)?).ok_or_else(|| mismatch(format!("array[{index}]"), "a number"))
    }

    /// The textual form of the element, or `None` for an explicit null.
    fn get_string(&self, index: usize) -> Result<Option<String>> {
        match self.get(index)? {
            ValueRef::Null => Ok(None),
            value => Ok(Some(plain_text(value))),
        }
    }

    /// A nested object, as a read-only view.
    fn get_object(&self, index: usize) -> Result<ObjectView<'_>> {
        match self.get(index)? {
            ValueRef::Object(view) => Ok(view),
            _ => Err(mismatch(format!("array[{index}]"), "an object")),
        }
    }

    /// A nested array, as a read-only view.
    fn get_array(&self, index: usize) -> Result<ArrayView<'_>> {
        match self.get(index)? {
            ValueRef::Array(view) => Ok(view),
            _ => Err(mismatch(format!("array[{index}]"), "an array")),
        }
    }

    /// Like [`get_bool`](Self::get_bool) but defaulting to `false`.
    fn opt_bool(&self, index: usize) -> bool {
        self.opt_bool_or(index, false)
    }

    /// Like [`get_bool`](Self::get_bool) but with a caller default.
    fn opt_bool_or(&self, index: usize, default: bool) -> bool {
        self.opt(index).and_then(coerce_bool).unwrap_or(default)
    }

    /// Like [`get_f64`](Self::get_f64) but defaulting to NaN.
    fn opt_f64(&self, index: usize) -> f64 {
        self.opt_f64_or(index, f64::NAN)
    }

    /// Like [`get_f64`](Self::get_f64) but with a caller default.
    fn opt_f64_or(&self, index: usize, default: f64) -> f64 {
        self.opt(index).and_then(coerce_f64).unwrap_or(default)
    }

    /// Like [`get_i32`](Self::get_i32) but defaulting to 0.
    fn opt_i32(&self, index: usize) -> i32 {
        self.opt_i32_or(index, 0)
    }

    /// Like [`get_i32`](Self::get_i32) but with a caller default.
    fn opt_i32_or(&self, index: usize, default: i32) -> i32 {
        self.opt(index).and_then(coerce_i32).unwrap_or(default)
    }

    /// Like [`get_i64`](Self::get_i64) but defaulting to 0.
    fn opt_i64(&self, index: usize) -> i64 {
        self.opt_i64_or(index, 0)
    }

    /// Like [`get_i64`](Self::get_i64) but with a caller default.
    fn opt_i64_or(&self, index: usize, default: i64) -> i64 {
        self.opt(index).and_then(coerce_i64).unwrap_or(default)
    }

    /// Like [`get_string`](Self::get_string) but defaulting to `""`.
    fn opt_string(&self, index: usize) -> String {
        self.opt_string_or(index, "")
    }

    /// Like [`get_string`](Self::get_string) but with a caller default.
    fn opt_string_or(&self, index: usize, default: &str) -> String {
        match self.opt(index) {
            None | Some(ValueRef::Null) => default.to_owned(),
            Some(value) => plain_text(value),
        }
    }

    /// A nested object view, or `None` when absent or not an object.
    fn opt_object(&self, index: usize) -> Option<ObjectView<'_>> {
        match self.opt(index) {
            Some(ValueRef::Object(view)) => Some(view),
            _ => None,
        }
    }

    /// A nested array view, or `None` when absent or not an array.
    fn opt_array(&self, index: usize) -> Option<ArrayView<'_>> {
        match self.opt(index) {
            Some(ValueRef::Array(view)) => Some(view),
            _ => None,
        }
    }

    /// Wraps the array in a read-only view.
    fn view(&self) -> ArrayView<'_>
    where
        Self: Sized,
    {
        ArrayView::of(self)
    }
}

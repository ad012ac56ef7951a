//! The mutable value family.
//!
//! [`WritableObject`] keeps entries in insertion order over an `IndexMap`;
//! [`WritableArray`] is a dense `Vec`. Every mutator validates through
//! [`Family::cast`], so a non-finite double can never enter a container.

use std::fmt;

use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    family::{ArrayBuilder, Family, ObjectBuilder},
    read::{JsonArray, JsonObject, Keys},
    value::{Value, ValueRef},
};

/// Marker for the mutable family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Writable;

impl Family for Writable {
    type Object = WritableObject;
    type Array = WritableArray;
    type ObjectBuilder = WritableObjectBuilder;
    type ArrayBuilder = WritableArrayBuilder;

    fn object_builder() -> WritableObjectBuilder {
        WritableObjectBuilder::default()
    }

    fn array_builder() -> WritableArrayBuilder {
        WritableArrayBuilder::default()
    }
}

/// A mutable JSON object with insertion-ordered entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WritableObject {
    entries: IndexMap<String, Value<Writable>>,
}

impl WritableObject {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any existing value for the key.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value<Writable>>) -> Result<()> {
        let value = Writable::cast(value.into())?;
        self.entries.insert(key.into(), value);
        Ok(())
    }

    /// Inserts an entry, failing with [`Error::DuplicateKey`] when the key
    /// is already present.
    pub fn put_once(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value<Writable>>,
    ) -> Result<()> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(Error::DuplicateKey(key));
        }
        self.put(key, value)
    }

    /// Inserts an entry when the value is present, otherwise does nothing.
    pub fn put_opt(
        &mut self,
        key: impl Into<String>,
        value: Option<impl Into<Value<Writable>>>,
    ) -> Result<()> {
        match value {
            Some(value) => self.put(key, value),
            None => Ok(()),
        }
    }

    /// Removes an entry, returning the value that was stored.
    pub fn remove(&mut self, key: &str) -> Option<Value<Writable>> {
        self.entries.shift_remove(key)
    }

    /// Appends to the array stored under `key`, creating a one-element
    /// array when the key is absent. Fails when the key holds a non-array.
    pub fn append(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value<Writable>>,
    ) -> Result<()> {
        let key = key.into();
        let value = Writable::cast(value.into())?;
        match self.entries.get_mut(&key) {
            None => {
                let mut created = WritableArray::new();
                created.push_raw(value);
                self.entries.insert(key, Value::Array(created));
            }
            Some(Value::Array(existing)) => existing.push_raw(value),
            Some(_) => {
                return Err(Error::Mismatch {
                    target: format!("object[{key:?}]"),
                    expected: "an array",
                });
            }
        }
        Ok(())
    }

    /// Accumulates values under `key`: the first value is stored plainly
    /// (an array value is wrapped in a one-element array so that later
    /// accumulations append to the outer array), the second turns the entry
    /// into an array of both, and later ones keep appending.
    pub fn accumulate(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value<Writable>>,
    ) -> Result<()> {
        let key = key.into();
        let value = Writable::cast(value.into())?;
        match self.entries.get_mut(&key) {
            None => {
                let stored = if matches!(value, Value::Array(_)) {
                    let mut wrapper = WritableArray::new();
                    wrapper.push_raw(value);
                    Value::Array(wrapper)
                } else {
                    value
                };
                self.entries.insert(key, stored);
            }
            Some(Value::Array(existing)) => existing.push_raw(value),
            Some(existing) => {
                let mut pair = WritableArray::new();
                pair.push_raw(std::mem::replace(existing, Value::Null));
                pair.push_raw(value);
                *existing = Value::Array(pair);
            }
        }
        Ok(())
    }

    /// Adds 1 to the number stored under `key`, storing `Int(1)` when the
    /// key is absent. Fails when the key holds a non-number.
    pub fn increment(&mut self, key: impl Into<String>) -> Result<()> {
        let key = key.into();
        match self.entries.get_mut(&key) {
            None => {
                self.entries.insert(key, Value::Int(1));
            }
            Some(Value::Int(n)) => *n = n.wrapping_add(1),
            Some(Value::Long(n)) => *n = n.wrapping_add(1),
            Some(Value::Double(d)) => *d += 1.0,
            Some(_) => {
                return Err(Error::Mismatch {
                    target: format!("object[{key:?}]"),
                    expected: "a number",
                });
            }
        }
        Ok(())
    }
}

impl JsonObject for WritableObject {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn opt(&self, key: &str) -> Option<ValueRef<'_>> {
        self.entries.get(key).map(Value::as_value_ref)
    }

    fn keys(&self) -> Keys<'_> {
        Box::new(self.entries.keys().map(String::as_str))
    }
}

impl fmt::Display for WritableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Object(self.view()), f)
    }
}

/// A mutable JSON array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WritableArray {
    items: Vec<Value<Writable>>,
}

impl WritableArray {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element.
    pub fn push(&mut self, value: impl Into<Value<Writable>>) -> Result<()> {
        let value = Writable::cast(value.into())?;
        self.items.push(value);
        Ok(())
    }

    /// Stores an element at `index`, replacing in range and otherwise
    /// padding the gap with explicit nulls first.
    pub fn put(&mut self, index: usize, value: impl Into<Value<Writable>>) -> Result<()> {
        let value = Writable::cast(value.into())?;
        if index < self.items.len() {
            self.items[index] = value;
        } else {
            while self.items.len() < index {
                self.items.push(Value::Null);
            }
            self.items.push(value);
        }
        Ok(())
    }

    /// Removes the element at `index`, shifting the rest down, or returns
    /// `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Value<Writable>> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    // Insertion for values already validated by cast.
    pub(crate) fn push_raw(&mut self, value: Value<Writable>) {
        self.items.push(value);
    }
}

impl JsonArray for WritableArray {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn opt(&self, index: usize) -> Option<ValueRef<'_>> {
        self.items.get(index).map(Value::as_value_ref)
    }
}

impl fmt::Display for WritableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Array(self.view()), f)
    }
}

/// Builder for [`WritableObject`].
#[derive(Debug, Default)]
pub struct WritableObjectBuilder {
    object: WritableObject,
}

impl ObjectBuilder for WritableObjectBuilder {
    type Family = Writable;

    fn put(&mut self, key: &str, value: Value<Writable>) -> Result<()> {
        self.object.put(key, value)
    }

    fn put_once(&mut self, key: &str, value: Value<Writable>) -> Result<()> {
        self.object.put_once(key, value)
    }

    fn build(self) -> WritableObject {
        self.object
    }
}

/// Builder for [`WritableArray`].
#[derive(Debug, Default)]
pub struct WritableArrayBuilder {
    array: WritableArray,
}

impl ArrayBuilder for WritableArrayBuilder {
    type Family = Writable;

    fn push(&mut self, value: Value<Writable>) -> Result<()> {
        self.array.push(value)
    }

    fn build(self) -> WritableArray {
        self.array
    }
}

//! The build-once value family.
//!
//! [`ImmutableObject`] and [`ImmutableArray`] share their storage behind an
//! `Arc`; cloning one is a reference-count bump, never a copy. There are no
//! mutating methods to forbid at runtime because none exist. The canonical
//! empty containers are process-wide singletons, and builders that finish
//! with nothing hand those singletons back.

use std::{fmt, sync::Arc, sync::LazyLock};

use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    family::{ArrayBuilder, Family, ObjectBuilder},
    read::{JsonArray, JsonObject, Keys},
    value::{Value, ValueRef},
};

static EMPTY_OBJECT: LazyLock<Arc<IndexMap<String, Value<Immutable>>>> =
    LazyLock::new(|| Arc::new(IndexMap::new()));

static EMPTY_ARRAY: LazyLock<Arc<Vec<Value<Immutable>>>> = LazyLock::new(|| Arc::new(Vec::new()));

/// Marker for the build-once family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Immutable;

impl Family for Immutable {
    type Object = ImmutableObject;
    type Array = ImmutableArray;
    type ObjectBuilder = ImmutableObjectBuilder;
    type ArrayBuilder = ImmutableArrayBuilder;

    fn object_builder() -> ImmutableObjectBuilder {
        ImmutableObjectBuilder::default()
    }

    fn array_builder() -> ImmutableArrayBuilder {
        ImmutableArrayBuilder::default()
    }

    fn empty_object() -> ImmutableObject {
        ImmutableObject::empty()
    }

    fn empty_array() -> ImmutableArray {
        ImmutableArray::empty()
    }
}

/// A frozen JSON object with insertion-ordered, `Arc`-shared entries.
#[derive(Clone, Debug, PartialEq)]
pub struct ImmutableObject {
    entries: Arc<IndexMap<String, Value<Immutable>>>,
}

impl ImmutableObject {
    /// The canonical empty object, shared process-wide.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Arc::clone(&EMPTY_OBJECT),
        }
    }

    /// Returns `true` when both objects share the same storage, which is
    /// the case for clones of one another.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl Default for ImmutableObject {
    fn default() -> Self {
        Self::empty()
    }
}

impl JsonObject for ImmutableObject {
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

impl fmt::Display for ImmutableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Object(self.view()), f)
    }
}

/// A frozen JSON array with `Arc`-shared elements.
#[derive(Clone, Debug, PartialEq)]
pub struct ImmutableArray {
    items: Arc<Vec<Value<Immutable>>>,
}

impl ImmutableArray {
    /// The canonical empty array, shared process-wide.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Arc::clone(&EMPTY_ARRAY),
        }
    }

    /// Returns `true` when both arrays share the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Default for ImmutableArray {
    fn default() -> Self {
        Self::empty()
    }
}

impl JsonArray for ImmutableArray {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn opt(&self, index: usize) -> Option<ValueRef<'_>> {
        self.items.get(index).map(Value::as_value_ref)
    }
}

impl fmt::Display for ImmutableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::ser::write_compact(ValueRef::Array(self.view()), f)
    }
}

/// Builder for [`ImmutableObject`]. Only accepts values that already belong
/// to the Immutable family; building an empty object returns the shared
/// singleton.
#[derive(Debug, Default)]
pub struct ImmutableObjectBuilder {
    entries: IndexMap<String, Value<Immutable>>,
}

impl ObjectBuilder for ImmutableObjectBuilder {
    type Family = Immutable;

    fn put(&mut self, key: &str, value: Value<Immutable>) -> Result<()> {
        let value = Immutable::cast(value)?;
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn put_once(&mut self, key: &str, value: Value<Immutable>) -> Result<()> {
        if self.entries.contains_key(key) {
            return Err(Error::DuplicateKey(key.to_owned()));
        }
        self.put(key, value)
    }

    fn build(self) -> ImmutableObject {
        if self.entries.is_empty() {
            ImmutableObject::empty()
        } else {
            ImmutableObject {
                entries: Arc::new(self.entries),
            }
        }
    }
}

/// Builder for [`ImmutableArray`]. Building an empty array returns the
/// shared singleton.
#[derive(Debug, Default)]
pub struct ImmutableArrayBuilder {
    items: Vec<Value<Immutable>>,
}

impl ArrayBuilder for ImmutableArrayBuilder {
    type Family = Immutable;

    fn push(&mut self, value: Value<Immutable>) -> Result<()> {
        let value = Immutable::cast(value)?;
        self.items.push(value);
        Ok(())
    }

    fn build(self) -> ImmutableArray {
        if self.items.is_empty() {
            ImmutableArray::empty()
        } else {
            ImmutableArray {
                items: Arc::new(self.items),
            }
        }
    }
}

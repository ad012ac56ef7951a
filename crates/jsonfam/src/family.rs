//! The family abstraction: one parsing and cloning engine, many container
//! implementations.
//!
//! A [`Family`] names the concrete object/array types and the builders that
//! produce them. The tokenizer, the lenient parser, and the cross-family
//! clone are written once against this trait; [`Writable`](crate::Writable)
//! and [`Immutable`](crate::Immutable) plug into it.

use std::io::Read;

use crate::{
    error::{Error, Result},
    parser::{populate_array_builder, populate_object_builder},
    read::{JsonArray, JsonObject},
    tokenizer::Tokenizer,
    value::{Value, ValueRef},
};

/// A value family: a marker type tying together container and builder types.
///
/// Family membership of nested containers is enforced by the type system, so
/// the only runtime validation left to [`cast`](Self::cast) is rejecting
/// non-finite doubles.
pub trait Family: Copy + std::fmt::Debug + Default + PartialEq + 'static {
    /// The family's object type.
    type Object: JsonObject + Clone + std::fmt::Debug + PartialEq;
    /// The family's array type.
    type Array: JsonArray + Clone + std::fmt::Debug + PartialEq;
    /// Builder producing [`Self::Object`].
    type ObjectBuilder: ObjectBuilder<Family = Self>;
    /// Builder producing [`Self::Array`].
    type ArrayBuilder: ArrayBuilder<Family = Self>;

    /// Starts building an object.
    fn object_builder() -> Self::ObjectBuilder;

    /// Starts building an array.
    fn array_builder() -> Self::ArrayBuilder;

    /// The canonical empty object.
    fn empty_object() -> Self::Object {
        Self::object_builder().build()
    }

    /// The canonical empty array.
    fn empty_array() -> Self::Array {
        Self::array_builder().build()
    }

    /// Validates a value that already belongs to this family. Rejects NaN
    /// and the infinities; everything else passes through unchanged.
    fn cast(value: Value<Self>) -> Result<Value<Self>> {
        if let Value::Double(d) = &value {
            if !d.is_finite() {
                return Err(Error::NonFinite);
            }
        }
        Ok(value)
    }

    /// Re-homes any readable value into this family, deep-copying compound
    /// values through the read contract.
    fn wrap(value: ValueRef<'_>) -> Result<Value<Self>> {
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Bool(b) => Value::Bool(b),
            ValueRef::Int(n) => Value::Int(n),
            ValueRef::Long(n) => Value::Long(n),
            ValueRef::Double(d) => Self::cast(Value::Double(d))?,
            ValueRef::Str(s) => Value::String(s.to_owned()),
            ValueRef::Object(view) => Value::Object(Self::clone_object(view.as_dyn())?),
            ValueRef::Array(view) => Value::Array(Self::clone_array(view.as_dyn())?),
        })
    }

    /// Clones any object into this family through the read contract.
    fn clone_object(source: &dyn JsonObject) -> Result<Self::Object> {
        let mut builder = Self::object_builder();
        for key in source.keys() {
            if let Some(value) = source.opt(key) {
                builder.put_once(key, Self::wrap(value)?)?;
            }
        }
        Ok(builder.build())
    }

    /// Clones any array into this family through the read contract.
    fn clone_array(source: &dyn JsonArray) -> Result<Self::Array> {
        let mut builder = Self::array_builder();
        for element in source.iter() {
            builder.push(Self::wrap(element)?)?;
        }
        Ok(builder.build())
    }

    /// Parses an object from source text using the lenient grammar.
    fn object_from_str(source: &str) -> Result<Self::Object> {
        let mut tokenizer = Tokenizer::new(source);
        let mut builder = Self::object_builder();
        populate_object_builder(&mut tokenizer, &mut builder)?;
        Ok(builder.build())
    }

    /// Parses an array from source text using the lenient grammar.
    fn array_from_str(source: &str) -> Result<Self::Array> {
        let mut tokenizer = Tokenizer::new(source);
        let mut builder = Self::array_builder();
        populate_array_builder(&mut tokenizer, &mut builder)?;
        Ok(builder.build())
    }

    /// Parses a single value of any kind from source text.
    fn value_from_str(source: &str) -> Result<Value<Self>> {
        Tokenizer::new(source).next_value()
    }

    /// Parses an object from a reader, consuming it to the end first.
    fn object_from_reader<R: Read>(mut reader: R) -> Result<Self::Object> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::object_from_str(&source)
    }

    /// Parses an array from a reader, consuming it to the end first.
    fn array_from_reader<R: Read>(mut reader: R) -> Result<Self::Array> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::array_from_str(&source)
    }

    /// Builds an array from anything convertible to values of this family.
    fn array_from_iter<I>(values: I) -> Result<Self::Array>
    where
        I: IntoIterator,
        I::Item: Into<Value<Self>>,
    {
        let mut builder = Self::array_builder();
        for value in values {
            builder.push(value.into())?;
        }
        Ok(builder.build())
    }
}

/// Accumulates object entries for one family and finishes with a single
/// `build`. Inserts validate through [`Family::cast`].
pub trait ObjectBuilder: Sized {
    /// The family this builder produces containers for.
    type Family: Family;

    /// Inserts an entry, replacing any existing value for the key.
    fn put(&mut self, key: &str, value: Value<Self::Family>) -> Result<()>;

    /// Inserts an entry, failing with [`Error::DuplicateKey`] when the key
    /// is already present. The parser inserts through this path.
    fn put_once(&mut self, key: &str, value: Value<Self::Family>) -> Result<()>;

    /// Finishes and returns the built object.
    fn build(self) -> <Self::Family as Family>::Object;
}

/// Accumulates array elements for one family and finishes with a single
/// `build`.
pub trait ArrayBuilder: Sized {
    /// The family this builder produces containers for.
    type Family: Family;

    /// Appends an element.
    fn push(&mut self, value: Value<Self::Family>) -> Result<()>;

    /// Finishes and returns the built array.
    fn build(self) -> <Self::Family as Family>::Array;
}

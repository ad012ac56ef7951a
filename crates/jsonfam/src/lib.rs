//! A lenient JSON value model with pluggable value families.
//!
//! A family bundles concrete object/array types with the builders that make
//! them, behind the [`Family`] trait. One hand-written tokenizer and one set
//! of (deliberately forgiving) grammar rules populate any family; one
//! serializer renders them all through the family-independent [`ValueRef`]
//! borrow.
//!
//! Three families ship with the crate:
//!
//! - [`Writable`]: mutable containers with the classic convenience mutators
//!   (`append`, `accumulate`, `increment`, index `put` with null padding).
//! - [`Immutable`]: build-once containers with `Arc`-shared storage, cheap
//!   clones, and singleton empties.
//! - Read-only views ([`ObjectView`], [`ArrayView`]): borrowed wrappers over
//!   either family exposing only the shared read contract.
//!
//! ```
//! use jsonfam::{Family, JsonObject, Writable};
//!
//! let config = Writable::object_from_str("{retries: 3, verbose: TRUE}").unwrap();
//! assert_eq!(config.get_i32("retries").unwrap(), 3);
//! assert!(config.get_bool("verbose").unwrap());
//! assert_eq!(config.to_string(), r#"{"retries":3,"verbose":true}"#);
//! ```

mod error;
mod family;
mod immutable;
mod parser;
mod read;
mod scratch;
mod ser;
mod tokenizer;
mod value;
mod view;
mod writable;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use family::{ArrayBuilder, Family, ObjectBuilder};
pub use immutable::{
    Immutable, ImmutableArray, ImmutableArrayBuilder, ImmutableObject, ImmutableObjectBuilder,
};
pub use parser::{populate_array_builder, populate_object_builder};
pub use read::{Elements, JsonArray, JsonObject, Keys};
pub use ser::{to_compact_string, to_pretty_string, write_compact, write_pretty, write_quoted};
pub use tokenizer::{Tokenizer, coerce_token};
pub use value::{Value, ValueRef};
pub use view::{ArrayView, ObjectView};
pub use writable::{
    Writable, WritableArray, WritableArrayBuilder, WritableObject, WritableObjectBuilder,
};

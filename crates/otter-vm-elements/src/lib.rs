//! # Otter VM Elements
//!
//! Indexed (array element) property storage for Otter VM objects.
//!
//! ## Design
//!
//! - **Dense first**: elements live in a `Vec` while they all have default
//!   attributes and indices stay close together
//! - **Sparse fallback**: an `FxHashMap` with per-element attributes takes
//!   over for non-default attributes, large gaps and huge lengths; the
//!   switch is one-way
//! - **Length semantics**: shrinking the length never drops a
//!   non-configurable element
//! - **Reentrancy**: removing an accessor element commits the removal before
//!   its getter runs
//!
//! ```
//! use otter_vm_elements::{ElementValue, IndexedProperties, PropertyAttributes};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Value {
//!     Empty,
//!     Number(f64),
//! }
//!
//! impl ElementValue for Value {
//!     type Receiver = ();
//!     fn hole() -> Self { Value::Empty }
//!     fn is_hole(&self) -> bool { matches!(self, Value::Empty) }
//!     fn is_accessor(&self) -> bool { false }
//!     fn call_getter(&self, _: &()) -> Self { unreachable!() }
//! }
//!
//! let mut elements = IndexedProperties::new();
//! elements.put(0, Value::Number(1.0), PropertyAttributes::DEFAULT);
//! elements.put(1000, Value::Number(2.0), PropertyAttributes::DEFAULT);
//! assert!(elements.is_sparse());
//! assert_eq!(elements.indices(), vec![0, 1000]);
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod attributes;
pub mod config;
pub mod cursor;
pub mod elements_cell;
pub mod error;
pub mod indexed_properties;
pub mod storage;
pub mod value;

pub use attributes::PropertyAttributes;
pub use config::{
    ElementsConfig, LENGTH_SETTER_SPARSE_THRESHOLD, MAX_DENSE_LENGTH, SPARSE_ARRAY_HOLE_THRESHOLD,
};
pub use cursor::{IndexedPropertyCursor, Iter};
pub use elements_cell::ElementsCell;
pub use error::{ElementsError, ElementsResult};
pub use indexed_properties::{DetachedElement, IndexedProperties};
pub use storage::{DenseStorage, ElementStorage, IndexedPropertyStorage, SparseStorage};
pub use value::{ElementValue, ValueAndAttributes};

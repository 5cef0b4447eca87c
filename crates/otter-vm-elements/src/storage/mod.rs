//! Element storage strategies
//!
//! Two representations share one contract:
//!
//! - [`DenseStorage`]: a `Vec` of values indexed directly, used while every
//!   element has default attributes and indices stay close together.
//! - [`SparseStorage`]: an index-keyed hash map carrying per-element
//!   attributes, used once either condition breaks.
//!
//! [`ElementStorage`] is the tagged union an object actually owns. Switching
//! from dense to sparse replaces the whole value; there is no way back.

mod dense;
mod sparse;

pub use dense::DenseStorage;
pub use sparse::SparseStorage;

use crate::attributes::PropertyAttributes;
use crate::value::{ElementValue, ValueAndAttributes};

/// Operations every element storage supports.
///
/// `array_like_size` is the logical length. It may exceed the number of
/// populated indices; the gaps are holes.
pub trait IndexedPropertyStorage<V: ElementValue> {
    /// Whether `index` holds a non-hole value
    fn has_index(&self, index: u32) -> bool;

    /// The element at `index`, or `None` if out of range or a hole
    fn get(&self, index: u32) -> Option<ValueAndAttributes<V>>;

    /// Store an element, growing the length to `index + 1` if needed.
    fn put(&mut self, index: u32, value: V, attributes: PropertyAttributes);

    /// Clear `index`.
    ///
    /// # Panics
    /// If `has_index(index)` is false.
    fn remove(&mut self, index: u32);

    /// Remove the first element and shrink the length by one.
    ///
    /// # Panics
    /// If the length is 0.
    fn take_first(&mut self) -> ValueAndAttributes<V>;

    /// Shrink the length by one and return whatever sat at the old last
    /// index (possibly a hole).
    ///
    /// # Panics
    /// If the length is 0.
    fn take_last(&mut self) -> ValueAndAttributes<V>;

    /// Set the logical length
    fn set_array_like_size(&mut self, new_size: usize);

    /// The logical length
    fn array_like_size(&self) -> usize;

    /// Whether this is the dense representation
    fn is_dense(&self) -> bool;
}

/// The storage owned by an object's indexed properties.
#[derive(Clone, Debug)]
pub enum ElementStorage<V> {
    /// Packed values with default attributes
    Dense(DenseStorage<V>),
    /// Index map with per-element attributes
    Sparse(SparseStorage<V>),
}

/// Forward a call to whichever representation is active.
macro_rules! dispatch {
    ($storage:expr, $inner:ident => $call:expr) => {
        match $storage {
            ElementStorage::Dense($inner) => $call,
            ElementStorage::Sparse($inner) => $call,
        }
    };
}

impl<V: ElementValue> Default for ElementStorage<V> {
    fn default() -> Self {
        Self::Dense(DenseStorage::new())
    }
}

impl<V: ElementValue> ElementStorage<V> {
    /// Number of populated (non-hole) indices
    pub fn populated_count(&self) -> usize {
        match self {
            Self::Dense(dense) => dense.elements().iter().filter(|v| !v.is_hole()).count(),
            Self::Sparse(sparse) => sparse.sparse_elements().len(),
        }
    }
}

impl<V: ElementValue> IndexedPropertyStorage<V> for ElementStorage<V> {
    #[inline]
    fn has_index(&self, index: u32) -> bool {
        dispatch!(self, storage => storage.has_index(index))
    }

    #[inline]
    fn get(&self, index: u32) -> Option<ValueAndAttributes<V>> {
        dispatch!(self, storage => storage.get(index))
    }

    #[inline]
    fn put(&mut self, index: u32, value: V, attributes: PropertyAttributes) {
        dispatch!(self, storage => storage.put(index, value, attributes))
    }

    #[inline]
    fn remove(&mut self, index: u32) {
        dispatch!(self, storage => storage.remove(index))
    }

    #[inline]
    fn take_first(&mut self) -> ValueAndAttributes<V> {
        dispatch!(self, storage => storage.take_first())
    }

    #[inline]
    fn take_last(&mut self) -> ValueAndAttributes<V> {
        dispatch!(self, storage => storage.take_last())
    }

    #[inline]
    fn set_array_like_size(&mut self, new_size: usize) {
        dispatch!(self, storage => storage.set_array_like_size(new_size))
    }

    #[inline]
    fn array_like_size(&self) -> usize {
        dispatch!(self, storage => storage.array_like_size())
    }

    #[inline]
    fn is_dense(&self) -> bool {
        matches!(self, Self::Dense(_))
    }
}

//! Indexed properties of a JavaScript object
//!
//! [`IndexedProperties`] is what the object model talks to for every numeric
//! property access. It starts out with dense storage and switches to sparse
//! storage (once, for good) when an element needs non-default attributes,
//! when a write lands far past the end, or when the length is set to
//! something too large to back with a `Vec`.

use crate::attributes::PropertyAttributes;
use crate::config::ElementsConfig;
use crate::cursor::{IndexedPropertyCursor, Iter};
use crate::error::{ElementsError, ElementsResult};
use crate::storage::{
    DenseStorage, ElementStorage, IndexedPropertyStorage, SparseStorage,
};
use crate::value::{ElementValue, ValueAndAttributes};

/// Why dense storage was abandoned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PromotionReason {
    Attributes,
    HoleGap,
    Length,
}

impl PromotionReason {
    fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::HoleGap => "hole_gap",
            Self::Length => "length",
        }
    }
}

/// An element removed from storage whose accessor (if any) has not run yet.
///
/// Produced by [`IndexedProperties::detach_first`] and
/// [`IndexedProperties::detach_last`]. The storage is already in its
/// post-removal state, so it is safe to release any borrow of the owning
/// object before calling [`DetachedElement::resolve`].
#[derive(Clone, Debug)]
#[must_use = "an accessor element's getter only runs on resolve()"]
pub struct DetachedElement<V> {
    element: ValueAndAttributes<V>,
}

impl<V: ElementValue> DetachedElement<V> {
    /// Whether resolving will call a getter
    pub fn is_accessor(&self) -> bool {
        self.element.value.is_accessor()
    }

    /// The raw stored pair, accessor included
    pub fn into_raw(self) -> ValueAndAttributes<V> {
        self.element
    }

    /// The element's effective value: the getter result for accessors
    /// (keeping the stored attributes), the stored pair otherwise.
    pub fn resolve(self, receiver: &V::Receiver) -> ValueAndAttributes<V> {
        if self.element.value.is_accessor() {
            let value = self.element.value.call_getter(receiver);
            return ValueAndAttributes::new(value, self.element.attributes);
        }
        self.element
    }
}

/// Storage for an object's integer-indexed properties
#[derive(Clone, Debug)]
pub struct IndexedProperties<V> {
    storage: ElementStorage<V>,
    config: ElementsConfig,
}

impl<V: ElementValue> Default for IndexedProperties<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ElementValue> IndexedProperties<V> {
    /// Create empty dense storage with default thresholds
    pub fn new() -> Self {
        Self::with_config(ElementsConfig::default())
    }

    /// Create empty dense storage with custom thresholds
    pub fn with_config(config: ElementsConfig) -> Self {
        Self {
            storage: ElementStorage::Dense(DenseStorage::new()),
            config,
        }
    }

    /// Create dense storage holding `values` at indices `0..len`
    pub fn from_values(values: Vec<V>) -> Self {
        Self::from_values_with_config(values, ElementsConfig::default())
    }

    /// Create dense storage holding `values`, with custom thresholds
    pub fn from_values_with_config(values: Vec<V>, config: ElementsConfig) -> Self {
        Self {
            storage: ElementStorage::Dense(DenseStorage::from_values(values)),
            config,
        }
    }

    /// Active thresholds
    pub fn config(&self) -> &ElementsConfig {
        &self.config
    }

    /// The active storage
    pub fn storage(&self) -> &ElementStorage<V> {
        &self.storage
    }

    /// Whether storage is still dense
    pub fn is_dense(&self) -> bool {
        self.storage.is_dense()
    }

    /// Whether storage has switched to sparse
    pub fn is_sparse(&self) -> bool {
        !self.storage.is_dense()
    }

    /// Whether `index` holds a non-hole value
    pub fn has_index(&self, index: u32) -> bool {
        self.storage.has_index(index)
    }

    /// The element at `index`
    pub fn get(&self, index: u32) -> Option<ValueAndAttributes<V>> {
        self.storage.get(index)
    }

    /// Store an element at `index`.
    ///
    /// Dense storage is promoted first if `attributes` are not the default
    /// or `index` lies more than the hole threshold past the current length.
    pub fn put(&mut self, index: u32, value: V, attributes: PropertyAttributes) {
        debug_assert!(!value.is_hole(), "cannot store the hole sentinel at {index}");

        if self.storage.is_dense() {
            let is_default = attributes.is_default();
            if self
                .config
                .put_requires_sparse(self.array_like_size(), index, is_default)
            {
                let reason = if is_default {
                    PromotionReason::HoleGap
                } else {
                    PromotionReason::Attributes
                };
                self.promote_to_sparse(reason);
            }
        }

        self.storage.put(index, value, attributes);
    }

    /// Store an element at the current length
    pub fn append(&mut self, value: V) {
        self.append_with_attributes(value, PropertyAttributes::DEFAULT);
    }

    /// Store an element with `attributes` at the current length
    pub fn append_with_attributes(&mut self, value: V, attributes: PropertyAttributes) {
        let index = u32::try_from(self.array_like_size())
            .unwrap_or_else(|_| panic!("append past the maximum element index"));
        self.put(index, value, attributes);
    }

    /// Delete the element at `index`.
    ///
    /// # Panics
    /// If `has_index(index)` is false. Deciding whether a delete is allowed
    /// is the caller's job.
    pub fn remove(&mut self, index: u32) {
        assert!(
            self.storage.has_index(index),
            "remove of missing element {index}"
        );
        self.storage.remove(index);
    }

    /// Remove the first element (`Array.prototype.shift`).
    ///
    /// An accessor element yields its getter's result, called with
    /// `receiver`. The getter cannot reach this storage through `&mut self`;
    /// owners that need reentrancy use [`crate::ElementsCell::take_first`].
    pub fn take_first(&mut self, receiver: &V::Receiver) -> ValueAndAttributes<V> {
        self.detach_first().resolve(receiver)
    }

    /// Remove the last element (`Array.prototype.pop`).
    ///
    /// See [`IndexedProperties::take_first`] for accessor handling.
    pub fn take_last(&mut self, receiver: &V::Receiver) -> ValueAndAttributes<V> {
        self.detach_last().resolve(receiver)
    }

    /// Remove the first element without running its getter.
    ///
    /// # Panics
    /// If the length is 0.
    pub fn detach_first(&mut self) -> DetachedElement<V> {
        DetachedElement {
            element: self.storage.take_first(),
        }
    }

    /// Remove the last element without running its getter.
    ///
    /// # Panics
    /// If the length is 0.
    pub fn detach_last(&mut self) -> DetachedElement<V> {
        DetachedElement {
            element: self.storage.take_last(),
        }
    }

    /// The logical length
    pub fn array_like_size(&self) -> usize {
        self.storage.array_like_size()
    }

    /// Whether the logical length is 0
    pub fn is_empty(&self) -> bool {
        self.array_like_size() == 0
    }

    /// Set the logical length.
    ///
    /// Shrinking sparse storage keeps non-configurable elements, so the
    /// resulting length can be larger than `new_size`.
    pub fn set_array_like_size(&mut self, new_size: usize) {
        let current_array_like_size = self.array_like_size();

        if self.storage.is_dense()
            && self
                .config
                .resize_requires_sparse(current_array_like_size, new_size)
        {
            self.promote_to_sparse(PromotionReason::Length);
        }

        self.storage.set_array_like_size(new_size);
    }

    /// Assign the `length` of an array.
    ///
    /// Returns `Ok(false)` when non-configurable elements kept the length
    /// above `new_length`.
    pub fn set_length(&mut self, new_length: u64) -> ElementsResult<bool> {
        let new_size = u32::try_from(new_length)
            .map_err(|_| ElementsError::invalid_length(new_length))? as usize;
        self.set_array_like_size(new_size);
        Ok(self.array_like_size() == new_size)
    }

    /// Populated indices in ascending order
    pub fn indices(&self) -> Vec<u32> {
        match &self.storage {
            ElementStorage::Dense(storage) => {
                let mut indices = Vec::with_capacity(storage.array_like_size());
                for (i, value) in storage.elements().iter().enumerate() {
                    if !value.is_hole() {
                        indices.push(i as u32);
                    }
                }
                indices
            }
            ElementStorage::Sparse(storage) => storage.sorted_indices(),
        }
    }

    /// Visit every stored value (for tracing references)
    pub fn for_each_value(&self, mut f: impl FnMut(&V)) {
        match &self.storage {
            ElementStorage::Dense(storage) => storage
                .elements()
                .iter()
                .filter(|value| !value.is_hole())
                .for_each(f),
            ElementStorage::Sparse(storage) => {
                for entry in storage.sparse_elements().values() {
                    f(&entry.value);
                }
            }
        }
    }

    /// Cursor at index 0
    pub fn begin(&self, skip_holes: bool) -> IndexedPropertyCursor {
        IndexedPropertyCursor::new(self, 0, skip_holes)
    }

    /// Cursor at `start`
    pub fn begin_at(&self, start: u32, skip_holes: bool) -> IndexedPropertyCursor {
        IndexedPropertyCursor::new(self, start, skip_holes)
    }

    /// Cursor one past the last index
    pub fn end(&self) -> IndexedPropertyCursor {
        IndexedPropertyCursor::end(self)
    }

    /// Iterate `(index, element)` from 0 to the length
    pub fn iter(&self, skip_holes: bool) -> Iter<'_, V> {
        Iter::new(self, skip_holes)
    }

    fn promote_to_sparse(&mut self, reason: PromotionReason) {
        let populated = self.storage.populated_count();
        let ElementStorage::Dense(dense) = std::mem::take(&mut self.storage) else {
            unreachable!("sparse element storage is never promoted again");
        };

        let sparse = SparseStorage::from(dense);
        tracing::debug!(
            target: "otter::elements",
            reason = reason.as_str(),
            array_size = sparse.array_like_size(),
            populated,
            "switching to sparse element storage"
        );
        self.storage = ElementStorage::Sparse(sparse);
    }
}

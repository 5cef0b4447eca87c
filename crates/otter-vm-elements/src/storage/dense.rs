use crate::attributes::PropertyAttributes;
use crate::value::{ElementValue, ValueAndAttributes};

use super::IndexedPropertyStorage;

/// Packed element storage.
///
/// Every slot below `array_size` is either a value (with implied default
/// attributes) or a hole. The backing `Vec` may be longer than
/// `array_size`; the extra slots are always holes.
#[derive(Clone, Debug)]
pub struct DenseStorage<V> {
    array_size: usize,
    packed_elements: Vec<V>,
}

impl<V: ElementValue> Default for DenseStorage<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ElementValue> DenseStorage<V> {
    /// Create empty storage
    pub fn new() -> Self {
        Self {
            array_size: 0,
            packed_elements: Vec::new(),
        }
    }

    /// Create storage holding `initial_values` at indices `0..len`.
    ///
    /// Holes in the input stay holes.
    pub fn from_values(initial_values: Vec<V>) -> Self {
        Self {
            array_size: initial_values.len(),
            packed_elements: initial_values,
        }
    }

    /// All physical slots, including trailing spare capacity
    pub fn elements(&self) -> &[V] {
        &self.packed_elements
    }

    /// Number of physical slots
    pub fn capacity(&self) -> usize {
        self.packed_elements.len()
    }

    pub(crate) fn into_elements(self) -> (usize, Vec<V>) {
        (self.array_size, self.packed_elements)
    }

    fn grow_storage_if_needed(&mut self) {
        if self.array_size <= self.packed_elements.len() {
            return;
        }
        // Grow storage by 25% at a time.
        self.packed_elements
            .resize(self.array_size + self.array_size / 4, V::hole());
    }
}

impl<V: ElementValue> IndexedPropertyStorage<V> for DenseStorage<V> {
    fn has_index(&self, index: u32) -> bool {
        let index = index as usize;
        index < self.array_size && !self.packed_elements[index].is_hole()
    }

    fn get(&self, index: u32) -> Option<ValueAndAttributes<V>> {
        let index = index as usize;
        if index >= self.array_size {
            return None;
        }
        let value = &self.packed_elements[index];
        if value.is_hole() {
            return None;
        }
        Some(ValueAndAttributes::with_default_attributes(value.clone()))
    }

    fn put(&mut self, index: u32, value: V, attributes: PropertyAttributes) {
        assert!(
            attributes.is_default(),
            "dense element storage cannot hold non-default attributes {attributes:?}"
        );

        let index = index as usize;
        if index >= self.array_size {
            self.array_size = index + 1;
            self.grow_storage_if_needed();
        }
        self.packed_elements[index] = value;
    }

    fn remove(&mut self, index: u32) {
        assert!(
            self.has_index(index),
            "remove of missing element {index} (length {})",
            self.array_size
        );
        self.packed_elements[index as usize] = V::hole();
    }

    fn take_first(&mut self) -> ValueAndAttributes<V> {
        assert!(self.array_size > 0, "take_first on empty element storage");
        self.array_size -= 1;
        ValueAndAttributes::with_default_attributes(self.packed_elements.remove(0))
    }

    fn take_last(&mut self) -> ValueAndAttributes<V> {
        assert!(self.array_size > 0, "take_last on empty element storage");
        self.array_size -= 1;
        let last_element = std::mem::replace(&mut self.packed_elements[self.array_size], V::hole());
        ValueAndAttributes::with_default_attributes(last_element)
    }

    fn set_array_like_size(&mut self, new_size: usize) {
        self.array_size = new_size;
        self.packed_elements.resize(new_size, V::hole());
    }

    fn array_like_size(&self) -> usize {
        self.array_size
    }

    fn is_dense(&self) -> bool {
        true
    }
}

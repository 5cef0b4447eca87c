use rustc_hash::FxHashMap;

use crate::attributes::PropertyAttributes;
use crate::value::{ElementValue, ValueAndAttributes};

use super::{DenseStorage, IndexedPropertyStorage};

/// Hash-map element storage with per-element attributes.
///
/// The map has no order; callers that enumerate must sort the keys.
#[derive(Clone, Debug)]
pub struct SparseStorage<V> {
    array_size: usize,
    sparse_elements: FxHashMap<u32, ValueAndAttributes<V>>,
}

impl<V: ElementValue> Default for SparseStorage<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ElementValue> SparseStorage<V> {
    /// Create empty storage
    pub fn new() -> Self {
        Self {
            array_size: 0,
            sparse_elements: FxHashMap::default(),
        }
    }

    /// The populated entries, unordered
    pub fn sparse_elements(&self) -> &FxHashMap<u32, ValueAndAttributes<V>> {
        &self.sparse_elements
    }

    /// Populated indices in ascending order
    pub fn sorted_indices(&self) -> Vec<u32> {
        let mut indices: Vec<u32> = self.sparse_elements.keys().copied().collect();
        indices.sort_unstable();
        indices
    }
}

impl<V: ElementValue> From<DenseStorage<V>> for SparseStorage<V> {
    fn from(storage: DenseStorage<V>) -> Self {
        let (array_size, packed_elements) = storage.into_elements();
        let sparse_elements = packed_elements
            .into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_hole())
            .map(|(index, value)| {
                (
                    index as u32,
                    ValueAndAttributes::with_default_attributes(value),
                )
            })
            .collect();
        Self {
            array_size,
            sparse_elements,
        }
    }
}

impl<V: ElementValue> IndexedPropertyStorage<V> for SparseStorage<V> {
    fn has_index(&self, index: u32) -> bool {
        self.sparse_elements.contains_key(&index)
    }

    fn get(&self, index: u32) -> Option<ValueAndAttributes<V>> {
        if index as usize >= self.array_size {
            return None;
        }
        self.sparse_elements.get(&index).cloned()
    }

    fn put(&mut self, index: u32, value: V, attributes: PropertyAttributes) {
        if index as usize >= self.array_size {
            self.array_size = index as usize + 1;
        }
        self.sparse_elements
            .insert(index, ValueAndAttributes::new(value, attributes));
    }

    fn remove(&mut self, index: u32) {
        assert!(
            self.sparse_elements.remove(&index).is_some(),
            "remove of missing element {index} (length {})",
            self.array_size
        );
    }

    fn take_first(&mut self) -> ValueAndAttributes<V> {
        assert!(self.array_size > 0, "take_first on empty element storage");
        self.array_size -= 1;

        // The remaining entries keep their indices; only the lowest one is
        // evicted.
        let Some(first_index) = self.sparse_elements.keys().copied().min() else {
            return ValueAndAttributes::empty();
        };
        self.sparse_elements
            .remove(&first_index)
            .unwrap_or_else(ValueAndAttributes::empty)
    }

    fn take_last(&mut self) -> ValueAndAttributes<V> {
        assert!(self.array_size > 0, "take_last on empty element storage");
        self.array_size -= 1;

        match u32::try_from(self.array_size) {
            Ok(last_index) => self
                .sparse_elements
                .remove(&last_index)
                .unwrap_or_else(ValueAndAttributes::empty),
            Err(_) => ValueAndAttributes::empty(),
        }
    }

    fn set_array_like_size(&mut self, new_size: usize) {
        if new_size == self.array_size {
            return;
        }

        if new_size > self.array_size {
            self.array_size = new_size;
            return;
        }

        // Non-configurable elements survive truncation and hold the length up.
        let mut highest_index: Option<usize> = None;
        self.sparse_elements.retain(|&index, entry| {
            let keep = (index as usize) < new_size || !entry.attributes.is_configurable();
            if keep {
                highest_index = highest_index.max(Some(index as usize));
            }
            keep
        });

        let requested = new_size;
        self.array_size = match highest_index {
            Some(highest) => (highest + 1).max(new_size),
            None => new_size,
        };

        if self.array_size != requested {
            tracing::trace!(
                target: "otter::elements",
                requested,
                resulting = self.array_size,
                retained = self.sparse_elements.len(),
                "length shrink blocked by non-configurable elements"
            );
        }
    }

    fn array_like_size(&self) -> usize {
        self.array_size
    }

    fn is_dense(&self) -> bool {
        false
    }
}

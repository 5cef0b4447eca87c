//! Thresholds that drive dense to sparse promotion

/// Largest forward gap (in elements past the current length) that a dense
/// store absorbs on `put` before switching to sparse storage.
pub const SPARSE_ARRAY_HOLE_THRESHOLD: usize = 200;

/// Length-setter cap for dense storage (4M elements).
///
/// Growing the length from below this value to above it switches to sparse
/// storage, so `a = []; a.length = 0x80000000` does not allocate 2G slots.
pub const LENGTH_SETTER_SPARSE_THRESHOLD: usize = 4 * 1024 * 1024;

/// Dense storage can't represent lengths that don't fit in an i32.
pub const MAX_DENSE_LENGTH: usize = i32::MAX as usize;

/// Element storage configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementsConfig {
    /// Forward gap tolerated by dense `put` (default: 200)
    pub sparse_hole_threshold: usize,
    /// Length-setter promotion threshold (default: 4M elements)
    pub length_setter_sparse_threshold: usize,
    /// Largest length dense storage may be resized to (default: `i32::MAX`)
    pub max_dense_length: usize,
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            sparse_hole_threshold: SPARSE_ARRAY_HOLE_THRESHOLD,
            length_setter_sparse_threshold: LENGTH_SETTER_SPARSE_THRESHOLD,
            max_dense_length: MAX_DENSE_LENGTH,
        }
    }
}

impl ElementsConfig {
    /// Whether a dense store of `array_size` must promote before writing
    /// `index` with `is_default_attributes`.
    pub(crate) fn put_requires_sparse(
        &self,
        array_size: usize,
        index: u32,
        is_default_attributes: bool,
    ) -> bool {
        !is_default_attributes
            || index as usize > array_size.saturating_add(self.sparse_hole_threshold)
    }

    /// Whether a dense store must promote before its length changes from
    /// `current` to `requested`.
    pub(crate) fn resize_requires_sparse(&self, current: usize, requested: usize) -> bool {
        requested > self.max_dense_length
            || (current < self.length_setter_sparse_threshold
                && requested > self.length_setter_sparse_threshold)
    }
}

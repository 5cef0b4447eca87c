//! Enumeration over indexed properties
//!
//! [`IndexedPropertyCursor`] is only a position. Every step borrows the
//! [`IndexedProperties`] afresh, so the storage may grow, shrink or switch
//! to sparse between steps (a getter run during a `for-in` loop can do all
//! of these) and the cursor sees the current state, never a snapshot.
//!
//! Skipping holes re-reads the full sorted index list on every step. That is
//! quadratic for large sparse arrays and cheap for everything else.

use crate::indexed_properties::IndexedProperties;
use crate::value::{ElementValue, ValueAndAttributes};

/// A position over an object's indexed properties.
///
/// Two cursors are equal when their positions are equal, regardless of
/// which object they were created for; `begin(..) != end()` drives a loop.
#[derive(Clone, Copy, Debug)]
pub struct IndexedPropertyCursor {
    index: usize,
    skip_holes: bool,
}

impl PartialEq for IndexedPropertyCursor {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for IndexedPropertyCursor {}

impl IndexedPropertyCursor {
    /// Cursor at `start`, moved forward to the first populated index when
    /// `skip_holes` is set.
    pub fn new<V: ElementValue>(
        properties: &IndexedProperties<V>,
        start: u32,
        skip_holes: bool,
    ) -> Self {
        let mut cursor = Self {
            index: start as usize,
            skip_holes,
        };
        if skip_holes {
            cursor.skip_empty_indices(properties);
        }
        cursor
    }

    /// Cursor at the current length
    pub fn end<V: ElementValue>(properties: &IndexedProperties<V>) -> Self {
        Self {
            index: properties.array_like_size(),
            skip_holes: false,
        }
    }

    /// Current position
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element at the current position, or the empty pair past the end.
    ///
    /// Accessors are returned as stored; running the getter is up to the
    /// caller.
    pub fn value_and_attributes<V: ElementValue>(
        &self,
        properties: &IndexedProperties<V>,
    ) -> ValueAndAttributes<V> {
        if self.index < properties.array_like_size() {
            return u32::try_from(self.index)
                .ok()
                .and_then(|index| properties.get(index))
                .unwrap_or_default();
        }
        ValueAndAttributes::empty()
    }

    /// Step to the next index (the next populated one when skipping holes)
    pub fn advance<V: ElementValue>(&mut self, properties: &IndexedProperties<V>) -> &mut Self {
        self.index += 1;

        if self.skip_holes {
            self.skip_empty_indices(properties);
        }

        self
    }

    fn skip_empty_indices<V: ElementValue>(&mut self, properties: &IndexedProperties<V>) {
        let indices = properties.indices();
        for i in indices {
            if (i as usize) < self.index {
                continue;
            }
            self.index = i as usize;
            return;
        }
        self.index = properties.array_like_size();
    }
}

/// Iterator over `(index, element)` pairs in `[begin, end)`
#[derive(Debug)]
pub struct Iter<'a, V> {
    properties: &'a IndexedProperties<V>,
    cursor: IndexedPropertyCursor,
    end: IndexedPropertyCursor,
}

impl<'a, V: ElementValue> Iter<'a, V> {
    pub(crate) fn new(properties: &'a IndexedProperties<V>, skip_holes: bool) -> Self {
        Self {
            properties,
            cursor: properties.begin(skip_holes),
            end: properties.end(),
        }
    }
}

impl<V: ElementValue> Iterator for Iter<'_, V> {
    type Item = (u32, ValueAndAttributes<V>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.index() >= self.end.index() {
            return None;
        }
        let index = u32::try_from(self.cursor.index()).ok()?;
        let element = self.cursor.value_and_attributes(self.properties);
        self.cursor.advance(self.properties);
        Some((index, element))
    }
}

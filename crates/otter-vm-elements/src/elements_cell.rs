//! Interior mutability for an object's indexed properties.
//!
//! Getters stored at numeric indices run user code, and that code can write
//! to the very array it is being removed from. `ElementsCell<V>` holds the
//! `RefCell` an object embeds and keeps every mutable borrow short: the
//! element is detached (storage already updated) and the borrow dropped
//! before a getter runs. Runtime borrow checking still catches overlapping
//! borrows in both debug and release builds.
//!
//! This type is single-threaded; it is neither `Send` nor `Sync`.

use std::cell::{Ref, RefCell, RefMut};

use crate::cursor::IndexedPropertyCursor;
use crate::indexed_properties::IndexedProperties;
use crate::value::{ElementValue, ValueAndAttributes};

/// Reentrancy-safe owner of [`IndexedProperties`].
pub struct ElementsCell<V> {
    properties: RefCell<IndexedProperties<V>>,
}

impl<V: ElementValue> Default for ElementsCell<V> {
    fn default() -> Self {
        Self::new(IndexedProperties::new())
    }
}

impl<V: ElementValue> ElementsCell<V> {
    /// Wrap an object's indexed properties
    #[inline]
    pub fn new(properties: IndexedProperties<V>) -> Self {
        Self {
            properties: RefCell::new(properties),
        }
    }

    /// Shared access for reads and enumeration.
    ///
    /// Panics while a write (or a detach in progress) holds the cell.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, IndexedProperties<V>> {
        self.properties.borrow()
    }

    /// Exclusive access for element writes and length changes.
    ///
    /// Never hold this across a getter call; the getter may need it too.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, IndexedProperties<V>> {
        self.properties.borrow_mut()
    }

    /// Unwrap the properties once the owning object is gone
    #[inline]
    pub fn into_inner(self) -> IndexedProperties<V> {
        self.properties.into_inner()
    }

    /// Remove the first element, running its getter (if any) after the
    /// borrow is released.
    ///
    /// # Panics
    /// If the length is 0, or if the cell is already borrowed.
    pub fn take_first(&self, receiver: &V::Receiver) -> ValueAndAttributes<V> {
        let detached = self.properties.borrow_mut().detach_first();
        detached.resolve(receiver)
    }

    /// Remove the last element, running its getter (if any) after the
    /// borrow is released.
    ///
    /// # Panics
    /// If the length is 0, or if the cell is already borrowed.
    pub fn take_last(&self, receiver: &V::Receiver) -> ValueAndAttributes<V> {
        let detached = self.properties.borrow_mut().detach_last();
        detached.resolve(receiver)
    }

    /// Cursor at index 0
    pub fn begin(&self, skip_holes: bool) -> IndexedPropertyCursor {
        self.properties.borrow().begin(skip_holes)
    }

    /// Cursor at the current length
    pub fn end(&self) -> IndexedPropertyCursor {
        self.properties.borrow().end()
    }

    /// Advance `cursor` against the current state of the properties
    pub fn advance(&self, cursor: &mut IndexedPropertyCursor) {
        cursor.advance(&*self.properties.borrow());
    }

    /// The element under `cursor`, with an accessor's getter run after the
    /// borrow is released.
    pub fn resolve_at(
        &self,
        cursor: &IndexedPropertyCursor,
        receiver: &V::Receiver,
    ) -> ValueAndAttributes<V> {
        let element = cursor.value_and_attributes(&*self.properties.borrow());
        if element.value.is_accessor() {
            let value = element.value.call_getter(receiver);
            return ValueAndAttributes::new(value, element.attributes);
        }
        element
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for ElementsCell<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("ElementsCell");
        // A getter may print its receiver while the elements are detached.
        match self.properties.try_borrow() {
            Ok(properties) => out.field("properties", &*properties),
            Err(_) => out.field("properties", &"<borrowed>"),
        };
        out.finish()
    }
}

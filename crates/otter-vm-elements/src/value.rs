//! The value contract element storage relies on
//!
//! Element storage never interprets the values it holds except for two
//! states: the *hole* (no property at this index) and the *accessor*
//! (a getter/setter pair whose getter must run when the element is taken
//! out of the array).

use crate::attributes::PropertyAttributes;

/// A value that can be stored in indexed property storage.
pub trait ElementValue: Clone {
    /// Handle passed through unmodified to accessor getters (the `this`
    /// object of the removal).
    type Receiver: ?Sized;

    /// The hole sentinel.
    fn hole() -> Self;

    /// Check if this is the hole sentinel
    fn is_hole(&self) -> bool;

    /// Check if this is an accessor (getter/setter) value
    fn is_accessor(&self) -> bool;

    /// Run the accessor's getter against `receiver`.
    ///
    /// Only called when [`ElementValue::is_accessor`] returned `true`.
    fn call_getter(&self, receiver: &Self::Receiver) -> Self;
}

/// A stored element: value plus its attributes
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAndAttributes<V> {
    /// The value (may be the hole sentinel)
    pub value: V,
    /// Attributes
    pub attributes: PropertyAttributes,
}

impl<V: ElementValue> ValueAndAttributes<V> {
    /// Pair a value with its attributes
    pub fn new(value: V, attributes: PropertyAttributes) -> Self {
        Self { value, attributes }
    }

    /// Pair a value with the default attributes
    pub fn with_default_attributes(value: V) -> Self {
        Self::new(value, PropertyAttributes::DEFAULT)
    }

    /// The empty pair: a hole with default attributes
    pub fn empty() -> Self {
        Self::with_default_attributes(V::hole())
    }

    /// Check if the value is a hole
    pub fn is_empty(&self) -> bool {
        self.value.is_hole()
    }
}

impl<V: ElementValue> Default for ValueAndAttributes<V> {
    fn default() -> Self {
        Self::empty()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::TestValue;
    use super::*;

    #[test]
    fn test_empty_pair() {
        let pair = ValueAndAttributes::<TestValue>::default();
        assert!(pair.is_empty());
        assert_eq!(pair.attributes, PropertyAttributes::DEFAULT);
    }

    #[test]
    fn test_non_hole_pair() {
        let pair = ValueAndAttributes::new(TestValue::Int(3), PropertyAttributes::frozen());
        assert!(!pair.is_empty());
        assert!(!pair.attributes.is_configurable());
    }
}

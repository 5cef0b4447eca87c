//! Getters that run while elements are being removed or enumerated
//!
//! An accessor element's getter receives the owning object and may write to
//! the same element storage. The removal must already be committed when the
//! getter runs, and enumeration must observe whatever the getter changed.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{TestObject, TestValue};
use otter_vm_elements::{IndexedProperties, PropertyAttributes};

#[test]
fn test_getter_sees_post_shift_state() {
    let object = TestObject::new();
    let observed_size = Rc::new(Cell::new(usize::MAX));
    let observed = observed_size.clone();

    {
        let mut elements = object.elements.borrow_mut();
        elements.put(
            0,
            TestValue::accessor(move |this| {
                let elements = this.elements.borrow();
                observed.set(elements.array_like_size());
                elements.get(0).map(|e| e.value).unwrap_or(TestValue::Empty)
            }),
            PropertyAttributes::DEFAULT,
        );
        elements.put(1, TestValue::Int(1), PropertyAttributes::DEFAULT);
    }

    // The getter reads index 0 after the shift, which is the old index 1.
    let first = object.elements.take_first(&object);
    assert_eq!(first.value, TestValue::Int(1));
    assert_eq!(observed_size.get(), 1);
}

#[test]
fn test_getter_writes_during_pop() {
    let object = TestObject::new();
    {
        let mut elements = object.elements.borrow_mut();
        elements.append(TestValue::Int(0));
        elements.append(TestValue::accessor(|this| {
            this.elements
                .borrow_mut()
                .put(1, TestValue::Int(99), PropertyAttributes::DEFAULT);
            TestValue::Str("popped")
        }));
    }

    let last = object.elements.take_last(&object);
    assert_eq!(last.value, TestValue::Str("popped"));

    let elements = object.elements.borrow();
    assert_eq!(elements.array_like_size(), 2);
    assert_eq!(elements.get(1).map(|e| e.value), Some(TestValue::Int(99)));
}

#[test]
fn test_getter_promotes_storage() {
    let object = TestObject::new();
    object.elements.borrow_mut().append(TestValue::accessor(|this| {
        this.elements
            .borrow_mut()
            .put(0, TestValue::Int(5), PropertyAttributes::frozen());
        TestValue::Int(1)
    }));
    assert!(object.elements.borrow().is_dense());

    let first = object.elements.take_first(&object);
    assert_eq!(first.value, TestValue::Int(1));
    assert_eq!(first.attributes, PropertyAttributes::DEFAULT);

    let elements = object.elements.borrow();
    assert!(elements.is_sparse());
    assert_eq!(elements.indices(), vec![0]);
}

#[test]
fn test_getter_keeps_accessor_attributes() {
    let object = TestObject::new();
    object.elements.borrow_mut().put(
        3,
        TestValue::accessor(|_| TestValue::Int(3)),
        PropertyAttributes::sealed().with_enumerable(false),
    );

    let last = object.elements.take_last(&object);
    assert_eq!(last.value, TestValue::Int(3));
    assert!(!last.attributes.is_enumerable());
    assert!(!last.attributes.is_configurable());
}

#[test]
fn test_getter_pops_again() {
    let object = TestObject::new();
    {
        let mut elements = object.elements.borrow_mut();
        elements.append(TestValue::Int(0));
        elements.append(TestValue::Int(1));
        elements.append(TestValue::accessor(|this| this.elements.take_last(this).value));
    }

    // Popping index 2 runs a getter that pops index 1.
    let last = object.elements.take_last(&object);
    assert_eq!(last.value, TestValue::Int(1));
    assert_eq!(object.elements.borrow().array_like_size(), 1);
}

#[test]
fn test_enumeration_observes_deletion_by_getter() {
    let object = TestObject::new();
    {
        let mut elements = object.elements.borrow_mut();
        elements.append(TestValue::Int(0));
        elements.append(TestValue::accessor(|this| {
            this.elements.borrow_mut().remove(3);
            TestValue::Int(1)
        }));
        elements.append(TestValue::Int(2));
        elements.append(TestValue::Int(3));
        elements.append(TestValue::Int(4));
    }

    let mut visited = Vec::new();
    let mut cursor = object.elements.begin(true);
    while cursor != object.elements.end() {
        let element = object.elements.resolve_at(&cursor, &object);
        visited.push((cursor.index(), element.value));
        object.elements.advance(&mut cursor);
    }

    assert_eq!(
        visited,
        vec![
            (0, TestValue::Int(0)),
            (1, TestValue::Int(1)),
            (2, TestValue::Int(2)),
            (4, TestValue::Int(4)),
        ]
    );
}

#[test]
fn test_enumeration_observes_truncation_by_getter() {
    let object = TestObject::new();
    {
        let mut elements = object.elements.borrow_mut();
        elements.put(0, TestValue::Int(0), PropertyAttributes::DEFAULT);
        elements.put(
            1,
            TestValue::accessor(|this| {
                this.elements.borrow_mut().set_array_like_size(2);
                TestValue::Int(1)
            }),
            PropertyAttributes::frozen(),
        );
        elements.put(600, TestValue::Int(600), PropertyAttributes::DEFAULT);
    }
    assert!(object.elements.borrow().is_sparse());

    let mut visited = Vec::new();
    let mut cursor = object.elements.begin(true);
    while cursor != object.elements.end() {
        object.elements.resolve_at(&cursor, &object);
        visited.push(cursor.index());
        object.elements.advance(&mut cursor);
    }

    assert_eq!(visited, vec![0, 1]);
    assert_eq!(cursor.index(), 2);
}

#[test]
fn test_cursor_over_plain_properties_between_steps() {
    let mut props = IndexedProperties::from_values(vec![TestValue::Int(0), TestValue::Int(1)]);
    let mut cursor = props.begin(true);

    props.put(400, TestValue::Int(400), PropertyAttributes::DEFAULT);
    cursor.advance(&props);
    cursor.advance(&props);
    assert_eq!(cursor.index(), 400);
    assert_eq!(cursor.value_and_attributes(&props).value, TestValue::Int(400));

    cursor.advance(&props);
    assert_eq!(cursor, props.end());
}

//! Shared value and object types for the integration tests.

#![allow(dead_code)]

use std::fmt;
use std::rc::Rc;

use otter_vm_elements::{ElementValue, ElementsCell};

/// Getter closure stored in an accessor element
pub type Getter = Rc<dyn Fn(&TestObject) -> TestValue>;

/// A small value type with the two states element storage cares about
#[derive(Clone)]
pub enum TestValue {
    Empty,
    Int(i32),
    Str(&'static str),
    Accessor(Getter),
}

impl TestValue {
    pub fn accessor(getter: impl Fn(&TestObject) -> TestValue + 'static) -> Self {
        TestValue::Accessor(Rc::new(getter))
    }
}

impl fmt::Debug for TestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestValue::Empty => write!(f, "Empty"),
            TestValue::Int(n) => write!(f, "Int({n})"),
            TestValue::Str(s) => write!(f, "Str({s:?})"),
            TestValue::Accessor(_) => write!(f, "Accessor"),
        }
    }
}

impl PartialEq for TestValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TestValue::Empty, TestValue::Empty) => true,
            (TestValue::Int(a), TestValue::Int(b)) => a == b,
            (TestValue::Str(a), TestValue::Str(b)) => a == b,
            (TestValue::Accessor(a), TestValue::Accessor(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl ElementValue for TestValue {
    type Receiver = TestObject;

    fn hole() -> Self {
        TestValue::Empty
    }

    fn is_hole(&self) -> bool {
        matches!(self, TestValue::Empty)
    }

    fn is_accessor(&self) -> bool {
        matches!(self, TestValue::Accessor(_))
    }

    fn call_getter(&self, receiver: &TestObject) -> Self {
        match self {
            TestValue::Accessor(getter) => getter(receiver),
            _ => panic!("call_getter on a data value"),
        }
    }
}

/// An array-like object owning its elements
#[derive(Debug, Default)]
pub struct TestObject {
    pub elements: ElementsCell<TestValue>,
}

impl TestObject {
    pub fn new() -> Self {
        Self::default()
    }
}

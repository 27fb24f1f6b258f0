//! Native callables with explicit receivers
//!
//! A [`NativeFn`] is a reference-counted closure taking an explicit
//! receiver plus positional arguments. Binding is an explicit capture:
//! [`NativeFn::bind`] produces a callable whose captured receiver wins
//! over whatever receiver the call site passes. This is the
//! "function-pointer-plus-context" shape that replaces implicit `this`
//! rebinding, and it is what lets a detached accessor keep reading its
//! original holder after being republished on another object.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Closure signature backing a native callable: `(receiver, args) -> value`
pub type NativeFnImpl = dyn Fn(&Value, &[Value]) -> Value;

/// Reference-counted native callable with an optional bound receiver.
///
/// Identity semantics: two `NativeFn`s compare equal iff they share the
/// same underlying closure allocation. Binding does not change identity.
#[derive(Clone)]
pub struct NativeFn {
    /// The underlying closure
    imp: Rc<NativeFnImpl>,
    /// Captured receiver; when present it overrides the call-site receiver
    bound_receiver: Option<Rc<Value>>,
    /// Optional name for diagnostics
    name: Option<Rc<str>>,
}

impl NativeFn {
    /// Create an anonymous native callable
    pub fn new(f: impl Fn(&Value, &[Value]) -> Value + 'static) -> Self {
        Self {
            imp: Rc::new(f),
            bound_receiver: None,
            name: None,
        }
    }

    /// Create a named native callable (name is used only in Debug output)
    pub fn named(name: &str, f: impl Fn(&Value, &[Value]) -> Value + 'static) -> Self {
        Self {
            imp: Rc::new(f),
            bound_receiver: None,
            name: Some(Rc::from(name)),
        }
    }

    /// Get the callable's name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check whether a receiver has been bound
    pub fn is_bound(&self) -> bool {
        self.bound_receiver.is_some()
    }

    /// Return a callable bound to `receiver`.
    ///
    /// An existing binding wins: rebinding an already-bound callable
    /// returns an unchanged clone, matching the first-bind-sticks rule
    /// of host-language function binding.
    pub fn bind(&self, receiver: Value) -> NativeFn {
        if self.bound_receiver.is_some() {
            return self.clone();
        }
        Self {
            imp: Rc::clone(&self.imp),
            bound_receiver: Some(Rc::new(receiver)),
            name: self.name.clone(),
        }
    }

    /// Invoke the callable. The bound receiver, when present, replaces
    /// the caller-supplied one.
    pub fn call(&self, receiver: &Value, args: &[Value]) -> Value {
        let receiver = self.bound_receiver.as_deref().unwrap_or(receiver);
        (self.imp)(receiver, args)
    }

    /// Identity comparison on the underlying closure allocation
    pub fn ptr_eq(&self, other: &NativeFn) -> bool {
        Rc::ptr_eq(&self.imp, &other.imp)
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn")
            .field("name", &self.name.as_deref().unwrap_or("<anonymous>"))
            .field("bound", &self.is_bound())
            .finish()
    }
}

//! Dynamic value representation
//!
//! The descriptor engine is a total function over arbitrary host-style
//! values, so the substrate is a plain tagged enum rather than a packed
//! encoding: there is no interpreter loop here that would pay for the
//! unboxing. Primitives compare by value, strings by content, objects
//! and functions by identity.

use std::fmt;
use std::rc::Rc;

use crate::function::NativeFn;
use crate::object::ObjectRef;
use crate::symbol::Symbol;

/// A dynamically typed value
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value (distinct from `Null`)
    Undefined,
    /// The null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value (IEEE 754 double)
    Number(f64),
    /// Immutable string value
    Str(Rc<str>),
    /// Unique symbol value
    Symbol(Symbol),
    /// Native callable value
    Function(NativeFn),
    /// Shared object value
    Object(ObjectRef),
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a boolean value
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create a numeric value
    pub const fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a string value
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Create a function value
    pub fn function(f: NativeFn) -> Self {
        Value::Function(f)
    }

    /// Create an empty object value
    pub fn object() -> Self {
        Value::Object(ObjectRef::new())
    }

    // ========================================================================
    // Type checks
    // ========================================================================

    /// Check if value is `Undefined`
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if value is `Null`
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a boolean
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is a number
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if value is a string
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if value is a symbol
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is callable
    pub const fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Check if value is an object
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    // ========================================================================
    // Extractors
    // ========================================================================

    /// Extract boolean value
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract numeric value
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract symbol
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Extract callable
    pub const fn as_function(&self) -> Option<&NativeFn> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Extract object handle
    pub const fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get type name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Object(_) => "object",
        }
    }

    /// Structural equality: objects compare key-by-key instead of by
    /// identity. Functions still compare by identity.
    pub fn deep_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Object(a), Value::Object(b)) => a.deep_eq(b),
            _ => self == other,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Function(func) => {
                write!(f, "function {}", func.name().unwrap_or("<anonymous>"))
            }
            Value::Object(o) => write!(f, "object({} keys)", o.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<NativeFn> for Value {
    fn from(f: NativeFn) -> Self {
        Value::Function(f)
    }
}

impl From<ObjectRef> for Value {
    fn from(o: ObjectRef) -> Self {
        Value::Object(o)
    }
}

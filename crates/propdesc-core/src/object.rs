//! Object model: property keys, attributed property slots, and shared
//! object handles
//!
//! Every property carries full attributes (writable/enumerable/
//! configurable) and is either a data slot or an accessor slot, so a
//! descriptor can be extracted from or defined onto any object without
//! loss. The table keeps a hash map for O(1) lookup plus a separate key
//! vector for stable insertion order, the same dual structure used for
//! name lookups elsewhere in this family of runtimes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::error::{CoreError, CoreResult};
use crate::function::NativeFn;
use crate::symbol::Symbol;
use crate::value::Value;

// ============================================================================
// PropertyKey
// ============================================================================

/// A valid property key: a string or a symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String key
    Str(Rc<str>),
    /// Symbol key
    Symbol(Symbol),
}

impl PropertyKey {
    /// Convert an arbitrary value into a property key.
    ///
    /// Only strings and symbols are valid keys; anything else is an
    /// `InvalidKey` error naming the offending type.
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        match value {
            Value::Str(s) => Ok(PropertyKey::Str(Rc::clone(s))),
            Value::Symbol(s) => Ok(PropertyKey::Symbol(s.clone())),
            other => Err(CoreError::InvalidKey(other.type_name().to_string())),
        }
    }

    /// Get the string form of the key, if it is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::Str(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::Str(Rc::from(s))
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::Str(Rc::from(s))
    }
}

impl From<Symbol> for PropertyKey {
    fn from(s: Symbol) -> Self {
        PropertyKey::Symbol(s)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(s) => write!(f, "{}", s),
            PropertyKey::Symbol(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Property slots
// ============================================================================

/// The payload of a property: plain data or an accessor pair
#[derive(Debug, Clone)]
pub enum PropertySlot {
    /// Data slot holding a value
    Data {
        /// The stored value
        value: Value,
        /// Whether writes through `set` are honored
        writable: bool,
    },
    /// Accessor slot holding getter/setter callables
    Accessor {
        /// Getter invoked on reads (absent reads yield `Undefined`)
        get: Option<NativeFn>,
        /// Setter invoked on writes (absent setters drop the write)
        set: Option<NativeFn>,
    },
}

/// A property: slot payload plus shared attributes
#[derive(Debug, Clone)]
pub struct Property {
    /// Data or accessor payload
    pub slot: PropertySlot,
    /// Whether the property shows up in enumeration
    pub enumerable: bool,
    /// Whether the property may be redefined or deleted
    pub configurable: bool,
}

impl Property {
    /// Create a data property
    pub fn data(value: Value, writable: bool, enumerable: bool, configurable: bool) -> Self {
        Self {
            slot: PropertySlot::Data { value, writable },
            enumerable,
            configurable,
        }
    }

    /// Create an accessor property
    pub fn accessor(
        get: Option<NativeFn>,
        set: Option<NativeFn>,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        Self {
            slot: PropertySlot::Accessor { get, set },
            enumerable,
            configurable,
        }
    }

    /// Check if this is an accessor property
    pub fn is_accessor(&self) -> bool {
        matches!(self.slot, PropertySlot::Accessor { .. })
    }

    /// Check if this is a data property
    pub fn is_data(&self) -> bool {
        matches!(self.slot, PropertySlot::Data { .. })
    }
}

// ============================================================================
// PropertyMap
// ============================================================================

/// Insertion-ordered property table
#[derive(Debug, Default)]
struct PropertyMap {
    /// Key → property lookup
    slots: FxHashMap<PropertyKey, Property>,
    /// Keys in definition order
    order: Vec<PropertyKey>,
}

impl PropertyMap {
    fn define(&mut self, key: PropertyKey, property: Property) {
        if !self.slots.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.slots.insert(key, property);
    }

    fn remove(&mut self, key: &PropertyKey) -> Option<Property> {
        let removed = self.slots.remove(key);
        if removed.is_some() {
            self.order.retain(|k| k != key);
        }
        removed
    }
}

// ============================================================================
// ObjectRef
// ============================================================================

/// Shared handle to an object.
///
/// Cloning the handle aliases the same object; equality between handles
/// is identity (`ptr_eq`). All mutation goes through interior
/// mutability, matching the single-threaded execution model.
#[derive(Clone, Default)]
pub struct ObjectRef(Rc<RefCell<PropertyMap>>);

impl ObjectRef {
    /// Create a new empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity comparison between handles
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Define or redefine a property with explicit attributes.
    /// Last writer wins; definition order is preserved for new keys.
    pub fn define_property(&self, key: PropertyKey, property: Property) {
        self.0.borrow_mut().define(key, property);
    }

    /// Get a snapshot of the own property at `key`
    pub fn get_own_property(&self, key: &PropertyKey) -> Option<Property> {
        self.0.borrow().slots.get(key).cloned()
    }

    /// Delete the property at `key`, returning whether it existed
    pub fn delete(&self, key: &PropertyKey) -> bool {
        self.0.borrow_mut().remove(key).is_some()
    }

    /// Read the value at `key`. Accessor slots route through the getter
    /// with this object as receiver; absent keys and absent getters
    /// yield `Undefined`.
    pub fn get(&self, key: &PropertyKey) -> Value {
        // Snapshot the slot before calling out so a getter may touch
        // this same object without a borrow panic.
        let property = self.get_own_property(key);
        match property {
            Some(Property {
                slot: PropertySlot::Data { value, .. },
                ..
            }) => value,
            Some(Property {
                slot: PropertySlot::Accessor { get: Some(getter), .. },
                ..
            }) => getter.call(&Value::Object(self.clone()), &[]),
            _ => Value::Undefined,
        }
    }

    /// Write `value` at `key`. Accessor slots route through the setter
    /// with this object as receiver; non-writable data slots and absent
    /// setters drop the write silently. Absent keys are created as
    /// literal-style properties (all attributes true).
    pub fn set(&self, key: PropertyKey, value: Value) {
        let existing = self.get_own_property(&key);
        match existing {
            Some(Property {
                slot: PropertySlot::Accessor { set: setter, .. },
                ..
            }) => {
                if let Some(setter) = setter {
                    setter.call(&Value::Object(self.clone()), &[value]);
                }
            }
            Some(Property {
                slot: PropertySlot::Data { writable, .. },
                enumerable,
                configurable,
            }) => {
                if writable {
                    self.define_property(
                        key,
                        Property::data(value, writable, enumerable, configurable),
                    );
                }
            }
            None => {
                self.define_property(key, Property::data(value, true, true, true));
            }
        }
    }

    /// Get own keys in definition order
    pub fn keys(&self) -> Vec<PropertyKey> {
        self.0.borrow().order.clone()
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.0.borrow().slots.len()
    }

    /// Check if the object has no own properties
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `key` names an own property
    pub fn has(&self, key: &PropertyKey) -> bool {
        self.0.borrow().slots.contains_key(key)
    }

    /// Structural equality: same key set, same attributes, data values
    /// compared recursively, accessor callables by identity.
    pub fn deep_eq(&self, other: &ObjectRef) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let keys = self.keys();
        if keys.len() != other.len() {
            return false;
        }
        for key in &keys {
            let (Some(a), Some(b)) = (self.get_own_property(key), other.get_own_property(key))
            else {
                return false;
            };
            if a.enumerable != b.enumerable || a.configurable != b.configurable {
                return false;
            }
            let slots_equal = match (a.slot, b.slot) {
                (
                    PropertySlot::Data {
                        value: va,
                        writable: wa,
                    },
                    PropertySlot::Data {
                        value: vb,
                        writable: wb,
                    },
                ) => wa == wb && va.deep_eq(&vb),
                (
                    PropertySlot::Accessor { get: ga, set: sa },
                    PropertySlot::Accessor { get: gb, set: sb },
                ) => fn_opt_eq(&ga, &gb) && fn_opt_eq(&sa, &sb),
                _ => false,
            };
            if !slots_equal {
                return false;
            }
        }
        true
    }
}

/// Identity comparison over optional callables
fn fn_opt_eq(a: &Option<NativeFn>, b: &Option<NativeFn>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.ptr_eq(b),
        _ => false,
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shallow on purpose: object graphs may be cyclic
        let keys: Vec<String> = self.keys().iter().map(|k| k.to_string()).collect();
        f.debug_struct("ObjectRef").field("keys", &keys).finish()
    }
}

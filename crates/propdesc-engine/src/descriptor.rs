//! Stateful descriptor wrapper
//!
//! A [`Descriptor`] owns exactly one underlying record, either snapshotted
//! from an object's own property or supplied directly, plus an optional
//! back-reference to the object it came from. Construction is strict: a
//! candidate that fails classification is refused with the rejected value
//! in the error. After construction the instance is tolerant: field
//! writes on a detached instance are silently dropped rather than
//! erroring, so callers chaining assignments need no defensive checks.
//!
//! The back-reference powers the detach-and-republish behavior: applying
//! an accessor descriptor with [`Bind::Source`] rebinds its getter and
//! setter to the original holder, so the republished property keeps
//! reading and writing the object the descriptor was taken from.

use propdesc_core::{NativeFn, ObjectRef, Property, PropertyKey, PropertySlot, Value};

use crate::classify::{classify, Classification, DescriptorKind};
use crate::error::{EngineError, EngineResult};

/// Convert the own property at `key` into a plain descriptor record,
/// or `None` when no such own property exists.
///
/// Data slots serialize as `value`/`writable`, accessor slots as
/// `get`/`set` (absent callables become `Undefined`); both shapes carry
/// `enumerable`/`configurable`.
pub fn own_property_record(object: &ObjectRef, key: &PropertyKey) -> Option<ObjectRef> {
    let property = object.get_own_property(key)?;
    let record = ObjectRef::new();
    match property.slot {
        PropertySlot::Data { value, writable } => {
            record.set("value".into(), value);
            record.set("writable".into(), Value::bool(writable));
        }
        PropertySlot::Accessor { get, set } => {
            record.set("get".into(), get.map(Value::Function).unwrap_or(Value::Undefined));
            record.set("set".into(), set.map(Value::Function).unwrap_or(Value::Undefined));
        }
    }
    record.set("enumerable".into(), Value::bool(property.enumerable));
    record.set("configurable".into(), Value::bool(property.configurable));
    Some(record)
}

/// Receiver-binding policy for accessor callables on export/apply
#[derive(Debug, Clone, Default)]
pub enum Bind {
    /// Install getter/setter as-is
    #[default]
    No,
    /// Bind getter/setter to the object the descriptor was taken from
    /// (no-op for descriptors built from a raw record)
    Source,
    /// Bind getter/setter to the given object
    To(ObjectRef),
}

/// Stateful wrapper around one descriptor record
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// The wrapped record; `None` once detached
    record: Option<ObjectRef>,
    /// The object the record was extracted from, if any
    source: Option<ObjectRef>,
}

impl Descriptor {
    /// Polymorphic constructor.
    ///
    /// With an object and a valid key (string or symbol), snapshots that
    /// object's own property (as [`Descriptor::of`]); otherwise treats
    /// `value` itself as the candidate record (as
    /// [`Descriptor::from_record`]).
    pub fn new(value: &Value, key: Option<&Value>) -> EngineResult<Self> {
        match (value.as_object(), key.map(PropertyKey::from_value)) {
            (Some(object), Some(Ok(key))) => Self::of(object, &key),
            _ => Self::from_record(value),
        }
    }

    /// Wrap the own property of `object` at `key`, keeping `object` as
    /// the back-reference for accessor binding.
    pub fn of(object: &ObjectRef, key: &PropertyKey) -> EngineResult<Self> {
        let record = own_property_record(object, key).ok_or_else(|| EngineError::NotADescriptor {
            candidate: format!("missing own property '{}'", key),
        })?;
        Self::validated(record, Some(object.clone()))
    }

    /// Wrap a raw candidate record directly (no back-reference)
    pub fn from_record(value: &Value) -> EngineResult<Self> {
        match value.as_object() {
            Some(record) => Self::validated(record.clone(), None),
            None => Err(EngineError::NotADescriptor {
                candidate: render_candidate(value),
            }),
        }
    }

    /// Single construction gate: refuse anything that does not classify
    /// as a strict descriptor.
    fn validated(record: ObjectRef, source: Option<ObjectRef>) -> EngineResult<Self> {
        let candidate = Value::Object(record.clone());
        if !classify(&candidate, true).is_valid {
            return Err(EngineError::NotADescriptor {
                candidate: render_candidate(&candidate),
            });
        }
        Ok(Self {
            record: Some(record),
            source,
        })
    }

    // ========================================================================
    // State access
    // ========================================================================

    /// The live wrapped record, if still attached
    pub fn record(&self) -> Option<&ObjectRef> {
        self.record.as_ref()
    }

    /// The back-reference object, if the descriptor was taken from one
    pub fn source(&self) -> Option<&ObjectRef> {
        self.source.as_ref()
    }

    /// Remove and return the backing record, leaving the instance inert.
    /// Subsequent field writes are dropped and export/apply fail with
    /// [`EngineError::Detached`].
    pub fn detach(&mut self) -> Option<ObjectRef> {
        self.record.take()
    }

    /// Whether the backing record has been detached
    pub fn is_detached(&self) -> bool {
        self.record.is_none()
    }

    /// Classification of the current record state (strict). Detached
    /// instances classify as rejected.
    pub fn classification(&self) -> Classification {
        match &self.record {
            Some(record) => classify(&Value::Object(record.clone()), true),
            None => Classification::rejected(),
        }
    }

    /// Whether the current record is an accessor descriptor
    pub fn is_accessor(&self) -> bool {
        self.classification().is_accessor
    }

    /// Whether the current record is a data descriptor
    pub fn is_data(&self) -> bool {
        self.classification().is_data
    }

    // ========================================================================
    // Field pass-through (tolerant on detached instances)
    // ========================================================================

    fn read(&self, name: &str) -> Value {
        self.record
            .as_ref()
            .map(|record| record.get(&name.into()))
            .unwrap_or(Value::Undefined)
    }

    fn write(&self, name: &str, value: Value) {
        if let Some(record) = &self.record {
            record.set(name.into(), value);
        }
    }

    /// The `configurable` flag (absent or non-true reads as false)
    pub fn configurable(&self) -> bool {
        self.read("configurable") == Value::Bool(true)
    }

    /// The `enumerable` flag (absent or non-true reads as false)
    pub fn enumerable(&self) -> bool {
        self.read("enumerable") == Value::Bool(true)
    }

    /// The `writable` flag (absent or non-true reads as false)
    pub fn writable(&self) -> bool {
        self.read("writable") == Value::Bool(true)
    }

    /// The `value` field (absent reads as `Undefined`)
    pub fn value(&self) -> Value {
        self.read("value")
    }

    /// The `get` callable, if present and callable
    pub fn getter(&self) -> Option<NativeFn> {
        self.read("get").as_function().cloned()
    }

    /// The `set` callable, if present and callable
    pub fn setter(&self) -> Option<NativeFn> {
        self.read("set").as_function().cloned()
    }

    /// Set the `configurable` flag; dropped if detached
    pub fn set_configurable(&self, flag: bool) {
        self.write("configurable", Value::bool(flag));
    }

    /// Set the `enumerable` flag; dropped if detached
    pub fn set_enumerable(&self, flag: bool) {
        self.write("enumerable", Value::bool(flag));
    }

    /// Set the `writable` flag; dropped if detached
    pub fn set_writable(&self, flag: bool) {
        self.write("writable", Value::bool(flag));
    }

    /// Set the `value` field; dropped if detached
    pub fn set_value(&self, value: Value) {
        self.write("value", value);
    }

    /// Set or clear the `get` callable; dropped if detached
    pub fn set_getter(&self, get: Option<NativeFn>) {
        self.write("get", get.map(Value::Function).unwrap_or(Value::Undefined));
    }

    /// Set or clear the `set` callable; dropped if detached
    pub fn set_setter(&self, set: Option<NativeFn>) {
        self.write("set", set.map(Value::Function).unwrap_or(Value::Undefined));
    }

    // ========================================================================
    // Export and application
    // ========================================================================

    /// Define this descriptor at `key` on `target`, returning the target
    /// object. Fails on a non-object target, an invalid key, a detached
    /// instance, or a record that has drifted malformed since
    /// construction; partial application never happens.
    pub fn apply_to(&self, target: &Value, key: &Value, bind: Bind) -> EngineResult<ObjectRef> {
        let Some(target) = target.as_object() else {
            return Err(EngineError::InvalidTarget {
                got: target.type_name().to_string(),
            });
        };
        let key = PropertyKey::from_value(key)?;
        let property = self.to_property(&bind)?;
        target.define_property(key, property);
        Ok(target.clone())
    }

    /// Snapshot the current state as a fresh plain record (never the
    /// live backing record), applying the same binding rule as
    /// [`Descriptor::apply_to`].
    pub fn to_record(&self, bind: Bind) -> EngineResult<ObjectRef> {
        let record = self.record.as_ref().ok_or(EngineError::Detached)?;
        let snapshot = ObjectRef::new();
        for key in record.keys() {
            let mut value = record.get(&key);
            if matches!(key.as_str(), Some("get") | Some("set")) {
                if let Some(f) = value.as_function() {
                    value = Value::Function(self.rebind(f.clone(), &bind));
                }
            }
            snapshot.set(key, value);
        }
        Ok(snapshot)
    }

    /// Resolve the record into an attributed property. Lenient
    /// classification here: bare-shared-keys records apply as implicit
    /// data properties with an undefined value.
    fn to_property(&self, bind: &Bind) -> EngineResult<Property> {
        let record = self.record.as_ref().ok_or(EngineError::Detached)?;
        let candidate = Value::Object(record.clone());
        match classify(&candidate, false).kind() {
            DescriptorKind::Accessor => Ok(Property::accessor(
                self.getter().map(|g| self.rebind(g, bind)),
                self.setter().map(|s| self.rebind(s, bind)),
                self.enumerable(),
                self.configurable(),
            )),
            DescriptorKind::Data | DescriptorKind::BareBase => Ok(Property::data(
                self.value(),
                self.writable(),
                self.enumerable(),
                self.configurable(),
            )),
            _ => Err(EngineError::NotADescriptor {
                candidate: render_candidate(&candidate),
            }),
        }
    }

    fn rebind(&self, f: NativeFn, bind: &Bind) -> NativeFn {
        match bind {
            Bind::No => f,
            Bind::Source => match &self.source {
                Some(source) => f.bind(Value::Object(source.clone())),
                None => f,
            },
            Bind::To(object) => f.bind(Value::Object(object.clone())),
        }
    }
}

/// One-level rendering of a rejected candidate for error messages
fn render_candidate(value: &Value) -> String {
    match value.as_object() {
        None => format!("{} ({})", value, value.type_name()),
        Some(record) => {
            let fields: Vec<String> = record
                .keys()
                .iter()
                .map(|key| format!("{}: {}", key, record.get(key).type_name()))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
    }
}

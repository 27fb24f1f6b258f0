//! Descriptor record constructors and base-flag presets

use propdesc_core::{NativeFn, ObjectRef, Value};

/// The shared `enumerable`/`configurable` pair carried by every
/// descriptor record. Preset constructors return fresh values, so a
/// caller can never alias another caller's base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFlags {
    /// Whether the described property enumerates
    pub enumerable: bool,
    /// Whether the described property may be redefined or deleted
    pub configurable: bool,
}

impl BaseFlags {
    /// Visible and redefinable
    pub const fn flexible() -> Self {
        Self {
            enumerable: true,
            configurable: true,
        }
    }

    /// Hidden but redefinable (the conventional default)
    pub const fn enigmatic() -> Self {
        Self {
            enumerable: false,
            configurable: true,
        }
    }

    /// Hidden and locked down
    pub const fn intrinsic() -> Self {
        Self {
            enumerable: false,
            configurable: false,
        }
    }

    /// Visible but not redefinable
    pub const fn transparent() -> Self {
        Self {
            enumerable: true,
            configurable: false,
        }
    }
}

impl Default for BaseFlags {
    fn default() -> Self {
        Self::enigmatic()
    }
}

/// Build a well-formed data descriptor record.
///
/// Always succeeds; the conventional defaults are `writable: true` and
/// [`BaseFlags::enigmatic`].
pub fn data_descriptor(value: Value, writable: bool, base: BaseFlags) -> ObjectRef {
    let record = ObjectRef::new();
    record.set("value".into(), value);
    record.set("writable".into(), Value::bool(writable));
    record.set("enumerable".into(), Value::bool(base.enumerable));
    record.set("configurable".into(), Value::bool(base.configurable));
    record
}

/// Build a well-formed accessor descriptor record.
///
/// Both callables absent still yields a syntactically-accessor record
/// (both keys present, `Undefined`); whether that is useful is the
/// caller's call.
pub fn accessor_descriptor(
    get: Option<NativeFn>,
    set: Option<NativeFn>,
    base: BaseFlags,
) -> ObjectRef {
    let record = ObjectRef::new();
    record.set("get".into(), get.map(Value::Function).unwrap_or(Value::Undefined));
    record.set("set".into(), set.map(Value::Function).unwrap_or(Value::Undefined));
    record.set("enumerable".into(), Value::bool(base.enumerable));
    record.set("configurable".into(), Value::bool(base.configurable));
    record
}

//! Descriptor classification
//!
//! Decides whether an arbitrary value is usable as a property descriptor
//! record, and how confidently. Classification is total: any input
//! yields a [`Classification`], never a panic or an error, so it can be
//! used as a first-pass filter over untrusted values.
//!
//! Three key groups are recognized:
//!
//! | group    | keys                        | typing rule                 |
//! |----------|-----------------------------|-----------------------------|
//! | shared   | `configurable`, `enumerable`| undefined or strictly bool  |
//! | accessor | `get`, `set`                | undefined or callable       |
//! | data     | `value`, `writable`         | `writable` strictly bool    |
//!
//! A record carrying both accessor and data keys is malformed and is
//! never valid, whatever the strictness. A record carrying only shared
//! keys is an implicit data descriptor (value undefined) under lenient
//! classification and invalid under strict classification.

use propdesc_core::{ObjectRef, Value};

/// Keys shared by both descriptor shapes
pub const SHARED_KEYS: [&str; 2] = ["configurable", "enumerable"];

/// Keys marking an accessor descriptor
pub const ACCESSOR_KEYS: [&str; 2] = ["get", "set"];

/// Keys marking a data descriptor
pub const DATA_KEYS: [&str; 2] = ["value", "writable"];

/// The shape a candidate record resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// No recognized, well-typed key group present
    NotADescriptor,
    /// Data descriptor (`value`/`writable`)
    Data,
    /// Accessor descriptor (`get`/`set`)
    Accessor,
    /// Only shared keys present; an implicit data descriptor under
    /// lenient classification
    BareBase,
    /// Carries both data and accessor keys
    Malformed,
}

/// Full classification result for a candidate record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Fraction of own keys that are recognized and correctly typed,
    /// in `[0.0, 1.0]`. Forced to 0.0 for malformed records.
    pub confidence: f64,
    /// Resolved as an accessor descriptor
    pub is_accessor: bool,
    /// Resolved as a data descriptor (possibly implicit under lenient)
    pub is_data: bool,
    /// Syntactically coherent descriptor with at least one recognized key
    pub is_valid: bool,
    /// Shared keys present and all well-typed
    pub has_base_keys: bool,
    /// Accessor keys present and all well-typed
    pub has_accessor_keys: bool,
    /// Data keys present and all well-typed
    pub has_data_keys: bool,
}

impl Classification {
    /// Classification of anything that is not a candidate at all
    pub(crate) fn rejected() -> Self {
        Self {
            confidence: 0.0,
            is_accessor: false,
            is_data: false,
            is_valid: false,
            has_base_keys: false,
            has_accessor_keys: false,
            has_data_keys: false,
        }
    }

    /// Collapse the flags into the tagged shape
    pub fn kind(&self) -> DescriptorKind {
        if self.has_accessor_keys && self.has_data_keys {
            DescriptorKind::Malformed
        } else if self.has_accessor_keys {
            DescriptorKind::Accessor
        } else if self.has_data_keys {
            DescriptorKind::Data
        } else if self.has_base_keys {
            DescriptorKind::BareBase
        } else {
            DescriptorKind::NotADescriptor
        }
    }
}

/// Presence/typing tally for one key group
#[derive(Default)]
struct GroupStats {
    present: usize,
    typed: usize,
}

impl GroupStats {
    /// A group qualifies when at least one key is present and every
    /// present key is well-typed
    fn qualifies(&self) -> bool {
        self.present > 0 && self.typed == self.present
    }
}

fn group_stats(
    record: &ObjectRef,
    names: [&str; 2],
    well_typed: impl Fn(&Value) -> bool,
) -> GroupStats {
    let mut stats = GroupStats::default();
    for name in names {
        let key = name.into();
        if record.has(&key) {
            stats.present += 1;
            if well_typed(&record.get(&key)) {
                stats.typed += 1;
            }
        }
    }
    stats
}

/// Classify an arbitrary value as a property descriptor candidate.
///
/// `strict` controls only the bare-shared-keys case: a record with
/// `enumerable`/`configurable` and nothing else is an implicit data
/// descriptor when `strict` is false, and invalid when `strict` is true.
pub fn classify(value: &Value, strict: bool) -> Classification {
    let Some(record) = value.as_object() else {
        return Classification::rejected();
    };
    let total = record.len();
    if total == 0 {
        return Classification::rejected();
    }

    let base = group_stats(record, SHARED_KEYS, |v| v.is_undefined() || v.is_bool());
    let accessor = group_stats(record, ACCESSOR_KEYS, |v| v.is_undefined() || v.is_callable());

    // Data group: `value` accepts anything, `writable` must be boolean
    let mut data = GroupStats::default();
    let value_key = "value".into();
    if record.has(&value_key) {
        data.present += 1;
        data.typed += 1;
    }
    let writable_key = "writable".into();
    if record.has(&writable_key) {
        data.present += 1;
        if record.get(&writable_key).is_bool() {
            data.typed += 1;
        }
    }

    let recognized = base.typed + accessor.typed + data.typed;
    let mut result = Classification {
        confidence: recognized as f64 / total as f64,
        is_accessor: false,
        is_data: false,
        is_valid: false,
        has_base_keys: base.qualifies(),
        has_accessor_keys: accessor.qualifies(),
        has_data_keys: data.qualifies(),
    };

    // Accessor/data collision is never valid, whatever the strictness
    if result.has_accessor_keys && result.has_data_keys {
        result.confidence = 0.0;
        return result;
    }

    result.is_accessor = result.has_accessor_keys;
    result.is_data =
        result.has_data_keys || (!strict && result.has_base_keys && !result.has_accessor_keys);
    result.is_valid = result.is_accessor != result.is_data;
    result
}

/// Check whether `value` is a strict property descriptor record
pub fn is_descriptor(value: &Value) -> bool {
    classify(value, true).is_valid
}

/// Check whether `value` is a property descriptor record, accepting
/// bare-shared-keys records as implicit data descriptors
pub fn is_descriptor_lenient(value: &Value) -> bool {
    classify(value, false).is_valid
}

/// Check whether `value` is an accessor descriptor record.
/// Never true together with [`is_data_descriptor`] for the same value.
pub fn is_accessor_descriptor(value: &Value) -> bool {
    classify(value, true).is_accessor
}

/// Check whether `value` is a data descriptor record.
/// Never true together with [`is_accessor_descriptor`] for the same value.
pub fn is_data_descriptor(value: &Value) -> bool {
    classify(value, true).is_data
}

#[cfg(test)]
mod tests {
    use super::*;
    use propdesc_core::{NativeFn, ObjectRef};

    fn record(entries: &[(&str, Value)]) -> Value {
        let obj = ObjectRef::new();
        for (key, value) in entries {
            obj.set((*key).into(), value.clone());
        }
        Value::Object(obj)
    }

    fn getter() -> Value {
        Value::Function(NativeFn::new(|_, _| Value::number(1.0)))
    }

    #[test]
    fn test_non_object_inputs_rejected() {
        for value in [
            Value::Undefined,
            Value::Null,
            Value::bool(true),
            Value::number(4.0),
            Value::string("value"),
        ] {
            let stats = classify(&value, true);
            assert!(!stats.is_valid);
            assert_eq!(stats.confidence, 0.0);
            assert_eq!(stats.kind(), DescriptorKind::NotADescriptor);
        }
    }

    #[test]
    fn test_empty_record_rejected() {
        let stats = classify(&Value::object(), true);
        assert!(!stats.is_valid);
        assert_eq!(stats.confidence, 0.0);
    }

    #[test]
    fn test_plain_data_record() {
        let candidate = record(&[("value", Value::number(5.0)), ("writable", Value::bool(true))]);
        let stats = classify(&candidate, true);
        assert!(stats.is_valid);
        assert!(stats.is_data);
        assert!(!stats.is_accessor);
        assert_eq!(stats.confidence, 1.0);
        assert_eq!(stats.kind(), DescriptorKind::Data);
    }

    #[test]
    fn test_plain_accessor_record() {
        let candidate = record(&[("get", getter()), ("set", Value::Undefined)]);
        let stats = classify(&candidate, true);
        assert!(stats.is_valid);
        assert!(stats.is_accessor);
        assert!(!stats.is_data);
        assert_eq!(stats.confidence, 1.0);
        assert_eq!(stats.kind(), DescriptorKind::Accessor);
    }

    #[test]
    fn test_collision_is_malformed_under_both_strictness_modes() {
        let candidate = record(&[("value", Value::number(1.0)), ("get", getter())]);
        for strict in [true, false] {
            let stats = classify(&candidate, strict);
            assert!(!stats.is_valid);
            assert!(!stats.is_accessor);
            assert!(!stats.is_data);
            assert_eq!(stats.confidence, 0.0);
            assert_eq!(stats.kind(), DescriptorKind::Malformed);
        }
    }

    #[test]
    fn test_bare_base_keys_depend_on_strictness() {
        let candidate = record(&[
            ("enumerable", Value::bool(true)),
            ("configurable", Value::bool(true)),
        ]);

        let strict = classify(&candidate, true);
        assert!(!strict.is_valid);
        assert!(!strict.is_data);
        assert!(strict.has_base_keys);

        let lenient = classify(&candidate, false);
        assert!(lenient.is_valid);
        assert!(lenient.is_data);
        assert!(!lenient.is_accessor);
        assert_eq!(lenient.kind(), DescriptorKind::BareBase);
    }

    #[test]
    fn test_mistyped_flag_disqualifies_group() {
        // `enumerable: 1` poisons the shared group even though
        // `configurable` is fine
        let candidate = record(&[
            ("enumerable", Value::number(1.0)),
            ("configurable", Value::bool(true)),
            ("value", Value::number(3.0)),
        ]);
        let stats = classify(&candidate, true);
        assert!(!stats.has_base_keys);
        assert!(stats.is_valid); // data group still qualifies
        assert!(stats.confidence < 1.0);
    }

    #[test]
    fn test_mistyped_writable_disqualifies_data_group() {
        let candidate = record(&[("writable", Value::string("yes"))]);
        let stats = classify(&candidate, true);
        assert!(!stats.has_data_keys);
        assert!(!stats.is_valid);
    }

    #[test]
    fn test_non_callable_getter_disqualifies_accessor_group() {
        let candidate = record(&[("get", Value::number(1.0)), ("set", Value::Undefined)]);
        let stats = classify(&candidate, true);
        assert!(!stats.has_accessor_keys);
        assert!(!stats.is_valid);
    }

    #[test]
    fn test_confidence_penalizes_extraneous_keys() {
        let clean = record(&[("value", Value::number(5.0)), ("writable", Value::bool(true))]);
        let noisy = record(&[
            ("value", Value::number(5.0)),
            ("writable", Value::bool(true)),
            ("color", Value::string("red")),
        ]);
        let clean_stats = classify(&clean, true);
        let noisy_stats = classify(&noisy, true);
        assert!(noisy_stats.confidence < clean_stats.confidence);
        // Still a valid descriptor, just less confidently so
        assert!(noisy_stats.is_valid);
    }

    #[test]
    fn test_no_recognized_keys() {
        let candidate = record(&[("foo", Value::string("bar"))]);
        let stats = classify(&candidate, true);
        assert!(!stats.is_valid);
        assert_eq!(stats.confidence, 0.0);
        assert_eq!(stats.kind(), DescriptorKind::NotADescriptor);
    }

    #[test]
    fn test_wrapper_predicates_are_mutually_exclusive() {
        let candidates = [
            record(&[("value", Value::number(1.0))]),
            record(&[("get", getter())]),
            record(&[("value", Value::number(1.0)), ("set", getter())]),
            record(&[("enumerable", Value::bool(true))]),
            record(&[("foo", Value::Null)]),
            Value::Null,
            Value::object(),
        ];
        for candidate in &candidates {
            assert!(
                !(is_accessor_descriptor(candidate) && is_data_descriptor(candidate)),
                "accessor and data must never both hold: {:?}",
                candidate
            );
        }
    }
}

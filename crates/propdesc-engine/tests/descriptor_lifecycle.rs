//! Descriptor wrapper lifecycle tests
//!
//! Covers the stateful wrapper end to end: strict construction, the
//! record/export round-trip, application to a target object, and the
//! detach-and-republish behavior where a live accessor keeps reading its
//! original holder after being installed on another object.

use propdesc_engine::{
    data_descriptor, BaseFlags, Bind, Descriptor, EngineError, NativeFn, ObjectRef, Property,
    Value,
};

/// Build `{ _x: <initial>, get x() { return this._x } }`
fn holder_with_live_accessor(initial: f64) -> ObjectRef {
    let holder = ObjectRef::new();
    holder.set("_x".into(), Value::number(initial));
    holder.define_property(
        "x".into(),
        Property::accessor(
            Some(NativeFn::named("x", |recv, _| {
                recv.as_object()
                    .map(|o| o.get(&"_x".into()))
                    .unwrap_or(Value::Undefined)
            })),
            None,
            true,
            true,
        ),
    );
    holder
}

#[test]
fn test_round_trip_snapshot() {
    let record = data_descriptor(Value::number(5.0), true, BaseFlags::enigmatic());
    let desc = Descriptor::from_record(&Value::Object(record)).unwrap();
    let snapshot = desc.to_record(Bind::No).unwrap();

    let expected = ObjectRef::new();
    expected.set("value".into(), Value::number(5.0));
    expected.set("writable".into(), Value::bool(true));
    expected.set("enumerable".into(), Value::bool(false));
    expected.set("configurable".into(), Value::bool(true));
    assert!(snapshot.deep_eq(&expected));

    // The snapshot is fresh, not the live backing record
    assert!(!snapshot.ptr_eq(desc.record().unwrap()));
    desc.set_value(Value::number(6.0));
    assert_eq!(snapshot.get(&"value".into()), Value::number(5.0));
}

#[test]
fn test_construction_from_object_and_key() {
    let holder = ObjectRef::new();
    holder.set("answer".into(), Value::number(42.0));
    let desc = Descriptor::of(&holder, &"answer".into()).unwrap();

    assert!(desc.is_data());
    assert!(!desc.is_accessor());
    assert_eq!(desc.value(), Value::number(42.0));
    assert!(desc.writable());
    assert!(desc.source().unwrap().ptr_eq(&holder));
}

#[test]
fn test_construction_without_descriptor_keys_fails() {
    let junk = ObjectRef::new();
    junk.set("foo".into(), Value::string("bar"));
    let err = Descriptor::new(&Value::Object(junk), None).unwrap_err();
    assert!(matches!(err, EngineError::NotADescriptor { .. }));

    // Error message carries the rejected candidate for diagnostics
    assert!(err.to_string().contains("foo"));
}

#[test]
fn test_apply_installs_data_property() {
    let record = data_descriptor(Value::string("installed"), false, BaseFlags::transparent());
    let desc = Descriptor::from_record(&Value::Object(record)).unwrap();

    let target = Value::object();
    let returned = desc.apply_to(&target, &Value::string("greeting"), Bind::No).unwrap();
    assert!(returned.ptr_eq(target.as_object().unwrap()));

    let installed = returned.get_own_property(&"greeting".into()).unwrap();
    assert!(installed.is_data());
    assert!(installed.enumerable);
    assert!(!installed.configurable);
    assert_eq!(returned.get(&"greeting".into()), Value::string("installed"));

    // Non-writable: later plain writes are dropped
    returned.set("greeting".into(), Value::string("overwritten"));
    assert_eq!(returned.get(&"greeting".into()), Value::string("installed"));
}

#[test]
fn test_republished_accessor_keeps_reading_source() {
    let a = holder_with_live_accessor(1.0);
    let desc = Descriptor::of(&a, &"x".into()).unwrap();
    assert!(desc.is_accessor());

    let b = Value::object();
    desc.apply_to(&b, &Value::string("x"), Bind::Source).unwrap();
    let b = b.as_object().unwrap();

    assert_eq!(b.get(&"x".into()), Value::number(1.0));

    // The accessor still reads from `a`, not from `b`
    a.set("_x".into(), Value::number(99.0));
    assert_eq!(b.get(&"x".into()), Value::number(99.0));
    assert_eq!(b.get(&"_x".into()), Value::Undefined);
}

#[test]
fn test_unbound_accessor_reads_new_holder() {
    let a = holder_with_live_accessor(1.0);
    let desc = Descriptor::of(&a, &"x".into()).unwrap();

    let b = Value::object();
    desc.apply_to(&b, &Value::string("x"), Bind::No).unwrap();
    let b = b.as_object().unwrap();

    // Without binding, the getter sees the new receiver, which has no _x
    assert_eq!(b.get(&"x".into()), Value::Undefined);
    b.set("_x".into(), Value::number(7.0));
    assert_eq!(b.get(&"x".into()), Value::number(7.0));
}

#[test]
fn test_bind_to_explicit_receiver() {
    let a = holder_with_live_accessor(5.0);
    let other = ObjectRef::new();
    other.set("_x".into(), Value::number(123.0));

    let desc = Descriptor::of(&a, &"x".into()).unwrap();
    let target = Value::object();
    desc.apply_to(&target, &Value::string("x"), Bind::To(other)).unwrap();

    assert_eq!(
        target.as_object().unwrap().get(&"x".into()),
        Value::number(123.0)
    );
}

#[test]
fn test_exported_record_rebinds_accessors() {
    let a = holder_with_live_accessor(11.0);
    let desc = Descriptor::of(&a, &"x".into()).unwrap();

    let exported = desc.to_record(Bind::Source).unwrap();
    let getter = exported.get(&"get".into());
    let getter = getter.as_function().unwrap();
    assert!(getter.is_bound());
    // Calling with an unrelated receiver still reads `a`
    assert_eq!(getter.call(&Value::Null, &[]), Value::number(11.0));
}

#[test]
fn test_apply_precondition_failures_are_fatal_and_clean() {
    let record = data_descriptor(Value::number(1.0), true, BaseFlags::default());
    let desc = Descriptor::from_record(&Value::Object(record)).unwrap();

    for bad_target in [Value::Undefined, Value::Null, Value::number(3.0)] {
        let err = desc.apply_to(&bad_target, &Value::string("x"), Bind::No).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTarget { .. }));
    }
}

#[test]
fn test_tolerant_writes_after_detach() {
    let record = data_descriptor(Value::number(1.0), true, BaseFlags::default());
    let mut desc = Descriptor::from_record(&Value::Object(record)).unwrap();
    desc.detach();

    // Chained mutation on an inert instance: all dropped, none panic
    desc.set_value(Value::number(2.0));
    desc.set_writable(false);
    desc.set_enumerable(true);
    desc.set_configurable(false);
    desc.set_getter(Some(NativeFn::new(|_, _| Value::Undefined)));
    desc.set_setter(None);

    assert!(desc.is_detached());
    assert!(!desc.is_data());
    assert!(!desc.is_accessor());
    let err = desc.apply_to(&Value::object(), &Value::string("x"), Bind::No).unwrap_err();
    assert!(matches!(err, EngineError::Detached));
}

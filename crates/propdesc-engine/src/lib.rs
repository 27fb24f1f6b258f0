//! propdesc-engine — property descriptor classification, construction,
//! and application
//!
//! The engine answers three questions about dynamic key/value records:
//!
//! - **Is this a descriptor?** [`classify`] inspects an arbitrary
//!   [`Value`] and reports shape flags plus a confidence score;
//!   [`is_descriptor`] and friends are the boolean shortcuts.
//! - **Make me one.** [`data_descriptor`] / [`accessor_descriptor`]
//!   build well-formed records from conventional inputs, with the
//!   [`BaseFlags`] presets covering the usual enumerable/configurable
//!   combinations.
//! - **Install it.** [`Descriptor`] wraps one record (snapshotted from
//!   an object property or supplied raw), exposes tolerant field
//!   accessors, and applies or exports it — optionally rebinding
//!   accessor callables to the record's source object so a republished
//!   live accessor keeps reading its original holder.

mod build;
mod classify;
mod descriptor;
mod error;

pub use build::{accessor_descriptor, data_descriptor, BaseFlags};
pub use classify::{
    classify, is_accessor_descriptor, is_data_descriptor, is_descriptor, is_descriptor_lenient,
    Classification, DescriptorKind, ACCESSOR_KEYS, DATA_KEYS, SHARED_KEYS,
};
pub use descriptor::{own_property_record, Bind, Descriptor};
pub use error::{EngineError, EngineResult};

// Re-export the value substrate so downstream users need only one crate
pub use propdesc_core::{
    CoreError, CoreResult, NativeFn, ObjectRef, Property, PropertyKey, PropertySlot, Symbol, Value,
};

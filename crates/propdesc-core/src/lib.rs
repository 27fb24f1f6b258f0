//! propdesc-core — dynamic value and object substrate
//!
//! This crate provides the minimal host-style value model the descriptor
//! engine operates on: a tagged [`Value`] enum, identity-keyed
//! [`Symbol`]s, string-or-symbol [`PropertyKey`]s, receiver-explicit
//! native callables ([`NativeFn`]), and a shared object handle
//! ([`ObjectRef`]) whose properties carry full attributes (data or
//! accessor slot, enumerable, configurable).
//!
//! # Example
//!
//! ```ignore
//! use propdesc_core::{ObjectRef, Value};
//!
//! let point = ObjectRef::new();
//! point.set("x".into(), Value::number(1.0));
//! assert_eq!(point.get(&"x".into()), Value::number(1.0));
//! ```

#![warn(missing_docs)]

mod error;
mod function;
mod object;
mod symbol;
mod value;

pub use error::{CoreError, CoreResult};
pub use function::{NativeFn, NativeFnImpl};
pub use object::{ObjectRef, Property, PropertyKey, PropertySlot};
pub use symbol::Symbol;
pub use value::Value;

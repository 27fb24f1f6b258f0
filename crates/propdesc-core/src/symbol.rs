//! Symbol values
//!
//! Symbols are identity-keyed: two symbols are equal only if they were
//! created by the same call, regardless of description. IDs come from a
//! global counter so equality and hashing stay O(1).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique symbol ID
fn generate_symbol_id() -> u64 {
    NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// A unique symbol value, usable as a property key
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Unique symbol ID (assigned on creation)
    id: u64,
    /// Optional human-readable description
    description: Option<Rc<str>>,
}

impl Symbol {
    /// Create a new unique symbol with an optional description
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: generate_symbol_id(),
            description: description.map(Rc::from),
        }
    }

    /// Get the symbol's unique ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the symbol's description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}

//! Error types for the descriptor engine

use propdesc_core::CoreError;

/// Result type for descriptor engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Descriptor engine error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// The candidate record does not classify as a property descriptor.
    /// Carries a rendering of the rejected value for diagnostics.
    #[error("Not a valid property descriptor: {candidate}")]
    NotADescriptor {
        /// One-level rendering of the rejected candidate
        candidate: String,
    },

    /// `apply_to` was called with a non-object target
    #[error("Cannot apply descriptor to non-object target: got {got}")]
    InvalidTarget {
        /// Type name of the offending target
        got: String,
    },

    /// The instance's backing record has been detached
    #[error("Descriptor has no backing record")]
    Detached,

    /// Error bubbled up from the value substrate (e.g. an invalid key)
    #[error(transparent)]
    Core(#[from] CoreError),
}

//! Error types for the core value model

/// Result type for core value operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Core value model error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum CoreError {
    /// Type mismatch during conversion
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// A value that is not usable as a property key (strings and symbols only)
    #[error("Invalid property key: got {0}")]
    InvalidKey(String),
}

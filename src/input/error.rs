//! Input Handling Error Types
//!
//! Error handling for keycode translation, event decoding and dispatch.

use thiserror::Error;

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Input module error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Source key code has no table entry
    #[error("Unknown source keycode: {0}")]
    UnknownSourceKeycode(i32),

    /// Target key code has no table entry
    #[error("Unknown target keycode: {0}")]
    UnknownTargetKeycode(i16),

    /// Table index outside the populated range
    #[error("Keycode table index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of entries in the table
        len: usize,
    },

    /// Same source key code listed twice while building a table
    #[error("Duplicate source keycode {code} at index {index}")]
    DuplicateSourceKeycode {
        /// Offending source code
        code: i32,
        /// Position of the second occurrence
        index: usize,
    },

    /// More pairs than the table capacity
    #[error("Keycode table capacity exceeded: {count} pairs (capacity {capacity})")]
    CapacityExceeded {
        /// Number of pairs supplied
        count: usize,
        /// Fixed capacity
        capacity: usize,
    },

    /// Raw record with an event type the bridge does not know
    #[error("Unknown input event type: {0}")]
    UnknownEventType(i32),

    /// Source event action is neither down, up nor multiple
    #[error("Invalid key action: {0}")]
    InvalidKeyAction(i32),
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Lookup misses; the event can be skipped
    Translation,
    /// Malformed records from the host or bridge
    Protocol,
    /// Broken table data; a programming fault
    Table,
}

/// Classify error for logging and CLI exit handling
pub fn classify_error(error: &InputError) -> ErrorType {
    match error {
        InputError::UnknownSourceKeycode(_)
        | InputError::UnknownTargetKeycode(_)
        | InputError::IndexOutOfRange { .. } => ErrorType::Translation,

        InputError::UnknownEventType(_) | InputError::InvalidKeyAction(_) => ErrorType::Protocol,

        InputError::DuplicateSourceKeycode { .. } | InputError::CapacityExceeded { .. } => {
            ErrorType::Table
        }
    }
}

//! Error types

use thiserror::Error;

/// Simulation invariant violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// Fixed-capacity storage has no free slot left
    #[error("capacity exceeded: all {capacity} slots in use")]
    CapacityExceeded { capacity: usize },

    /// Handle points at an empty slot
    #[error("slot {index} is inactive")]
    InactiveSlot { index: usize },
}

/// Settings file errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

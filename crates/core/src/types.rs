//! Identity keys for databases and column families
//!
//! The status registry never looks inside a database or column family; it
//! only needs a stable key to attach names to and to erase by. Both keys are
//! random UUIDs assigned when the owning object is created.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a database instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DbKey(Uuid);

impl DbKey {
    /// Create a new random DbKey using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a DbKey from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Get the raw bytes of this DbKey
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for DbKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DbKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identity of a column family within a database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CfKey(Uuid);

impl CfKey {
    /// Create a new random CfKey using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a CfKey from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Get the raw bytes of this CfKey
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for CfKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CfKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

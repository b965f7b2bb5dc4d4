//! Thread status vocabulary
//!
//! These values are opaque to the status facade: it passes them through to
//! the registry unchanged. The registry stores them and reports them back in
//! [`ThreadStatus`] snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of thread being tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreadType {
    /// Background thread in the high-priority pool (flushes)
    HighPriority,
    /// Background thread in the low-priority pool (compactions)
    LowPriority,
    /// Application thread calling into the engine
    User,
}

impl ThreadType {
    /// Human-readable name used in thread listings
    pub fn name(&self) -> &'static str {
        match self {
            ThreadType::HighPriority => "High Pri",
            ThreadType::LowPriority => "Low Pri",
            ThreadType::User => "User",
        }
    }
}

impl fmt::Display for ThreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operation a thread is currently performing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperationType {
    /// No operation, or the operation is not being tracked
    #[default]
    Unknown,
    /// Compacting files of a column family
    Compaction,
    /// Flushing a memtable
    Flush,
}

impl OperationType {
    /// Human-readable name used in thread listings (empty for `Unknown`)
    pub fn name(&self) -> &'static str {
        match self {
            OperationType::Unknown => "",
            OperationType::Compaction => "Compaction",
            OperationType::Flush => "Flush",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-state within the current operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StateType {
    /// No particular state
    #[default]
    Unknown,
    /// Blocked on the database mutex
    MutexWait,
}

impl StateType {
    /// Human-readable name used in thread listings (empty for `Unknown`)
    pub fn name(&self) -> &'static str {
        match self {
            StateType::Unknown => "",
            StateType::MutexWait => "Mutex Wait",
        }
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Point-in-time snapshot of one registered thread
///
/// `db_name` and `cf_name` are empty, and the operation and state are
/// `Unknown`, when the thread is not associated with a live column family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadStatus {
    /// Registry-assigned identifier, unique for the registry's lifetime
    pub thread_id: u64,
    /// Kind of thread, if it has reported one
    pub thread_type: Option<ThreadType>,
    /// Name of the database the thread is working on
    pub db_name: String,
    /// Name of the column family the thread is working on
    pub cf_name: String,
    /// Current operation
    pub operation_type: OperationType,
    /// Current sub-state of the operation
    pub state_type: StateType,
}

impl ThreadStatus {
    /// True if the thread is associated with a known column family
    pub fn is_associated(&self) -> bool {
        !self.cf_name.is_empty()
    }
}

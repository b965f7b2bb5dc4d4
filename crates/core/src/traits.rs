//! Collaborator traits for thread status tracking
//!
//! The status facade talks to three kinds of objects it does not own:
//! - [`Env`]: the runtime environment, which may provide a status registry
//! - [`ThreadStatusUpdater`]: the process-wide registry of per-thread records
//! - [`ColumnFamilyDescriptor`] / [`DatabaseDescriptor`]: whatever the engine
//!   uses to represent column families and databases
//!
//! All registry methods take the caller's `ThreadId` explicitly so that an
//! implementation can be shared by every worker thread in the process.

use crate::options::ColumnFamilyOptions;
use crate::status::{OperationType, StateType, ThreadStatus, ThreadType};
use crate::types::{CfKey, DbKey};
use std::sync::Arc;
use std::thread::ThreadId;

/// Runtime environment that may own a thread status registry.
pub trait Env: Send + Sync {
    /// Registry that threads running in this environment report to.
    ///
    /// Returns `None` when the environment does not track thread status.
    fn thread_status_updater(&self) -> Option<Arc<dyn ThreadStatusUpdater>>;
}

/// Process-wide store of per-thread status records.
///
/// Implementations must be safe to call concurrently from many threads.
/// None of the methods can fail: status tracking is advisory.
pub trait ThreadStatusUpdater: Send + Sync {
    /// Record the kind of `thread`.
    fn set_thread_type(&self, thread: ThreadId, thread_type: ThreadType);

    /// Associate `thread` with a column family, or clear the association.
    ///
    /// While the association is `None`, operation and state updates for the
    /// thread are ignored.
    fn set_column_family_info_key(&self, thread: ThreadId, cf_key: Option<CfKey>);

    /// Record the operation `thread` is performing.
    fn set_thread_operation(&self, thread: ThreadId, operation: OperationType);

    /// Record the sub-state of the operation `thread` is performing.
    fn set_thread_state(&self, thread: ThreadId, state: StateType);

    /// Clear association, operation and state of `thread`.
    fn reset_thread_status(&self, thread: ThreadId);

    /// Drop the record of `thread`.
    fn unregister_thread(&self, thread: ThreadId);

    /// Make a column family known to the registry.
    fn new_column_family_info(&self, db_key: DbKey, db_name: &str, cf_key: CfKey, cf_name: &str);

    /// Forget a column family.
    fn erase_column_family_info(&self, cf_key: CfKey);

    /// Forget every column family of a database.
    fn erase_database_info(&self, db_key: DbKey);

    /// Snapshot of every registered thread.
    fn thread_list(&self) -> Vec<ThreadStatus>;
}

/// A column family as seen by the status facade.
pub trait ColumnFamilyDescriptor {
    /// Environment the column family's background work runs in.
    fn env(&self) -> Option<&dyn Env>;

    /// Options of the column family.
    fn options(&self) -> &ColumnFamilyOptions;

    /// Stable identity key.
    fn cf_key(&self) -> CfKey;

    /// Column family name.
    fn name(&self) -> &str;
}

/// A database as seen by the status facade.
pub trait DatabaseDescriptor {
    /// Stable identity key.
    fn db_key(&self) -> DbKey;

    /// Database name (usually its path).
    fn name(&self) -> &str;
}

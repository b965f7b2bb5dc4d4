//! Process-wide thread status registry
//!
//! Holds one record per registered thread plus a map from column family key
//! to the names reported in thread listings. Threads only ever touch their
//! own record; listings and erase calls may come from any thread.

use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::ThreadId;
use strata_core::{
    CfKey, DbKey, OperationType, StateType, ThreadStatus, ThreadStatusUpdater, ThreadType,
};
use tracing::debug;

#[derive(Debug)]
struct ThreadStatusData {
    thread_id: u64,
    thread_type: Option<ThreadType>,
    /// `None` means tracking is off for this thread
    cf_key: Option<CfKey>,
    operation: OperationType,
    state: StateType,
}

impl ThreadStatusData {
    fn new(thread_id: u64) -> Self {
        Self {
            thread_id,
            thread_type: None,
            cf_key: None,
            operation: OperationType::Unknown,
            state: StateType::Unknown,
        }
    }

    fn clear(&mut self) {
        self.cf_key = None;
        self.operation = OperationType::Unknown;
        self.state = StateType::Unknown;
    }
}

#[derive(Debug)]
struct ColumnFamilyInfo {
    db_key: DbKey,
    db_name: String,
    cf_name: String,
}

#[derive(Debug, Default)]
struct ColumnFamilyMaps {
    cf_info: HashMap<CfKey, ColumnFamilyInfo>,
    db_cfs: HashMap<DbKey, HashSet<CfKey>>,
}

/// Concurrent in-memory [`ThreadStatusUpdater`].
///
/// A thread's record is created by its first `set_thread_type` or
/// `set_column_family_info_key` call and removed by `unregister_thread`.
/// Operation and state updates are ignored while the thread has no column
/// family association.
#[derive(Debug)]
pub struct ThreadStatusRegistry {
    threads: DashMap<ThreadId, ThreadStatusData>,
    cf_maps: RwLock<ColumnFamilyMaps>,
    next_thread_id: AtomicU64,
}

impl ThreadStatusRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            threads: DashMap::new(),
            cf_maps: RwLock::new(ColumnFamilyMaps::default()),
            next_thread_id: AtomicU64::new(1),
        }
    }

    /// Number of threads with a live record.
    pub fn registered_thread_count(&self) -> usize {
        self.threads.len()
    }

    /// Number of column families known to the registry.
    pub fn column_family_count(&self) -> usize {
        self.cf_maps.read().cf_info.len()
    }

    fn with_record(&self, thread: ThreadId, f: impl FnOnce(&mut ThreadStatusData)) {
        let mut record = self.threads.entry(thread).or_insert_with(|| {
            let thread_id = self.next_thread_id.fetch_add(1, Ordering::Relaxed);
            debug!(thread_id, ?thread, "registered thread status record");
            ThreadStatusData::new(thread_id)
        });
        f(record.value_mut());
    }

    fn with_tracked_record(&self, thread: ThreadId, f: impl FnOnce(&mut ThreadStatusData)) {
        if let Some(mut record) = self.threads.get_mut(&thread) {
            if record.cf_key.is_some() {
                f(record.value_mut());
            }
        }
    }
}

impl Default for ThreadStatusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadStatusUpdater for ThreadStatusRegistry {
    fn set_thread_type(&self, thread: ThreadId, thread_type: ThreadType) {
        self.with_record(thread, |data| data.thread_type = Some(thread_type));
    }

    fn set_column_family_info_key(&self, thread: ThreadId, cf_key: Option<CfKey>) {
        self.with_record(thread, |data| match cf_key {
            Some(key) => data.cf_key = Some(key),
            None => data.clear(),
        });
    }

    fn set_thread_operation(&self, thread: ThreadId, operation: OperationType) {
        self.with_tracked_record(thread, |data| data.operation = operation);
    }

    fn set_thread_state(&self, thread: ThreadId, state: StateType) {
        self.with_tracked_record(thread, |data| data.state = state);
    }

    fn reset_thread_status(&self, thread: ThreadId) {
        if let Some(mut record) = self.threads.get_mut(&thread) {
            record.clear();
        }
    }

    fn unregister_thread(&self, thread: ThreadId) {
        if let Some((_, data)) = self.threads.remove(&thread) {
            debug!(thread_id = data.thread_id, ?thread, "unregistered thread status record");
        }
    }

    fn new_column_family_info(&self, db_key: DbKey, db_name: &str, cf_key: CfKey, cf_name: &str) {
        let mut maps = self.cf_maps.write();
        maps.cf_info.insert(
            cf_key,
            ColumnFamilyInfo {
                db_key,
                db_name: db_name.to_string(),
                cf_name: cf_name.to_string(),
            },
        );
        maps.db_cfs.entry(db_key).or_default().insert(cf_key);
        debug!(%db_key, %cf_key, db_name, cf_name, "added column family info");
    }

    fn erase_column_family_info(&self, cf_key: CfKey) {
        let mut guard = self.cf_maps.write();
        let maps = &mut *guard;
        let Some(info) = maps.cf_info.remove(&cf_key) else {
            return;
        };
        if let Some(cfs) = maps.db_cfs.get_mut(&info.db_key) {
            cfs.remove(&cf_key);
            if cfs.is_empty() {
                maps.db_cfs.remove(&info.db_key);
            }
        }
        debug!(%cf_key, cf_name = %info.cf_name, "erased column family info");
    }

    fn erase_database_info(&self, db_key: DbKey) {
        let mut maps = self.cf_maps.write();
        let Some(cfs) = maps.db_cfs.remove(&db_key) else {
            return;
        };
        for cf_key in &cfs {
            maps.cf_info.remove(cf_key);
        }
        debug!(%db_key, column_families = cfs.len(), "erased database info");
    }

    fn thread_list(&self) -> Vec<ThreadStatus> {
        let maps = self.cf_maps.read();
        let mut list: Vec<ThreadStatus> = self
            .threads
            .iter()
            .map(|entry| {
                let data = entry.value();
                match data.cf_key.and_then(|key| maps.cf_info.get(&key)) {
                    Some(info) => ThreadStatus {
                        thread_id: data.thread_id,
                        thread_type: data.thread_type,
                        db_name: info.db_name.clone(),
                        cf_name: info.cf_name.clone(),
                        operation_type: data.operation,
                        state_type: data.state,
                    },
                    None => ThreadStatus {
                        thread_id: data.thread_id,
                        thread_type: data.thread_type,
                        db_name: String::new(),
                        cf_name: String::new(),
                        operation_type: OperationType::Unknown,
                        state_type: StateType::Unknown,
                    },
                }
            })
            .collect();
        list.sort_by_key(|status| status.thread_id);
        list
    }
}

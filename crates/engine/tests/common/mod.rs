//! Shared helpers for thread status integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use strata_core::{ColumnFamilyOptions, Env, ThreadStatus, ThreadStatusUpdater};
use strata_engine::{ColumnFamilyData, StatusEnv};

/// Environment that counts how often its registry is requested.
pub struct CountingEnv {
    inner: StatusEnv,
    queries: AtomicUsize,
}

impl CountingEnv {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: StatusEnv::new(),
            queries: AtomicUsize::new(0),
        })
    }

    pub fn without_registry() -> Arc<Self> {
        Arc::new(Self {
            inner: StatusEnv::without_thread_status(),
            queries: AtomicUsize::new(0),
        })
    }

    pub fn as_env(&self) -> &dyn Env {
        self
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn thread_list(&self) -> Vec<ThreadStatus> {
        self.inner.thread_list()
    }
}

impl Env for CountingEnv {
    fn thread_status_updater(&self) -> Option<Arc<dyn ThreadStatusUpdater>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.thread_status_updater()
    }
}

/// Column family bound to `env`.
pub fn column_family(env: &Arc<CountingEnv>, name: &str, tracking: bool) -> ColumnFamilyData {
    let env: Arc<dyn Env> = env.clone();
    ColumnFamilyData::new(
        name,
        ColumnFamilyOptions::new().enable_thread_tracking(tracking),
        Some(env),
    )
}

/// Run `f` on a new thread so it starts with no binding.
pub fn on_fresh_thread<T: Send>(f: impl FnOnce() -> T + Send) -> T {
    std::thread::scope(|s| s.spawn(f).join().unwrap())
}

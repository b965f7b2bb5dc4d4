//! Per-thread status reporting facade
//!
//! Worker threads call [`ThreadStatusUtil`] unconditionally as they move
//! through their work. The first call that can reach an [`Env`] resolves the
//! environment's status registry and caches it in thread-local storage; later
//! calls forward straight to the cached registry until the thread calls
//! `unregister_thread`.
//!
//! # Failure model
//!
//! Nothing here ever returns an error or panics. Missing environment, missing
//! registry, tracking disabled on the column family, calls made before the
//! thread is bound, and calls made while thread-local storage is being torn
//! down all degrade to a silent no-op.
//!
//! # Variants
//!
//! With the `thread-status` feature (default) `ThreadStatusUtil` is
//! [`ThreadLocalStatusUtil`]. Without it, `ThreadStatusUtil` is
//! [`NoopStatusUtil`], whose methods are empty and which owns no thread-local
//! storage, so call sites compile identically either way.
//!
//! # Example
//!
//! ```ignore
//! use strata_engine::{ThreadStatusTracking, ThreadStatusUtil};
//!
//! ThreadStatusUtil::set_column_family(Some(&cfd));
//! ThreadStatusUtil::set_thread_operation(OperationType::Flush);
//! // ... flush ...
//! ThreadStatusUtil::reset_thread_status();
//! ```

use strata_core::{
    ColumnFamilyDescriptor, DatabaseDescriptor, Env, OperationType, StateType, ThreadType,
};

#[cfg(feature = "thread-status")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "thread-status")]
use std::sync::Arc;
#[cfg(feature = "thread-status")]
use std::thread::ThreadId;
#[cfg(feature = "thread-status")]
use strata_core::ThreadStatusUpdater;
#[cfg(feature = "thread-status")]
use tracing::trace;

/// Status reporting entry points shared by both build variants.
///
/// All functions act on the calling thread only.
pub trait ThreadStatusTracking {
    /// Resolve and cache the registry for the calling thread.
    ///
    /// Only the first call with a present `env` queries it; afterwards the
    /// cached result is returned until `unregister_thread`. Returns whether
    /// a registry is cached.
    fn resolve_and_cache(env: Option<&dyn Env>) -> bool;

    /// Report the kind of the calling thread.
    fn set_thread_type(env: Option<&dyn Env>, thread_type: ThreadType);

    /// Associate the calling thread with a column family.
    ///
    /// An absent descriptor, or one whose options disable thread tracking,
    /// clears the association instead, which turns later operation and state
    /// updates on this thread into no-ops.
    fn set_column_family(cfd: Option<&dyn ColumnFamilyDescriptor>);

    /// Report the current operation. No-op until the thread is bound.
    fn set_thread_operation(operation: OperationType);

    /// Report the current sub-state. No-op until the thread is bound.
    fn set_thread_state(state: StateType);

    /// Clear association, operation and state. No-op until the thread is bound.
    fn reset_thread_status();

    /// Make a column family known to the registry.
    fn new_column_family_info(db: &dyn DatabaseDescriptor, cfd: &dyn ColumnFamilyDescriptor);

    /// Forget a column family. No-op until the thread is bound.
    fn erase_column_family_info(cfd: &dyn ColumnFamilyDescriptor);

    /// Forget every column family of a database. No-op until the thread is bound.
    fn erase_database_info(db: &dyn DatabaseDescriptor);

    /// Drop the calling thread's record and its cached binding.
    ///
    /// Must be called before a tracked thread exits; there is no automatic
    /// cleanup.
    fn unregister_thread();
}

/// Facade selected by the build configuration.
#[cfg(feature = "thread-status")]
pub type ThreadStatusUtil = ThreadLocalStatusUtil;

/// Facade selected by the build configuration.
#[cfg(not(feature = "thread-status"))]
pub type ThreadStatusUtil = NoopStatusUtil;

// ============================================================================
// Tracking-enabled variant
// ============================================================================

#[cfg(feature = "thread-status")]
struct ThreadBinding {
    /// Set once the environment has been asked for its registry
    initialized: Cell<bool>,
    updater: RefCell<Option<Arc<dyn ThreadStatusUpdater>>>,
    thread: ThreadId,
}

#[cfg(feature = "thread-status")]
thread_local! {
    static BINDING: ThreadBinding = ThreadBinding {
        initialized: Cell::new(false),
        updater: RefCell::new(None),
        thread: std::thread::current().id(),
    };
}

/// Run `f` against the cached registry, if any.
///
/// No borrow of the binding is held while `f` runs, so the registry may call
/// back into the facade.
#[cfg(feature = "thread-status")]
#[inline]
fn with_updater(f: impl FnOnce(&dyn ThreadStatusUpdater, ThreadId)) {
    let bound = BINDING
        .try_with(|binding| {
            let updater = binding.updater.borrow().clone();
            updater.map(|updater| (updater, binding.thread))
        })
        .ok()
        .flatten();
    if let Some((updater, thread)) = bound {
        f(&*updater, thread);
    }
}

/// Facade that caches the registry in thread-local storage.
#[cfg(feature = "thread-status")]
pub struct ThreadLocalStatusUtil;

#[cfg(feature = "thread-status")]
impl ThreadStatusTracking for ThreadLocalStatusUtil {
    fn resolve_and_cache(env: Option<&dyn Env>) -> bool {
        BINDING
            .try_with(|binding| {
                if !binding.initialized.get() {
                    if let Some(env) = env {
                        binding.initialized.set(true);
                        let updater = env.thread_status_updater();
                        if updater.is_some() {
                            trace!(thread = ?binding.thread, "thread bound to status registry");
                        }
                        *binding.updater.borrow_mut() = updater;
                    }
                }
                binding.updater.borrow().is_some()
            })
            .unwrap_or(false)
    }

    fn set_thread_type(env: Option<&dyn Env>, thread_type: ThreadType) {
        if !Self::resolve_and_cache(env) {
            return;
        }
        with_updater(|updater, thread| updater.set_thread_type(thread, thread_type));
    }

    fn set_column_family(cfd: Option<&dyn ColumnFamilyDescriptor>) {
        if !Self::resolve_and_cache(cfd.and_then(|cfd| cfd.env())) {
            return;
        }
        let cf_key = cfd
            .filter(|cfd| cfd.options().enable_thread_tracking)
            .map(|cfd| cfd.cf_key());
        with_updater(|updater, thread| updater.set_column_family_info_key(thread, cf_key));
    }

    #[inline]
    fn set_thread_operation(operation: OperationType) {
        with_updater(|updater, thread| updater.set_thread_operation(thread, operation));
    }

    #[inline]
    fn set_thread_state(state: StateType) {
        with_updater(|updater, thread| updater.set_thread_state(thread, state));
    }

    #[inline]
    fn reset_thread_status() {
        with_updater(|updater, thread| updater.reset_thread_status(thread));
    }

    fn new_column_family_info(db: &dyn DatabaseDescriptor, cfd: &dyn ColumnFamilyDescriptor) {
        if !Self::resolve_and_cache(cfd.env()) {
            return;
        }
        with_updater(|updater, _| {
            updater.new_column_family_info(db.db_key(), db.name(), cfd.cf_key(), cfd.name())
        });
    }

    fn erase_column_family_info(cfd: &dyn ColumnFamilyDescriptor) {
        with_updater(|updater, _| updater.erase_column_family_info(cfd.cf_key()));
    }

    fn erase_database_info(db: &dyn DatabaseDescriptor) {
        with_updater(|updater, _| updater.erase_database_info(db.db_key()));
    }

    fn unregister_thread() {
        let _ = BINDING.try_with(|binding| {
            binding.initialized.set(false);
            // Release the borrow before calling out so the registry may
            // re-enter the facade.
            let updater = binding.updater.borrow_mut().take();
            if let Some(updater) = updater {
                updater.unregister_thread(binding.thread);
            }
        });
    }
}

// ============================================================================
// Tracking-disabled variant
// ============================================================================

/// Facade for builds without thread status tracking. Every call is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStatusUtil;

impl ThreadStatusTracking for NoopStatusUtil {
    #[inline(always)]
    fn resolve_and_cache(_env: Option<&dyn Env>) -> bool {
        false
    }

    #[inline(always)]
    fn set_thread_type(_env: Option<&dyn Env>, _thread_type: ThreadType) {}

    #[inline(always)]
    fn set_column_family(_cfd: Option<&dyn ColumnFamilyDescriptor>) {}

    #[inline(always)]
    fn set_thread_operation(_operation: OperationType) {}

    #[inline(always)]
    fn set_thread_state(_state: StateType) {}

    #[inline(always)]
    fn reset_thread_status() {}

    #[inline(always)]
    fn new_column_family_info(_db: &dyn DatabaseDescriptor, _cfd: &dyn ColumnFamilyDescriptor) {}

    #[inline(always)]
    fn erase_column_family_info(_cfd: &dyn ColumnFamilyDescriptor) {}

    #[inline(always)]
    fn erase_database_info(_db: &dyn DatabaseDescriptor) {}

    #[inline(always)]
    fn unregister_thread() {}
}

//! Strata thread status - per-thread status reporting for background workers
//!
//! Worker threads (flushes, compactions) report which database and column
//! family they are working on, what operation they are running and what
//! state it is in. The environment's registry collects these reports so
//! introspection tools can list what every thread is doing.
//!
//! # Quick Start
//!
//! ```ignore
//! use strata_status::*;
//!
//! let env = Arc::new(StatusEnv::new());
//! let cfd = ColumnFamilyData::new(
//!     "default",
//!     ColumnFamilyOptions::new().enable_thread_tracking(true),
//!     Some(env.clone()),
//! );
//!
//! // On the worker thread
//! ThreadStatusUtil::set_column_family(Some(&cfd));
//! ThreadStatusUtil::set_thread_operation(OperationType::Flush);
//! // ... flush ...
//! ThreadStatusUtil::reset_thread_status();
//! ThreadStatusUtil::unregister_thread();
//!
//! // Anywhere
//! for status in env.thread_list() {
//!     println!("{} {} {}", status.thread_id, status.cf_name, status.operation_type);
//! }
//! ```
//!
//! # Features
//!
//! `thread-status` (default) enables tracking. Without it every
//! [`ThreadStatusUtil`] call is an empty function.

pub use strata_core::*;
pub use strata_engine::*;

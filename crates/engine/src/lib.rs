//! Thread status tracking for the Strata engine
//!
//! This crate wires status reporting into the engine's background work:
//! - thread_status: the per-thread facade and the process-wide registry
//! - env: the runtime environment that owns the registry
//! - column_family: database and column family handles passed to the facade
//! - thread_pool: priority pools whose workers register themselves
//!
//! Build without the `thread-status` feature to compile every facade call
//! down to nothing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column_family;
pub mod env;
pub mod thread_pool;
pub mod thread_status;

pub use column_family::{ColumnFamilyData, DatabaseInfo};
pub use env::StatusEnv;
pub use thread_pool::{PoolShutdownError, PoolStats, ThreadPool};
pub use thread_status::{NoopStatusUtil, ThreadStatusRegistry, ThreadStatusTracking, ThreadStatusUtil};

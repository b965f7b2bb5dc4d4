//! Core types and traits for Strata thread status tracking
//!
//! This crate defines the vocabulary shared by the status facade and the
//! status registry:
//! - DbKey, CfKey: identity keys for databases and column families
//! - ThreadType, OperationType, StateType: values reported per thread
//! - ThreadStatus: snapshot record returned by thread listings
//! - ColumnFamilyOptions: the `enable_thread_tracking` switch and its config file
//! - Traits: Env, ThreadStatusUpdater, ColumnFamilyDescriptor, DatabaseDescriptor
//! - Error: configuration error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod options;
pub mod status;
pub mod traits;
pub mod types;

pub use error::{StatusError, StatusResult};
pub use options::{ColumnFamilyOptions, THREAD_STATUS_CONFIG_FILE};
pub use status::{OperationType, StateType, ThreadStatus, ThreadType};
pub use traits::{ColumnFamilyDescriptor, DatabaseDescriptor, Env, ThreadStatusUpdater};
pub use types::{CfKey, DbKey};

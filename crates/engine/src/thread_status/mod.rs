//! Thread status tracking
//!
//! - [`ThreadStatusUtil`]: facade called by worker threads
//! - [`ThreadStatusRegistry`]: process-wide store the facade reports to

mod registry;
mod util;

pub use registry::ThreadStatusRegistry;
#[cfg(feature = "thread-status")]
pub use util::ThreadLocalStatusUtil;
pub use util::{NoopStatusUtil, ThreadStatusTracking, ThreadStatusUtil};

//! Runtime environment owning the thread status registry

use std::sync::Arc;
use strata_core::{Env, ThreadStatus, ThreadStatusUpdater};

use crate::thread_status::ThreadStatusRegistry;

/// Environment shared by a database and its background threads.
///
/// Owns the process's [`ThreadStatusRegistry`], if thread status is
/// tracked at all. The registry lives as long as the environment or any
/// thread still bound to it.
#[derive(Debug, Clone)]
pub struct StatusEnv {
    registry: Option<Arc<ThreadStatusRegistry>>,
}

impl StatusEnv {
    /// Create an environment with its own status registry.
    pub fn new() -> Self {
        Self {
            registry: Some(Arc::new(ThreadStatusRegistry::new())),
        }
    }

    /// Create an environment that does not track thread status.
    pub fn without_thread_status() -> Self {
        Self { registry: None }
    }

    /// The registry owned by this environment.
    pub fn registry(&self) -> Option<&Arc<ThreadStatusRegistry>> {
        self.registry.as_ref()
    }

    /// Status of every thread registered with this environment.
    ///
    /// Empty when the environment does not track thread status.
    pub fn thread_list(&self) -> Vec<ThreadStatus> {
        self.registry
            .as_ref()
            .map(|registry| registry.thread_list())
            .unwrap_or_default()
    }
}

impl Default for StatusEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for StatusEnv {
    fn thread_status_updater(&self) -> Option<Arc<dyn ThreadStatusUpdater>> {
        self.registry
            .as_ref()
            .map(|registry| Arc::clone(registry) as Arc<dyn ThreadStatusUpdater>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ThreadType;

    #[test]
    fn test_default_env_has_registry() {
        let env = StatusEnv::default();
        assert!(env.registry().is_some());
        assert!(env.thread_status_updater().is_some());
        assert!(env.thread_list().is_empty());
    }

    #[test]
    fn test_env_without_thread_status() {
        let env = StatusEnv::without_thread_status();
        assert!(env.registry().is_none());
        assert!(env.thread_status_updater().is_none());
        assert!(env.thread_list().is_empty());
    }

    #[test]
    fn test_updater_is_the_owned_registry() {
        let env = StatusEnv::new();
        let updater = env.thread_status_updater().unwrap();
        updater.set_thread_type(std::thread::current().id(), ThreadType::User);

        let list = env.thread_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].thread_type, Some(ThreadType::User));
    }

    #[test]
    fn test_clones_share_registry() {
        let env = StatusEnv::new();
        let clone = env.clone();
        assert!(Arc::ptr_eq(env.registry().unwrap(), clone.registry().unwrap()));
    }
}

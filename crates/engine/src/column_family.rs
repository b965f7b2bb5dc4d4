//! Database and column family handles as seen by status tracking

use std::sync::Arc;
use strata_core::{
    CfKey, ColumnFamilyDescriptor, ColumnFamilyOptions, DatabaseDescriptor, DbKey, Env,
};

/// Identity and name of an open database.
#[derive(Debug, Clone)]
pub struct DatabaseInfo {
    key: DbKey,
    name: String,
}

impl DatabaseInfo {
    /// Create a database handle with a fresh key.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: DbKey::new(),
            name: name.into(),
        }
    }
}

impl DatabaseDescriptor for DatabaseInfo {
    fn db_key(&self) -> DbKey {
        self.key
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Column family state needed by background jobs to report their status.
pub struct ColumnFamilyData {
    key: CfKey,
    name: String,
    options: ColumnFamilyOptions,
    env: Option<Arc<dyn Env>>,
}

impl ColumnFamilyData {
    /// Create a column family handle with a fresh key.
    pub fn new(
        name: impl Into<String>,
        options: ColumnFamilyOptions,
        env: Option<Arc<dyn Env>>,
    ) -> Self {
        Self {
            key: CfKey::new(),
            name: name.into(),
            options,
            env,
        }
    }
}

impl std::fmt::Debug for ColumnFamilyData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnFamilyData")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("options", &self.options)
            .field("has_env", &self.env.is_some())
            .finish()
    }
}

impl ColumnFamilyDescriptor for ColumnFamilyData {
    fn env(&self) -> Option<&dyn Env> {
        self.env.as_deref()
    }

    fn options(&self) -> &ColumnFamilyOptions {
        &self.options
    }

    fn cf_key(&self) -> CfKey {
        self.key
    }

    fn name(&self) -> &str {
        &self.name
    }
}

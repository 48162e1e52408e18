use std::collections::HashMap;

use crate::domain::{
    errors::{DashboardError, StoreResult},
    logging::{LogComponent, get_logger},
    repositories::PreferenceStore,
};

/// `window.localStorage` adapter. The storage handle is looked up on every
/// call: private browsing modes can revoke it at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| DashboardError::StorageUnavailable("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(DashboardError::StorageUnavailable("localStorage disabled".into())),
            Err(e) => Err(DashboardError::StorageUnavailable(format!("{:?}", e))),
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .storage()?
            .get_item(key)
            .map_err(|e| DashboardError::StorageRead(format!("{:?}", e)))?;
        crate::log_trace!(LogComponent::Storage("Local"), "read {} = {:?}", key, value);
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| DashboardError::StorageWrite(format!("{:?}", e)))?;
        get_logger().debug(LogComponent::Storage("Local"), &format!("💾 {} = {}", key, value));
        Ok(())
    }
}

/// Volatile store used when the browser store is missing and in tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for InMemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// In-memory session store - process-wide keyed values, last writer wins
use crate::application::session_store::SessionStore;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_writer_wins() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("search").unwrap(), None);

        store.set("search", "shirt").unwrap();
        store.set("search", "hoodie").unwrap();
        assert_eq!(store.get("search").unwrap(), Some("hoodie".to_string()));
    }
}

// Session store trait - the persistence contract behind form syncing
//
// A simple string-keyed, string-valued, session-scoped store with get/set
// only. Callers treat failures as best-effort: storage trouble must never
// block page functionality.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

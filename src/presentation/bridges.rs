// Optional page plugins: form value persistence and navigation reset
//
// Both bridges are progressive enhancement. They subscribe to the event
// bus and may fail without consequence; the chart core never depends on
// them.
use crate::application::session_store::SessionStore;
use crate::presentation::lifecycle::{LifecycleHook, PageEvent};
use crate::presentation::page::PageState;
use std::sync::Arc;

/// Keeps synced form fields and the session store in step: restores
/// stored values into empty fields on load, persists values on change.
pub struct FormSyncBridge {
    page: PageState,
    store: Arc<dyn SessionStore>,
}

impl FormSyncBridge {
    pub fn new(page: PageState, store: Arc<dyn SessionStore>) -> Self {
        Self { page, store }
    }

    fn restore_fields(&self) -> anyhow::Result<()> {
        let mut restored = Vec::new();
        for form in self.page.forms() {
            for field in form.fields {
                // only fill fields the user hasn't touched
                if !field.value.is_empty() {
                    continue;
                }
                let Some(key) = field.sync_key else { continue };
                if let Some(stored) = self.store.get(&key)? {
                    if !stored.is_empty() {
                        restored.push((key, stored));
                    }
                }
            }
        }

        for (key, value) in restored {
            tracing::debug!("restored value for {key}");
            self.page.set_value_by_key(&key, &value);
        }
        Ok(())
    }

    fn store_field(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.page.set_value_by_key(key, value);
        self.store.set(key, value)?;
        tracing::debug!("stored value for {key}");
        Ok(())
    }
}

impl LifecycleHook for FormSyncBridge {
    fn name(&self) -> &'static str {
        "form-sync"
    }

    fn on_event(&self, event: &PageEvent) -> anyhow::Result<()> {
        match event {
            PageEvent::Ready => self.restore_fields(),
            PageEvent::FieldChanged { key, value } => self.store_field(key, value),
            PageEvent::PageShow { .. } => Ok(()),
        }
    }
}

/// Resets marked forms when the page is re-shown from cache or via
/// back/forward navigation, so stale "no change" values are not
/// resubmitted.
pub struct NavigationResetBridge {
    page: PageState,
}

impl NavigationResetBridge {
    pub fn new(page: PageState) -> Self {
        Self { page }
    }
}

impl LifecycleHook for NavigationResetBridge {
    fn name(&self) -> &'static str {
        "navigation-reset"
    }

    fn on_event(&self, event: &PageEvent) -> anyhow::Result<()> {
        if let PageEvent::PageShow {
            restored_from_cache,
            back_forward,
        } = event
        {
            if *restored_from_cache || *back_forward {
                self.page.reset_marked_forms();
            }
        }
        Ok(())
    }
}

// Headless form model for the dashboard page
use crate::infrastructure::config::FormConfig;
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: String,
    pub sync_key: Option<String>,
    pub default: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Form {
    pub name: String,
    pub reset_on_navigation: bool,
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default.clone();
        }
    }
}

/// Shared mutable form state; one instance per process, written from the
/// single request path, same single-writer discipline as the page it
/// stands in for.
#[derive(Clone, Default)]
pub struct PageState {
    forms: Arc<Mutex<Vec<Form>>>,
}

impl PageState {
    pub fn from_config(configs: &[FormConfig]) -> Self {
        let forms = configs
            .iter()
            .map(|form| Form {
                name: form.name.clone(),
                reset_on_navigation: form.reset_on_navigation,
                fields: form
                    .fields
                    .iter()
                    .map(|field| FormField {
                        name: field.name.clone(),
                        sync_key: field.sync_key.clone(),
                        default: field.default.clone(),
                        value: field.default.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self::with_forms(forms)
    }

    pub fn with_forms(forms: Vec<Form>) -> Self {
        Self {
            forms: Arc::new(Mutex::new(forms)),
        }
    }

    /// Snapshot of the current form state.
    pub fn forms(&self) -> Vec<Form> {
        self.lock().clone()
    }

    /// Set the value of every field persisted under `key`.
    pub fn set_value_by_key(&self, key: &str, value: &str) {
        for form in self.lock().iter_mut() {
            for field in &mut form.fields {
                if field.sync_key.as_deref() == Some(key) {
                    field.value = value.to_string();
                }
            }
        }
    }

    /// Reset every form marked reset-on-navigation to its defaults.
    pub fn reset_marked_forms(&self) {
        for form in self.lock().iter_mut() {
            if form.reset_on_navigation {
                form.reset();
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Form>> {
        self.forms.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

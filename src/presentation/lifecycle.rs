// Page lifecycle events and the bus fanning them out to optional plugins
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum PageEvent {
    /// Initial page load finished.
    Ready,
    /// An input value changed.
    FieldChanged { key: String, value: String },
    /// The page became visible again after a navigation.
    PageShow {
        restored_from_cache: bool,
        back_forward: bool,
    },
}

pub trait LifecycleHook: Send + Sync {
    fn name(&self) -> &'static str;
    fn on_event(&self, event: &PageEvent) -> anyhow::Result<()>;
}

/// Fans page events out to subscribed hooks. Hooks are enhancement layers:
/// a failing hook is logged and never blocks the others or the page.
#[derive(Default)]
pub struct EventBus {
    hooks: Vec<Arc<dyn LifecycleHook>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, hook: Arc<dyn LifecycleHook>) {
        self.hooks.push(hook);
    }

    pub fn publish(&self, event: &PageEvent) {
        for hook in &self.hooks {
            if let Err(e) = hook.on_event(event) {
                tracing::warn!("lifecycle hook {} failed: {e:#}", hook.name());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Failing;

    impl LifecycleHook for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }
        fn on_event(&self, _event: &PageEvent) -> anyhow::Result<()> {
            anyhow::bail!("storage unavailable")
        }
    }

    struct Counting(Arc<AtomicUsize>);

    impl LifecycleHook for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }
        fn on_event(&self, _event: &PageEvent) -> anyhow::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_failing_hook_does_not_block_others() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut bus = EventBus::new();
        bus.subscribe(Arc::new(Failing));
        bus.subscribe(Arc::new(Counting(count.clone())));

        bus.publish(&PageEvent::Ready);
        bus.publish(&PageEvent::Ready);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}

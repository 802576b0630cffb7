//! Capability-gated callback binding

use std::sync::Arc;

use crate::capabilities::HookCapabilities;
use crate::context::HookContext;
use crate::delegate::UpdateIndex;
use crate::error::SyncResult;
use crate::hooks::builtin::{MarkDestroyed, ReindexOnDestroy, ReindexOnSave, RollbackCleanup};
use crate::hooks::HookRegistry;
use crate::model::HostModel;
use crate::phase::{LifecyclePhase, Operation};

/// Decides, from a host framework's declared capabilities, which index
/// synchronization hooks get attached for a model type.
pub struct CallbackBinder;

impl CallbackBinder {
    /// Bind index synchronization hooks for one host model type.
    ///
    /// Each capability check is independent; a host declaring none of
    /// the hooks gets an empty binding, which is permitted and not an
    /// error.
    pub fn bind<M: HostModel + 'static>(
        capabilities: &HookCapabilities,
        delegate: Arc<dyn UpdateIndex<M>>,
    ) -> ModelBinding<M> {
        let registry = HookRegistry::new();

        // Delete the index entry after a rollback cancels a pending create.
        if capabilities.after_rollback {
            registry.register(Arc::new(RollbackCleanup::new(delegate.clone())));
        }

        // Update the index on instance change or destroy. The pairing is
        // deliberate: a host exposing only one of the two gets neither.
        if capabilities.after_save && capabilities.after_destroy {
            registry.register(Arc::new(ReindexOnSave::new(delegate.clone())));
            registry.register(Arc::new(ReindexOnDestroy::new(delegate.clone())));
        }

        // Supply destroy tracking for hosts that lack their own query.
        // Hosts that already track it keep their own override untouched.
        let provides_destroyed_query =
            capabilities.before_destroy && !capabilities.has_destroyed_query;
        if provides_destroyed_query {
            registry.register(Arc::new(MarkDestroyed::new()));
        }

        tracing::debug!(
            hooks = registry.count(),
            provides_destroyed_query,
            "Bound index synchronization hooks"
        );

        ModelBinding {
            registry: Arc::new(registry),
            capabilities: *capabilities,
            provides_destroyed_query,
        }
    }
}

/// The hooks bound for one host model type, plus the dispatch surface
/// the host framework adapter drives when lifecycle events fire.
pub struct ModelBinding<M> {
    registry: Arc<HookRegistry<M>>,
    capabilities: HookCapabilities,
    provides_destroyed_query: bool,
}

impl<M: HostModel> ModelBinding<M> {
    /// Get the hook registry
    pub fn registry(&self) -> Arc<HookRegistry<M>> {
        self.registry.clone()
    }

    /// The capabilities this binding was built from
    pub fn capabilities(&self) -> &HookCapabilities {
        &self.capabilities
    }

    /// Whether the binding installed the flag-backed destroyed query,
    /// i.e. the host had `before_destroy` but no query of its own
    pub fn provides_destroyed_query(&self) -> bool {
        self.provides_destroyed_query
    }

    /// Notify that a save committed
    pub fn notify_saved(&self, instance: &mut M) -> SyncResult<()> {
        self.registry
            .fire(&HookContext::new(LifecyclePhase::AfterSave), instance)
    }

    /// Notify that a destroy committed
    pub fn notify_destroyed(&self, instance: &mut M) -> SyncResult<()> {
        self.registry
            .fire(&HookContext::new(LifecyclePhase::AfterDestroy), instance)
    }

    /// Notify that a destroy is about to execute
    pub fn notify_before_destroy(&self, instance: &mut M) -> SyncResult<()> {
        self.registry
            .fire(&HookContext::new(LifecyclePhase::BeforeDestroy), instance)
    }

    /// Notify that a rollback cancelled the given operation
    pub fn notify_rollback(&self, operation: Operation, instance: &mut M) -> SyncResult<()> {
        let context =
            HookContext::new(LifecyclePhase::AfterRollback).with_rollback_of(operation);
        self.registry.fire(&context, instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::model::DestroyMarker;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Article {
        id: Option<String>,
        marker: DestroyMarker,
    }

    impl Article {
        fn saved(id: &str) -> Self {
            Self {
                id: Some(id.to_string()),
                marker: DestroyMarker::new(),
            }
        }

        fn unsaved() -> Self {
            Self {
                id: None,
                marker: DestroyMarker::new(),
            }
        }
    }

    impl HostModel for Article {
        fn record_id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn destroy_marker(&self) -> bool {
            self.marker.get()
        }

        fn set_destroy_marker(&mut self) {
            self.marker.mark();
        }
    }

    /// Records every delegate invocation as (record id, destroyed).
    struct RecordingDelegate {
        count: AtomicU32,
        calls: Mutex<Vec<(Option<String>, bool)>>,
    }

    impl RecordingDelegate {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                count: AtomicU32::new(0),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn count(&self) -> u32 {
            self.count.load(Ordering::SeqCst)
        }

        fn calls(&self) -> Vec<(Option<String>, bool)> {
            self.calls.lock().clone()
        }
    }

    impl UpdateIndex<Article> for RecordingDelegate {
        fn update_index(&self, instance: &Article) -> SyncResult<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            self.calls
                .lock()
                .push((instance.id.clone(), instance.destroyed()));
            Ok(())
        }
    }

    struct FailingDelegate;

    impl UpdateIndex<Article> for FailingDelegate {
        fn update_index(&self, _instance: &Article) -> SyncResult<()> {
            Err(SyncError::transport("connection refused"))
        }
    }

    #[test]
    fn test_no_capabilities_binds_nothing() {
        let delegate = RecordingDelegate::new();
        let binding = CallbackBinder::bind(&HookCapabilities::none(), delegate.clone());

        assert_eq!(binding.registry().count(), 0);
        assert!(!binding.provides_destroyed_query());

        // Firing events against the empty binding is a no-op
        let mut article = Article::saved("a-1");
        binding.notify_saved(&mut article).unwrap();
        binding.notify_destroyed(&mut article).unwrap();
        binding
            .notify_rollback(Operation::Create, &mut article)
            .unwrap();
        assert_eq!(delegate.count(), 0);
        assert!(!article.destroyed());
    }

    #[test]
    fn test_save_and_destroy_each_update_index_once() {
        let caps = HookCapabilities::none()
            .with_after_save(true)
            .with_after_destroy(true);
        let delegate = RecordingDelegate::new();
        let binding = CallbackBinder::bind(&caps, delegate.clone());

        let mut article = Article::saved("a-1");
        binding.notify_saved(&mut article).unwrap();
        assert_eq!(delegate.count(), 1);

        binding.notify_destroyed(&mut article).unwrap();
        assert_eq!(delegate.count(), 2);
    }

    #[test]
    fn test_save_destroy_pairing_is_all_or_nothing() {
        let delegate = RecordingDelegate::new();
        let save_only = HookCapabilities::none().with_after_save(true);
        let binding = CallbackBinder::bind(&save_only, delegate.clone());
        assert_eq!(binding.registry().count(), 0);

        let destroy_only = HookCapabilities::none().with_after_destroy(true);
        let binding = CallbackBinder::bind(&destroy_only, delegate.clone());
        assert_eq!(binding.registry().count(), 0);
    }

    #[test]
    fn test_create_rollback_without_id_is_noop() {
        let caps = HookCapabilities::none().with_after_rollback(true);
        let delegate = RecordingDelegate::new();
        let binding = CallbackBinder::bind(&caps, delegate.clone());

        let mut article = Article::unsaved();
        binding
            .notify_rollback(Operation::Create, &mut article)
            .unwrap();

        assert_eq!(delegate.count(), 0);
        assert!(!article.destroy_marker());
    }

    #[test]
    fn test_create_rollback_with_id_marks_and_updates() {
        let caps = HookCapabilities::none().with_after_rollback(true);
        let delegate = RecordingDelegate::new();
        let binding = CallbackBinder::bind(&caps, delegate.clone());

        let mut article = Article::saved("a-9");
        binding
            .notify_rollback(Operation::Create, &mut article)
            .unwrap();

        assert!(article.destroy_marker());
        assert_eq!(delegate.count(), 1);
        assert_eq!(delegate.calls(), vec![(Some("a-9".to_string()), true)]);
    }

    #[test]
    fn test_update_rollback_does_not_run_create_cleanup() {
        let caps = HookCapabilities::none().with_after_rollback(true);
        let delegate = RecordingDelegate::new();
        let binding = CallbackBinder::bind(&caps, delegate.clone());

        let mut article = Article::saved("a-9");
        binding
            .notify_rollback(Operation::Update, &mut article)
            .unwrap();

        assert_eq!(delegate.count(), 0);
        assert!(!article.destroy_marker());
    }

    #[test]
    fn test_before_destroy_installs_destroyed_query() {
        let caps = HookCapabilities::none().with_before_destroy(true);
        let delegate = RecordingDelegate::new();
        let binding = CallbackBinder::bind(&caps, delegate);

        assert!(binding.provides_destroyed_query());

        let mut article = Article::saved("a-2");
        assert!(!article.destroyed());
        binding.notify_before_destroy(&mut article).unwrap();
        assert!(article.destroyed());
    }

    #[test]
    fn test_existing_destroyed_query_is_not_shadowed() {
        // Soft-deleting host with its own destroyed tracking
        struct SoftDeleting {
            deleted: bool,
            marker: DestroyMarker,
        }

        impl HostModel for SoftDeleting {
            fn record_id(&self) -> Option<&str> {
                Some("s-1")
            }

            fn destroy_marker(&self) -> bool {
                self.marker.get()
            }

            fn set_destroy_marker(&mut self) {
                self.marker.mark();
            }

            fn destroyed(&self) -> bool {
                self.deleted
            }
        }

        struct NullDelegate;

        impl UpdateIndex<SoftDeleting> for NullDelegate {
            fn update_index(&self, _instance: &SoftDeleting) -> SyncResult<()> {
                Ok(())
            }
        }

        let caps = HookCapabilities::none()
            .with_before_destroy(true)
            .with_destroyed_query(true);
        let binding = CallbackBinder::bind(&caps, Arc::new(NullDelegate));

        assert!(!binding.provides_destroyed_query());
        assert!(!binding.registry().contains("mark_destroyed"));

        // The host's own query stays authoritative
        let mut host = SoftDeleting {
            deleted: false,
            marker: DestroyMarker::new(),
        };
        binding.notify_before_destroy(&mut host).unwrap();
        assert!(!host.destroyed());
    }

    #[test]
    fn test_delegate_errors_propagate_unchanged() {
        let caps = HookCapabilities::none()
            .with_after_save(true)
            .with_after_destroy(true);
        let binding = CallbackBinder::bind(&caps, Arc::new(FailingDelegate));

        let mut article = Article::saved("a-3");
        let result = binding.notify_saved(&mut article);
        assert_eq!(
            result,
            Err(SyncError::Transport("connection refused".to_string()))
        );
    }

    #[test]
    fn test_full_capabilities_register_expected_hooks() {
        let delegate = RecordingDelegate::new();
        let binding = CallbackBinder::bind(&HookCapabilities::full(), delegate);

        let registry = binding.registry();
        assert!(registry.contains("rollback_cleanup"));
        assert!(registry.contains("reindex_on_save"));
        assert!(registry.contains("reindex_on_destroy"));
        // Full hosts track destroyed state themselves
        assert!(!registry.contains("mark_destroyed"));
        assert_eq!(registry.count(), 3);
    }
}

//! Reindex hooks for committed saves and destroys

use std::sync::Arc;

use crate::context::HookContext;
use crate::delegate::UpdateIndex;
use crate::error::SyncResult;
use crate::hooks::traits::IndexHook;
use crate::model::HostModel;
use crate::phase::LifecyclePhase;

/// Pushes the instance to the search index after a save commits.
pub struct ReindexOnSave<M> {
    delegate: Arc<dyn UpdateIndex<M>>,
}

impl<M> ReindexOnSave<M> {
    /// Create the hook with the delegate it forwards to
    pub fn new(delegate: Arc<dyn UpdateIndex<M>>) -> Self {
        Self { delegate }
    }
}

impl<M: HostModel> IndexHook<M> for ReindexOnSave<M> {
    fn name(&self) -> &str {
        "reindex_on_save"
    }

    fn phase(&self) -> LifecyclePhase {
        LifecyclePhase::AfterSave
    }

    fn execute(&self, instance: &mut M, _context: &HookContext) -> SyncResult<()> {
        tracing::debug!(record_id = ?instance.record_id(), "Updating index after save");
        self.delegate.update_index(instance)
    }
}

/// Removes the instance's document after a destroy commits. The delegate
/// sees `destroyed()` as true and issues a deletion.
pub struct ReindexOnDestroy<M> {
    delegate: Arc<dyn UpdateIndex<M>>,
}

impl<M> ReindexOnDestroy<M> {
    /// Create the hook with the delegate it forwards to
    pub fn new(delegate: Arc<dyn UpdateIndex<M>>) -> Self {
        Self { delegate }
    }
}

impl<M: HostModel> IndexHook<M> for ReindexOnDestroy<M> {
    fn name(&self) -> &str {
        "reindex_on_destroy"
    }

    fn phase(&self) -> LifecyclePhase {
        LifecyclePhase::AfterDestroy
    }

    fn execute(&self, instance: &mut M, _context: &HookContext) -> SyncResult<()> {
        tracing::debug!(record_id = ?instance.record_id(), "Updating index after destroy");
        self.delegate.update_index(instance)
    }
}

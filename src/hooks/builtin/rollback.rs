//! Index cleanup after a rolled-back create

use std::sync::Arc;

use crate::context::HookContext;
use crate::delegate::UpdateIndex;
use crate::error::SyncResult;
use crate::hooks::traits::IndexHook;
use crate::model::HostModel;
use crate::phase::{LifecyclePhase, Operation};

/// Deletes the index entry for an instance whose creation was rolled
/// back, scoped to create rollbacks only.
///
/// An instance without a record id was never indexed, so there is
/// nothing to remove and the hook exits early. Otherwise it sets the
/// destroy marker and lets the delegate issue the deletion.
pub struct RollbackCleanup<M> {
    delegate: Arc<dyn UpdateIndex<M>>,
}

impl<M> RollbackCleanup<M> {
    /// Create the hook with the delegate it forwards to
    pub fn new(delegate: Arc<dyn UpdateIndex<M>>) -> Self {
        Self { delegate }
    }
}

impl<M: HostModel> IndexHook<M> for RollbackCleanup<M> {
    fn name(&self) -> &str {
        "rollback_cleanup"
    }

    fn phase(&self) -> LifecyclePhase {
        LifecyclePhase::AfterRollback
    }

    fn rollback_scope(&self) -> Option<Operation> {
        Some(Operation::Create)
    }

    fn execute(&self, instance: &mut M, _context: &HookContext) -> SyncResult<()> {
        if instance.record_id().is_none() {
            tracing::debug!("Instance was never indexed, skipping rollback cleanup");
            return Ok(());
        }

        instance.set_destroy_marker();
        tracing::debug!(record_id = ?instance.record_id(), "Removing index entry after create rollback");
        self.delegate.update_index(instance)
    }
}

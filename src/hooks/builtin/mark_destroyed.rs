//! Destroy tracking for hosts without their own query

use std::marker::PhantomData;

use crate::context::HookContext;
use crate::error::SyncResult;
use crate::hooks::traits::IndexHook;
use crate::model::HostModel;
use crate::phase::LifecyclePhase;

/// Sets the destroy marker before a destroy executes, so the delegate
/// running in the after-destroy phase sees `destroyed()` as true.
///
/// Only registered for hosts that lack their own destroyed tracking;
/// the flag-backed default query on [`HostModel`] then answers for them.
pub struct MarkDestroyed<M> {
    _model: PhantomData<fn(&mut M)>,
}

impl<M> MarkDestroyed<M> {
    /// Create the hook
    pub fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }
}

impl<M> Default for MarkDestroyed<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: HostModel> IndexHook<M> for MarkDestroyed<M> {
    fn name(&self) -> &str {
        "mark_destroyed"
    }

    fn phase(&self) -> LifecyclePhase {
        LifecyclePhase::BeforeDestroy
    }

    fn execute(&self, instance: &mut M, _context: &HookContext) -> SyncResult<()> {
        instance.set_destroy_marker();
        Ok(())
    }
}

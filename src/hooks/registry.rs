//! Index hook registry

use std::sync::Arc;

use parking_lot::RwLock;

use super::traits::IndexHook;
use crate::context::HookContext;
use crate::error::SyncResult;

/// Registry holding the hooks bound for one host model type.
///
/// Dispatch is synchronous: [`fire`](HookRegistry::fire) runs every
/// matching hook to completion on the caller's stack, in registration
/// order, and returns the first error unchanged.
pub struct HookRegistry<M> {
    hooks: RwLock<Vec<Arc<dyn IndexHook<M>>>>,
}

impl<M> HookRegistry<M> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            hooks: RwLock::new(Vec::new()),
        }
    }

    /// Register a hook
    pub fn register(&self, hook: Arc<dyn IndexHook<M>>) {
        self.hooks.write().push(hook);
    }

    /// Unregister a hook by name
    pub fn unregister(&self, name: &str) {
        self.hooks.write().retain(|h| h.name() != name);
    }

    /// Dispatch a lifecycle event to every hook matching its phase (and,
    /// for rollbacks, its operation scope).
    pub fn fire(&self, context: &HookContext, instance: &mut M) -> SyncResult<()> {
        let hooks = self.hooks.read();

        for hook in hooks.iter() {
            if hook.phase() != context.phase {
                continue;
            }
            if let Some(scope) = hook.rollback_scope() {
                if context.rollback_of != Some(scope) {
                    continue;
                }
            }

            tracing::debug!(
                hook = hook.name(),
                phase = %context.phase,
                rollback_of = ?context.rollback_of,
                "Dispatching index hook"
            );
            hook.execute(instance, context)?;
        }

        Ok(())
    }

    /// Whether a hook with the given name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.read().iter().any(|h| h.name() == name)
    }

    /// Get all registered hooks
    pub fn hooks(&self) -> Vec<Arc<dyn IndexHook<M>>> {
        self.hooks.read().clone()
    }

    /// Get hooks count
    pub fn count(&self) -> usize {
        self.hooks.read().len()
    }
}

impl<M> Default for HookRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

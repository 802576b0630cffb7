//! Index hook trait

use crate::context::HookContext;
use crate::error::SyncResult;
use crate::phase::{LifecyclePhase, Operation};

/// A named, synchronous action attached to one lifecycle phase of a
/// host model type.
///
/// Hooks run inline on the thread that fired the lifecycle event and in
/// registration order; an error from [`execute`](IndexHook::execute)
/// stops dispatch and surfaces to the caller unchanged.
pub trait IndexHook<M>: Send + Sync {
    /// Name of the hook, used for logging and unregistration
    fn name(&self) -> &str;

    /// The phase this hook fires in
    fn phase(&self) -> LifecyclePhase;

    /// For `AfterRollback` hooks, the cancelled operation this hook is
    /// scoped to. A rollback of any other operation skips the hook.
    fn rollback_scope(&self) -> Option<Operation> {
        None
    }

    /// Execute the hook against a host instance
    fn execute(&self, instance: &mut M, context: &HookContext) -> SyncResult<()>;
}

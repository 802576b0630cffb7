//! Dispatch context passed to index hooks

use crate::phase::{LifecyclePhase, Operation};

/// Context describing the lifecycle event being dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookContext {
    /// The phase that fired
    pub phase: LifecyclePhase,
    /// For rollback dispatch, the operation the rollback cancelled
    pub rollback_of: Option<Operation>,
}

impl HookContext {
    /// Create a context for a lifecycle phase
    pub fn new(phase: LifecyclePhase) -> Self {
        Self {
            phase,
            rollback_of: None,
        }
    }

    /// Set the operation a rollback cancelled
    pub fn with_rollback_of(mut self, operation: Operation) -> Self {
        self.rollback_of = Some(operation);
        self
    }
}

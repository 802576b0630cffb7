//! Lifecycle phase definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phases of the host persistence framework where index
/// synchronization hooks can be registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    /// After a save (create or update) has committed
    AfterSave,
    /// After a destroy has committed
    AfterDestroy,
    /// After a transaction rollback cancelled a pending operation
    AfterRollback,
    /// Before a destroy executes
    BeforeDestroy,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AfterSave => write!(f, "after_save"),
            Self::AfterDestroy => write!(f, "after_destroy"),
            Self::AfterRollback => write!(f, "after_rollback"),
            Self::BeforeDestroy => write!(f, "before_destroy"),
        }
    }
}

/// The persistence operation a rollback cancels. Rollback hooks are
/// scoped to one of these so that, e.g., cleanup for an aborted create
/// never runs when an update is rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Update,
    Destroy,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Destroy => write!(f, "destroy"),
        }
    }
}

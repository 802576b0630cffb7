//! Built-in index hooks

mod mark_destroyed;
mod reindex;
mod rollback;

pub use mark_destroyed::MarkDestroyed;
pub use reindex::{ReindexOnDestroy, ReindexOnSave};
pub use rollback::RollbackCleanup;

//! Searchsync
//!
//! Wires object-lifecycle callbacks of a host persistence framework
//! (save, destroy, rollback) to an index-update delegate that keeps the
//! corresponding document in an external search engine current.
//!
//! The host framework adapter declares its lifecycle extension points in
//! a [`HookCapabilities`] descriptor and hands [`CallbackBinder::bind`]
//! an [`UpdateIndex`] delegate; the resulting [`ModelBinding`] is driven
//! synchronously whenever the host fires a lifecycle event. Which hooks
//! get attached is purely a function of the declared capability set; a
//! host with no hooks gets an empty, valid binding.

pub mod binder;
pub mod capabilities;
pub mod context;
pub mod delegate;
pub mod error;
pub mod hooks;
pub mod model;
pub mod phase;

// Re-export commonly used types
pub use binder::{CallbackBinder, ModelBinding};
pub use capabilities::HookCapabilities;
pub use context::HookContext;
pub use delegate::UpdateIndex;
pub use error::{SyncError, SyncResult};
pub use hooks::builtin::{MarkDestroyed, ReindexOnDestroy, ReindexOnSave, RollbackCleanup};
pub use hooks::{HookRegistry, IndexHook};
pub use model::{DestroyMarker, HostModel};
pub use phase::{LifecyclePhase, Operation};

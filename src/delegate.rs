//! Update delegate contract

use crate::error::SyncResult;

/// The external collaborator that synchronizes one instance's state into
/// the search index.
///
/// Implementations inspect the instance, including its destroyed state,
/// and either upsert or delete the corresponding document. Request
/// construction, transport, and retries all live behind this trait; the
/// hooks in this crate invoke it inline and propagate whatever it
/// raises, without catching or retrying.
pub trait UpdateIndex<M>: Send + Sync {
    /// Push the instance's current state to the search index.
    fn update_index(&self, instance: &M) -> SyncResult<()>;
}

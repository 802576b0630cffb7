//! Host framework capability descriptor

use serde::{Deserialize, Serialize};

/// Declares which lifecycle extension points a host persistence
/// framework offers, evaluated once at bind time.
///
/// The adapter for a host framework builds one of these (in code or
/// from configuration) instead of the binder probing the host with
/// runtime reflection. A capability left out of a serialized form
/// defaults to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HookCapabilities {
    /// Host fires a callback after a save commits
    #[serde(default)]
    pub after_save: bool,
    /// Host fires a callback after a destroy commits
    #[serde(default)]
    pub after_destroy: bool,
    /// Host fires a callback after a transaction rollback
    #[serde(default)]
    pub after_rollback: bool,
    /// Host fires a callback before a destroy executes
    #[serde(default)]
    pub before_destroy: bool,
    /// Host already tracks destroyed state with its own query
    #[serde(default)]
    pub has_destroyed_query: bool,
}

impl HookCapabilities {
    /// A host offering no lifecycle hooks at all. Binding against this
    /// registers nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// A full-featured host: all four hooks plus its own destroyed
    /// tracking, as mature ORMs provide out of the box.
    pub fn full() -> Self {
        Self {
            after_save: true,
            after_destroy: true,
            after_rollback: true,
            before_destroy: true,
            has_destroyed_query: true,
        }
    }

    /// Set `after_save`
    pub fn with_after_save(mut self, value: bool) -> Self {
        self.after_save = value;
        self
    }

    /// Set `after_destroy`
    pub fn with_after_destroy(mut self, value: bool) -> Self {
        self.after_destroy = value;
        self
    }

    /// Set `after_rollback`
    pub fn with_after_rollback(mut self, value: bool) -> Self {
        self.after_rollback = value;
        self
    }

    /// Set `before_destroy`
    pub fn with_before_destroy(mut self, value: bool) -> Self {
        self.before_destroy = value;
        self
    }

    /// Set `has_destroyed_query`
    pub fn with_destroyed_query(mut self, value: bool) -> Self {
        self.has_destroyed_query = value;
        self
    }
}

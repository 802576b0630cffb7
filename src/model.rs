//! Host model contract

/// One-way marker recording that an instance has gone through a destroy
/// or create-rollback transition.
///
/// Embed this as a field on the host model struct; once set it stays set
/// for the lifetime of the instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DestroyMarker(bool);

impl DestroyMarker {
    /// Create an unset marker
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the marker. Idempotent; there is no way to clear it.
    pub fn mark(&mut self) {
        self.0 = true;
    }

    /// Whether the marker has been set
    pub fn get(&self) -> bool {
        self.0
    }
}

/// Contract a host model type implements so index hooks can inspect and
/// mark its instances.
///
/// This replaces dynamic injection of methods into the host class: the
/// host type opts in at compile time by implementing this trait, usually
/// by embedding a [`DestroyMarker`] field.
pub trait HostModel {
    /// Identifier assigned by the persistence layer on first successful
    /// save. `None` means the instance was never saved, and therefore
    /// never indexed.
    fn record_id(&self) -> Option<&str>;

    /// Read the destroy marker.
    fn destroy_marker(&self) -> bool;

    /// Set the destroy marker. Never cleared afterwards.
    fn set_destroy_marker(&mut self);

    /// Whether the instance's index document should be deleted rather
    /// than upserted.
    ///
    /// The default answers from the destroy marker, which is what hosts
    /// without their own destroyed tracking get. Frameworks that already
    /// track this (soft deletes, their own lifecycle state) override it,
    /// and the binder then leaves the marker machinery unregistered.
    fn destroyed(&self) -> bool {
        self.destroy_marker()
    }
}

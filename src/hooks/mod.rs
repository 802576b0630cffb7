//! Index hooks and registry

pub mod builtin;
mod registry;
mod traits;

pub use registry::HookRegistry;
pub use traits::IndexHook;

//! Browser lifecycle hooks.

#[cfg(target_arch = "wasm32")]
mod event_listener;
mod page_lifecycle;

#[cfg(target_arch = "wasm32")]
pub use event_listener::EventListenerGuard;
pub use page_lifecycle::{use_history_restore, use_warn_on_page_unload};

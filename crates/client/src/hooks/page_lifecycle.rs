//! Page unload and back/forward-cache hooks.
//!
//! Listeners are registered on first render and held in hook storage behind
//! an [`EventListenerGuard`](super::EventListenerGuard); `use_drop` releases
//! the guard, which removes the listener when the component unmounts. Desktop
//! builds have no such page events, so these hooks do nothing there.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::EventListenerGuard;

#[cfg(target_arch = "wasm32")]
const UNLOAD_WARNING: &str = "You have unsaved changes. Are you sure you want to leave?";

#[cfg(target_arch = "wasm32")]
type ListenerSlot = Rc<RefCell<Option<EventListenerGuard>>>;

#[cfg(target_arch = "wasm32")]
fn hold(result: Result<EventListenerGuard, wasm_bindgen::JsValue>, event: &str) -> ListenerSlot {
    let guard = result
        .map_err(|e| crate::log_error!("Failed to listen for {}: {:?}", event, e))
        .ok();
    Rc::new(RefCell::new(guard))
}

/// Ask the browser to confirm leaving the page while `active` is true.
pub fn use_warn_on_page_unload(active: bool) {
    let armed = use_hook(|| Rc::new(Cell::new(active)));
    armed.set(active);

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let slot = use_hook(|| {
            let armed = armed.clone();
            hold(
                EventListenerGuard::on_window("beforeunload", move |event| {
                    if !armed.get() {
                        return;
                    }
                    event.prevent_default();
                    if let Some(e) = event.dyn_ref::<web_sys::BeforeUnloadEvent>() {
                        e.set_return_value(UNLOAD_WARNING);
                    }
                }),
                "beforeunload",
            )
        });
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }
}

/// Run `on_restore` whenever the page is shown again from the back/forward
/// cache.
pub fn use_history_restore(on_restore: impl FnMut() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let mut on_restore = on_restore;
        let slot = use_hook(move || {
            hold(
                EventListenerGuard::on_window("pageshow", move |event| {
                    let persisted = event
                        .dyn_ref::<web_sys::PageTransitionEvent>()
                        .is_some_and(|e| e.persisted());
                    if persisted {
                        on_restore();
                    }
                }),
                "pageshow",
            )
        });
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = on_restore;
}

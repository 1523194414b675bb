//! Browser history integration.
//!
//! The shell is a pure consumer of navigation state: it reads the current
//! pathname, pushes history entries for in-app links, and re-renders when the
//! browser fires `popstate`. Helpers swallow JS-side failures and fall back to
//! the root path.

use wasm_bindgen::prelude::*;

pub(super) fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub(super) fn push(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
}

pub(super) fn on_popstate(mut on_change: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |_: web_sys::PopStateEvent| {
        on_change();
    }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

    let _ = window.add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref());

    // The listener lives for the page lifetime.
    cb.forget();
}

//! Browser-backed navigation service

use wasm_bindgen::{JsValue, UnwrapThrowExt};
use mandap_query::Navigator;

/// [`Navigator`] reading and driving the window location through the History API
///
/// Pushed URLs do not fire `popstate`, so the caller updates its own state
/// alongside the push.
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window().unwrap_throw().location().pathname().unwrap_throw()
    }

    fn current_query(&self) -> String {
        web_sys::window().unwrap_throw().location().search().unwrap_throw()
    }

    fn navigate(&self, url: &str) {
        let window = web_sys::window().unwrap_throw();
        let history = window.history().unwrap_throw();
        history.push_state_with_url(&JsValue::NULL, "", Some(url)).unwrap_throw();
    }
}

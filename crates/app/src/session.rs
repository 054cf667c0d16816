//! Session persistence in the browser's `localStorage`.

use api::TokenStore;
use dioxus::prelude::*;
use shared_types::SESSION_KEYS;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// `TokenStore` over `localStorage`.
///
/// Reads are served from an in-memory mirror so they stay synchronous;
/// writes update the mirror and are forwarded to the page. Call
/// [`BrowserTokenStore::hydrate`] once at startup to fill the mirror.
#[derive(Debug, Clone, Default)]
pub struct BrowserTokenStore {
    mirror: Rc<RefCell<HashMap<String, String>>>,
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

impl BrowserTokenStore {
    /// Load the session keys from `localStorage` into the mirror.
    pub async fn hydrate(&self) {
        let keys = serde_json::to_string(&SESSION_KEYS).unwrap_or_else(|_| "[]".to_string());
        let script = format!(
            r#"const out = {{}};
            for (const k of {keys}) {{
                const v = window.localStorage.getItem(k);
                if (v !== null) {{ out[k] = v; }}
            }}
            return out;"#
        );
        match document::eval(&script).join::<HashMap<String, String>>().await {
            Ok(entries) => {
                tracing::debug!(keys = entries.len(), "session hydrated");
                self.mirror.borrow_mut().extend(entries);
            }
            Err(e) => tracing::warn!(error = ?e, "could not read session from localStorage"),
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.mirror.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.mirror.borrow_mut().insert(key.to_string(), value.to_string());
        document::eval(&format!(
            "window.localStorage.setItem({}, {});",
            js_string(key),
            js_string(value)
        ));
    }

    fn remove(&self, key: &str) {
        self.mirror.borrow_mut().remove(key);
        document::eval(&format!("window.localStorage.removeItem({});", js_string(key)));
    }
}

//! Browser-side key/value storage: `localStorage` and `document.cookie`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, Window};

use crate::error::UiError;
use crate::util::{is_expired_cookie, parse_cookies};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "browser_storage_test.rs"]
mod browser_storage_test;

pub trait StorageBackend {
    fn local_get(&self, key: &str) -> Option<String>;
    fn local_set(&self, key: &str, value: &str);
    fn local_remove(&self, key: &str);

    /// The page's cookies as a `name=value; name=value` string.
    fn cookies(&self) -> String;
    /// Write one cookie in `document.cookie` assignment syntax.
    fn set_cookie(&self, raw: &str);
}

pub struct BrowserStorage {
    local: Option<web_sys::Storage>,
    document: HtmlDocument,
}

impl BrowserStorage {
    pub fn new(window: &Window, document: &Document) -> Result<Self, UiError> {
        let local = window.local_storage().ok().flatten();
        if local.is_none() {
            log::warn!("localStorage unavailable; dark mode will not persist");
        }
        let document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| UiError::NotHtmlDocument)?;
        Ok(Self { local, document })
    }
}

impl StorageBackend for BrowserStorage {
    fn local_get(&self, key: &str) -> Option<String> {
        self.local.as_ref()?.get_item(key).ok().flatten()
    }

    fn local_set(&self, key: &str, value: &str) {
        if let Some(store) = &self.local {
            let _ = store.set_item(key, value);
        }
    }

    fn local_remove(&self, key: &str) {
        if let Some(store) = &self.local {
            let _ = store.remove_item(key);
        }
    }

    fn cookies(&self) -> String {
        self.document.cookie().unwrap_or_default()
    }

    fn set_cookie(&self, raw: &str) {
        if self.document.set_cookie(raw).is_err() {
            log::warn!("cookie write rejected");
        }
    }
}

/// Storage kept in process memory. Cookie writes honour the epoch expiry
/// written by `util::expired_cookie`; other attributes are ignored.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    local: RefCell<BTreeMap<String, String>>,
    cookies: RefCell<Vec<(String, String)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookies(raw: &str) -> Self {
        let storage = Self::default();
        for (name, value) in parse_cookies(raw) {
            storage.put_cookie(name, value.unwrap_or_default());
        }
        storage
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn put_cookie(&self, name: &str, value: &str) {
        let mut cookies = self.cookies.borrow_mut();
        match cookies.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_owned(),
            None => cookies.push((name.to_owned(), value.to_owned())),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn local_get(&self, key: &str) -> Option<String> {
        self.local.borrow().get(key).cloned()
    }

    fn local_set(&self, key: &str, value: &str) {
        self.local
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn local_remove(&self, key: &str) {
        self.local.borrow_mut().remove(key);
    }

    fn cookies(&self) -> String {
        self.cookies
            .borrow()
            .iter()
            .map(|(n, v)| format!("{n}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&self, raw: &str) {
        let (pair, attributes) = raw.split_once(';').unwrap_or((raw, ""));
        let Some((name, value)) = pair.trim().split_once('=') else {
            return;
        };
        if is_expired_cookie(attributes) {
            self.cookies.borrow_mut().retain(|(n, _)| n != name);
        } else {
            self.put_cookie(name, value);
        }
    }
}

//! Browser-side behaviour for the mhrice reference pages: dark mode, cookie
//! consent and language preference, list sorting, class visibility toggles
//! and the interactive map.
//!
//! All page state lives in one [`Controller`], generic over the DOM and the
//! storage backend so the same handlers run against the browser or against
//! [`dom::MemoryDom`] / [`storage::MemoryStorage`] in native tests.

pub mod bindings;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod model;
pub mod state;
pub mod storage;
mod util;

pub use config::SiteConfig;
pub use controller::Controller;
pub use error::UiError;
pub use model::UiState;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

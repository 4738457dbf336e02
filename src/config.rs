//! Page configuration.
//!
//! Defaults reproduce the site's standard page behaviour. A page may override
//! them with JSON in the `data-mh-config` attribute of `<html>`:
//!
//! ```json
//! { "hidden_classes": ["mh-no-preset"], "initial_sorts": [{ "list": "item", "key": 2 }] }
//! ```

use serde::Deserialize;

use crate::dom::Dom;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CONFIG_ATTRIBUTE: &str = "data-mh-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Classes hidden once the page has loaded.
    pub hidden_classes: Vec<String>,
    /// Lists sorted once the page has loaded.
    pub initial_sorts: Vec<InitialSort>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InitialSort {
    pub list: String,
    pub key: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hidden_classes: ["mh-ride-cond", "mh-invalid-meat", "mh-invalid-part", "mh-no-preset"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            initial_sorts: ["monster", "item", "armor"]
                .into_iter()
                .map(|list| InitialSort {
                    list: list.to_owned(),
                    key: 1,
                })
                .collect(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the override attribute; malformed JSON keeps the defaults.
    pub fn from_page<D: Dom>(dom: &D) -> Self {
        let Some(raw) = dom.root().and_then(|root| dom.attribute(&root, CONFIG_ATTRIBUTE)) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed {CONFIG_ATTRIBUTE}: {e}");
                Self::default()
            }
        }
    }
}

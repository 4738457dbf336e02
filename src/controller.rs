use log::info;

use crate::config::SiteConfig;
use crate::dom::{Dom, ElementKey, Registry};
use crate::model::UiState;
use crate::storage::StorageBackend;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Owns the page state and applies every user action to the DOM.
/// Handlers for each page feature live in `components`.
pub struct Controller<D: Dom, S: StorageBackend> {
    pub(crate) dom: D,
    pub(crate) storage: S,
    pub(crate) registry: Registry<D::Node>,
    pub(crate) state: UiState,
    pub(crate) config: SiteConfig,
}

impl<D: Dom, S: StorageBackend> Controller<D, S> {
    pub fn new(dom: D, storage: S) -> Self {
        let config = SiteConfig::from_page(&dom);
        Self::with_config(dom, storage, config)
    }

    pub fn with_config(dom: D, storage: S, config: SiteConfig) -> Self {
        let registry = Registry::build(&dom);
        Self {
            dom,
            storage,
            registry,
            state: UiState::default(),
            config,
        }
    }

    /// Page `load`: hydrate preferences, pick the language, apply default
    /// hides and initial sorts.
    pub fn on_load(&mut self) {
        self.registry = Registry::build(&self.dom);
        let prefs = self.load_preferences();
        self.switch_language();
        for class in self.config.hidden_classes.clone() {
            self.hide_class(&class);
        }
        for sort in self.config.initial_sorts.clone() {
            self.change_sort(&sort.list, sort.key);
        }
        info!(
            "page ready: language {}, consent {}, {} map layers",
            prefs.language.get(),
            prefs.consent,
            self.registry.layer_count()
        );
    }

    /// Resolve a page element through the registry cache.
    pub fn element(&mut self, key: &ElementKey) -> Option<D::Node> {
        self.registry.get(&self.dom, key)
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

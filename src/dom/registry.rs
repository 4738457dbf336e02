// Typed element ids for the page markup, resolved once and cached

use std::collections::HashMap;

use log::debug;

use super::Dom;
use crate::state::MapFilter;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKey {
    DarkModeToggle,
    CookieYes,
    CookieNo,
    NavbarBurger,
    NavbarMenu,
    Map,
    ScaleUp,
    ScaleDown,
    MapLayer(usize),
    MapFilter(MapFilter),
    MapExplain(String),
    MapIcon(String),
    SortList(String),
    SortCombo(String),
}

pub const SORT_COMBO_PREFIX: &str = "scombo-";

impl ElementKey {
    /// Elements the page is expected to carry at load.
    pub const FIXED: [ElementKey; 8] = [
        ElementKey::DarkModeToggle,
        ElementKey::CookieYes,
        ElementKey::CookieNo,
        ElementKey::NavbarBurger,
        ElementKey::NavbarMenu,
        ElementKey::Map,
        ElementKey::ScaleUp,
        ElementKey::ScaleDown,
    ];

    pub fn id(&self) -> String {
        match self {
            ElementKey::DarkModeToggle => "dark-mode-toggle".to_owned(),
            ElementKey::CookieYes => "cookie-yes".to_owned(),
            ElementKey::CookieNo => "cookie-no".to_owned(),
            ElementKey::NavbarBurger => "navbarBurger".to_owned(),
            ElementKey::NavbarMenu => "navbarMenu".to_owned(),
            ElementKey::Map => "mh-map".to_owned(),
            ElementKey::ScaleUp => "button-scale-up".to_owned(),
            ElementKey::ScaleDown => "button-scale-down".to_owned(),
            ElementKey::MapLayer(i) => format!("mh-map-layer-{i}"),
            ElementKey::MapFilter(f) => format!("mh-map-filter-{}", f.name()),
            ElementKey::MapExplain(id) => format!("mh-map-explain-{id}"),
            ElementKey::MapIcon(id) => format!("mh-map-icon-{id}"),
            ElementKey::SortList(name) => format!("slist-{name}"),
            ElementKey::SortCombo(name) => format!("{SORT_COMBO_PREFIX}{name}"),
        }
    }
}

/// Cache of resolved elements. Only hits are cached, so elements added
/// after the build are still found on first use.
#[derive(Debug)]
pub struct Registry<N> {
    elements: HashMap<ElementKey, N>,
    layer_count: usize,
}

impl<N> Default for Registry<N> {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            layer_count: 0,
        }
    }
}

impl<N: Clone> Registry<N> {
    pub fn build<D: Dom<Node = N>>(dom: &D) -> Self {
        let mut registry = Self::default();
        let mut missing = Vec::new();
        for key in ElementKey::FIXED {
            if registry.get(dom, &key).is_none() {
                missing.push(key.id());
            }
        }
        for filter in MapFilter::ALL {
            registry.get(dom, &ElementKey::MapFilter(filter));
        }
        // Layers are numbered contiguously from zero; the first gap ends the set.
        loop {
            let key = ElementKey::MapLayer(registry.layer_count);
            if registry.get(dom, &key).is_none() {
                break;
            }
            registry.layer_count += 1;
        }
        if !missing.is_empty() {
            debug!("page has no element for: {}", missing.join(", "));
        }
        debug!(
            "registry built: {} elements, {} map layers",
            registry.elements.len(),
            registry.layer_count
        );
        registry
    }

    pub fn get<D: Dom<Node = N>>(&mut self, dom: &D, key: &ElementKey) -> Option<N> {
        if let Some(node) = self.elements.get(key) {
            return Some(node.clone());
        }
        let node = dom.by_id(&key.id())?;
        self.elements.insert(key.clone(), node.clone());
        Some(node)
    }

    /// Point `key` at a node that replaced the cached one.
    pub fn update(&mut self, key: ElementKey, node: N) {
        self.elements.insert(key, node);
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }
}

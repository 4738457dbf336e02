// Map widget: zoom buttons, layer switch, pin filter, explanation panel

use log::debug;

use crate::controller::Controller;
use crate::dom::{Dom, ElementKey};
use crate::state::map::next_layer;
use crate::state::visibility::HIDDEN_CLASS;
use crate::state::{ExplainPanel, MapFilter};
use crate::storage::StorageBackend;

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

pub const PIN_CLASS: &str = "mh-map-pop";
pub const FILTER_SELECTED_CLASS: &str = "is-primary";
pub const ICON_SELECTED_CLASS: &str = "mh-map-select";

impl<D: Dom, S: StorageBackend> Controller<D, S> {
    pub fn scale_up_map(&mut self) {
        if !self.state.map.scale.step_up() {
            return;
        }
        self.set_button_disabled(ElementKey::ScaleDown, false);
        if self.state.map.scale.at_max() {
            self.set_button_disabled(ElementKey::ScaleUp, true);
        }
        self.update_map_scale();
    }

    pub fn scale_down_map(&mut self) {
        if !self.state.map.scale.step_down() {
            return;
        }
        self.set_button_disabled(ElementKey::ScaleUp, false);
        if self.state.map.scale.at_min() {
            self.set_button_disabled(ElementKey::ScaleDown, true);
        }
        self.update_map_scale();
    }

    fn set_button_disabled(&mut self, key: ElementKey, disabled: bool) {
        if let Some(button) = self.registry.get(&self.dom, &key) {
            self.dom.set_disabled(&button, disabled);
        }
    }

    fn update_map_scale(&mut self) {
        let Some(map) = self.registry.get(&self.dom, &ElementKey::Map) else {
            return;
        };
        let size = format!("{}%", self.state.map.scale.percent());
        self.dom.set_style(&map, "width", &size);
        self.dom.set_style(&map, "padding-top", &size);
    }

    /// Hide the current layer and show the next, wrapping to layer 0.
    pub fn switch_map_layer(&mut self) {
        let count = self.registry.layer_count();
        if count == 0 {
            return;
        }
        let prev = self.state.map.layer;
        let next = next_layer(prev, count);
        self.state.map.layer = next;
        if let Some(layer) = self.registry.get(&self.dom, &ElementKey::MapLayer(prev)) {
            self.dom.add_class(&layer, HIDDEN_CLASS);
        }
        if let Some(layer) = self.registry.get(&self.dom, &ElementKey::MapLayer(next)) {
            self.dom.remove_class(&layer, HIDDEN_CLASS);
        }
    }

    /// Show only the pins the filter accepts and highlight its button.
    pub fn change_map_filter(&mut self, name: &str) {
        let Some(filter) = MapFilter::parse(name) else {
            debug!("unknown map filter {name:?}");
            return;
        };
        for pin in self.dom.by_class(PIN_CLASS) {
            let shown = filter.accepts(|c| self.dom.has_class(&pin, c));
            self.dom.set_class(&pin, HIDDEN_CLASS, !shown);
        }

        let prev = self.state.map.filter;
        if let Some(button) = self.registry.get(&self.dom, &ElementKey::MapFilter(prev)) {
            self.dom.remove_class(&button, FILTER_SELECTED_CLASS);
        }
        self.state.map.filter = filter;
        if let Some(button) = self.registry.get(&self.dom, &ElementKey::MapFilter(filter)) {
            self.dom.add_class(&button, FILTER_SELECTED_CLASS);
        }
    }

    /// Swap the explanation panel and move the icon highlight to `id`.
    pub fn show_map_explain(&mut self, id: &str) {
        let prev = std::mem::replace(&mut self.state.map.explain, ExplainPanel::from_id(id));
        if let Some(panel) = self
            .registry
            .get(&self.dom, &ElementKey::MapExplain(prev.id().to_owned()))
        {
            self.dom.add_class(&panel, HIDDEN_CLASS);
        }
        if let ExplainPanel::Pin(prev_id) = &prev {
            if let Some(icon) = self.registry.get(&self.dom, &ElementKey::MapIcon(prev_id.clone())) {
                self.dom.remove_class(&icon, ICON_SELECTED_CLASS);
            }
        }

        if let Some(panel) = self
            .registry
            .get(&self.dom, &ElementKey::MapExplain(id.to_owned()))
        {
            self.dom.remove_class(&panel, HIDDEN_CLASS);
        }
        if let Some(icon) = self.registry.get(&self.dom, &ElementKey::MapIcon(id.to_owned())) {
            self.dom.add_class(&icon, ICON_SELECTED_CLASS);
        }
    }
}

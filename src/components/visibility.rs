use crate::controller::Controller;
use crate::dom::Dom;
use crate::state::visibility::HIDDEN_CLASS;
use crate::storage::StorageBackend;

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

impl<D: Dom, S: StorageBackend> Controller<D, S> {
    pub fn hide_class(&mut self, class: &str) {
        self.state.hidden.hide(class);
        self.refresh_visibility(class);
    }

    pub fn show_class(&mut self, class: &str) {
        self.state.hidden.show(class);
        self.refresh_visibility(class);
    }

    /// Re-evaluate every element carrying `class` against the whole hidden set.
    fn refresh_visibility(&self, class: &str) {
        for element in self.dom.by_class(class) {
            let hidden = self
                .state
                .hidden
                .suppresses(|c| self.dom.has_class(&element, c));
            self.dom.set_class(&element, HIDDEN_CLASS, hidden);
        }
    }

    /// Checkbox handler: checked shows `show` and hides `hide`, unchecked does the reverse.
    pub fn on_check_display(&mut self, checked: bool, show: &str, hide: Option<&str>) {
        if checked {
            self.show_class(show);
            if let Some(hide) = hide {
                self.hide_class(hide);
            }
        } else {
            self.hide_class(show);
            if let Some(hide) = hide {
                self.show_class(hide);
            }
        }
    }
}

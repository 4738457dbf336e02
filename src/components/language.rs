use log::debug;

use crate::controller::Controller;
use crate::dom::Dom;
use crate::state::LanguageIndex;
use crate::storage::StorageBackend;

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

pub const MENU_SELECTED_CLASS: &str = "has-text-weight-bold";

impl<D: Dom, S: StorageBackend> Controller<D, S> {
    /// Menu handler. Out-of-range indices are ignored.
    pub fn select_language(&mut self, index: usize) {
        if self.set_language(index) {
            self.switch_language();
        }
    }

    /// Show exactly the current language's content and bold its menu entry.
    pub fn switch_language(&mut self) {
        let current = self.state.prefs.language;
        for language in LanguageIndex::all() {
            let selected = language == current;
            let class = language.content_class();
            if selected {
                self.show_class(&class);
            } else {
                self.hide_class(&class);
            }
            for entry in self.dom.by_class(&language.menu_class()) {
                self.dom.set_class(&entry, MENU_SELECTED_CLASS, selected);
            }
        }
        debug!("language switched to {}", current.get());
    }
}

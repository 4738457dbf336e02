use crate::controller::Controller;
use crate::dom::{Dom, ElementKey};
use crate::storage::StorageBackend;

pub const NAVBAR_ACTIVE_CLASS: &str = "is-active";

impl<D: Dom, S: StorageBackend> Controller<D, S> {
    /// Burger button handler for narrow screens.
    pub fn toggle_navbar_menu(&mut self) {
        self.state.navbar_open = !self.state.navbar_open;
        let open = self.state.navbar_open;
        for key in [ElementKey::NavbarBurger, ElementKey::NavbarMenu] {
            if let Some(element) = self.registry.get(&self.dom, &key) {
                self.dom.set_class(&element, NAVBAR_ACTIVE_CLASS, open);
            }
        }
    }
}

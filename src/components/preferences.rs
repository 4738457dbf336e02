// Dark mode, cookie consent and the persisted language choice

use log::{debug, info};

use crate::controller::Controller;
use crate::dom::{Dom, ElementKey};
use crate::state::LanguageIndex;
use crate::state::preferences::{
    CONSENT_COOKIE, CONSENT_GRANTED, DARK_MODE_ENABLED, DARK_MODE_KEY, LANGUAGE_COOKIE,
    Preferences, dark_mode_enabled,
};
use crate::storage::StorageBackend;
use crate::util::{expired_cookie, parse_cookies, site_cookie};

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

pub const DARK_MODE_CLASS: &str = "darkmode";

impl<D: Dom, S: StorageBackend> Controller<D, S> {
    /// Read consent, language and dark mode from storage and sync the consent radios.
    pub fn load_preferences(&mut self) -> Preferences {
        let dark_flag = self.storage.local_get(DARK_MODE_KEY);
        let prefs = Preferences::from_sources(&self.storage.cookies(), dark_flag.as_deref());
        self.state.prefs = prefs;

        let radio = if prefs.consent {
            ElementKey::CookieYes
        } else {
            ElementKey::CookieNo
        };
        if let Some(input) = self.registry.get(&self.dom, &radio) {
            self.dom.set_checked(&input, true);
        }
        prefs
    }

    /// Apply the stored dark mode flag; runs before the page finishes loading.
    pub fn apply_stored_dark_mode(&mut self) {
        if dark_mode_enabled(self.storage.local_get(DARK_MODE_KEY).as_deref()) {
            self.set_dark_mode(true);
        }
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        if let Some(root) = self.dom.root() {
            self.dom.set_class(&root, DARK_MODE_CLASS, enabled);
        }
        if enabled {
            self.storage.local_set(DARK_MODE_KEY, DARK_MODE_ENABLED);
        } else {
            self.storage.local_remove(DARK_MODE_KEY);
        }
        self.state.prefs.dark_mode = enabled;
    }

    /// Flip dark mode relative to the stored flag rather than the in-memory one.
    pub fn toggle_dark_mode(&mut self) {
        let stored = dark_mode_enabled(self.storage.local_get(DARK_MODE_KEY).as_deref());
        self.set_dark_mode(!stored);
    }

    /// Returns false and leaves the index unchanged when `index` is out of range.
    pub fn set_language(&mut self, index: usize) -> bool {
        let Some(language) = LanguageIndex::new(index) else {
            debug!("ignoring language index {index}");
            return false;
        };
        self.state.prefs.language = language;
        if self.state.prefs.consent {
            self.storage
                .set_cookie(&site_cookie(LANGUAGE_COOKIE, &language.get().to_string()));
        }
        true
    }

    pub fn set_consent(&mut self, granted: bool) {
        self.state.prefs.consent = granted;
        if granted {
            self.storage
                .set_cookie(&site_cookie(CONSENT_COOKIE, CONSENT_GRANTED));
        } else {
            self.delete_all_cookies();
        }
        info!("cookie consent {}", if granted { "granted" } else { "revoked" });
    }

    // Deletes every cookie the page can see, not only ours.
    fn delete_all_cookies(&mut self) {
        let cookies = self.storage.cookies();
        for (name, _) in parse_cookies(&cookies) {
            self.storage.set_cookie(&expired_cookie(name));
        }
    }
}

// Preference state hydrated from cookies and local storage

use crate::util::parse_cookies;

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

pub const LANGUAGE_COUNT: usize = 32;
pub const DEFAULT_LANGUAGE: usize = 1;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_ENABLED: &str = "enabled";

pub const CONSENT_COOKIE: &str = "consent";
pub const CONSENT_GRANTED: &str = "yes";
pub const LANGUAGE_COOKIE: &str = "language";

/// Index of a site language, always in `0..LANGUAGE_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageIndex(usize);

impl LanguageIndex {
    pub fn new(index: usize) -> Option<Self> {
        (index < LANGUAGE_COUNT).then_some(Self(index))
    }

    /// Parse a stored value, falling back to the default language.
    pub fn parse_or_default(raw: &str) -> Self {
        // Strict: a value with trailing junk such as "3abc" is not language 3.
        raw.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..LANGUAGE_COUNT).map(Self)
    }

    /// Class carried by content written in this language.
    pub fn content_class(self) -> String {
        format!("mh-lang-{}", self.0)
    }

    /// Class carried by the language menu entry.
    pub fn menu_class(self) -> String {
        format!("mh-lang-menu-{}", self.0)
    }
}

impl Default for LanguageIndex {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: LanguageIndex,
    /// User opted in to cookie storage of preferences.
    pub consent: bool,
}

impl Preferences {
    /// Build preferences from a `document.cookie` string and the stored dark mode flag.
    pub fn from_sources(cookies: &str, dark_flag: Option<&str>) -> Self {
        let mut prefs = Self {
            dark_mode: dark_mode_enabled(dark_flag),
            ..Self::default()
        };
        for (name, value) in parse_cookies(cookies) {
            let Some(value) = value else { continue };
            match name {
                CONSENT_COOKIE if value == CONSENT_GRANTED => prefs.consent = true,
                LANGUAGE_COOKIE => prefs.language = LanguageIndex::parse_or_default(value),
                _ => {}
            }
        }
        prefs
    }
}

pub fn dark_mode_enabled(flag: Option<&str>) -> bool {
    flag == Some(DARK_MODE_ENABLED)
}

//! Page session state owned by the controller.
//! Everything here is transient except the preferences, which are mirrored
//! into cookies and local storage as they change.

use crate::state::{HiddenClasses, MapViewState, Preferences};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub prefs: Preferences,
    pub hidden: HiddenClasses,
    pub map: MapViewState,
    /// Burger menu expanded on narrow screens.
    pub navbar_open: bool,
}

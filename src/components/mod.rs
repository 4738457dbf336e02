//! Page features, each an `impl` block on [`Controller`](crate::controller::Controller).

pub mod language;
pub mod map_view;
pub mod navbar;
pub mod preferences;
pub mod sort_list;
pub mod visibility;

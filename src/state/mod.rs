pub mod map;
pub mod preferences;
pub mod sort;
pub mod visibility;

pub use map::{ExplainPanel, MapFilter, MapScale, MapViewState};
pub use preferences::{LanguageIndex, Preferences};
pub use sort::SortTag;
pub use visibility::HiddenClasses;

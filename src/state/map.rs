// Map widget view state: zoom, layer, pin filter, explanation panel

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

pub const MIN_SCALE: u32 = 100;
pub const MAX_SCALE: u32 = 500;
pub const SCALE_STEP: u32 = 50;

/// Map size in percent of its container, a multiple of `SCALE_STEP` in `MIN_SCALE..=MAX_SCALE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapScale(u32);

impl MapScale {
    pub fn percent(self) -> u32 {
        self.0
    }

    /// Zoom in one step. Returns false when already at the maximum.
    pub fn step_up(&mut self) -> bool {
        if self.at_max() {
            return false;
        }
        self.0 = (self.0 + SCALE_STEP).min(MAX_SCALE);
        true
    }

    /// Zoom out one step. Returns false when already at the minimum.
    pub fn step_down(&mut self) -> bool {
        if self.at_min() {
            return false;
        }
        self.0 = self.0.saturating_sub(SCALE_STEP).max(MIN_SCALE);
        true
    }

    pub fn at_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    pub fn at_max(self) -> bool {
        self.0 >= MAX_SCALE
    }
}

impl Default for MapScale {
    fn default() -> Self {
        Self(MIN_SCALE)
    }
}

/// Pin category filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MapFilter {
    #[default]
    All,
    Item,
    Relic,
    Camp,
    Jump,
}

impl MapFilter {
    pub const ALL: [MapFilter; 5] = [
        MapFilter::All,
        MapFilter::Item,
        MapFilter::Relic,
        MapFilter::Camp,
        MapFilter::Jump,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            MapFilter::All => "all",
            MapFilter::Item => "item",
            MapFilter::Relic => "relic",
            MapFilter::Camp => "camp",
            MapFilter::Jump => "jump",
        }
    }

    /// Tag class a pin must carry to pass, `None` for the unconditional filter.
    pub fn tag_class(self) -> Option<&'static str> {
        match self {
            MapFilter::All => None,
            MapFilter::Item => Some("mh-map-tag-item"),
            MapFilter::Relic => Some("mh-map-tag-relic"),
            MapFilter::Camp => Some("mh-map-tag-camp"),
            MapFilter::Jump => Some("mh-map-tag-jump"),
        }
    }

    pub fn accepts(self, has_class: impl Fn(&str) -> bool) -> bool {
        self.tag_class().map_or(true, has_class)
    }
}

/// Explanation panel currently shown beside the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExplainPanel {
    /// Shown before any pin is selected; has no icon.
    #[default]
    Default,
    Pin(String),
}

impl ExplainPanel {
    pub fn from_id(id: &str) -> Self {
        if id == "default" {
            ExplainPanel::Default
        } else {
            ExplainPanel::Pin(id.to_owned())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ExplainPanel::Default => "default",
            ExplainPanel::Pin(id) => id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapViewState {
    pub scale: MapScale,
    pub layer: usize,
    pub filter: MapFilter,
    pub explain: ExplainPanel,
}

/// Layer shown after `current` when `count` layers exist.
pub fn next_layer(current: usize, count: usize) -> usize {
    let next = current + 1;
    if next < count { next } else { 0 }
}

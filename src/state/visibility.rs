use std::collections::BTreeSet;

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Class applied to any element that should not be displayed.
pub const HIDDEN_CLASS: &str = "mh-hidden";

/// Class names whose elements are currently suppressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HiddenClasses {
    classes: BTreeSet<String>,
}

impl HiddenClasses {
    pub fn hide(&mut self, class: &str) -> bool {
        self.classes.insert(class.to_owned())
    }

    pub fn show(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// True when an element for which `has_class` holds carries any hidden class.
    pub fn suppresses(&self, has_class: impl Fn(&str) -> bool) -> bool {
        self.classes.iter().any(|c| has_class(c))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

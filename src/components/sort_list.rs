use log::{debug, warn};

use crate::controller::Controller;
use crate::dom::registry::SORT_COMBO_PREFIX;
use crate::dom::{Dom, ElementKey};
use crate::state::sort::{SORT_ATTRIBUTE, SortTag, sorted_order};
use crate::storage::StorageBackend;

#[cfg(test)]
#[path = "sort_list_test.rs"]
mod sort_list_test;

impl<D: Dom, S: StorageBackend> Controller<D, S> {
    /// Reorder `slist-<list>` by sort key `key` and sync `scombo-<list>` to it.
    pub fn change_sort(&mut self, list: &str, key: usize) {
        let list_key = ElementKey::SortList(list.to_owned());
        if let Some(container) = self.registry.get(&self.dom, &list_key) {
            let children = self.dom.children(&container);
            let tags: Vec<SortTag> = children
                .iter()
                .map(|child| {
                    SortTag::parse(&self.dom.attribute(child, SORT_ATTRIBUTE).unwrap_or_default())
                })
                .collect();
            let ordered = sorted_order(&tags, key)
                .into_iter()
                .map(|i| children[i].clone())
                .collect();
            match self.dom.replace_with_ordered(&container, ordered) {
                Some(sorted) => self.registry.update(list_key, sorted),
                None => warn!("could not reorder #{}", list_key.id()),
            }
        }

        if let Some(select) = self
            .registry
            .get(&self.dom, &ElementKey::SortCombo(list.to_owned()))
        {
            self.dom.set_value(&select, &key.to_string());
        }
    }

    /// `<select id="scombo-<list>">` change handler.
    pub fn on_change_sort(&mut self, select_id: &str, value: &str) {
        let Some(list) = select_id.strip_prefix(SORT_COMBO_PREFIX) else {
            debug!("sort selector #{select_id} does not follow the scombo- naming");
            return;
        };
        match value.trim().parse::<usize>() {
            Ok(key) => self.change_sort(list, key),
            Err(_) => debug!("ignoring sort key {value:?} for {list}"),
        }
    }
}

use crate::components::testing::{TestPage, page};
use crate::dom::{Dom, MemoryDom, NodeId};

fn list_page(tags: &[&str]) -> (TestPage, Vec<NodeId>) {
    let dom = MemoryDom::new();
    let root = dom.document_element();
    let section = dom.add(root, None, &[]);
    let list = dom.add(section, Some("slist-monster"), &["list"]);
    let items = tags
        .iter()
        .map(|tag| {
            let item = dom.add(list, None, &[]);
            dom.set_attribute(item, "data-sort", tag);
            item
        })
        .collect();
    dom.add(root, Some("scombo-monster"), &[]);
    (page(dom, ""), items)
}

fn current_order(page: &TestPage) -> Vec<NodeId> {
    let list = page.dom().by_id("slist-monster").unwrap();
    page.dom().children(&list)
}

#[test]
fn sorts_ascending_on_key_with_first_element_tie_break() {
    let (mut page, items) = list_page(&["2,5", "1,3", "3,1"]);
    page.change_sort("monster", 1);
    assert_eq!(current_order(&page), vec![items[2], items[1], items[0]]);

    page.change_sort("monster", 0);
    assert_eq!(current_order(&page), vec![items[1], items[0], items[2]]);
}

#[test]
fn sort_swaps_container_and_keeps_attributes() {
    let (mut page, _) = list_page(&["1,1", "0,2"]);
    let before = page.dom().by_id("slist-monster").unwrap();
    page.change_sort("monster", 1);
    let after = page.dom().by_id("slist-monster").unwrap();
    assert_ne!(before, after);
    assert!(page.dom().has_class(&after, "list"));

    // A second sort must act on the swapped-in container.
    page.change_sort("monster", 0);
    assert_eq!(page.dom().children(&page.dom().by_id("slist-monster").unwrap()).len(), 2);
}

#[test]
fn selector_is_synced_to_key() {
    let (mut page, _) = list_page(&["1,1"]);
    page.change_sort("monster", 2);
    let combo = page.dom().by_id("scombo-monster").unwrap();
    assert_eq!(page.dom().value(combo), "2");
}

#[test]
fn missing_list_is_a_no_op() {
    let dom = MemoryDom::new();
    let combo = dom.add(dom.document_element(), Some("scombo-armor"), &[]);
    let mut page = page(dom, "");
    page.change_sort("armor", 3);
    assert_eq!(page.dom().value(combo), "3");
    page.change_sort("weapon", 1);
}

#[test]
fn change_handler_derives_list_from_selector_id() {
    let (mut page, items) = list_page(&["2,5", "1,3", "3,1"]);
    page.on_change_sort("scombo-monster", "1");
    assert_eq!(current_order(&page), vec![items[2], items[1], items[0]]);
}

#[test]
fn change_handler_ignores_malformed_input() {
    let (mut page, items) = list_page(&["2,5", "1,3"]);
    page.on_change_sort("scombo-monster", "abc");
    page.on_change_sort("monster", "1");
    assert_eq!(current_order(&page), items);
}

use super::*;

#[test]
fn parse_reads_comma_separated_integers() {
    let tag = SortTag::parse("4, -2,10");
    assert_eq!(tag.key(0), Some(4));
    assert_eq!(tag.key(1), Some(-2));
    assert_eq!(tag.key(2), Some(10));
    assert_eq!(tag.key(3), None);
}

#[test]
fn parse_marks_garbage_entries_absent() {
    let tag = SortTag::parse("1,x,3");
    assert_eq!(tag.key(1), None);
    assert_eq!(tag.key(2), Some(3));
    assert_eq!(SortTag::parse(""), SortTag::default());
}

#[test]
fn sorts_by_selected_key() {
    let tags: Vec<SortTag> = vec![vec![2, 5].into(), vec![1, 3].into(), vec![3, 1].into()];
    let order = sorted_order(&tags, 1);
    let keys: Vec<_> = order.iter().map(|&i| (tags[i].key(0), tags[i].key(1))).collect();
    assert_eq!(keys, vec![(Some(3), Some(1)), (Some(1), Some(3)), (Some(2), Some(5))]);
}

#[test]
fn ties_break_on_first_element() {
    let tags: Vec<SortTag> = vec![vec![9, 1].into(), vec![4, 1].into(), vec![6, 0].into()];
    assert_eq!(sorted_order(&tags, 1), vec![2, 1, 0]);
}

#[test]
fn full_ties_keep_document_order() {
    let tags: Vec<SortTag> = vec![vec![1, 1].into(), vec![1, 1].into(), vec![0, 2].into()];
    assert_eq!(sorted_order(&tags, 1), vec![0, 1, 2]);
}

#[test]
fn missing_keys_sort_before_present_ones() {
    let tags = vec![SortTag::parse("1,5"), SortTag::parse("2"), SortTag::parse("0,3")];
    assert_eq!(sorted_order(&tags, 1), vec![1, 2, 0]);
}

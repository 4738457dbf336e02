use super::*;

#[test]
fn hide_and_show_track_membership() {
    let mut hidden = HiddenClasses::default();
    assert!(hidden.hide("mh-ride-cond"));
    assert!(!hidden.hide("mh-ride-cond"));
    assert!(hidden.contains("mh-ride-cond"));
    assert!(hidden.show("mh-ride-cond"));
    assert!(!hidden.show("mh-ride-cond"));
    assert!(hidden.is_empty());
}

#[test]
fn suppresses_matches_any_hidden_class() {
    let mut hidden = HiddenClasses::default();
    hidden.hide("a");
    hidden.hide("b");
    assert!(hidden.suppresses(|c| c == "b"));
    assert!(!hidden.suppresses(|c| c == "c"));
    assert_eq!(hidden.len(), 2);
}

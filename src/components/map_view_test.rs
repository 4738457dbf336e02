use crate::components::testing::{TestPage, page};
use crate::dom::{Dom, MemoryDom, NodeId};
use crate::state::MapFilter;

struct MapPage {
    page: TestPage,
    map: NodeId,
    up: NodeId,
    down: NodeId,
    layers: Vec<NodeId>,
    pins: Vec<NodeId>,
}

fn map_page(layer_count: usize) -> MapPage {
    let dom = MemoryDom::new();
    let root = dom.document_element();
    let map = dom.add(root, Some("mh-map"), &[]);
    let up = dom.add(root, Some("button-scale-up"), &[]);
    let down = dom.add(root, Some("button-scale-down"), &[]);
    dom.set_disabled(&down, true);
    let layers = (0..layer_count)
        .map(|i| {
            let classes: &[&str] = if i == 0 { &[] } else { &["mh-hidden"] };
            dom.add(map, Some(format!("mh-map-layer-{i}").as_str()), classes)
        })
        .collect();
    let pins = vec![
        dom.add(map, None, &["mh-map-pop", "mh-map-tag-item"]),
        dom.add(map, None, &["mh-map-pop", "mh-map-tag-relic"]),
        dom.add(map, None, &["mh-map-pop", "mh-map-tag-relic", "mh-map-tag-camp"]),
        dom.add(map, None, &["mh-map-pop", "mh-map-tag-jump"]),
    ];
    for filter in MapFilter::ALL {
        let classes: &[&str] = if filter == MapFilter::All { &["is-primary"] } else { &[] };
        dom.add(root, Some(format!("mh-map-filter-{}", filter.name()).as_str()), classes);
    }
    MapPage {
        page: page(dom, ""),
        map,
        up,
        down,
        layers,
        pins,
    }
}

impl MapPage {
    fn visible_layers(&self) -> Vec<usize> {
        (0..self.layers.len())
            .filter(|&i| !self.page.dom().is_hidden(self.layers[i]))
            .collect()
    }

    fn visible_pins(&self) -> Vec<usize> {
        (0..self.pins.len())
            .filter(|&i| !self.page.dom().is_hidden(self.pins[i]))
            .collect()
    }

    fn selected_filters(&self) -> Vec<String> {
        MapFilter::ALL
            .into_iter()
            .filter(|f| {
                let id = format!("mh-map-filter-{}", f.name());
                let button = self.page.dom().by_id(&id).unwrap();
                self.page.dom().has_class(&button, "is-primary")
            })
            .map(|f| f.name().to_owned())
            .collect()
    }
}

#[test]
fn scale_up_resizes_map_and_enables_zoom_out() {
    let mut mp = map_page(1);
    mp.page.scale_up_map();
    assert_eq!(mp.page.state().map.scale.percent(), 150);
    assert_eq!(mp.page.dom().style(mp.map, "width").as_deref(), Some("150%"));
    assert_eq!(mp.page.dom().style(mp.map, "padding-top").as_deref(), Some("150%"));
    assert!(!mp.page.dom().is_disabled(mp.down));
    assert!(!mp.page.dom().is_disabled(mp.up));
}

#[test]
fn buttons_disable_exactly_at_bounds() {
    let mut mp = map_page(1);
    for _ in 0..8 {
        mp.page.scale_up_map();
        let dom = mp.page.dom();
        assert!(!(dom.is_disabled(mp.up) && dom.is_disabled(mp.down)));
    }
    assert_eq!(mp.page.state().map.scale.percent(), 500);
    assert!(mp.page.dom().is_disabled(mp.up));
    assert!(!mp.page.dom().is_disabled(mp.down));

    for _ in 0..8 {
        mp.page.scale_down_map();
    }
    assert_eq!(mp.page.state().map.scale.percent(), 100);
    assert!(mp.page.dom().is_disabled(mp.down));
    assert!(!mp.page.dom().is_disabled(mp.up));
    assert_eq!(mp.page.dom().style(mp.map, "width").as_deref(), Some("100%"));
}

#[test]
fn scale_round_trip_from_mid_range() {
    let mut mp = map_page(1);
    mp.page.scale_up_map();
    mp.page.scale_up_map();
    mp.page.scale_down_map();
    mp.page.scale_up_map();
    assert_eq!(mp.page.state().map.scale.percent(), 200);
}

#[test]
fn switch_layer_cycles_back_to_first() {
    let mut mp = map_page(3);
    assert_eq!(mp.visible_layers(), vec![0]);
    mp.page.switch_map_layer();
    assert_eq!(mp.visible_layers(), vec![1]);
    mp.page.switch_map_layer();
    assert_eq!(mp.visible_layers(), vec![2]);
    mp.page.switch_map_layer();
    assert_eq!(mp.visible_layers(), vec![0]);
    assert_eq!(mp.page.state().map.layer, 0);
}

#[test]
fn single_layer_stays_visible() {
    let mut mp = map_page(1);
    mp.page.switch_map_layer();
    assert_eq!(mp.visible_layers(), vec![0]);
}

#[test]
fn relic_filter_shows_only_relic_pins() {
    let mut mp = map_page(1);
    mp.page.change_map_filter("relic");
    assert_eq!(mp.visible_pins(), vec![1, 2]);
    assert_eq!(mp.selected_filters(), vec!["relic"]);

    mp.page.change_map_filter("all");
    assert_eq!(mp.visible_pins(), vec![0, 1, 2, 3]);
    assert_eq!(mp.selected_filters(), vec!["all"]);
}

#[test]
fn unknown_filter_changes_nothing() {
    let mut mp = map_page(1);
    mp.page.change_map_filter("camp");
    mp.page.change_map_filter("monster");
    assert_eq!(mp.page.state().map.filter, MapFilter::Camp);
    assert_eq!(mp.visible_pins(), vec![2]);
}

#[test]
fn explain_panel_moves_selection() {
    let dom = MemoryDom::new();
    let root = dom.document_element();
    let default = dom.add(root, Some("mh-map-explain-default"), &[]);
    let panel_a = dom.add(root, Some("mh-map-explain-3"), &["mh-hidden"]);
    let icon_a = dom.add(root, Some("mh-map-icon-3"), &[]);
    let panel_b = dom.add(root, Some("mh-map-explain-7"), &["mh-hidden"]);
    let icon_b = dom.add(root, Some("mh-map-icon-7"), &[]);
    let mut page = page(dom, "");

    page.show_map_explain("3");
    assert!(page.dom().is_hidden(default));
    assert!(!page.dom().is_hidden(panel_a));
    assert!(page.dom().has_class(&icon_a, "mh-map-select"));

    page.show_map_explain("7");
    assert!(page.dom().is_hidden(panel_a));
    assert!(!page.dom().has_class(&icon_a, "mh-map-select"));
    assert!(!page.dom().is_hidden(panel_b));
    assert!(page.dom().has_class(&icon_b, "mh-map-select"));

    page.show_map_explain("default");
    assert!(!page.dom().is_hidden(default));
    assert!(page.dom().is_hidden(panel_b));
    assert!(!page.dom().has_class(&icon_b, "mh-map-select"));
}

#[test]
fn same_explain_twice_stays_shown() {
    let dom = MemoryDom::new();
    let root = dom.document_element();
    dom.add(root, Some("mh-map-explain-default"), &[]);
    let panel = dom.add(root, Some("mh-map-explain-1"), &["mh-hidden"]);
    let icon = dom.add(root, Some("mh-map-icon-1"), &[]);
    let mut page = page(dom, "");
    page.show_map_explain("1");
    page.show_map_explain("1");
    assert!(!page.dom().is_hidden(panel));
    assert!(page.dom().has_class(&icon, "mh-map-select"));
}

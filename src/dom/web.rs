use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlCollection, HtmlElement, HtmlInputElement,
    HtmlSelectElement, Node,
};

use super::Dom;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "web_test.rs"]
mod web_test;

/// The live browser document.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

// HtmlCollection is live; snapshot it before mutating classes.
fn collect(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

impl Dom for WebDom {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn by_class(&self, class: &str) -> Vec<Element> {
        collect(&self.document.get_elements_by_class_name(class))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = node.set_attribute("disabled", "");
        } else {
            let _ = node.remove_attribute("disabled");
        }
    }

    fn set_checked(&self, node: &Element, checked: bool) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        collect(&node.children())
    }

    // The copy is filled off-document and swapped in with a single replaceChild.
    // If a move or the swap fails, every child goes back into `node` in its old order.
    fn replace_with_ordered(&self, node: &Element, children: Vec<Element>) -> Option<Element> {
        let parent = node.parent_node()?;
        let owner: &Node = node;
        if !children
            .iter()
            .all(|c| c.parent_node().is_some_and(|p| p.is_same_node(Some(owner))))
        {
            return None;
        }
        let previous = self.children(node);
        let restore = || {
            for child in &previous {
                let _ = node.append_child(child);
            }
        };
        let copy = node.clone_node().ok()?.dyn_into::<Element>().ok()?;
        for child in &children {
            if copy.append_child(child).is_err() {
                log::warn!("failed to move child into sorted copy of #{}", node.id());
                restore();
                return None;
            }
        }
        if parent.replace_child(&copy, node).is_err() {
            log::warn!("failed to swap in sorted copy of #{}", node.id());
            restore();
            return None;
        }
        Some(copy)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod testing {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, Element, Window};

    pub fn window() -> Window {
        web_sys::window().expect("window available")
    }

    pub fn document() -> Document {
        window().document().expect("document available")
    }

    /// A `<div>` holding `html`, appended to `<body>`. Remove it when done.
    pub fn fixture(html: &str) -> Element {
        let document = document();
        let container = document.create_element("div").expect("create fixture");
        container.set_inner_html(html);
        document
            .body()
            .expect("body available")
            .append_child(&container)
            .expect("append fixture");
        container
    }

    /// Resolves once `document.readyState` is `complete`.
    pub async fn loaded() {
        while document().ready_state() != "complete" {
            let tick = js_sys::Promise::new(&mut |resolve, _reject| {
                let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10);
            });
            let _ = JsFuture::from(tick).await;
        }
    }
}

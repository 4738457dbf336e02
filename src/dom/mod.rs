//! DOM access behind a trait, so page behaviour can run against the browser
//! (`WebDom`) or an in-memory tree (`MemoryDom`) in native tests.

pub mod memory;
pub mod registry;
pub mod web;

pub use memory::{MemoryDom, NodeId};
pub use registry::{ElementKey, Registry};
pub use web::WebDom;

pub trait Dom {
    type Node: Clone;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    /// Elements carrying `class`, in document order.
    fn by_class(&self, class: &str) -> Vec<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn set_disabled(&self, node: &Self::Node, disabled: bool);
    fn set_checked(&self, node: &Self::Node, checked: bool);
    fn set_value(&self, node: &Self::Node, value: &str);

    /// Element children of `node`.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Swap `node` for a shallow copy holding `children` in the given order.
    /// Returns the copy now in the document. Returns `None` and leaves the
    /// page as it was if `node` is detached or a child is not one of its own.
    fn replace_with_ordered(&self, node: &Self::Node, children: Vec<Self::Node>) -> Option<Self::Node>;

    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }
}

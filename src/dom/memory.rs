// In-memory element tree for running page behaviour without a browser

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::Dom;
use crate::state::visibility::HIDDEN_CLASS;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct NodeData {
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    disabled: bool,
    checked: bool,
    value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// Arena of elements rooted at a document element.
#[derive(Debug)]
pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData::default()]),
        }
    }

    pub fn document_element(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new element under `parent`.
    pub fn add(&self, parent: NodeId, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let node = NodeId(nodes.len());
        nodes.push(NodeData {
            id: id.map(str::to_owned),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            parent: Some(parent),
            ..NodeData::default()
        });
        nodes[parent.0].children.push(node);
        node
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.has_class(&node, HIDDEN_CLASS)
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node.0].disabled
    }

    pub fn is_checked(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node.0].checked
    }

    pub fn value(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].value.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].style.get(property).cloned()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent
    }

    /// Nodes reachable from the document element, in document order.
    fn attached(&self) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack = vec![NodeId(0)];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(nodes[node.0].children.iter().rev().copied());
        }
        out
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn root(&self) -> Option<NodeId> {
        Some(NodeId(0))
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        let found = self.attached();
        let nodes = self.nodes.borrow();
        found
            .into_iter()
            .find(|n| nodes[n.0].id.as_deref() == Some(id))
    }

    fn by_class(&self, class: &str) -> Vec<NodeId> {
        let found = self.attached();
        let nodes = self.nodes.borrow();
        found
            .into_iter()
            .filter(|n| nodes[n.0].classes.iter().any(|c| c == class))
            .collect()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.retain(|c| c != class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .style
            .insert(property.to_owned(), value.to_owned());
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.nodes.borrow_mut()[node.0].disabled = disabled;
    }

    fn set_checked(&self, node: &NodeId, checked: bool) {
        self.nodes.borrow_mut()[node.0].checked = checked;
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.nodes.borrow_mut()[node.0].value = value.to_owned();
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    fn replace_with_ordered(&self, node: &NodeId, children: Vec<NodeId>) -> Option<NodeId> {
        let mut nodes = self.nodes.borrow_mut();
        let parent = nodes[node.0].parent?;
        if children.iter().any(|c| nodes[c.0].parent != Some(*node)) {
            return None;
        }
        let copy = NodeId(nodes.len());
        let template = &nodes[node.0];
        let data = NodeData {
            children: Vec::new(),
            parent: Some(parent),
            ..template.clone()
        };
        nodes.push(data);

        for &child in &children {
            if let Some(old_parent) = nodes[child.0].parent {
                nodes[old_parent.0].children.retain(|c| *c != child);
            }
            nodes[child.0].parent = Some(copy);
        }
        nodes[copy.0].children = children;

        for slot in nodes[parent.0].children.iter_mut() {
            if *slot == *node {
                *slot = copy;
            }
        }
        nodes[node.0].parent = None;
        Some(copy)
    }
}

//! In-memory [`Dom`] for tests.
//!
//! Selector support is deliberately small: `#id`, a single `.class`, a bare
//! tag name, or any exact selector string registered on a node with
//! [`FakeDom::alias`]. Layout values are whatever the test sets.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{Dom, ScrollBehavior};

pub type NodeId = usize;

/// The `<html>` element.
pub const ROOT: NodeId = 0;
/// The `<body>` element.
pub const BODY: NodeId = 1;

#[derive(Debug, Default, Clone)]
struct FakeNode {
    tag: String,
    parent: Option<NodeId>,
    aliases: Vec<String>,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    text: String,
    html: String,
    value: String,
    top: f64,
    height: f64,
    clicks: u32,
    resets: u32,
    removed: bool,
}

#[derive(Debug)]
pub struct FakeDom {
    nodes: RefCell<Vec<FakeNode>>,
    scroll_y: Cell<f64>,
    viewport_height: Cell<f64>,
    document_height: Cell<f64>,
    scroll_requests: RefCell<Vec<(f64, ScrollBehavior)>>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    #[must_use]
    pub fn new() -> Self {
        let html = FakeNode { tag: "html".to_owned(), ..FakeNode::default() };
        let body = FakeNode { tag: "body".to_owned(), parent: Some(ROOT), ..FakeNode::default() };
        Self {
            nodes: RefCell::new(vec![html, body]),
            scroll_y: Cell::new(0.0),
            viewport_height: Cell::new(800.0),
            document_height: Cell::new(800.0),
            scroll_requests: RefCell::new(Vec::new()),
        }
    }

    // --- Building ---

    /// Append a new `tag` element under `parent`.
    pub fn add(&self, tag: &str, parent: NodeId) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode { tag: tag.to_owned(), parent: Some(parent), ..FakeNode::default() });
        nodes.len() - 1
    }

    pub fn with_id(&self, node: NodeId, id: &str) -> NodeId {
        self.set_attribute(&node, "id", id);
        node
    }

    pub fn with_class(&self, node: NodeId, class: &str) -> NodeId {
        self.add_class(&node, class);
        node
    }

    pub fn with_attr(&self, node: NodeId, name: &str, value: &str) -> NodeId {
        self.set_attribute(&node, name, value);
        node
    }

    /// Make `node` match the exact selector string `selector`.
    pub fn alias(&self, node: NodeId, selector: &str) -> NodeId {
        self.nodes.borrow_mut()[node].aliases.push(selector.to_owned());
        node
    }

    pub fn set_layout(&self, node: NodeId, top: f64, height: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node].top = top;
        nodes[node].height = height;
    }

    pub fn set_scroll(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.viewport_height.set(height);
    }

    pub fn set_document_height(&self, height: f64) {
        self.document_height.set(height);
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        value.clone_into(&mut self.nodes.borrow_mut()[node].value);
    }

    // --- Inspection ---

    #[must_use]
    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node].classes.clone()
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].tag.clone()
    }

    #[must_use]
    pub fn clicks(&self, node: NodeId) -> u32 {
        self.nodes.borrow()[node].clicks
    }

    #[must_use]
    pub fn resets(&self, node: NodeId) -> u32 {
        self.nodes.borrow()[node].resets
    }

    #[must_use]
    pub fn is_removed(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node].removed
    }

    #[must_use]
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent == Some(parent) && !n.removed)
            .map(|(id, _)| id)
            .collect()
    }

    #[must_use]
    pub fn scroll_requests(&self) -> Vec<(f64, ScrollBehavior)> {
        self.scroll_requests.borrow().clone()
    }

    // --- Internals ---

    fn matches(node: &FakeNode, selector: &str) -> bool {
        if node.removed {
            return false;
        }
        if node.aliases.iter().any(|a| a == selector) {
            return true;
        }
        if let Some(id) = selector.strip_prefix('#') {
            return node.attrs.get("id").is_some_and(|v| v == id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            let simple = !class.contains(['.', ' ', '[', ':']);
            return simple && node.classes.iter().any(|c| c == class);
        }
        node.tag == selector
    }

    fn is_within(nodes: &[FakeNode], ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match nodes.get(node).and_then(|n| n.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| Self::matches(n, selector))
            .map(|(id, _)| id)
            .collect()
    }

    fn query_within(&self, parent: &NodeId, selector: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        nodes
            .iter()
            .enumerate()
            .find(|(id, n)| *id != *parent && Self::matches(n, selector) && Self::is_within(&nodes, *parent, *id))
            .map(|(id, _)| id)
    }

    fn document_element(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        Self::is_within(&self.nodes.borrow(), *ancestor, *node)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let n = nodes.get(*node)?;
        if name == "class" {
            return Some(n.classes.join(" "));
        }
        n.attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if name == "class" {
            nodes[*node].classes = value.split_whitespace().map(str::to_owned).collect();
        } else {
            nodes[*node].attrs.insert(name.to_owned(), value.to_owned());
        }
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) {
        self.nodes.borrow_mut()[*node].attrs.remove(name);
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[*node].classes.retain(|c| c != class);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if value.is_empty() {
            nodes[*node].styles.remove(property);
        } else {
            nodes[*node].styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        text.clone_into(&mut nodes[*node].text);
        text.clone_into(&mut nodes[*node].html);
    }

    fn set_html(&self, node: &NodeId, html: &str) {
        html.clone_into(&mut self.nodes.borrow_mut()[*node].html);
    }

    fn html(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].html.clone()
    }

    fn value(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].value.clone()
    }

    fn reset_form(&self, form: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*form].resets += 1;
        let fields: Vec<NodeId> =
            (0..nodes.len()).filter(|id| *id != *form && Self::is_within(&nodes, *form, *id)).collect();
        for id in fields {
            nodes[id].value.clear();
        }
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode { tag: tag.to_owned(), ..FakeNode::default() });
        Some(nodes.len() - 1)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.nodes.borrow_mut()[*child].parent = Some(*parent);
    }

    fn remove(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[*node].removed = true;
        nodes[*node].parent = None;
    }

    fn click(&self, node: &NodeId) {
        self.nodes.borrow_mut()[*node].clicks += 1;
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[*node].top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.nodes.borrow()[*node].height
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn document_height(&self) -> f64 {
        self.document_height.get()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.scroll_requests.borrow_mut().push((top, behavior));
    }
}

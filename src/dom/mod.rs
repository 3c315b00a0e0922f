//! Host capability layer.
//!
//! Components never touch browser APIs directly. They receive a [`Dom`]
//! implementation and call through it, which keeps every component testable
//! with the in-memory fake and lets the `hydrate` build plug in `web-sys`.
//!
//! Writes are fire-and-forget: a failed host call is the implementation's
//! problem to log, never the caller's to handle.

#[cfg(test)]
pub mod fake;

use std::rc::Rc;

/// How a programmatic scroll should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated transition.
    #[default]
    Smooth,
    /// Immediate jump.
    Instant,
}

/// DOM queries, mutations and layout reads the components need.
pub trait Dom {
    /// Handle to one element. Cloning a handle never clones the element.
    type Node: Clone;

    // --- Lookup ---

    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// First descendant of `parent` matching `selector`.
    fn query_within(&self, parent: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// The `<html>` element.
    fn document_element(&self) -> Option<Self::Node>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    // --- Attributes and classes ---

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&self, node: &Self::Node, name: &str);
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Set (or with an empty value, clear) one inline style property.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    // --- Content ---

    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_html(&self, node: &Self::Node, html: &str);
    fn html(&self, node: &Self::Node) -> String;

    /// Current value of a form field.
    fn value(&self, node: &Self::Node) -> String;

    /// Reset a form to its initial field values.
    fn reset_form(&self, form: &Self::Node);

    // --- Tree ---

    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    fn remove(&self, node: &Self::Node);

    /// Dispatch a synthetic click on `node`.
    fn click(&self, node: &Self::Node);

    // --- Layout ---

    /// Element top relative to the document, in pixels.
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;
    fn scroll_y(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

impl<T: Dom + ?Sized> Dom for Rc<T> {
    type Node = T::Node;

    fn query(&self, selector: &str) -> Option<Self::Node> {
        (**self).query(selector)
    }

    fn query_all(&self, selector: &str) -> Vec<Self::Node> {
        (**self).query_all(selector)
    }

    fn query_within(&self, parent: &Self::Node, selector: &str) -> Option<Self::Node> {
        (**self).query_within(parent, selector)
    }

    fn document_element(&self) -> Option<Self::Node> {
        (**self).document_element()
    }

    fn body(&self) -> Option<Self::Node> {
        (**self).body()
    }

    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool {
        (**self).contains(ancestor, node)
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String> {
        (**self).attribute(node, name)
    }

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) {
        (**self).set_attribute(node, name, value);
    }

    fn remove_attribute(&self, node: &Self::Node, name: &str) {
        (**self).remove_attribute(node, name);
    }

    fn add_class(&self, node: &Self::Node, class: &str) {
        (**self).add_class(node, class);
    }

    fn remove_class(&self, node: &Self::Node, class: &str) {
        (**self).remove_class(node, class);
    }

    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        (**self).has_class(node, class)
    }

    fn set_style(&self, node: &Self::Node, property: &str, value: &str) {
        (**self).set_style(node, property, value);
    }

    fn set_text(&self, node: &Self::Node, text: &str) {
        (**self).set_text(node, text);
    }

    fn set_html(&self, node: &Self::Node, html: &str) {
        (**self).set_html(node, html);
    }

    fn html(&self, node: &Self::Node) -> String {
        (**self).html(node)
    }

    fn value(&self, node: &Self::Node) -> String {
        (**self).value(node)
    }

    fn reset_form(&self, form: &Self::Node) {
        (**self).reset_form(form);
    }

    fn create_element(&self, tag: &str) -> Option<Self::Node> {
        (**self).create_element(tag)
    }

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) {
        (**self).append_child(parent, child);
    }

    fn remove(&self, node: &Self::Node) {
        (**self).remove(node);
    }

    fn click(&self, node: &Self::Node) {
        (**self).click(node);
    }

    fn offset_top(&self, node: &Self::Node) -> f64 {
        (**self).offset_top(node)
    }

    fn offset_height(&self, node: &Self::Node) -> f64 {
        (**self).offset_height(node)
    }

    fn scroll_y(&self) -> f64 {
        (**self).scroll_y()
    }

    fn viewport_height(&self) -> f64 {
        (**self).viewport_height()
    }

    fn document_height(&self) -> f64 {
        (**self).document_height()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        (**self).scroll_to(top, behavior);
    }
}

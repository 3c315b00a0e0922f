//! [`Dom`] implementation over `web-sys`.
//!
//! Host call failures are logged at warn and otherwise swallowed; layout
//! reads fall back to 0.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, ScrollToOptions, Window,
};

use crate::dom::{Dom, ScrollBehavior};
use crate::error::InitError;

/// Log a failed host call.
pub(crate) fn warn_on_err<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {err:?}");
    }
}

/// Stringify a JS error value for [`InitError::Host`].
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Bind to the current window and document.
    ///
    /// # Errors
    ///
    /// Fails outside a browser page.
    pub fn new() -> Result<Self, InitError> {
        let window = web_sys::window().ok_or(InitError::MissingElement { component: "app", selector: "window" })?;
        let document = window.document().ok_or(InitError::MissingElement { component: "app", selector: "document" })?;
        Ok(Self { window, document })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether a media query currently matches.
    #[must_use]
    pub fn media_matches(&self, query: &str) -> bool {
        match self.window.match_media(query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                log::warn!("match_media({query}): {err:?}");
                false
            }
        }
    }

    fn html_element(node: &Element) -> Option<&HtmlElement> {
        node.dyn_ref::<HtmlElement>()
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("query({selector}): {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("query_all({selector}): {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Option<Element> {
        match parent.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("query_within({selector}): {err:?}");
                None
            }
        }
    }

    fn document_element(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        warn_on_err("set_attribute", node.set_attribute(name, value));
    }

    fn remove_attribute(&self, node: &Element, name: &str) {
        warn_on_err("remove_attribute", node.remove_attribute(name));
    }

    fn add_class(&self, node: &Element, class: &str) {
        warn_on_err("add_class", node.class_list().add_1(class));
    }

    fn remove_class(&self, node: &Element, class: &str) {
        warn_on_err("remove_class", node.class_list().remove_1(class));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(el) = Self::html_element(node) else {
            return;
        };
        let style = el.style();
        if value.is_empty() {
            warn_on_err("remove_style", style.remove_property(property));
        } else {
            warn_on_err("set_style", style.set_property(property, value));
        }
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn html(&self, node: &Element) -> String {
        node.inner_html()
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        node.get_attribute("value").unwrap_or_default()
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(el) => Some(el),
            Err(err) => {
                log::warn!("create_element({tag}): {err:?}");
                None
            }
        }
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        warn_on_err("append_child", parent.append_child(child));
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn click(&self, node: &Element) {
        if let Some(el) = Self::html_element(node) {
            el.click();
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        Self::html_element(node).map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        Self::html_element(node).map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window.inner_height().map_or(0.0, |h| h.as_f64().unwrap_or(0.0))
    }

    fn document_height(&self) -> f64 {
        self.document.document_element().map_or(0.0, |el| f64::from(el.scroll_height()))
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

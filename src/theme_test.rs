use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;
use crate::dom::fake::{BODY, FakeDom, NodeId, ROOT};

#[derive(Default)]
struct MemoryStore(RefCell<HashMap<String, String>>);

impl PreferenceStore for Rc<MemoryStore> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

fn page_with_toggle() -> (Rc<FakeDom>, NodeId) {
    let dom = Rc::new(FakeDom::new());
    let toggle = dom.with_id(dom.add("button", BODY), "theme-toggle");
    let icon = dom.add("i", toggle);
    (dom, icon)
}

#[test]
fn parse_round_trips_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn resolve_prefers_stored_value() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn resolve_falls_back_to_system_preference() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
    assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
}

#[test]
fn attach_applies_theme_and_icon() {
    let (dom, icon) = page_with_toggle();
    let store = Rc::new(MemoryStore::default());
    let manager = ThemeManager::attach(Rc::clone(&dom), Rc::clone(&store), "theme", true);
    assert_eq!(manager.theme(), Theme::Dark);
    assert_eq!(dom.attribute(&ROOT, "data-theme").as_deref(), Some("dark"));
    assert_eq!(dom.classes(icon), vec!["fas".to_owned(), "fa-sun".to_owned()]);
}

#[test]
fn toggle_persists_and_reapplies() {
    let (dom, icon) = page_with_toggle();
    let store = Rc::new(MemoryStore::default());
    let mut manager = ThemeManager::attach(Rc::clone(&dom), Rc::clone(&store), "theme", false);
    assert_eq!(manager.toggle(), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(dom.attribute(&ROOT, "data-theme").as_deref(), Some("dark"));
    assert!(dom.has_class(&icon, "fa-sun"));

    assert_eq!(manager.toggle(), Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert!(dom.has_class(&icon, "fa-moon"));
}

#[test]
fn stored_preference_survives_reattach() {
    let (dom, _) = page_with_toggle();
    let store = Rc::new(MemoryStore::default());
    let mut first = ThemeManager::attach(Rc::clone(&dom), Rc::clone(&store), "theme", false);
    first.toggle();
    let second = ThemeManager::attach(Rc::clone(&dom), Rc::clone(&store), "theme", false);
    assert_eq!(second.theme(), Theme::Dark);
}

#[test]
fn missing_toggle_still_applies_theme() {
    let dom = Rc::new(FakeDom::new());
    let store = Rc::new(MemoryStore::default());
    let mut manager = ThemeManager::attach(Rc::clone(&dom), store, "theme", false);
    manager.toggle();
    assert_eq!(dom.attribute(&ROOT, "data-theme").as_deref(), Some("dark"));
}

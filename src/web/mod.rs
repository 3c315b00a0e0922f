//! Browser entry point and event wiring.
//!
//! Everything here is `hydrate`-only glue: it binds [`WebDom`] to the page,
//! registers page-lifetime listeners, and drives timer-based effects with
//! `gloo-timers`. Component behavior lives in the parent modules.

mod dom;
mod mount;
mod storage;

pub use dom::WebDom;
pub use storage::LocalStorage;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::app::Bootstrap;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::dom::Dom;
use crate::error::InitError;
use crate::report::{ErrorReport, ErrorSource};

const INJECTED_STYLES: &str = r"
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(100px); }
        to { opacity: 1; transform: translateX(0); }
    }

    .keyboard-navigation *:focus {
        outline: 2px solid var(--primary-500) !important;
        outline-offset: 2px !important;
    }

    .notification {
        animation: slideInRight 0.3s ease;
    }
";

const VIEWPORT_CONTENT: &str = "width=device-width, initial-scale=1.0, maximum-scale=5.0";

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but marked passive so scrolling is never blocked.
pub(crate) fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), wasm_bindgen::JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Wrap a listener registration failure for `component`.
pub(crate) fn host_error(component: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> InitError {
    move |err| InitError::Host { component, message: dom::js_message(&err) }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("portfolio: logger unavailable: {err}").into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        if let Err(err) = listen(&document, "DOMContentLoaded", |_| initialize()) {
            log::error!("cannot wait for DOMContentLoaded: {err:?}");
        }
    } else {
        initialize();
    }
}

fn initialize() {
    let dom = match WebDom::new() {
        Ok(dom) => dom,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let config = load_config(&dom);
    inject_styles(&dom);
    ensure_viewport_meta(&dom);

    let summary = Bootstrap::new()
        .with("theme", || mount::theme(&dom, &config))
        .with("loading", || {
            mount::loading(&dom, &config);
            Ok(())
        })
        .with("navigation", || mount::navigation(&dom, &config))
        .with("scroll effects", || mount::scroll_effects(&dom, &config))
        .with("cursor", || mount::cursor(&dom))
        .with("typewriter", || {
            mount::typewriter(&dom, &config);
            Ok(())
        })
        .with("reveal", || mount::reveal(&dom, &config))
        .with("filters", || mount::filters(&dom))
        .with("contact form", || mount::contact(&dom, &config))
        .with("resume", || mount::resume(&dom, &config))
        .with("performance", || mount::performance(&dom))
        .with("accessibility", || mount::accessibility(&dom))
        .with("error reporting", || mount::error_reporting(&dom))
        .run();

    for name in summary.failed {
        let page = mount::page_context(dom.window());
        ErrorReport::new(ErrorSource::Init, format!("{name} failed to initialize"), None, page).log();
    }
}

/// Read `#site-config`, falling back to defaults on absence or error.
fn load_config(dom: &WebDom) -> SiteConfig {
    let Some(node) = dom.query(&format!("#{CONFIG_ELEMENT_ID}")) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&dom.html(&node)) {
        Ok(config) => {
            log::debug!("site config loaded");
            config
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            SiteConfig::default()
        }
    }
}

fn inject_styles(dom: &WebDom) {
    let (Some(head), Some(style)) = (dom.query("head"), dom.create_element("style")) else {
        return;
    };
    dom.set_text(&style, INJECTED_STYLES);
    dom.append_child(&head, &style);
}

fn ensure_viewport_meta(dom: &WebDom) {
    if dom.query(r#"meta[name="viewport"]"#).is_some() {
        return;
    }
    let (Some(head), Some(meta)) = (dom.query("head"), dom.create_element("meta")) else {
        return;
    };
    dom.set_attribute(&meta, "name", "viewport");
    dom.set_attribute(&meta, "content", VIEWPORT_CONTENT);
    dom.append_child(&head, &meta);
}

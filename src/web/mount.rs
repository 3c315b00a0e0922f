//! Per-component browser wiring.
//!
//! Each function attaches one component to the page and registers its
//! listeners. Components are shared with their listeners through
//! `Rc<RefCell<_>>`; no borrow is held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, ErrorEvent, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent, Performance, PerformanceNavigationTiming, PromiseRejectionEvent, Window,
};

use super::dom::js_message;
use super::{LocalStorage, WebDom, host_error, listen, listen_passive};
use crate::a11y::{AccessibilityManager, FOCUSABLE_SELECTOR};
use crate::config::SiteConfig;
use crate::consts::REVEAL_THRESHOLD;
use crate::contact::{ContactForm, simulate_outcome};
use crate::dom::Dom;
use crate::effects::{CursorFollower, LoadingScreen, ResumeDownload};
use crate::error::InitError;
use crate::filter::{CERTIFICATIONS, FilterGroup, INTERNSHIPS, PROJECTS};
use crate::nav::{LinkDisposition, NavigationCoordinator};
use crate::reveal::{COUNTER_SELECTOR, CounterAnimation, SKILL_BAR_SELECTOR, reveal_skill_bar};
use crate::report::{
    ErrorReport, ErrorSource, IMAGE_SELECTOR, LoadMetrics, NavigationMarks, PageContext, replace_broken_image,
};
use crate::scroll_fx::ScrollEffects;
use crate::theme::{TOGGLE_SELECTOR as THEME_TOGGLE_SELECTOR, ThemeManager};
use crate::typewriter::{ELEMENT_SELECTOR as TYPEWRITER_SELECTOR, Typewriter};

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const HOVER_QUERY: &str = "(hover: hover)";

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_ref::<Element>().cloned()
}

fn element_matches(node: &Element, selector: &str) -> bool {
    match node.matches(selector) {
        Ok(matched) => matched,
        Err(err) => {
            log::warn!("matches({selector}): {err:?}");
            false
        }
    }
}

/// Timestamp, user agent and URL for an error report.
pub(super) fn page_context(window: &Window) -> PageContext {
    PageContext {
        timestamp: String::from(js_sys::Date::new_0().to_iso_string()),
        user_agent: window.navigator().user_agent().unwrap_or_default(),
        url: window.location().href().unwrap_or_default(),
    }
}

pub(super) fn navigation(dom: &WebDom, config: &SiteConfig) -> Result<(), InitError> {
    let err = host_error("navigation");
    let nav = Rc::new(RefCell::new(NavigationCoordinator::attach(dom.clone(), config.nav.clone())));
    nav.borrow_mut().on_scroll();

    let on_scroll = Rc::clone(&nav);
    listen_passive(dom.window(), "scroll", move |_| on_scroll.borrow_mut().on_scroll()).map_err(&err)?;

    let toggle = nav.borrow().toggle().cloned();
    if let Some(toggle) = toggle {
        let on_toggle = Rc::clone(&nav);
        listen(&toggle, "click", move |_| on_toggle.borrow_mut().on_mobile_toggle_click()).map_err(&err)?;
    }

    let links = nav.borrow().links().iter().map(|link| link.node.clone()).collect::<Vec<_>>();
    for (index, link) in links.iter().enumerate() {
        let on_link = Rc::clone(&nav);
        listen(link, "click", move |event| {
            if on_link.borrow_mut().on_link_index_click(index) == LinkDisposition::Handled {
                event.prevent_default();
            }
        })
        .map_err(&err)?;
    }

    listen(dom.document(), "click", move |event| {
        if let Some(target) = event_element(&event) {
            nav.borrow_mut().on_outside_click(&target);
        }
    })
    .map_err(&err)?;

    log::debug!("navigation: {} links wired", links.len());
    Ok(())
}

pub(super) fn theme(dom: &WebDom, config: &SiteConfig) -> Result<(), InitError> {
    let store = LocalStorage::new(dom.window());
    let prefers_dark = dom.media_matches(PREFERS_DARK_QUERY);
    let mut manager = ThemeManager::attach(dom.clone(), store, &config.theme_storage_key, prefers_dark);
    log::debug!("theme: starting in {}", manager.theme());

    let Some(toggle) = dom.query(THEME_TOGGLE_SELECTOR) else {
        return Ok(());
    };
    listen(&toggle, "click", move |_| {
        manager.toggle();
    })
    .map_err(host_error("theme"))
}

pub(super) fn loading(dom: &WebDom, config: &SiteConfig) {
    let screen = LoadingScreen::attach(dom.clone(), config.loading_delay_ms);
    let Some(delay_ms) = screen.hide_after_ms() else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        screen.hide();
        log::debug!("loading: overlay hidden");
    });
}

pub(super) fn scroll_effects(dom: &WebDom, config: &SiteConfig) -> Result<(), InitError> {
    let err = host_error("scroll effects");
    let effects = Rc::new(RefCell::new(ScrollEffects::attach(dom.clone(), config.scroll.clone())));

    if effects.borrow().wants_scroll() {
        effects.borrow_mut().on_scroll();
        let on_scroll = Rc::clone(&effects);
        listen_passive(dom.window(), "scroll", move |_| on_scroll.borrow_mut().on_scroll()).map_err(&err)?;
    }

    let back_to_top = effects.borrow().back_to_top().cloned();
    if let Some(button) = back_to_top {
        let on_click = Rc::clone(&effects);
        listen(&button, "click", move |_| on_click.borrow().on_back_to_top_click()).map_err(&err)?;
    }

    let indicator = effects.borrow().indicator().cloned();
    if let Some(indicator) = indicator {
        listen(&indicator, "click", move |_| effects.borrow().on_indicator_click()).map_err(&err)?;
    }
    Ok(())
}

pub(super) fn cursor(dom: &WebDom) -> Result<(), InitError> {
    let Some(cursor) = CursorFollower::attach(dom.clone(), dom.media_matches(HOVER_QUERY)) else {
        log::debug!("cursor: disabled");
        return Ok(());
    };
    let err = host_error("cursor");
    let cursor = Rc::new(cursor);

    let on_move = Rc::clone(&cursor);
    listen(dom.document(), "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            on_move.on_mouse_move(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        }
    })
    .map_err(&err)?;

    let on_enter = Rc::clone(&cursor);
    listen(dom.document(), "mouseenter", move |_| on_enter.on_mouse_enter()).map_err(&err)?;
    listen(dom.document(), "mouseleave", move |_| cursor.on_mouse_leave()).map_err(&err)
}

pub(super) fn typewriter(dom: &WebDom, config: &SiteConfig) {
    let Some(element) = dom.query(TYPEWRITER_SELECTOR) else {
        return;
    };
    let Some(mut writer) = Typewriter::new(config.typewriter.clone()) else {
        log::warn!("typewriter: no phrases configured");
        return;
    };
    let dom = dom.clone();
    // Stops once the headline leaves the document.
    spawn_local(async move {
        while dom.document_element().is_some_and(|root| dom.contains(&root, &element)) {
            let frame = writer.tick();
            dom.set_text(&element, &frame.text);
            TimeoutFuture::new(frame.delay_ms).await;
        }
    });
}

pub(super) fn reveal(dom: &WebDom, config: &SiteConfig) -> Result<(), InitError> {
    let bars = dom.query_all(SKILL_BAR_SELECTOR);
    let counters = dom.query_all(COUNTER_SELECTOR);
    if bars.is_empty() && counters.is_empty() {
        return Ok(());
    }
    let err = host_error("reveal");

    let host = dom.clone();
    let counter_config = config.counter.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for value in entries.iter() {
                let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if element_matches(&target, SKILL_BAR_SELECTOR) {
                    reveal_skill_bar(&host, &target);
                } else if let Some(animation) = CounterAnimation::from_element(&host, &target, &counter_config) {
                    let host = host.clone();
                    let frame_ms = counter_config.frame_ms;
                    spawn_local(async move {
                        for count in animation {
                            host.set_text(&target, &count.to_string());
                            TimeoutFuture::new(frame_ms).await;
                        }
                    });
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(&err)?;
    callback.forget();

    for node in bars.iter().chain(&counters) {
        observer.observe(node);
    }
    log::debug!("reveal: observing {} bars, {} counters", bars.len(), counters.len());
    Ok(())
}

pub(super) fn filters(dom: &WebDom) -> Result<(), InitError> {
    let err = host_error("filters");
    for spec in [PROJECTS, CERTIFICATIONS, INTERNSHIPS] {
        let group = Rc::new(FilterGroup::attach(dom.clone(), spec));
        if group.is_empty() {
            continue;
        }
        let buttons = group.buttons().to_vec();
        for (index, button) in buttons.iter().enumerate() {
            let on_click = Rc::clone(&group);
            listen(button, "click", move |_| on_click.select(index)).map_err(&err)?;
        }
        log::debug!("{}: {} buttons wired", spec.name, buttons.len());
    }
    Ok(())
}

pub(super) fn contact(dom: &WebDom, config: &SiteConfig) -> Result<(), InitError> {
    let Some(form) = ContactForm::attach(dom.clone()) else {
        log::debug!("contact: no form on this page");
        return Ok(());
    };
    let node = form.form().clone();
    let form = Rc::new(RefCell::new(form));
    let settings = config.contact.clone();

    listen(&node, "submit", move |event| {
        event.prevent_default();
        let Some(message) = form.borrow_mut().begin_submit() else {
            log::debug!("contact: submission already pending");
            return;
        };
        match serde_json::to_string(&message) {
            Ok(json) => log::debug!("contact: submitting {json}"),
            Err(err) => log::warn!("contact: cannot serialize message: {err}"),
        }

        let form = Rc::clone(&form);
        let settings = settings.clone();
        spawn_local(async move {
            TimeoutFuture::new(settings.submit_delay_ms).await;
            let outcome = simulate_outcome(js_sys::Math::random(), settings.failure_rate);
            form.borrow_mut().finish(outcome);
            TimeoutFuture::new(settings.status_visible_ms).await;
            form.borrow().hide_status();
        });
    })
    .map_err(host_error("contact form"))
}

pub(super) fn resume(dom: &WebDom, config: &SiteConfig) -> Result<(), InitError> {
    let download = Rc::new(ResumeDownload::attach(dom.clone(), config.resume.clone()));
    let Some(button) = download.button() else {
        return Ok(());
    };
    let visible_ms = config.resume.notification_ms;
    listen(&button, "click", move |_| {
        let Some(note) = download.start() else {
            return;
        };
        let download = Rc::clone(&download);
        spawn_local(async move {
            TimeoutFuture::new(visible_ms).await;
            download.dismiss(&note);
        });
    })
    .map_err(host_error("resume"))
}

fn navigation_marks(performance: &Performance) -> Option<NavigationMarks> {
    let entry = performance.get_entries_by_type("navigation").get(0);
    let timing = entry.dyn_ref::<PerformanceNavigationTiming>()?;
    Some(NavigationMarks {
        fetch_start: timing.fetch_start(),
        dom_content_loaded_start: timing.dom_content_loaded_event_start(),
        dom_content_loaded_end: timing.dom_content_loaded_event_end(),
        load_start: timing.load_event_start(),
        load_end: timing.load_event_end(),
    })
}

fn log_load_timing(window: &Window) {
    let Some(performance) = window.performance() else {
        return;
    };
    log::info!("page loaded in {:.2}ms", performance.now());
    if let Some(marks) = navigation_marks(&performance) {
        LoadMetrics::from_marks(&marks).log();
    }
}

/// Log page load time and navigation timing once the window finishes
/// loading, or right away when it already has.
pub(super) fn performance(dom: &WebDom) -> Result<(), InitError> {
    if dom.document().ready_state() == "complete" {
        log_load_timing(dom.window());
        return Ok(());
    }
    let window = dom.window().clone();
    listen(dom.window(), "load", move |_| {
        // `loadEventEnd` is only set after the load handlers return.
        let window = window.clone();
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            log_load_timing(&window);
        });
    })
    .map_err(host_error("performance"))
}

pub(super) fn accessibility(dom: &WebDom) -> Result<(), InitError> {
    let err = host_error("accessibility");
    let a11y = Rc::new(AccessibilityManager::attach(dom.clone()));
    let labelled = a11y.label_social_links();
    if labelled > 0 {
        log::debug!("accessibility: labelled {labelled} social links");
    }

    let on_key = Rc::clone(&a11y);
    listen(dom.document(), "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            on_key.on_key_down(&key.key());
        }
    })
    .map_err(&err)?;

    let on_mouse = Rc::clone(&a11y);
    listen(dom.document(), "mousedown", move |_| on_mouse.on_mouse_down()).map_err(&err)?;

    for node in dom.query_all(FOCUSABLE_SELECTOR) {
        let (on_focus, focused) = (Rc::clone(&a11y), node.clone());
        listen(&node, "focus", move |_| on_focus.on_focus(&focused)).map_err(&err)?;
        let (on_blur, blurred) = (Rc::clone(&a11y), node.clone());
        listen(&node, "blur", move |_| on_blur.on_blur(&blurred)).map_err(&err)?;
    }
    Ok(())
}

fn stack_of(value: &JsValue) -> Option<String> {
    if !value.is_object() {
        return None;
    }
    match js_sys::Reflect::get(value, &JsValue::from_str("stack")) {
        Ok(stack) => stack.as_string(),
        Err(_) => None,
    }
}

fn rejection_message(reason: &JsValue) -> String {
    match reason.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => js_message(reason),
    }
}

pub(super) fn error_reporting(dom: &WebDom) -> Result<(), InitError> {
    let err = host_error("error reporting");

    let window = dom.window().clone();
    listen(dom.window(), "error", move |event| {
        let Some(event) = event.dyn_ref::<ErrorEvent>() else {
            return;
        };
        let page = page_context(&window);
        ErrorReport::new(ErrorSource::Uncaught, event.message(), stack_of(&event.error()), page).log();
    })
    .map_err(&err)?;

    let window = dom.window().clone();
    listen(dom.window(), "unhandledrejection", move |event| {
        let Some(event) = event.dyn_ref::<PromiseRejectionEvent>() else {
            return;
        };
        let reason = event.reason();
        let page = page_context(&window);
        ErrorReport::new(ErrorSource::UnhandledRejection, rejection_message(&reason), stack_of(&reason), page).log();
    })
    .map_err(&err)?;

    for image in dom.query_all(IMAGE_SELECTOR) {
        let host = dom.clone();
        let broken = image.clone();
        listen(&image, "error", move |_| {
            if replace_broken_image(&host, &broken) {
                log::warn!("image failed to load; showing placeholder");
            }
        })
        .map_err(&err)?;
    }
    Ok(())
}

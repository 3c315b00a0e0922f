use std::rc::Rc;

use super::*;
use crate::dom::fake::{BODY, FakeDom};

fn config() -> CounterConfig {
    CounterConfig { duration_ms: 2000, frame_ms: 16 }
}

#[test]
fn skill_bar_fills_to_data_width() {
    let dom = Rc::new(FakeDom::new());
    let bar = dom.with_attr(dom.with_class(dom.add("div", BODY), "skill-progress"), "data-width", "85");
    reveal_skill_bar(&dom, &bar);
    assert_eq!(dom.style(bar, "width").as_deref(), Some("85%"));
}

#[test]
fn skill_bar_without_width_is_untouched() {
    let dom = Rc::new(FakeDom::new());
    let bar = dom.with_class(dom.add("div", BODY), "skill-progress");
    reveal_skill_bar(&dom, &bar);
    assert_eq!(dom.style(bar, "width"), None);
}

#[test]
fn counter_ends_exactly_at_target() {
    let values = CounterAnimation::new(50, &config()).collect::<Vec<_>>();
    assert_eq!(values.last(), Some(&50));
    assert!(values.iter().all(|v| *v <= 50));
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn counter_takes_duration_over_frame_steps() {
    // 2000 / 16 = 125 frames.
    let frames = CounterAnimation::new(1000, &config()).count();
    assert!((125..=126).contains(&frames), "frames = {frames}");
}

#[test]
fn zero_target_finishes_immediately() {
    let values = CounterAnimation::new(0, &config()).collect::<Vec<_>>();
    assert_eq!(values, vec![0]);
}

#[test]
fn counter_parses_data_count() {
    let dom = Rc::new(FakeDom::new());
    let good = dom.with_attr(dom.add("span", BODY), "data-count", " 12 ");
    let bad = dom.with_attr(dom.add("span", BODY), "data-count", "lots");
    let counter = CounterAnimation::from_element(&dom, &good, &config()).expect("counter");
    assert_eq!(counter.last(), Some(12));
    assert!(CounterAnimation::from_element(&dom, &bad, &config()).is_none());
}

#[test]
fn counter_ignores_trailing_suffix() {
    let dom = Rc::new(FakeDom::new());
    let plus = dom.with_attr(dom.add("span", BODY), "data-count", "10+");
    let percent = dom.with_attr(dom.add("span", BODY), "data-count", "95%");
    let signed = dom.with_attr(dom.add("span", BODY), "data-count", "+7");
    let prefixed = dom.with_attr(dom.add("span", BODY), "data-count", "x10");
    assert_eq!(CounterAnimation::from_element(&dom, &plus, &config()).and_then(Iterator::last), Some(10));
    assert_eq!(CounterAnimation::from_element(&dom, &percent, &config()).and_then(Iterator::last), Some(95));
    assert_eq!(CounterAnimation::from_element(&dom, &signed, &config()).and_then(Iterator::last), Some(7));
    assert!(CounterAnimation::from_element(&dom, &prefixed, &config()).is_none());
}

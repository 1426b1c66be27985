use site_enhance_shared::{
    counter::{self, CounterAnimation, CounterFrame},
    reveal::{self, RevealTracker, STYLES},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::{
    app::PageContext,
    dom::{self, Observer},
};

/// Fade-in on first view and count-up counters.
pub struct ScrollEffects {
    _reveal: Option<Observer>,
    _counters: Option<Observer>,
}

impl ScrollEffects {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        let reveal = setup_reveal(ctx)?;
        let counters = setup_counters(ctx)?;
        if reveal.is_none() && counters.is_none() {
            return Ok(None);
        }
        Ok(Some(Self {
            _reveal: reveal,
            _counters: counters,
        }))
    }
}

fn setup_reveal(ctx: &PageContext) -> Result<Option<Observer>, JsValue> {
    let elements: Vec<Element> = dom::query_all(&ctx.document, reveal::SELECTOR)
        .into_iter()
        .filter(|el| !el.has_attribute(reveal::OPT_OUT_ATTR))
        .collect();
    if elements.is_empty() {
        return Ok(None);
    }

    let targets = elements.clone();
    let mut tracker = RevealTracker::new();
    let observer = Observer::new(
        reveal::THRESHOLD,
        Some(reveal::ROOT_MARGIN),
        move |entries, observer| {
            for entry in entries {
                let target = entry.target();
                let Some(index) = dom::index_of(&targets, &target) else {
                    continue;
                };
                if !tracker.on_intersection(index, entry.is_intersecting()) {
                    continue;
                }
                observer.unobserve(&target);
                if let Ok(el) = target.dyn_into::<HtmlElement>() {
                    animate_in(el);
                }
            }
        },
    )?;
    for el in &elements {
        observer.observe(el);
    }
    Ok(Some(observer))
}

fn animate_in(el: HtmlElement) {
    dom::set_style(&el, "opacity", STYLES.hidden_opacity);
    dom::set_style(&el, "transform", STYLES.hidden_transform);

    let mut pending = true;
    dom::run_frames(move || {
        // first call runs synchronously; the styles land on the next frame
        if std::mem::take(&mut pending) {
            return true;
        }
        dom::set_style(&el, "transition", STYLES.transition);
        dom::set_style(&el, "opacity", STYLES.shown_opacity);
        dom::set_style(&el, "transform", STYLES.shown_transform);
        false
    });
}

fn setup_counters(ctx: &PageContext) -> Result<Option<Observer>, JsValue> {
    let counters = dom::query_all(&ctx.document, &format!("[{}]", counter::ATTR));
    if counters.is_empty() {
        return Ok(None);
    }

    let duration_ms = ctx.config.counter_duration_ms;
    let targets = counters.clone();
    let mut started = RevealTracker::new();
    let observer = Observer::new(counter::THRESHOLD, None, move |entries, observer| {
        for entry in entries {
            let target = entry.target();
            let Some(index) = dom::index_of(&targets, &target) else {
                continue;
            };
            if started.on_intersection(index, entry.is_intersecting()) {
                observer.unobserve(&target);
                animate_counter(target, duration_ms);
            }
        }
    })?;
    for el in &counters {
        observer.observe(el);
    }
    Ok(Some(observer))
}

fn animate_counter(el: Element, duration_ms: u32) {
    let target = counter::parse_target(el.get_attribute(counter::ATTR).as_deref());
    let mut animation = CounterAnimation::new(target, duration_ms);

    dom::run_frames(move || {
        let frame = animation.step();
        el.set_text_content(Some(&frame.value().to_string()));
        matches!(frame, CounterFrame::Running(_))
    });
}

use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// All descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Run `f` once after `millis`. The timer lives until it fires.
pub fn later(millis: u32, f: impl FnOnce() + 'static) {
    Timeout::new(millis, f).forget();
}

/// Run `frame` now and then once per animation frame for as long as it
/// returns `true`.
pub fn run_frames(mut frame: impl FnMut() -> bool + 'static) {
    let Some(win) = window() else {
        return;
    };
    if frame() {
        schedule_frame(win, Box::new(frame));
    }
}

fn schedule_frame(win: Window, mut frame: Box<dyn FnMut() -> bool>) {
    let win_for_next = win.clone();
    let callback = Closure::once_into_js(move || {
        if frame() {
            schedule_frame(win_for_next, frame);
        }
    });
    let _ = win.request_animation_frame(callback.unchecked_ref());
}

/// Trailing-edge debounce: each call replaces the pending timer.
#[derive(Clone, Default)]
pub struct Debounce {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn call(&self, millis: u32, f: impl FnOnce() + 'static) {
        // dropping the previous Timeout cancels it
        *self.pending.borrow_mut() = Some(Timeout::new(millis, f));
    }
}

struct Registration {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

/// Event listeners owned by one enhancer. They stay attached for as long as
/// the set is alive and are detached on drop.
#[derive(Default)]
pub struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    /// Attach `handler` for `event` on `target`. Events that fail the cast
    /// to `E` are ignored.
    pub fn on<E, F>(
        &mut self,
        target: &impl AsRef<EventTarget>,
        event: &'static str,
        mut handler: F,
    ) -> Result<(), JsValue>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let target = target.as_ref().clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.registrations.push(Registration {
            target,
            event,
            closure,
        });
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for registration in &self.registrations {
            let _ = registration.target.remove_event_listener_with_callback(
                registration.event,
                registration.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` together with the closure it calls.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observer {
    /// `handler` receives each batch of entries and the observer itself so
    /// it can unobserve targets.
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut handler: impl FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .collect();
                handler(entries, &observer);
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Position of `target` in `elements`, compared by identity.
pub fn index_of(elements: &[Element], target: &Element) -> Option<usize> {
    elements.iter().position(|el| el == target)
}

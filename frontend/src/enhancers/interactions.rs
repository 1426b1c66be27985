use site_enhance_shared::ripple::{
    Ripple, CARD_HOVER, CARD_REST, CARD_SELECTOR, LINK_HOVER, LINK_REST, LINK_SELECTOR,
    LINK_TRANSITION, RIPPLE_DURATION_MS, RIPPLE_SELECTOR,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::{
    app::PageContext,
    dom::{self, Listeners},
    enhancers::navigation::apply_hover,
};

/// Cosmetic click ripples and hover lifts.
pub struct Interactions {
    _listeners: Listeners,
}

fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    dom::query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

impl Interactions {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        let mut listeners = Listeners::default();

        for host in html_elements(&ctx.document, RIPPLE_SELECTOR) {
            let document = ctx.document.clone();
            let host_for_click = host.clone();
            listeners.on(&host, "click", move |e: MouseEvent| {
                spawn_ripple(&document, &host_for_click, &e);
            })?;
        }

        for card in html_elements(&ctx.document, CARD_SELECTOR) {
            for (event, style) in [("mouseenter", CARD_HOVER), ("mouseleave", CARD_REST)] {
                let card_for_hover = card.clone();
                listeners.on(&card, event, move |_: MouseEvent| {
                    apply_hover(&card_for_hover, style);
                })?;
            }
        }

        for link in html_elements(&ctx.document, LINK_SELECTOR) {
            let link_for_enter = link.clone();
            listeners.on(&link, "mouseenter", move |_: MouseEvent| {
                dom::set_style(&link_for_enter, "transition", LINK_TRANSITION);
                apply_hover(&link_for_enter, LINK_HOVER);
            })?;
            let link_for_leave = link.clone();
            listeners.on(&link, "mouseleave", move |_: MouseEvent| {
                apply_hover(&link_for_leave, LINK_REST);
            })?;
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

fn spawn_ripple(document: &Document, host: &HtmlElement, e: &MouseEvent) {
    let Ok(span) = document.create_element("span") else {
        return;
    };
    let rect = host.get_bounding_client_rect();
    let ripple = Ripple::at(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        f64::from(e.client_x()),
        f64::from(e.client_y()),
    );
    let _ = span.set_attribute("style", &ripple.css_text());

    dom::set_style(host, "position", "relative");
    dom::set_style(host, "overflow", "hidden");
    if host.append_child(&span).is_err() {
        return;
    }
    dom::later(RIPPLE_DURATION_MS, move || span.remove());
}

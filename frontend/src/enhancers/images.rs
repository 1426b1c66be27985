use std::{cell::RefCell, rc::Rc};

use site_enhance_shared::images::{wants_lazy_loading, FallbackTracker, CRITICAL_ATTR};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlImageElement};

use crate::{
    app::PageContext,
    dom::{self, Listeners},
};

/// `loading="lazy"` for non-critical images and a placeholder on error.
pub struct ImageHandling {
    _listeners: Listeners,
}

impl ImageHandling {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        let elements: Vec<HtmlImageElement> = dom::query_all(&ctx.document, "img")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
            .collect();
        if elements.is_empty() {
            return Ok(None);
        }

        let tracker = Rc::new(RefCell::new(FallbackTracker::new()));
        let mut listeners = Listeners::default();
        for (index, img) in elements.into_iter().enumerate() {
            if wants_lazy_loading(img.has_attribute("loading"), img.has_attribute(CRITICAL_ATTR)) {
                img.set_attribute("loading", "lazy")?;
            }

            let img_for_error = img.clone();
            let tracker = tracker.clone();
            listeners.on(&img, "error", move |_: Event| {
                // the placeholder itself must never re-trigger a swap
                let replacement = tracker.borrow_mut().on_error(index);
                if let Some(src) = replacement {
                    img_for_error.set_src(src);
                }
            })?;
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

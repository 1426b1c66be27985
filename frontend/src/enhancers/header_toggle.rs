use site_enhance_shared::header_toggle::{HeaderToggle, NAV_OPEN_CLASS};
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

use crate::{app::PageContext, dom, dom::Listeners};

pub struct HeaderToggleEnhancer {
    _listeners: Listeners,
}

impl HeaderToggleEnhancer {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        let Some(header) = dom::query(&ctx.document, ".dr-header") else {
            return Ok(None);
        };
        let toggle = header.query_selector(".dr-nav-toggle")?;
        let nav_list = header.query_selector(".dr-nav-list")?;
        let (Some(toggle), Some(_)) = (toggle, nav_list) else {
            return Ok(None);
        };

        let mut listeners = Listeners::default();
        let toggle_for_click = toggle.clone();
        listeners.on(&toggle, "click", move |_: MouseEvent| {
            let current = toggle_for_click.get_attribute("aria-expanded");
            let next = HeaderToggle::from_aria(current.as_deref()).toggled();
            let _ = toggle_for_click.set_attribute("aria-expanded", next.aria_value());
            let _ = header
                .class_list()
                .toggle_with_force(NAV_OPEN_CLASS, next.is_expanded());
        })?;

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

use site_enhance_shared::{
    accordion::{self, BUTTON_COLLAPSED_CLASS, PANEL_OPEN_CLASS},
    styles::{SHARED_CSS, STYLE_ELEMENT_ID},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::{
    app::PageContext,
    dom::{self, Listeners},
};

/// Shared keyframes and accordion height transitions.
pub struct Animations {
    _listeners: Listeners,
}

impl Animations {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        inject_styles(&ctx.document)?;

        let mut listeners = Listeners::default();
        for button in dom::query_all(&ctx.document, ".accordion-button") {
            let document = ctx.document.clone();
            let button_for_click = button.clone();
            listeners.on(&button, "click", move |_: MouseEvent| {
                toggle_accordion(&document, &button_for_click);
            })?;
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(SHARED_CSS));
    head.append_child(&style)?;
    Ok(())
}

fn toggle_accordion(document: &Document, button: &web_sys::Element) {
    let Some(selector) = accordion::panel_selector(
        button.get_attribute("data-bs-target").as_deref(),
        button.get_attribute("aria-controls").as_deref(),
    ) else {
        return;
    };
    let Some(panel) = dom::query(document, &selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let change = accordion::toggle(
        button.get_attribute("aria-expanded").as_deref(),
        panel.scroll_height(),
    );
    dom::set_style(&panel, "max-height", &change.max_height);
    let _ = panel
        .class_list()
        .toggle_with_force(PANEL_OPEN_CLASS, change.expanded);
    let _ = button.set_attribute("aria-expanded", change.aria_value());
    let _ = button
        .class_list()
        .toggle_with_force(BUTTON_COLLAPSED_CLASS, !change.expanded);
}

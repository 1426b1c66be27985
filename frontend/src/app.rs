use std::rc::Rc;

use site_enhance_shared::EnhanceConfig;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{console, Document, HtmlElement, Window};

use crate::{
    config,
    enhancers::{
        animations::Animations, forms::FormValidation, header_toggle::HeaderToggleEnhancer,
        images::ImageHandling, interactions::Interactions, modal::ModalHandler,
        navigation::Navigation, scroll_effects::ScrollEffects,
    },
    notifier::Notifier,
};

/// Handles every enhancer needs, built once per page.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: Rc<EnhanceConfig>,
    pub notifier: Notifier,
}

impl PageContext {
    fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body()?;
        let config = Rc::new(config::load(&document));
        let notifier = Notifier::new(config.notification_timeout_ms);
        Some(Self {
            window,
            document,
            body,
            config,
            notifier,
        })
    }
}

/// Composition root. Fields are initialized in declaration order, which is
/// the order the enhancers attach to the page.
pub struct App {
    header_toggle: Option<HeaderToggleEnhancer>,
    navigation: Option<Navigation>,
    scroll_effects: Option<ScrollEffects>,
    form_validation: Option<FormValidation>,
    animations: Option<Animations>,
    image_handling: Option<ImageHandling>,
    interactions: Option<Interactions>,
    modal_handler: Option<ModalHandler>,
}

impl App {
    pub fn init(ctx: &PageContext) -> Self {
        Self {
            header_toggle: mount("header toggle", HeaderToggleEnhancer::init(ctx)),
            navigation: mount("navigation", Navigation::init(ctx)),
            scroll_effects: mount("scroll effects", ScrollEffects::init(ctx)),
            form_validation: mount("form validation", FormValidation::init(ctx)),
            animations: mount("animations", Animations::init(ctx)),
            image_handling: mount("image handling", ImageHandling::init(ctx)),
            interactions: mount("interactions", Interactions::init(ctx)),
            modal_handler: mount("modal handler", ModalHandler::init(ctx)),
        }
    }

    /// Names of the enhancers that found their markup.
    pub fn mounted(&self) -> Vec<&'static str> {
        [
            ("header toggle", self.header_toggle.is_some()),
            ("navigation", self.navigation.is_some()),
            ("scroll effects", self.scroll_effects.is_some()),
            ("form validation", self.form_validation.is_some()),
            ("animations", self.animations.is_some()),
            ("image handling", self.image_handling.is_some()),
            ("interactions", self.interactions.is_some()),
            ("modal handler", self.modal_handler.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

/// A failing enhancer is logged and skipped; the rest still attach.
fn mount<T>(name: &str, result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(enhancer) => enhancer,
        Err(err) => {
            console::error_2(&format!("Failed to initialize {name}:").into(), &err);
            None
        },
    }
}

/// Attach everything once the DOM is parsed.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once(start);
        let _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        );
        on_ready.forget();
    } else {
        start();
    }
}

fn start() {
    let Some(ctx) = PageContext::from_window() else {
        return;
    };
    let app = App::init(&ctx);
    console::debug_1(&format!("site-enhance ready: {}", app.mounted().join(", ")).into());
    // listeners and observers live as long as the page
    std::mem::forget(app);
}

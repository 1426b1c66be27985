use std::{cell::RefCell, rc::Rc};

use site_enhance_shared::modal::{
    is_privacy_link, ModalState, ShowOutcome, MODAL_TRIGGER_ATTR, PRIVACY_CONTENT,
    PRIVACY_LINK_SELECTOR, PRIVACY_TITLE,
};
use wasm_bindgen::JsValue;
use web_sys::{Element, MouseEvent};
use yew::{AppHandle, Callback};

use crate::{
    app::PageContext,
    components::modal_dialog::{ModalDialog, ModalDialogProps},
    dom::{self, Listeners},
};

struct Mounted {
    host: Element,
    handle: AppHandle<ModalDialog>,
}

struct ModalInner {
    state: ModalState,
    mounted: Option<Mounted>,
}

/// Owns the single dialog instance for the page.
#[derive(Clone)]
pub struct ModalController {
    inner: Rc<RefCell<ModalInner>>,
    fade_ms: u32,
}

impl ModalController {
    pub fn new(fade_ms: u32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ModalInner {
                state: ModalState::new(),
                mounted: None,
            })),
            fade_ms,
        }
    }

    pub fn show(&self, title: &str, content: &str) {
        let outcome = self.inner.borrow_mut().state.show(title, content);
        if outcome == ShowOutcome::Created {
            self.mount();
        } else {
            self.render();
        }
    }

    pub fn close(&self) {
        let Some(token) = self.inner.borrow_mut().state.close() else {
            return;
        };
        self.render();

        let controller = self.clone();
        dom::later(self.fade_ms, move || {
            let mounted = {
                let mut inner = controller.inner.borrow_mut();
                if !inner.state.finish_close(token) {
                    return;
                }
                inner.mounted.take()
            };
            if let Some(Mounted { host, handle }) = mounted {
                handle.destroy();
                host.remove();
            }
        });
    }

    fn props(&self) -> ModalDialogProps {
        let controller = self.clone();
        let inner = self.inner.borrow();
        ModalDialogProps {
            title: inner.state.title().to_string().into(),
            content: inner.state.content().to_string().into(),
            visible: inner.state.is_visible(),
            on_close: Callback::from(move |_: ()| controller.close()),
        }
    }

    fn mount(&self) {
        let Some((document, body)) = dom::document().and_then(|d| d.body().map(|b| (d, b))) else {
            return;
        };
        let Ok(host) = document.create_element("div") else {
            return;
        };
        if body.append_child(&host).is_err() {
            return;
        }
        let props = self.props();
        let handle =
            yew::Renderer::<ModalDialog>::with_root_and_props(host.clone(), props).render();
        self.inner.borrow_mut().mounted = Some(Mounted { host, handle });
    }

    fn render(&self) {
        let props = self.props();
        if let Some(mounted) = self.inner.borrow_mut().mounted.as_mut() {
            mounted.handle.update(props);
        }
    }
}

/// Turns `data-modal` privacy links into dialog triggers.
pub struct ModalHandler {
    _controller: ModalController,
    _listeners: Listeners,
}

impl ModalHandler {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        let links: Vec<Element> = dom::query_all(&ctx.document, PRIVACY_LINK_SELECTOR)
            .into_iter()
            .filter(|link| {
                let href = link.get_attribute("href").unwrap_or_default();
                let text = link.text_content().unwrap_or_default();
                is_privacy_link(&href, &text)
            })
            .collect();
        if links.is_empty() {
            return Ok(None);
        }

        let controller = ModalController::new(ctx.config.modal_fade_ms);
        let mut listeners = Listeners::default();
        for link in links {
            let controller = controller.clone();
            let link_for_click = link.clone();
            listeners.on(&link, "click", move |e: MouseEvent| {
                if link_for_click.has_attribute(MODAL_TRIGGER_ATTR) {
                    e.prevent_default();
                    controller.show(PRIVACY_TITLE, PRIVACY_CONTENT);
                }
            })?;
        }

        Ok(Some(Self {
            _controller: controller,
            _listeners: listeners,
        }))
    }
}

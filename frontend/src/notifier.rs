use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use site_enhance_shared::{
    notification::{
        NotificationCenter, NotificationId, NotificationKind, CONTAINER_ID, EXIT_ANIMATION_MS,
    },
    styles::NOTIFICATION_CONTAINER_CSS,
};
use web_sys::Element;
use yew::{AppHandle, Callback};

use crate::{
    components::notification_stack::{NotificationStack, NotificationStackProps},
    dom,
};

struct NotifierState {
    center: NotificationCenter,
    mounted: Option<AppHandle<NotificationStack>>,
}

/// Shows transient notifications in a fixed container. The container and
/// the Yew stack are created on first use.
#[derive(Clone)]
pub struct Notifier {
    state: Rc<RefCell<NotifierState>>,
    timeout_ms: u32,
}

impl Notifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(NotifierState {
                center: NotificationCenter::new(),
                mounted: None,
            })),
            timeout_ms,
        }
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        self.state.borrow_mut().center.push(message, kind);
        self.render();
    }

    fn dismiss(state: &Weak<RefCell<NotifierState>>, timeout_ms: u32, id: NotificationId) {
        let Some(strong) = state.upgrade() else {
            return;
        };
        let notifier = Notifier {
            state: strong,
            timeout_ms,
        };
        if !notifier.state.borrow_mut().center.begin_dismiss(id) {
            return;
        }
        notifier.render();
        dom::later(EXIT_ANIMATION_MS, move || {
            if notifier.state.borrow_mut().center.remove(id) {
                notifier.render();
            }
        });
    }

    fn render(&self) {
        let weak = Rc::downgrade(&self.state);
        let timeout_ms = self.timeout_ms;
        let on_dismiss =
            Callback::from(move |id: NotificationId| Notifier::dismiss(&weak, timeout_ms, id));

        let mut state = self.state.borrow_mut();
        let props = NotificationStackProps {
            items: state.center.items().to_vec(),
            timeout_ms,
            on_dismiss,
        };
        match state.mounted.as_mut() {
            Some(handle) => handle.update(props),
            None => {
                let Some(container) = ensure_container() else {
                    return;
                };
                let handle =
                    yew::Renderer::<NotificationStack>::with_root_and_props(container, props)
                        .render();
                state.mounted = Some(handle);
            },
        }
    }
}

fn ensure_container() -> Option<Element> {
    let document = dom::document()?;
    if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
        return Some(existing);
    }
    let container = document.create_element("div").ok()?;
    container.set_id(CONTAINER_ID);
    let _ = container.set_attribute("style", NOTIFICATION_CONTAINER_CSS);
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

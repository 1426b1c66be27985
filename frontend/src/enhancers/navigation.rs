use std::{cell::RefCell, rc::Rc};

use site_enhance_shared::{
    anchors,
    menu::{self, Menu, MenuCommand, MenuEvent, OPEN_CLASS, SCROLL_LOCK_CLASS},
    ripple::{HoverStyle, SCROLL_TOP_HOVER, SCROLL_TOP_REST},
    scroll_spy::{self, ScrollSpy, SectionEntry, ACTIVE_CLASS},
    timing::{scroll_top_visible, Throttle},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, KeyboardEvent, MouseEvent, Node, ScrollBehavior, ScrollToOptions,
};
use yew::AppHandle;

use crate::{
    app::PageContext,
    components::scroll_to_top_button::{ScrollToTopButton, ScrollToTopButtonProps},
    dom::{self, Debounce, Listeners, Observer},
};

const NAV_LINK_SELECTOR: &str = ".nav-link, .c-nav__item";
const SECTION_SELECTOR: &str = "section[id], div[id]";
const SCROLL_TOP_ID: &str = "scroll-to-top";

/// Menu, smooth scrolling, scroll-spy and scroll-to-top.
pub struct Navigation {
    _listeners: Listeners,
    _spy: Option<Observer>,
    _scroll_top: Option<AppHandle<ScrollToTopButton>>,
}

/// The elements the menu state machine acts on.
#[derive(Clone)]
struct MenuDom {
    nav: HtmlElement,
    toggle: Element,
    body: HtmlElement,
    header: Option<HtmlElement>,
}

impl MenuDom {
    fn header_height(&self) -> Option<f64> {
        self.header.as_ref().map(|h| f64::from(h.offset_height()))
    }

    fn apply(&self, menu: &Rc<RefCell<Menu>>, command: MenuCommand) {
        match command {
            MenuCommand::Nothing => {},
            MenuCommand::Open { nav_height } => {
                let _ = self.nav.class_list().add_1(OPEN_CLASS);
                let _ = self.toggle.set_attribute("aria-expanded", menu::aria_expanded(menu.borrow().state()));
                let _ = self.body.class_list().add_1(SCROLL_LOCK_CLASS);
                dom::set_style(&self.nav, "height", &nav_height);
            },
            MenuCommand::Close => {
                let _ = self.nav.class_list().remove_1(OPEN_CLASS);
                let _ = self.toggle.set_attribute("aria-expanded", menu::aria_expanded(menu.borrow().state()));
                let _ = self.body.class_list().remove_1(SCROLL_LOCK_CLASS);
                let _ = self.nav.style().remove_property("height");
            },
            MenuCommand::ScheduleClose { delay_ms } => {
                let menu = menu.clone();
                let this = self.clone();
                dom::later(delay_ms, move || {
                    let command = menu.borrow_mut().handle(MenuEvent::DelayedClose);
                    this.apply(&menu, command);
                });
            },
        }
    }

    fn dispatch(&self, menu: &Rc<RefCell<Menu>>, event: MenuEvent) {
        let command = menu.borrow_mut().handle(event);
        self.apply(menu, command);
    }
}

impl Navigation {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        let document = &ctx.document;
        let (Some(nav), Some(toggle)) = (
            dom::query_html(document, ".navbar-collapse"),
            dom::query(document, ".navbar-toggler, .c-nav__toggle"),
        ) else {
            return Ok(None);
        };
        let menu_dom = MenuDom {
            nav,
            toggle,
            body: ctx.body.clone(),
            header: dom::query_html(document, ".l-header"),
        };
        let menu = Rc::new(RefCell::new(Menu::new(&ctx.config)));

        let mut listeners = Listeners::default();
        setup_menu(ctx, &menu_dom, &menu, &mut listeners)?;
        setup_smooth_scroll(ctx, &menu_dom, &mut listeners)?;
        let spy = setup_scroll_spy(ctx)?;
        let scroll_top = setup_scroll_to_top(ctx, &mut listeners)?;

        Ok(Some(Self {
            _listeners: listeners,
            _spy: spy,
            _scroll_top: scroll_top,
        }))
    }
}

fn setup_menu(
    ctx: &PageContext,
    menu_dom: &MenuDom,
    menu: &Rc<RefCell<Menu>>,
    listeners: &mut Listeners,
) -> Result<(), JsValue> {
    {
        let (menu_dom, menu) = (menu_dom.clone(), menu.clone());
        listeners.on(&menu_dom.toggle.clone(), "click", move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            let header_height = menu_dom.header_height();
            menu_dom.dispatch(&menu, MenuEvent::ToggleClicked { header_height });
        })?;
    }

    {
        let (menu_dom, menu) = (menu_dom.clone(), menu.clone());
        listeners.on(&ctx.document, "keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_dom.dispatch(&menu, MenuEvent::EscapePressed);
            }
        })?;
    }

    {
        let (menu_dom, menu) = (menu_dom.clone(), menu.clone());
        listeners.on(&ctx.document, "click", move |e: MouseEvent| {
            if !menu.borrow().is_open() {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = menu_dom.nav.contains(target.as_ref())
                || menu_dom.toggle.contains(target.as_ref());
            if !inside {
                menu_dom.dispatch(&menu, MenuEvent::OutsideClicked);
            }
        })?;
    }

    if let Some(nav_list) = dom::query(&ctx.document, ".navbar-nav") {
        for link in dom::query_all_in(&nav_list, NAV_LINK_SELECTOR) {
            let (menu_dom, menu) = (menu_dom.clone(), menu.clone());
            listeners.on(&link, "click", move |_: MouseEvent| {
                menu_dom.dispatch(&menu, MenuEvent::LinkClicked);
            })?;
        }
    }

    {
        let (menu_dom, menu) = (menu_dom.clone(), menu.clone());
        let window = ctx.window.clone();
        let debounce = Debounce::default();
        let wait = ctx.config.resize_debounce_ms;
        listeners.on(&ctx.window, "resize", move |_: Event| {
            let (menu_dom, menu, window) = (menu_dom.clone(), menu.clone(), window.clone());
            debounce.call(wait, move || {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|w| w.as_f64())
                    .unwrap_or(0.0);
                menu_dom.dispatch(&menu, MenuEvent::Resized { width });
            });
        })?;
    }

    Ok(())
}

fn setup_smooth_scroll(
    ctx: &PageContext,
    menu_dom: &MenuDom,
    listeners: &mut Listeners,
) -> Result<(), JsValue> {
    let document = ctx.document.clone();
    let window = ctx.window.clone();
    let header = menu_dom.header.clone();
    let fallback = ctx.config.default_header_height;

    listeners.on(&ctx.document, "click", move |e: MouseEvent| {
        let Some(link) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(r##"a[href^="#"]"##).ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = anchors::target_id(&href).and_then(|id| document.get_element_by_id(id))
        else {
            return;
        };

        e.prevent_default();
        let header_height = header.as_ref().map(|h| f64::from(h.offset_height()));
        let page_y = window.scroll_y().unwrap_or(0.0);
        let top = anchors::scroll_offset(
            target.get_bounding_client_rect().top(),
            page_y,
            header_height,
            fallback,
        );

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);

        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
        }
    })
}

fn setup_scroll_spy(ctx: &PageContext) -> Result<Option<Observer>, JsValue> {
    let sections = dom::query_all(&ctx.document, SECTION_SELECTOR);
    if sections.is_empty() {
        return Ok(None);
    }
    let links = dom::query_all(&ctx.document, NAV_LINK_SELECTOR);
    let mut spy = ScrollSpy::new(links.iter().map(|l| l.get_attribute("href")).collect());

    let observer = Observer::new(
        scroll_spy::THRESHOLD,
        Some(scroll_spy::ROOT_MARGIN),
        move |entries, _| {
            let batch: Vec<SectionEntry> = entries
                .iter()
                .map(|entry| SectionEntry {
                    id: entry.target().id(),
                    is_intersecting: entry.is_intersecting(),
                    top: entry.bounding_client_rect().top(),
                })
                .collect();
            let Some(states) = spy.observe(&batch) else {
                return;
            };
            for state in states {
                let Some(link) = links.get(state.index) else {
                    continue;
                };
                if state.active {
                    let _ = link.class_list().add_1(ACTIVE_CLASS);
                    let _ = link.set_attribute("aria-current", "page");
                } else {
                    let _ = link.class_list().remove_1(ACTIVE_CLASS);
                    let _ = link.remove_attribute("aria-current");
                }
            }
        },
    )?;
    for section in &sections {
        observer.observe(section);
    }
    Ok(Some(observer))
}

fn setup_scroll_to_top(
    ctx: &PageContext,
    listeners: &mut Listeners,
) -> Result<Option<AppHandle<ScrollToTopButton>>, JsValue> {
    let threshold = ctx.config.scroll_top_threshold;
    let throttle_ms = ctx.config.scroll_throttle_ms;

    let Some(button) = ctx
        .document
        .get_element_by_id(SCROLL_TOP_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        let host = ctx.document.create_element("div")?;
        ctx.body.append_child(&host)?;
        let handle = yew::Renderer::<ScrollToTopButton>::with_root_and_props(
            host,
            ScrollToTopButtonProps {
                threshold,
                throttle_ms,
            },
        )
        .render();
        return Ok(Some(handle));
    };

    {
        let button = button.clone();
        let window = ctx.window.clone();
        let throttle = RefCell::new(Throttle::new(throttle_ms));
        listeners.on(&ctx.window, "scroll", move |_: Event| {
            if !throttle.borrow_mut().try_acquire(dom::now_ms()) {
                return;
            }
            let visible = scroll_top_visible(window.scroll_y().unwrap_or(0.0), threshold);
            dom::set_style(&button, "opacity", if visible { "1" } else { "0" });
            dom::set_style(&button, "visibility", if visible { "visible" } else { "hidden" });
        })?;
    }

    {
        let window = ctx.window.clone();
        listeners.on(&button, "click", move |_: MouseEvent| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    for (event, style) in [("mouseenter", SCROLL_TOP_HOVER), ("mouseleave", SCROLL_TOP_REST)] {
        let button_for_hover = button.clone();
        listeners.on(&button, event, move |_: MouseEvent| {
            apply_hover(&button_for_hover, style);
        })?;
    }

    Ok(None)
}

pub fn apply_hover(el: &HtmlElement, style: HoverStyle) {
    dom::set_style(el, "transform", style.transform);
    if let Some(shadow) = style.box_shadow {
        dom::set_style(el, "box-shadow", shadow);
    }
}

use std::{cell::RefCell, rc::Rc};

use site_enhance_shared::{
    ripple::{HoverStyle, SCROLL_TOP_HOVER, SCROLL_TOP_REST},
    styles::SCROLL_TOP_BUTTON_CSS,
    timing::{scroll_top_visible, Throttle},
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollToTopButtonProps {
    pub threshold: f64,
    pub throttle_ms: u32,
}

/// Generated when the page has no `#scroll-to-top` button of its own.
#[function_component(ScrollToTopButton)]
pub fn scroll_to_top_button(props: &ScrollToTopButtonProps) -> Html {
    let show = use_state(|| false);
    let hover = use_state(|| SCROLL_TOP_REST);

    // 监听滚动事件
    {
        let show = show.clone();
        use_effect_with((props.threshold, props.throttle_ms), move |(threshold, throttle_ms)| {
            let threshold = *threshold;
            let throttle = Rc::new(RefCell::new(Throttle::new(*throttle_ms)));
            let window = window();

            let closure = {
                let show = show.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if !throttle.borrow_mut().try_acquire(js_sys::Date::now()) {
                        return;
                    }
                    let scroll_y = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    show.set(scroll_top_visible(scroll_y, threshold));
                }) as Box<dyn Fn()>)
            };

            if let Some(window) = window.as_ref() {
                let _ = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                drop(closure);
            }
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();

        if let Some(window) = window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_top(0.0);

            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let onmouseenter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(SCROLL_TOP_HOVER))
    };
    let onmouseleave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(SCROLL_TOP_REST))
    };

    let HoverStyle {
        transform,
        box_shadow,
    } = *hover;
    let (opacity, visibility) = if *show { ("1", "visible") } else { ("0", "hidden") };
    let style = format!(
        "{SCROLL_TOP_BUTTON_CSS} opacity: {opacity}; visibility: {visibility}; transform: \
         {transform}; box-shadow: {};",
        box_shadow.unwrap_or("var(--shadow-lg)")
    );

    html! {
        <button
            id="scroll-to-top"
            type="button"
            {style}
            {onclick}
            {onmouseenter}
            {onmouseleave}
            aria-label="Scroll to top"
        >
            {"↑"}
        </button>
    }
}

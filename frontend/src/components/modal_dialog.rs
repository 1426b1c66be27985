use site_enhance_shared::{
    modal::{FADE_IN_DELAY_MS, MODAL_ID},
    styles::{MODAL_BACKDROP_CSS, MODAL_PANEL_CSS},
};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

#[derive(Properties, PartialEq)]
pub struct ModalDialogProps {
    pub title: AttrValue,
    pub content: AttrValue,
    /// `false` while the dialog fades out before removal.
    pub visible: bool,
    pub on_close: Callback<()>,
}

#[function_component(ModalDialog)]
pub fn modal_dialog(props: &ModalDialogProps) -> Html {
    // 先以透明状态挂载，下一拍再淡入
    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_timeout(move || entered.set(true), FADE_IN_DELAY_MS);
    }

    let shown = *entered && props.visible;
    let backdrop_style = format!("{MODAL_BACKDROP_CSS} opacity: {};", if shown { 1 } else { 0 });
    let panel_style = format!(
        "{MODAL_PANEL_CSS} transform: {};",
        if shown { "scale(1)" } else { "scale(0.9)" }
    );

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id={MODAL_ID}
            style={backdrop_style}
            role="dialog"
            aria-modal="true"
            aria-label={props.title.clone()}
            onclick={on_backdrop_click}
        >
            <div style={panel_style}>
                <h2 style="margin-top: 0;">{ props.title.clone() }</h2>
                <p>{ props.content.clone() }</p>
                <button
                    type="button"
                    class="c-button c-button--primary"
                    style="margin-top: 1rem;"
                    onclick={on_close_click}
                >
                    {"Close"}
                </button>
            </div>
        </div>
    }
}

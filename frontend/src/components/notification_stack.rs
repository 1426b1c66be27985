use site_enhance_shared::notification::{Notification, NotificationId};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub items: Vec<Notification>,
    pub timeout_ms: u32,
    pub on_dismiss: Callback<NotificationId>,
}

#[function_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    html! {
        <>
            { for props.items.iter().map(|item| html! {
                <NotificationToast
                    key={item.id}
                    notification={item.clone()}
                    timeout_ms={props.timeout_ms}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notification: Notification,
    pub timeout_ms: u32,
    pub on_dismiss: Callback<NotificationId>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let id = props.notification.id;

    // 到时自动关闭；关闭按钮和计时器共用同一个回调
    {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(id), props.timeout_ms);
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let animation = if props.notification.leaving {
        "slideOutRight 0.5s ease-in"
    } else {
        "slideInRight 0.5s ease-out"
    };
    let style = format!(
        "margin-bottom: 10px; box-shadow: var(--shadow-lg); animation: {animation};"
    );
    let class = classes!(
        "alert",
        format!("alert-{}", props.notification.kind.alert_class()),
        "alert-dismissible",
        "fade",
        "show"
    );

    html! {
        <div {class} {style} role="alert" aria-live="polite">
            <div>{ props.notification.message.clone() }</div>
            <button type="button" class="btn-close" aria-label="Close" onclick={close}></button>
        </div>
    }
}

use std::{cell::RefCell, rc::Rc};

use site_enhance_shared::{
    notification::NotificationKind,
    submission::{
        self, Submission, SubmitDecision, CONSENT_REQUIRED_MESSAGE, FORM_ERRORS_MESSAGE,
        SENDING_BUTTON_HTML, SUBMIT_SUCCESS_MESSAGE,
    },
    validation::{FieldSnapshot, FieldVerdict, RuleTable},
    EnhanceConfig,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::{
    app::PageContext,
    dom::{self, Listeners},
    notifier::Notifier,
};

const FORM_SELECTOR: &str = "form.c-form, form#contactForm";
const FIELD_SELECTOR: &str = "input, textarea, select";
const ERROR_SELECTOR: &str = ".invalid-feedback, .c-form__error";
const ERROR_CLASSES: &str = "invalid-feedback c-form__error";
const VALID_CLASS: &str = "is-valid";
const INVALID_CLASS: &str = "is-invalid";
const CONSENT_SELECTOR: &str = "#privacyConsent";

/// A form control with uniform access to its name and value.
#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl Control {
    fn from_element(el: Element) -> Option<Self> {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(Control::Input(input.clone()));
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Some(Control::TextArea(area.clone()));
        }
        el.dyn_into::<HtmlSelectElement>().ok().map(Control::Select)
    }

    fn element(&self) -> &HtmlElement {
        match self {
            Control::Input(el) => el,
            Control::TextArea(el) => el,
            Control::Select(el) => el,
        }
    }

    fn name(&self) -> String {
        match self {
            Control::Input(el) => el.name(),
            Control::TextArea(el) => el.name(),
            Control::Select(el) => el.name(),
        }
    }

    fn value(&self) -> String {
        match self {
            Control::Input(el) => el.value(),
            Control::TextArea(el) => el.value(),
            Control::Select(el) => el.value(),
        }
    }
}

/// Everything a form's listeners share.
struct FormState {
    form: HtmlFormElement,
    controls: Vec<Control>,
    rules: Rc<RuleTable>,
    submission: RefCell<Submission>,
    notifier: Notifier,
    config: Rc<EnhanceConfig>,
}

/// Inline validation and the simulated submit for every contact form.
pub struct FormValidation {
    _listeners: Listeners,
}

impl FormValidation {
    pub fn init(ctx: &PageContext) -> Result<Option<Self>, JsValue> {
        let forms: Vec<HtmlFormElement> = dom::query_all(&ctx.document, FORM_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
            .collect();
        if forms.is_empty() {
            return Ok(None);
        }

        let rules = Rc::new(
            RuleTable::contact_form().map_err(|err| JsValue::from_str(&err.to_string()))?,
        );
        let mut listeners = Listeners::default();
        for form in forms {
            let controls = dom::query_all_in(&form, FIELD_SELECTOR)
                .into_iter()
                .filter_map(Control::from_element)
                .collect();
            let state = Rc::new(FormState {
                form,
                controls,
                rules: rules.clone(),
                submission: RefCell::new(Submission::default()),
                notifier: ctx.notifier.clone(),
                config: ctx.config.clone(),
            });
            setup_form(&state, &mut listeners)?;
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

fn setup_form(state: &Rc<FormState>, listeners: &mut Listeners) -> Result<(), JsValue> {
    for control in &state.controls {
        {
            let (state, control_for_blur) = (state.clone(), control.clone());
            listeners.on(control.element(), "blur", move |_: Event| {
                validate_control(&state.rules, &control_for_blur);
            })?;
        }
        {
            let (state, control_for_input) = (state.clone(), control.clone());
            listeners.on(control.element(), "input", move |_: Event| {
                if control_for_input
                    .element()
                    .class_list()
                    .contains(INVALID_CLASS)
                {
                    validate_control(&state.rules, &control_for_input);
                }
            })?;
        }
    }

    let state_for_submit = state.clone();
    listeners.on(&state.form, "submit", move |e: Event| {
        e.prevent_default();
        e.stop_propagation();
        handle_submit(&state_for_submit);
    })
}

fn handle_submit(state: &Rc<FormState>) {
    let verdicts: Vec<FieldVerdict> = state
        .controls
        .iter()
        .map(|control| validate_control(&state.rules, control))
        .collect();

    let consent = state
        .form
        .query_selector(CONSENT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    if let Some(checkbox) = consent.as_ref().filter(|c| !c.checked()) {
        show_error(checkbox, CONSENT_REQUIRED_MESSAGE);
    }

    match submission::decide(&verdicts, consent.as_ref().map(|c| c.checked())) {
        SubmitDecision::Blocked { .. } => {
            state
                .notifier
                .notify(FORM_ERRORS_MESSAGE, NotificationKind::Error);
        },
        SubmitDecision::Proceed => submit_form(state),
    }
}

/// Simulated send: no request leaves the page.
fn submit_form(state: &Rc<FormState>) {
    if !state.submission.borrow_mut().begin() {
        return;
    }

    let button = state
        .form
        .query_selector(r#"button[type="submit"]"#)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_html = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
    if let Some(button) = button.as_ref() {
        button.set_disabled(true);
        button.set_inner_html(SENDING_BUTTON_HTML);
    }

    let state = state.clone();
    dom::later(state.config.submit_delay_ms, move || {
        if let Some(button) = button.as_ref() {
            button.set_disabled(false);
            button.set_inner_html(&original_html);
        }

        state
            .notifier
            .notify(SUBMIT_SUCCESS_MESSAGE, NotificationKind::Success);

        let redirect_url = state.config.redirect_url.clone();
        dom::later(state.config.redirect_delay_ms, move || {
            if let Some(window) = dom::window() {
                let _ = window.location().set_href(&redirect_url);
            }
        });

        state.form.reset();
        for el in dom::query_all_in(&state.form, ".is-valid, .is-invalid") {
            let _ = el.class_list().remove_2(VALID_CLASS, INVALID_CLASS);
        }
        state.submission.borrow_mut().finish();
    });
}

fn validate_control(rules: &RuleTable, control: &Control) -> FieldVerdict {
    let el = control.element();
    clear_error(el);

    let name = control.name();
    let id = el.id();
    let value = control.value();
    let label = el
        .parent_element()
        .and_then(|parent| parent.query_selector("label").ok().flatten())
        .map(|label| label.text_content().unwrap_or_default());
    let placeholder = el.get_attribute("placeholder");

    let verdict = rules.validate(&FieldSnapshot {
        name: &name,
        id: &id,
        value: &value,
        required: el.has_attribute("required"),
        label: label.as_deref(),
        placeholder: placeholder.as_deref(),
    });

    match &verdict {
        FieldVerdict::Valid => {
            let _ = el.class_list().add_1(VALID_CLASS);
        },
        FieldVerdict::Empty => {},
        FieldVerdict::Invalid(message) => show_error(el, message),
    }
    verdict
}

fn show_error(field: &HtmlElement, message: &str) {
    let _ = field.class_list().remove_1(VALID_CLASS);
    let _ = field.class_list().add_1(INVALID_CLASS);

    let Some(parent) = field.parent_element() else {
        return;
    };
    let existing = parent
        .query_selector(ERROR_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let error = match existing {
        Some(error) => error,
        None => {
            let Some(created) = dom::document()
                .and_then(|doc| doc.create_element("div").ok())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            created.set_class_name(ERROR_CLASSES);
            if parent.append_child(&created).is_err() {
                return;
            }
            created
        },
    };
    error.set_text_content(Some(message));
    dom::set_style(&error, "display", "block");
}

fn clear_error(field: &HtmlElement) {
    let _ = field.class_list().remove_2(INVALID_CLASS, VALID_CLASS);
    let error = field
        .parent_element()
        .and_then(|parent| parent.query_selector(ERROR_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(error) = error {
        error.set_text_content(Some(""));
        dom::set_style(&error, "display", "none");
    }
}

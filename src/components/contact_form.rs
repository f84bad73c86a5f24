//! Contact form with floating labels, live per-field validation and
//! asynchronous submission to the portfolio backend.

use std::collections::HashMap;

use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::encode::urlencoded_body;
use crate::forms::validate::{validate_field, FieldKind, FieldStatus};

const RESET_DELAY_MS: u32 = 5_000;
const DEFAULT_THANKS: &str = "Thank you! Your message has been sent successfully.";
const GENERIC_FAILURE: &str = "Oops! Something went wrong. Please try again.";
const INVALID_BANNER: &str = "Please correct the errors above.";

/// Submission order also defines the serialized body order.
const FIELD_NAMES: [&str; 5] = ["name", "email", "phone", "subject", "message"];

#[derive(Clone, Copy, PartialEq)]
enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, PartialEq)]
struct FormMessage {
    success: bool,
    text: String,
}

#[derive(Deserialize)]
struct ContactResponse {
    message: Option<String>,
}

#[derive(Deserialize)]
struct ContactErrorBody {
    #[serde(default)]
    errors: HashMap<String, Vec<String>>,
}

/// Owns one field's value and displayed status plus the callbacks wired into
/// its input element.
#[derive(Clone)]
struct FieldHandle {
    name: &'static str,
    kind: FieldKind,
    value: UseStateHandle<String>,
    status: UseStateHandle<FieldStatus>,
    on_input: Callback<String>,
    on_blur: Callback<String>,
}

fn field_handle(
    name: &'static str,
    kind: FieldKind,
    value: UseStateHandle<String>,
    status: UseStateHandle<FieldStatus>,
) -> FieldHandle {
    let on_input = {
        let value = value.clone();
        let status = status.clone();
        Callback::from(move |next: String| {
            // Only re-validate eagerly while the field is showing an error,
            // so it clears as soon as the input becomes valid.
            if status.is_invalid() {
                status.set(FieldStatus::from_result(validate_field(kind, &next)));
            }
            value.set(next);
        })
    };
    let on_blur = {
        let status = status.clone();
        Callback::from(move |current: String| {
            status.set(FieldStatus::from_result(validate_field(kind, &current)));
        })
    };
    FieldHandle {
        name,
        kind,
        value,
        status,
        on_input,
        on_blur,
    }
}

impl FieldHandle {
    /// Validates the current value, updates the displayed status and reports
    /// whether the field passed.
    fn validate_now(&self) -> bool {
        let result = validate_field(self.kind, self.value.as_str());
        let ok = result.is_ok();
        self.status.set(FieldStatus::from_result(result));
        ok
    }

    fn reset(&self) {
        self.value.set(String::new());
        self.status.set(FieldStatus::Untouched);
    }
}

#[derive(Properties, PartialEq)]
struct FloatingFieldProps {
    name: AttrValue,
    label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    #[prop_or_default]
    textarea: bool,
    value: String,
    status: FieldStatus,
    on_input: Callback<String>,
    on_blur: Callback<String>,
}

/// One floating-label group: the control, its label, a validation icon slot
/// and an error-message slot.
#[function_component(FloatingField)]
fn floating_field(props: &FloatingFieldProps) -> Html {
    let status_class = match &props.status {
        FieldStatus::Untouched => None,
        FieldStatus::Valid => Some("success"),
        FieldStatus::Invalid(_) => Some("error"),
    };
    let icon = if props.status.is_invalid() {
        "fa-solid fa-times"
    } else {
        "fa-solid fa-check"
    };
    let control = if props.textarea {
        let oninput = {
            let on_input = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                on_input.emit(area.value());
            })
        };
        let onblur = {
            let on_blur = props.on_blur.clone();
            Callback::from(move |e: FocusEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                on_blur.emit(area.value());
            })
        };
        html! {
            <textarea
                name={props.name.clone()}
                rows="7"
                placeholder=" "
                value={props.value.clone()}
                {oninput}
                {onblur}
            />
        }
    } else {
        let oninput = {
            let on_input = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_input.emit(input.value());
            })
        };
        let onblur = {
            let on_blur = props.on_blur.clone();
            Callback::from(move |e: FocusEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_blur.emit(input.value());
            })
        };
        html! {
            <input
                type={props.input_type.clone()}
                name={props.name.clone()}
                placeholder=" "
                value={props.value.clone()}
                {oninput}
                {onblur}
            />
        }
    };
    html! {
        <div class={classes!("form-group", "floating-label-group", status_class)}>
            { control }
            <label>{ props.label.to_string() }</label>
            <span class="validation-icon"><i class={icon}></i></span>
            <span class="error-message">{ props.status.error().unwrap_or_default() }</span>
        </div>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name_value = use_state(String::new);
    let name_status = use_state(FieldStatus::default);
    let email_value = use_state(String::new);
    let email_status = use_state(FieldStatus::default);
    let phone_value = use_state(String::new);
    let phone_status = use_state(FieldStatus::default);
    let subject_value = use_state(String::new);
    let subject_status = use_state(FieldStatus::default);
    let message_value = use_state(String::new);
    let message_status = use_state(FieldStatus::default);
    let phase = use_state(|| SubmitPhase::Idle);
    let banner = use_state(|| None::<FormMessage>);

    let fields: [FieldHandle; 5] = [
        field_handle(FIELD_NAMES[0], FieldKind::Text, name_value, name_status),
        field_handle(FIELD_NAMES[1], FieldKind::Email, email_value, email_status),
        field_handle(FIELD_NAMES[2], FieldKind::Phone, phone_value, phone_status),
        field_handle(FIELD_NAMES[3], FieldKind::Text, subject_value, subject_status),
        field_handle(FIELD_NAMES[4], FieldKind::Text, message_value, message_status),
    ];

    let onsubmit = {
        let fields = fields.clone();
        let phase = phase.clone();
        let banner = banner.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // One submission at a time; a second click while a request is in
            // flight is ignored.
            if *phase == SubmitPhase::Submitting {
                return;
            }
            let mut all_valid = true;
            for field in &fields {
                if !field.validate_now() {
                    all_valid = false;
                }
            }
            if !all_valid {
                phase.set(SubmitPhase::Idle);
                banner.set(Some(FormMessage {
                    success: false,
                    text: INVALID_BANNER.to_string(),
                }));
                return;
            }

            phase.set(SubmitPhase::Submitting);
            banner.set(None);
            let pairs: Vec<(&str, String)> = fields
                .iter()
                .map(|field| (field.name, (*field.value).clone()))
                .collect();
            let body = urlencoded_body(&pairs);

            let fields = fields.clone();
            let phase = phase.clone();
            let banner = banner.clone();
            spawn_local(async move {
                let request = Request::post(&format!("{}/contact/", config::get_backend_url()))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(body);
                match request.send().await {
                    Ok(response) if response.ok() => {
                        phase.set(SubmitPhase::Succeeded);
                        let text = response
                            .json::<ContactResponse>()
                            .await
                            .ok()
                            .and_then(|resp| resp.message)
                            .unwrap_or_else(|| DEFAULT_THANKS.to_string());
                        banner.set(Some(FormMessage {
                            success: true,
                            text,
                        }));
                        // Return the whole form to its pristine state after
                        // the success message has been shown for a while.
                        TimeoutFuture::new(RESET_DELAY_MS).await;
                        for field in &fields {
                            field.reset();
                        }
                        banner.set(None);
                        phase.set(SubmitPhase::Idle);
                    }
                    Ok(response) => {
                        log!("contact submission rejected with status:", response.status());
                        phase.set(SubmitPhase::Failed);
                        banner.set(Some(FormMessage {
                            success: false,
                            text: GENERIC_FAILURE.to_string(),
                        }));
                        if let Ok(body) = response.json::<ContactErrorBody>().await {
                            for field in &fields {
                                if let Some(first) =
                                    body.errors.get(field.name).and_then(|msgs| msgs.first())
                                {
                                    field.status.set(FieldStatus::Invalid(first.clone()));
                                }
                            }
                        }
                    }
                    Err(err) => {
                        log!("contact request failed:", err.to_string());
                        phase.set(SubmitPhase::Failed);
                        banner.set(Some(FormMessage {
                            success: false,
                            text: GENERIC_FAILURE.to_string(),
                        }));
                    }
                }
            });
        })
    };

    let button_class = classes!(
        "submit-btn-enhanced",
        (*phase == SubmitPhase::Submitting).then_some("loading"),
        (*phase == SubmitPhase::Succeeded).then_some("success"),
    );
    let button_text = if *phase == SubmitPhase::Succeeded {
        "Sent!"
    } else {
        "Send Message"
    };
    let banner_view = match &*banner {
        Some(message) => {
            let kind = if message.success { "success" } else { "error" };
            let icon = if message.success {
                "fa-solid fa-circle-check"
            } else {
                "fa-solid fa-circle-exclamation"
            };
            html! {
                <div class={classes!("form-message-enhanced", kind, "show")}>
                    <span class="message-icon"><i class={icon}></i></span>
                    <span class="message-text">{ &message.text }</span>
                </div>
            }
        }
        None => html! { <div class="form-message-enhanced"></div> },
    };

    let [name, email, phone, subject, message] = &fields;
    html! {
        <form id="contact-form" {onsubmit}>
            <style>
            {r#".contact-form-enhanced {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1.25rem;
            }
            .contact-form-enhanced .full-width {
                grid-column: 1 / -1;
            }
            .floating-label-group {
                position: relative;
            }
            .floating-label-group input,
            .floating-label-group textarea {
                width: 100%;
                padding: 1.1rem 2.5rem 0.5rem 0.9rem;
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(30, 144, 255, 0.2);
                border-radius: 8px;
                color: #fff;
                font-size: 1rem;
                outline: none;
                transition: border-color 0.3s ease;
            }
            .floating-label-group label {
                position: absolute;
                left: 0.9rem;
                top: 0.9rem;
                color: rgba(255, 255, 255, 0.5);
                pointer-events: none;
                transition: all 0.2s ease;
            }
            .floating-label-group input:focus + label,
            .floating-label-group input:not(:placeholder-shown) + label,
            .floating-label-group textarea:focus + label,
            .floating-label-group textarea:not(:placeholder-shown) + label {
                top: 0.2rem;
                font-size: 0.7rem;
                color: #1E90FF;
            }
            .floating-label-group .validation-icon {
                position: absolute;
                right: 0.9rem;
                top: 0.9rem;
                display: none;
            }
            .floating-label-group.success input,
            .floating-label-group.success textarea {
                border-color: #2ecc71;
            }
            .floating-label-group.success .validation-icon {
                display: block;
                color: #2ecc71;
            }
            .floating-label-group.error input,
            .floating-label-group.error textarea {
                border-color: #e74c3c;
            }
            .floating-label-group.error .validation-icon {
                display: block;
                color: #e74c3c;
            }
            .floating-label-group .error-message {
                display: none;
                color: #e74c3c;
                font-size: 0.8rem;
                margin-top: 0.25rem;
            }
            .floating-label-group.error .error-message {
                display: block;
            }
            .submit-btn-enhanced {
                grid-column: 1 / -1;
                position: relative;
                padding: 1rem 2rem;
                border: none;
                border-radius: 8px;
                background: #1E90FF;
                color: #fff;
                font-size: 1rem;
                font-weight: 600;
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                transition: background 0.3s ease;
            }
            .submit-btn-enhanced.success {
                background: #2ecc71;
            }
            .submit-btn-enhanced .btn-loader {
                display: none;
            }
            .submit-btn-enhanced.loading .btn-loader {
                display: inline-block;
            }
            .submit-btn-enhanced.loading .btn-text,
            .submit-btn-enhanced.loading i {
                visibility: hidden;
            }
            .submit-btn-enhanced.loading .btn-loader {
                position: absolute;
            }
            .spinner {
                width: 18px;
                height: 18px;
                border: 2px solid rgba(255, 255, 255, 0.3);
                border-top-color: #fff;
                border-radius: 50%;
                animation: spin 0.7s linear infinite;
            }
            @keyframes spin {
                to { transform: rotate(360deg); }
            }
            .form-message-enhanced {
                grid-column: 1 / -1;
                display: none;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1rem;
                border-radius: 8px;
            }
            .form-message-enhanced.show {
                display: flex;
            }
            .form-message-enhanced.success {
                background: rgba(46, 204, 113, 0.12);
                color: #2ecc71;
            }
            .form-message-enhanced.error {
                background: rgba(231, 76, 60, 0.12);
                color: #e74c3c;
            }"#}
            </style>
            <div class="contact-form-enhanced">
                <FloatingField
                    name="name"
                    label="Full Name"
                    value={(*name.value).clone()}
                    status={(*name.status).clone()}
                    on_input={name.on_input.clone()}
                    on_blur={name.on_blur.clone()}
                />
                <FloatingField
                    name="email"
                    label="Email"
                    input_type="email"
                    value={(*email.value).clone()}
                    status={(*email.status).clone()}
                    on_input={email.on_input.clone()}
                    on_blur={email.on_blur.clone()}
                />
                <FloatingField
                    name="phone"
                    label="Phone"
                    input_type="tel"
                    value={(*phone.value).clone()}
                    status={(*phone.status).clone()}
                    on_input={phone.on_input.clone()}
                    on_blur={phone.on_blur.clone()}
                />
                <FloatingField
                    name="subject"
                    label="Subject"
                    value={(*subject.value).clone()}
                    status={(*subject.status).clone()}
                    on_input={subject.on_input.clone()}
                    on_blur={subject.on_blur.clone()}
                />
                <div class="full-width">
                    <FloatingField
                        name="message"
                        label="Message"
                        textarea={true}
                        value={(*message.value).clone()}
                        status={(*message.status).clone()}
                        on_input={message.on_input.clone()}
                        on_blur={message.on_blur.clone()}
                    />
                </div>
                <button type="submit" class={button_class}>
                    <span class="btn-text">{ button_text }</span>
                    <span class="btn-loader"><div class="spinner"></div></span>
                    <i class="fa-solid fa-paper-plane"></i>
                </button>
                { banner_view }
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_body_carries_every_field_once() {
        let pairs: Vec<(&str, String)> = FIELD_NAMES
            .iter()
            .map(|name| (*name, format!("{name}-value")))
            .collect();
        let body = urlencoded_body(&pairs);
        for name in FIELD_NAMES {
            assert_eq!(
                body.matches(&format!("{name}=")).count(),
                1,
                "{name} should appear exactly once in {body}"
            );
        }
    }

    #[test]
    fn success_response_message_is_optional() {
        let resp: ContactResponse = serde_json::from_str(r#"{"success": true, "message": "ok"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("ok"));
        let resp: ContactResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.message.is_none());
    }

    #[test]
    fn failure_response_field_errors_are_parsed() {
        let body: ContactErrorBody =
            serde_json::from_str(r#"{"success": false, "errors": {"email": ["bad", "worse"]}}"#).unwrap();
        assert_eq!(
            body.errors.get("email").and_then(|msgs| msgs.first()).map(String::as_str),
            Some("bad")
        );
        let body: ContactErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.errors.is_empty());
    }
}

//! Labelled text field with a character counter and length validation.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use groupforms_shared::{char_count, FieldLimits};

use crate::components::ui::{TextInput, TextInputKind};

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(0);

/// Unique DOM id for linking labels to controls.
pub fn next_field_id() -> String {
    format!("field-{}", NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
}

#[component]
pub fn RequiredStar() -> Element {
    rsx! {
        span { class: "text-brand", "*" }
    }
}

#[component]
pub fn Label(
    text: String,
    #[props(optional)] id: Option<String>,
    #[props(optional)] html_for: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label {
            class: "font-bold",
            id: id.unwrap_or_default(),
            r#for: html_for.unwrap_or_default(),
            "{text}"
            if required {
                RequiredStar {}
            }
        }
    }
}

#[component]
pub fn CharacterCounter(value: usize, limit: usize, testid: String, #[props(default)] error: bool) -> Element {
    rsx! {
        div { class: "flex",
            div { class: "grow" }
            span {
                class: if error { "text-red-error font-bold" } else { "" },
                "data-testid": testid,
                "{value}/{limit}"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    pub on_change_value: EventHandler<String>,
    pub limits: FieldLimits,
    pub testid: String,
    #[props(optional)]
    pub kind: Option<TextInputKind>,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub autofocus: bool,
    #[props(optional)]
    pub class: Option<String>,
}

/// The "too short" check waits until the field has been committed once, so
/// an empty required field does not complain while the user starts typing.
/// Errors are advisory and never block input.
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let id = use_hook(next_field_id);
    let mut committed = use_signal(|| false);

    let error = props.limits.validate(&props.value, *committed.read());
    let on_change_value = props.on_change_value;

    rsx! {
        div { class: "mb-4",
            Label {
                text: props.label.clone(),
                html_for: id.clone(),
                required: props.required,
            }
            TextInput {
                id: id.clone(),
                value: props.value.clone(),
                kind: props.kind.unwrap_or_default(),
                class: props.class.clone().unwrap_or_default(),
                error: error.is_some(),
                required: props.required,
                autofocus: props.autofocus,
                testid: props.testid.clone(),
                oninput: move |e: FormEvent| on_change_value.call(e.value()),
                onchange: move |_| committed.set(true),
            }
            if let Some(error) = error {
                div {
                    class: "text-red-error mt-1",
                    role: "alert",
                    "data-testid": "error-{props.testid}",
                    "{error}"
                }
            }
            CharacterCounter {
                value: char_count(&props.value),
                limit: props.limits.max,
                testid: format!("charcounter-{}", props.testid),
                error: error.is_some(),
            }
        }
    }
}

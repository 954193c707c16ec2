use dioxus::prelude::*;

/// Single-line input or multi-line textarea.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum TextInputKind {
    #[default]
    Input,
    Textarea,
}

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    /// Fired when the user commits the value (blur after an edit).
    #[props(optional)]
    pub onchange: Option<EventHandler<FormEvent>>,
    #[props(optional)]
    pub kind: Option<TextInputKind>,
    #[props(optional)]
    pub class: Option<String>,
    #[props(default)]
    pub error: bool,
    #[props(default)]
    pub required: bool,
    #[props(default)]
    pub autofocus: bool,
    #[props(optional)]
    pub testid: Option<String>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let base = "w-full rounded border bg-white px-3 py-2 text-grey-7 focus:outline-none focus:ring-2";
    let state = if props.error {
        "border-red-error focus:ring-red-error/40"
    } else {
        "border-grey-3 focus:ring-brand/40"
    };
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {} {}", base, state, extra),
        _ => format!("{} {}", base, state),
    };
    let testid = props.testid.unwrap_or_default();
    let oninput = props.oninput;
    let onchange = props.onchange;

    match props.kind.unwrap_or_default() {
        TextInputKind::Input => rsx! {
            input {
                id: "{props.id}",
                class,
                r#type: "text",
                value: "{props.value}",
                autocomplete: "off",
                autofocus: props.autofocus,
                required: props.required,
                "aria-invalid": props.error,
                "data-testid": testid,
                oninput: move |e| oninput.call(e),
                onchange: move |e| {
                    if let Some(handler) = &onchange {
                        handler.call(e);
                    }
                },
            }
        },
        TextInputKind::Textarea => rsx! {
            textarea {
                id: "{props.id}",
                class,
                value: "{props.value}",
                autocomplete: "off",
                autofocus: props.autofocus,
                required: props.required,
                "aria-invalid": props.error,
                "data-testid": testid,
                oninput: move |e| oninput.call(e),
                onchange: move |e| {
                    if let Some(handler) = &onchange {
                        handler.call(e);
                    }
                },
            }
        },
    }
}

//! Group type radio selector.

use dioxus::prelude::*;
use groupforms_shared::GroupType;

/// Vertical radio list of group types, each with its explanatory subtitle.
#[component]
pub fn GroupTypeSelector(
    labelled_by: String,
    selected: GroupType,
    onchange: EventHandler<GroupType>,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2 mb-4",
            role: "radiogroup",
            "aria-labelledby": "{labelled_by}",
            "data-testid": "group-type",
            for group_type in GroupType::ALL {
                {
                    let is_checked = group_type == selected;
                    let key = group_type.as_str();
                    let title = group_type.label();
                    let subtitle = group_type.subtitle();
                    rsx! {
                        label {
                            key: "{key}",
                            class: format!(
                                "flex items-start gap-3 p-3 rounded border cursor-pointer transition-colors {}",
                                if is_checked { "border-brand bg-brand/5" } else { "border-grey-3 hover:bg-grey-1" }
                            ),
                            input {
                                r#type: "radio",
                                name: "group-type",
                                value: key,
                                checked: is_checked,
                                onchange: move |_| onchange.call(group_type),
                                class: "mt-1 cursor-pointer",
                            }
                            div {
                                div { class: "font-semibold text-grey-7", "{title}" }
                                div { class: "text-grey-6", "{subtitle}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

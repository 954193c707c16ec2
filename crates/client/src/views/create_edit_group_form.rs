//! The create/edit group screen.

use dioxus::prelude::*;
use groupforms_shared::{
    DraftEdit, GroupForm, GroupType, SubmitOutcome, DESCRIPTION_LIMITS, NAME_LIMITS,
};

use crate::api_client::ApiClient;
use crate::components::forms::{next_field_id, Label, RequiredStar, TextField};
use crate::components::ui::{Button, GroupTypeSelector, TextInputKind};
use crate::components::SaveStateIcon;
use crate::hooks::{use_history_restore, use_warn_on_page_unload};
use crate::navigation::set_location;
use crate::{log_debug, log_info, log_warn};

/// Form for creating a new group, or editing the group embedded in the page
/// configuration.
#[component]
pub fn CreateEditGroupForm(initial: GroupForm) -> Element {
    let mut form = use_signal(|| initial);
    let client = use_hook(ApiClient::for_current_page);
    let group_type_label = use_hook(next_field_id);

    use_warn_on_page_unload(form.read().warns_on_unload());
    use_history_restore(move || {
        log_debug!("Page restored from history cache, resetting save state");
        form.write().restore_from_history();
    });

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let pending = form.write().begin_submit();
        let client = client.clone();
        log_info!(
            "Submitting group ({} {})",
            pending.endpoint.method,
            pending.endpoint.url
        );

        spawn(async move {
            let result = client
                .call_endpoint(&pending.endpoint, &pending.request)
                .await;
            let outcome = form.write().finish_submit(pending.token, result);
            match outcome {
                SubmitOutcome::Navigate(url) => {
                    log_info!("Group created, navigating to {}", url);
                    if !set_location(&url) {
                        form.write().restore_from_history();
                    }
                }
                SubmitOutcome::Saved => log_info!("Group saved"),
                SubmitOutcome::Superseded => {
                    log_debug!("Group saved, but the draft changed while saving")
                }
                SubmitOutcome::Failed(message) => log_warn!("Saving group failed: {}", message),
            }
        });
    };

    let view = form.cloned();
    let draft = view.draft().clone();
    let back_link = view.group().map(|g| g.link.clone());
    let heading = view.heading();
    let submit_label = view.submit_label();

    rsx! {
        div { class: "text-grey-6 text-sm/relaxed",
            h1 {
                class: "mt-14 mb-8 text-grey-7 text-xl/none",
                "data-testid": "header",
                "{heading}"
            }

            form { onsubmit: handle_submit, "data-testid": "form",
                TextField {
                    label: "Name",
                    value: draft.name.clone(),
                    on_change_value: move |name: String| form.write().edit(DraftEdit::Name(name)),
                    limits: NAME_LIMITS,
                    testid: "name",
                    autofocus: true,
                    required: true,
                }
                TextField {
                    label: "Description",
                    value: draft.description.clone(),
                    on_change_value: move |description: String| {
                        form.write().edit(DraftEdit::Description(description))
                    },
                    limits: DESCRIPTION_LIMITS,
                    testid: "description",
                    kind: TextInputKind::Textarea,
                    class: "h-24",
                }

                if view.shows_group_type() {
                    Label { id: group_type_label.clone(), text: "Group type" }
                    GroupTypeSelector {
                        labelled_by: group_type_label.clone(),
                        selected: draft.group_type,
                        onchange: move |group_type: GroupType| form.write().edit(DraftEdit::GroupType(group_type)),
                    }
                }

                div { class: "flex items-center gap-x-4 mt-2",
                    div { "data-testid": "error-container", role: "alert",
                        if let Some(message) = view.error_message() {
                            div {
                                class: "text-red-error font-bold flex items-center gap-x-2",
                                "data-testid": "error-message",
                                span { "✕" }
                                "{message}"
                            }
                        }
                    }
                    div { class: "grow" }
                    SaveStateIcon { state: view.save_state() }
                    Button {
                        r#type: "submit",
                        disabled: view.is_submit_disabled(),
                        testid: "button",
                        "{submit_label}"
                    }
                }
            }

            footer { class: "mt-14 pt-4 border-t border-t-text-grey-6",
                div { class: "flex",
                    if let Some(link) = back_link {
                        a { href: "{link}", "data-testid": "back-link", "← Back to group overview page" }
                    }
                    div { class: "grow" }
                    RequiredStar {}
                    " Required"
                }
            }
        }
    }
}

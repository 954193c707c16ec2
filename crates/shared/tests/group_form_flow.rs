use groupforms_shared::{
    ApiError, DraftEdit, FormConfig, GroupForm, GroupType, SaveState, SubmitOutcome,
    NAME_LIMITS,
};
use serde_json::{json, Value};

fn create_config(group_type: bool) -> FormConfig {
    FormConfig::from_json(
        &json!({
            "api": {"createGroup": {
                "url": "https://example.com/api/groups",
                "method": "POST",
                "headers": {"X-CSRF-Token": "secret"}
            }},
            "features": {"group_type": group_type},
            "styles": []
        })
        .to_string(),
    )
    .unwrap()
}

fn edit_config(group_type: bool) -> FormConfig {
    FormConfig::from_json(
        &json!({
            "context": {"group": {
                "pubid": "abc", "name": "Readers", "description": "Weekly reading",
                "type": "open", "link": "https://example.com/groups/abc/readers"
            }},
            "api": {
                "createGroup": {"url": "https://example.com/api/groups", "method": "POST"},
                "updateGroup": {"url": "https://example.com/api/groups/abc", "method": "PATCH"}
            },
            "features": {"group_type": group_type}
        })
        .to_string(),
    )
    .unwrap()
}

fn name_taken() -> ApiError {
    ApiError::Http {
        status: 409,
        body: json!({"status": "failure", "reason": "Name already taken"}).to_string(),
    }
}

#[test]
fn name_length_ceiling() {
    for len in [0, 1, 24, 25] {
        assert_eq!(NAME_LIMITS.validate(&"x".repeat(len), false), None, "len {len}");
    }
    for len in [26, 40] {
        assert!(NAME_LIMITS.validate(&"x".repeat(len), false).is_some(), "len {len}");
    }
}

#[test]
fn successful_create_navigates_to_new_group() {
    let mut form = GroupForm::new(&create_config(false)).unwrap();
    form.edit(DraftEdit::Name("Foo".to_string()));

    let pending = form.begin_submit();
    assert_eq!(pending.endpoint.url, "https://example.com/api/groups");
    assert_eq!(
        pending.endpoint.headers.get("X-CSRF-Token").map(String::as_str),
        Some("secret")
    );
    assert_eq!(pending.request.id, None);

    let outcome = form.finish_submit(pending.token, Ok(json!({"links": {"html": "/g/abc/foo"}})));
    assert_eq!(outcome, SubmitOutcome::Navigate("/g/abc/foo".to_string()));
}

#[test]
fn successful_update_goes_unsaved_saving_saved() {
    let mut form = GroupForm::new(&edit_config(true)).unwrap();
    form.edit(DraftEdit::Description("Monthly reading".to_string()));
    assert_eq!(form.save_state(), SaveState::Unsaved);

    let pending = form.begin_submit();
    assert_eq!(form.save_state(), SaveState::Saving);
    assert_eq!(pending.request.id.as_deref(), Some("abc"));
    assert_eq!(pending.request.description, "Monthly reading");

    let outcome = form.finish_submit(pending.token, Ok(Value::Null));
    assert_eq!(outcome, SubmitOutcome::Saved);
    assert_eq!(form.save_state(), SaveState::Saved);
}

#[test]
fn edit_during_update_keeps_form_unsaved() {
    let mut form = GroupForm::new(&edit_config(false)).unwrap();
    form.edit(DraftEdit::Name("Readers Club".to_string()));
    let pending = form.begin_submit();

    form.edit(DraftEdit::Name("Readers Club!".to_string()));
    let outcome = form.finish_submit(pending.token, Ok(json!({"links": {"html": "/g/abc"}})));

    assert_eq!(outcome, SubmitOutcome::Superseded);
    assert_eq!(form.save_state(), SaveState::Unsaved);
    assert_eq!(form.draft().name, "Readers Club!");
}

#[test]
fn failure_surfaces_message_and_keeps_draft() {
    for config in [create_config(true), edit_config(true)] {
        let mut form = GroupForm::new(&config).unwrap();
        form.edit(DraftEdit::Name("Taken".to_string()));
        form.edit(DraftEdit::Description("Some text".to_string()));
        let before = form.draft().clone();

        let pending = form.begin_submit();
        let outcome = form.finish_submit(pending.token, Err(name_taken()));

        assert_eq!(outcome, SubmitOutcome::Failed("Name already taken".to_string()));
        assert_eq!(form.error_message(), Some("Name already taken"));
        assert_eq!(form.save_state(), SaveState::Unsaved);
        assert_eq!(form.draft(), &before);
    }
}

#[test]
fn history_restore_resets_to_unmodified() {
    let mut form = GroupForm::new(&edit_config(false)).unwrap();
    form.edit(DraftEdit::Name("Changed".to_string()));
    form.restore_from_history();
    assert_eq!(form.save_state(), SaveState::Unmodified);

    let pending = form.begin_submit();
    form.finish_submit(pending.token, Ok(Value::Null));
    form.restore_from_history();
    assert_eq!(form.save_state(), SaveState::Unmodified);
}

#[test]
fn hidden_group_type_submits_default_or_existing_type() {
    let mut create = GroupForm::new(&create_config(false)).unwrap();
    assert!(!create.shows_group_type());
    assert_eq!(create.begin_submit().request.group_type, GroupType::Private);

    let mut edit = GroupForm::new(&edit_config(false)).unwrap();
    assert!(!edit.shows_group_type());
    assert_eq!(edit.begin_submit().request.group_type, GroupType::Open);
}

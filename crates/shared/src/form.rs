//! Create/edit group form controller.
//!
//! Holds the draft, the save state and the error message, and decides what a
//! submission sends and what its result means. The caller performs the actual
//! HTTP call between [`GroupForm::begin_submit`] and
//! [`GroupForm::finish_submit`].

use serde_json::Value;

use crate::config::{ApiEndpoint, FormConfig};
use crate::error::{ApiError, ConfigError};
use crate::models::{CreateUpdateGroupRequest, CreateUpdateGroupResponse, Group, GroupType};
use crate::save_state::{SaveState, SaveToken, SaveTracker};

/// Local, unsaved edits to a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub group_type: GroupType,
}

impl GroupDraft {
    pub fn from_group(group: Option<&Group>) -> Self {
        match group {
            Some(group) => Self {
                name: group.name.clone(),
                description: group.description.clone(),
                group_type: group.group_type,
            },
            None => Self::default(),
        }
    }
}

/// A user edit to one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    Description(String),
    GroupType(GroupType),
}

/// Everything the caller needs to perform one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub token: SaveToken,
    pub endpoint: ApiEndpoint,
    pub request: CreateUpdateGroupRequest,
}

/// What to do once a submission's response has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Group created; send the browser to its page.
    Navigate(String),
    Saved,
    /// Update succeeded but the user edited in the meantime.
    Superseded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupForm {
    group: Option<Group>,
    endpoint: ApiEndpoint,
    group_type_enabled: bool,
    draft: GroupDraft,
    tracker: SaveTracker,
    error_message: Option<String>,
}

impl GroupForm {
    pub fn new(config: &FormConfig) -> Result<Self, ConfigError> {
        let group = config.group().cloned();
        Ok(Self {
            endpoint: config.submit_endpoint()?.clone(),
            group_type_enabled: config.features.group_type,
            draft: GroupDraft::from_group(group.as_ref()),
            group,
            tracker: SaveTracker::new(),
            error_message: None,
        })
    }

    pub fn is_edit_mode(&self) -> bool {
        self.group.is_some()
    }

    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    pub fn draft(&self) -> &GroupDraft {
        &self.draft
    }

    pub fn save_state(&self) -> SaveState {
        self.tracker.state()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn edit(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(name) => self.draft.name = name,
            DraftEdit::Description(description) => self.draft.description = description,
            DraftEdit::GroupType(group_type) => self.draft.group_type = group_type,
        }
        self.tracker.mark_edited();
    }

    /// Start a submission: clears the error and moves to `Saving`.
    pub fn begin_submit(&mut self) -> PendingSubmission {
        self.error_message = None;
        let token = self.tracker.begin_save();
        let request = CreateUpdateGroupRequest {
            id: self.group.as_ref().map(|g| g.pubid.clone()),
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
            group_type: self.draft.group_type,
        };
        PendingSubmission {
            token,
            endpoint: self.endpoint.clone(),
            request,
        }
    }

    /// Apply the API result of the submission identified by `token`.
    pub fn finish_submit(
        &mut self,
        token: SaveToken,
        result: Result<Value, ApiError>,
    ) -> SubmitOutcome {
        let result = result.and_then(|body| {
            if self.is_edit_mode() {
                Ok(None)
            } else {
                serde_json::from_value::<CreateUpdateGroupResponse>(body)
                    .map(|response| Some(response.links.html))
                    .map_err(|e| ApiError::Deserialize(e.to_string()))
            }
        });

        match result {
            Ok(Some(url)) => SubmitOutcome::Navigate(url),
            Ok(None) => {
                if self.tracker.save_succeeded(token) {
                    SubmitOutcome::Saved
                } else {
                    SubmitOutcome::Superseded
                }
            }
            Err(err) => {
                let message = err.user_message();
                if self.tracker.save_failed(token) {
                    self.error_message = Some(message.clone());
                }
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub fn restore_from_history(&mut self) {
        self.tracker.restore_from_history();
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit group"
        } else if self.group_type_enabled {
            "Create a new group"
        } else {
            "Create a new private group"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit_mode() {
            "Save changes"
        } else {
            "Create group"
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.save_state() == SaveState::Saving
    }

    pub fn shows_group_type(&self) -> bool {
        self.group_type_enabled
    }

    /// Unload warnings only apply when editing: after a successful create the
    /// page navigates away on purpose.
    pub fn warns_on_unload(&self) -> bool {
        self.is_edit_mode() && self.save_state().warns_on_unload()
    }
}

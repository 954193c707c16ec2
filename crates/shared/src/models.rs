//! Group data and the request/response bodies of the group API.

use serde::{Deserialize, Deserializer, Serialize};

/// Accept `null` where an empty string is meant.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Visibility and permission mode of a group.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    #[default]
    Private,
    Restricted,
    Open,
}

impl GroupType {
    pub const ALL: [GroupType; 3] = [GroupType::Private, GroupType::Restricted, GroupType::Open];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Restricted => "restricted",
            Self::Open => "open",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::Restricted => "Restricted",
            Self::Open => "Open",
        }
    }

    /// One-line explanation shown under the radio option.
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Private => "Only members can create and read annotations.",
            Self::Restricted => "Only members can create annotations, anyone can read them.",
            Self::Open => "Anyone can create and read annotations.",
        }
    }
}

/// An existing group, as embedded in the page when editing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub pubid: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    /// URL of the group's overview page.
    pub link: String,
}

/// Body of both `createGroup` and `updateGroup` calls.
///
/// `id` is only sent when updating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUpdateGroupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupLinks {
    pub html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUpdateGroupResponse {
    pub links: GroupLinks,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_request_carries_id_and_type_key() {
        let body = CreateUpdateGroupRequest {
            id: Some("abc123".to_string()),
            name: "Readers".to_string(),
            description: "".to_string(),
            group_type: GroupType::Restricted,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"id": "abc123", "name": "Readers", "description": "", "type": "restricted"})
        );
    }

    #[test]
    fn create_request_omits_id() {
        let body = CreateUpdateGroupRequest {
            id: None,
            name: "Readers".to_string(),
            description: "Weekly".to_string(),
            group_type: GroupType::Private,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["type"], "private");
    }

    #[test]
    fn group_type_rejects_unknown_values() {
        assert!(serde_json::from_value::<GroupType>(json!("secret")).is_err());
        assert_eq!(
            serde_json::from_value::<GroupType>(json!("open")).unwrap(),
            GroupType::Open
        );
    }
}

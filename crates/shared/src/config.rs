//! Page-embedded configuration, validated once at load.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;
use crate::models::Group;

/// HTTP methods an API endpoint may be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ConfigError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl Serialize for HttpMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Where and how to call one API operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub url: String,
    pub method: HttpMethod,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub create_group: ApiEndpoint,
    #[serde(default)]
    pub update_group: Option<ApiEndpoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Features {
    /// Whether the user may pick the group type.
    #[serde(default)]
    pub group_type: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContext {
    #[serde(default)]
    pub group: Option<Group>,
}

/// Crash-reporter settings. Absent means reporting stays off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentryConfig {
    pub dsn: String,
    pub release: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfig {
    #[serde(default)]
    pub context: PageContext,
    pub api: ApiConfig,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub sentry: Option<SentryConfig>,
}

impl FormConfig {
    /// Parse and validate the JSON blob the host page embeds.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.create_group.url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("createGroup"));
        }
        if let Some(update) = &self.api.update_group {
            if update.url.trim().is_empty() {
                return Err(ConfigError::EmptyUrl("updateGroup"));
            }
        }
        self.submit_endpoint().map(|_| ())
    }

    pub fn group(&self) -> Option<&Group> {
        self.context.group.as_ref()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.context.group.is_some()
    }

    /// The endpoint the form submits to: update when editing, create otherwise.
    pub fn submit_endpoint(&self) -> Result<&ApiEndpoint, ConfigError> {
        if self.is_edit_mode() {
            self.api
                .update_group
                .as_ref()
                .ok_or(ConfigError::MissingUpdateEndpoint)
        } else {
            Ok(&self.api.create_group)
        }
    }
}

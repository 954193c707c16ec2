//! Crash-report payloads and DSN handling.
//!
//! The client forwards these to a Sentry-compatible store endpoint; this
//! module only knows how to address and shape them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use crate::error::ReportingError;

const SENTRY_VERSION: u8 = 7;

/// Parsed `https://<key>@<host>[:port]/<project>` DSN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn {
    public_key: String,
    store_url: String,
}

impl Dsn {
    pub fn parse(dsn: &str) -> Result<Self, ReportingError> {
        let invalid = || ReportingError::InvalidDsn(dsn.to_string());
        let url = Url::parse(dsn).map_err(|_| invalid())?;

        let public_key = url.username();
        if public_key.is_empty() {
            return Err(invalid());
        }
        let host = url.host_str().ok_or_else(invalid)?;
        let project = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|p| !p.is_empty())
            .ok_or_else(invalid)?;

        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        Ok(Self {
            public_key: public_key.to_string(),
            store_url: format!("{}://{}/api/{}/store/", url.scheme(), authority, project),
        })
    }

    pub fn store_url(&self) -> &str {
        &self.store_url
    }

    /// Value of the `X-Sentry-Auth` header.
    pub fn auth_header(&self, client: &str) -> String {
        format!(
            "Sentry sentry_version={}, sentry_client={}, sentry_key={}",
            SENTRY_VERSION, client, self.public_key
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrashEvent {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
    pub release: String,
    pub message: String,
    pub extra: Map<String, Value>,
}

impl CrashEvent {
    /// Build an event for `message` that happened during `when`.
    ///
    /// `extra` fields are merged after `when`, so a caller-supplied `when`
    /// key takes precedence.
    pub fn new(
        release: &str,
        message: impl Into<String>,
        when: &str,
        extra: Option<Map<String, Value>>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("when".to_string(), Value::String(when.to_string()));
        fields.extend(extra.unwrap_or_default());

        Self {
            event_id: Uuid::new_v4().simple().to_string(),
            timestamp: Utc::now(),
            platform: "javascript".to_string(),
            release: release.to_string(),
            message: message.into(),
            extra: fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_dsn_into_store_url() {
        let dsn = Dsn::parse("https://abc123@sentry.example.com/42").unwrap();
        assert_eq!(dsn.store_url(), "https://sentry.example.com/api/42/store/");
        assert_eq!(
            dsn.auth_header("groupforms/0.1.0"),
            "Sentry sentry_version=7, sentry_client=groupforms/0.1.0, sentry_key=abc123"
        );
    }

    #[test]
    fn keeps_explicit_port() {
        let dsn = Dsn::parse("http://key@localhost:9000/7").unwrap();
        assert_eq!(dsn.store_url(), "http://localhost:9000/api/7/store/");
    }

    #[test]
    fn rejects_dsn_without_key_or_project() {
        assert!(Dsn::parse("https://sentry.example.com/42").is_err());
        assert!(Dsn::parse("https://key@sentry.example.com/").is_err());
        assert!(Dsn::parse("not a url").is_err());
    }

    #[test]
    fn event_carries_context_and_extra_fields() {
        let mut extra = Map::new();
        extra.insert("url".to_string(), json!("foobar.com"));
        let event = CrashEvent::new("1.2.3", "an error", "some operation", Some(extra));

        assert_eq!(event.message, "an error");
        assert_eq!(event.release, "1.2.3");
        assert_eq!(
            Value::Object(event.extra),
            json!({"when": "some operation", "url": "foobar.com"})
        );
        assert_eq!(event.event_id.len(), 32);
    }
}

//! Crash-reporting shim.
//!
//! [`init`] installs a process-wide reporter (and, on the web, a handler for
//! unhandled promise rejections); [`report`] forwards an error's message plus
//! context to the configured Sentry-compatible endpoint. Delivery is
//! fire-and-forget: failures are logged and never reach the user.

use std::fmt::Display;

use groupforms_shared::{CrashEvent, Dsn, ReportingError};
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};

const CLIENT_NAME: &str = concat!("groupforms/", env!("CARGO_PKG_VERSION"));

static REPORTER: OnceCell<ErrorReporter> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct ErrorReporter {
    dsn: Dsn,
    release: String,
}

impl ErrorReporter {
    pub fn new(dsn: &str, release: impl Into<String>) -> Result<Self, ReportingError> {
        Ok(Self {
            dsn: Dsn::parse(dsn)?,
            release: release.into(),
        })
    }

    pub fn event(
        &self,
        error: &dyn Display,
        when: &str,
        extra: Option<Map<String, Value>>,
    ) -> CrashEvent {
        CrashEvent::new(&self.release, error.to_string(), when, extra)
    }

    pub async fn send(&self, event: &CrashEvent) -> Result<(), reqwest::Error> {
        reqwest::Client::new()
            .post(self.dsn.store_url())
            .header("X-Sentry-Auth", self.dsn.auth_header(CLIENT_NAME))
            .json(event)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Install the global reporter. Can only succeed once per process.
pub fn init(dsn: &str, release: &str) -> Result<(), ReportingError> {
    let reporter = ErrorReporter::new(dsn, release)?;
    REPORTER
        .set(reporter)
        .map_err(|_| ReportingError::AlreadyInitialized)?;
    install_rejection_handler();
    Ok(())
}

/// Report `error` that happened during `when`.
///
/// Returns `false` when no reporter is installed.
pub fn report(error: &dyn Display, when: &str, extra: Option<Map<String, Value>>) -> bool {
    let Some(reporter) = REPORTER.get() else {
        crate::log_debug!("Crash reporting disabled, dropping report: {}", error);
        return false;
    };
    let event = reporter.event(error, when, extra);
    dispatch(reporter.clone(), event)
}

#[cfg(target_arch = "wasm32")]
fn dispatch(reporter: ErrorReporter, event: CrashEvent) -> bool {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = reporter.send(&event).await {
            crate::log_warn!("Failed to deliver crash report {}: {}", event.event_id, e);
        }
    });
    true
}

#[cfg(not(target_arch = "wasm32"))]
fn dispatch(reporter: ErrorReporter, event: CrashEvent) -> bool {
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        crate::log_warn!("No async runtime, dropping crash report {}", event.event_id);
        return false;
    };
    handle.spawn(async move {
        if let Err(e) = reporter.send(&event).await {
            crate::log_warn!("Failed to deliver crash report {}: {}", event.event_id, e);
        }
    });
    true
}

#[cfg(target_arch = "wasm32")]
fn install_rejection_handler() {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::wrap(Box::new(move |e: web_sys::PromiseRejectionEvent| {
        let message = rejection_message(&e.reason());
        report(&message, "Unhandled promise rejection", None);
    }) as Box<dyn FnMut(web_sys::PromiseRejectionEvent)>);
    if let Err(e) = window
        .add_event_listener_with_callback("unhandledrejection", callback.as_ref().unchecked_ref())
    {
        crate::log_error!("Failed to install rejection handler: {:?}", e);
        return;
    }
    // Lives as long as the page.
    callback.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn install_rejection_handler() {}

/// Message of an Error-like rejection reason, else its string form.
#[cfg(target_arch = "wasm32")]
fn rejection_message(reason: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = reason.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(message) = js_sys::Reflect::get(reason, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
    {
        return message;
    }
    reason
        .as_string()
        .unwrap_or_else(|| format!("{:?}", reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_uses_error_message_and_context() {
        let reporter = ErrorReporter::new("https://key@sentry.example.com/3", "1.0").unwrap();
        let error = groupforms_shared::ApiError::Network("offline".to_string());
        let mut extra = Map::new();
        extra.insert("url".to_string(), json!("foobar.com"));

        let event = reporter.event(&error, "some operation", Some(extra));
        assert_eq!(event.message, "Network error: offline");
        assert_eq!(event.extra["when"], "some operation");
        assert_eq!(event.extra["url"], "foobar.com");
    }

    #[test]
    fn rejects_bad_dsn() {
        assert!(matches!(
            ErrorReporter::new("sentry.example.com", "1.0"),
            Err(ReportingError::InvalidDsn(_))
        ));
    }

    #[test]
    fn report_without_reporter_is_dropped() {
        // Tests never call `init`, so the global stays empty.
        assert!(!report(&"boom", "testing", None));
    }
}

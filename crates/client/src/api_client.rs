//! HTTP client for the group API endpoints named in the page configuration.

use groupforms_shared::{ApiEndpoint, ApiError, HttpMethod};
use reqwest::{Client, Method, Request};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Calls configured endpoints with their method and headers.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<Url>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Set the URL relative endpoint URLs are resolved against
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Client whose relative URLs resolve against the current page.
    #[cfg(target_arch = "wasm32")]
    pub fn for_current_page() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .and_then(|href| Url::parse(&href).ok());
        match origin {
            Some(base) => Self::new().with_base_url(base),
            None => Self::new(),
        }
    }

    /// Desktop has no page; relative URLs resolve against `GROUPFORMS_BASE_URL`
    /// when it is set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_current_page() -> Self {
        match base_url_from(std::env::var(BASE_URL_ENV).ok()) {
            Some(base) => Self::new().with_base_url(base),
            None => Self::new(),
        }
    }

    pub fn resolve(&self, url: &str) -> Result<Url, ApiError> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base
                    .join(url)
                    .map_err(|e| ApiError::Network(format!("invalid URL `{url}`: {e}"))),
                None => Err(ApiError::Network(format!(
                    "relative URL `{url}` without a base URL"
                ))),
            },
            Err(e) => Err(ApiError::Network(format!("invalid URL `{url}`: {e}"))),
        }
    }

    /// Build the request for `endpoint`. A JSON content type is added unless
    /// the endpoint configures its own.
    pub fn build_request<TReq: Serialize>(
        &self,
        endpoint: &ApiEndpoint,
        body: &TReq,
    ) -> Result<Request, ApiError> {
        let url = self.resolve(&endpoint.url)?;
        let body_bytes = serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;

        let mut rb = self.client.request(to_method(endpoint.method), url);
        let has_content_type = endpoint
            .headers
            .keys()
            .any(|name| name.eq_ignore_ascii_case("content-type"));
        if !has_content_type {
            rb = rb.header("Content-Type", "application/json");
        }
        for (name, value) in &endpoint.headers {
            rb = rb.header(name.as_str(), value.as_str());
        }

        rb.body(body_bytes)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Send `body` as JSON to `endpoint` and return the decoded JSON reply.
    ///
    /// An empty reply decodes as `null`.
    pub async fn call_endpoint<TReq: Serialize>(
        &self,
        endpoint: &ApiEndpoint,
        body: &TReq,
    ) -> Result<Value, ApiError> {
        let request = self.build_request(endpoint, body)?;
        let resp = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        if text.trim().is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub const BASE_URL_ENV: &str = "GROUPFORMS_BASE_URL";

#[cfg(not(target_arch = "wasm32"))]
fn base_url_from(value: Option<String>) -> Option<Url> {
    let value = value?;
    match Url::parse(&value) {
        Ok(base) => Some(base),
        Err(e) => {
            crate::log_warn!("Ignoring {}={}: {}", BASE_URL_ENV, value, e);
            None
        }
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absolute_urls_pass_through() {
        let client = ApiClient::new();
        let url = client.resolve("https://example.com/api/groups").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/groups");
    }

    #[test]
    fn relative_urls_need_a_base() {
        let client = ApiClient::new();
        assert!(matches!(
            client.resolve("/api/groups"),
            Err(ApiError::Network(_))
        ));

        let base = Url::parse("https://example.com/groups/new").unwrap();
        let client = ApiClient::new().with_base_url(base);
        assert_eq!(
            client.resolve("/api/groups").unwrap().as_str(),
            "https://example.com/api/groups"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn desktop_base_url_comes_from_environment_value() {
        assert_eq!(base_url_from(None), None);
        assert_eq!(base_url_from(Some("not a url".to_string())), None);

        let base = base_url_from(Some("http://localhost:5000/".to_string())).unwrap();
        let client = ApiClient::new().with_base_url(base);
        assert_eq!(
            client.resolve("/api/groups").unwrap().as_str(),
            "http://localhost:5000/api/groups"
        );
    }

    fn endpoint(headers: &[(&str, &str)]) -> ApiEndpoint {
        ApiEndpoint {
            url: "https://example.com/api/groups".to_string(),
            method: HttpMethod::Post,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn json_content_type_by_default() {
        let request = ApiClient::new()
            .build_request(&endpoint(&[("X-CSRF-Token", "tok")]), &json!({"name": "x"}))
            .unwrap();
        let content_types: Vec<_> = request
            .headers()
            .get_all("content-type")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(content_types, vec!["application/json"]);
        assert_eq!(request.headers()["x-csrf-token"].to_str().unwrap(), "tok");
        assert_eq!(request.method(), &Method::POST);
    }

    #[test]
    fn configured_content_type_is_sent_once() {
        let request = ApiClient::new()
            .build_request(
                &endpoint(&[("content-type", "application/vnd.api+json")]),
                &json!({}),
            )
            .unwrap();
        let content_types: Vec<_> = request
            .headers()
            .get_all("content-type")
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(content_types, vec!["application/vnd.api+json"]);
    }

    #[test]
    fn maps_configured_methods() {
        assert_eq!(to_method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(to_method(HttpMethod::Post), Method::POST);
    }
}

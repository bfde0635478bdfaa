use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use sitepulse_core::{KeyStore, keys};
use sitepulse_types::ApiEnvelope;

use crate::auth::{UnauthorizedAction, UnauthorizedPolicy, clear_credentials};
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Shared HTTP transport behind every resource service.
///
/// One `reqwest::Client` for the whole process; a bearer token from the
/// key store is attached to every request when present. The unauthorized
/// policy decides what a 401 means for the surface this transport serves
/// (`context_path` is the logical route the caller is operating from).
pub struct Transport {
    http: reqwest::Client,
    api_base: String,
    context_path: String,
    store: Arc<dyn KeyStore>,
    policy: Arc<dyn UnauthorizedPolicy>,
}

impl Transport {
    pub fn new(
        config: &ClientConfig,
        store: Arc<dyn KeyStore>,
        policy: Arc<dyn UnauthorizedPolicy>,
        context_path: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            context_path: context_path.into(),
            store,
            policy,
        })
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Build a request with the bearer token attached when one is stored.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.store.get(keys::TOKEN) {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send and decode a `{ "data": ... }` envelope, returning the payload.
    pub(crate) async fn send_enveloped<T: DeserializeOwned>(
        &self,
        route: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let response = self.check_status(route, response).await?;
        let envelope: ApiEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    /// Send and decode the body as-is (paged collections carry their own
    /// envelope).
    pub(crate) async fn send_raw<T: DeserializeOwned>(
        &self,
        route: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let response = self.check_status(route, response).await?;
        Ok(response.json().await?)
    }

    /// Send, check the status, discard the body (deletes).
    pub(crate) async fn send_no_content(&self, route: &str, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        self.check_status(route, response).await?;
        Ok(())
    }

    async fn check_status(&self, route: &str, response: Response) -> Result<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(self.handle_unauthorized());
        }
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(route.to_string()));
        }
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message: message_from_body(&body),
            });
        }

        debug!(route, status = status.as_u16(), "request ok");
        Ok(response)
    }

    /// Apply the unauthorized policy for this transport's surface.
    pub(crate) fn handle_unauthorized(&self) -> Error {
        match self.policy.on_unauthorized(&self.context_path) {
            UnauthorizedAction::Redirect => {
                clear_credentials(self.store.as_ref());
                Error::AuthRequired { redirect: true }
            }
            UnauthorizedAction::Propagate => Error::AuthRequired { redirect: false },
        }
    }
}

/// Pull the server's `message` field out of an error body, falling back to
/// the raw text, then to a generic string.
fn message_from_body(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body)
        && let Some(message) = value.get("message").and_then(|m| m.as_str())
    {
        return message.to_string();
    }

    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "request failed".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::PrefixPolicy;
    use sitepulse_core::MemoryStore;

    fn transport_at(context: &str, store: Arc<dyn KeyStore>) -> Transport {
        let config = ClientConfig {
            api_base: "https://api.example.com/api/".to_string(),
            ..ClientConfig::default()
        };
        Transport::new(&config, store, Arc::new(PrefixPolicy::default()), context).unwrap()
    }

    #[test]
    fn test_url_join_strips_trailing_slash() {
        let transport = transport_at("/", Arc::new(MemoryStore::new()));
        assert_eq!(
            transport.url("/services"),
            "https://api.example.com/api/services"
        );
    }

    #[test]
    fn test_request_omits_auth_header_without_token() {
        let transport = transport_at("/", Arc::new(MemoryStore::new()));
        let request = transport.request(Method::GET, "/services").build().unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_request_attaches_bearer_token() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::TOKEN, "tok-42").unwrap();

        let transport = transport_at("/", store);
        let request = transport.request(Method::GET, "/services").build().unwrap();

        let header = request.headers().get("authorization").unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok-42");
    }

    #[test]
    fn test_unauthorized_on_public_surface_clears_and_redirects() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::TOKEN, "stale").unwrap();
        store.set(keys::USER, "{}").unwrap();

        let transport = transport_at("/services", store.clone());
        let err = transport.handle_unauthorized();

        assert!(matches!(err, Error::AuthRequired { redirect: true }));
        assert!(store.get(keys::TOKEN).is_none());
        assert!(store.get(keys::USER).is_none());
    }

    #[test]
    fn test_unauthorized_on_admin_surface_propagates_and_keeps_credentials() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::TOKEN, "still-good-maybe").unwrap();

        let transport = transport_at("/admin/services", store.clone());
        let err = transport.handle_unauthorized();

        assert!(matches!(err, Error::AuthRequired { redirect: false }));
        assert!(store.get(keys::TOKEN).is_some());
    }

    #[test]
    fn test_message_from_body_prefers_server_message() {
        assert_eq!(
            message_from_body(br#"{"message": "slug already taken"}"#),
            "slug already taken"
        );
        assert_eq!(message_from_body(b"plain failure"), "plain failure");
        assert_eq!(message_from_body(b""), "request failed");
        assert_eq!(message_from_body(br#"{"error": true}"#), r#"{"error": true}"#);
    }
}

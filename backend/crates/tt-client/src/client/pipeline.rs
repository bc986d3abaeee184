use crate::client::{AuthEvent, ClientError, ClientResult, ListQuery};
use crate::session::CredentialStore;

use std::time::Duration;

use log::{debug, error, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 16;

/// Every request to the API goes through here.
///
/// Outgoing: the stored access token, if any, is attached as a bearer header.
/// Incoming: a 401 clears the stored tokens and broadcasts
/// [`AuthEvent::Unauthorized`]; any other non-2xx becomes [`ClientError::Api`]
/// with the body intact. Nothing is retried.
#[derive(Debug)]
pub struct Pipeline {
    base_url: String,
    http: ReqwestClient,
    credentials: CredentialStore,
    events: broadcast::Sender<AuthEvent>,
}

impl Pipeline {
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:8000/api")
    /// * `credentials` - where the bearer token is read from and cleared
    pub fn new(base_url: &str, credentials: CredentialStore) -> Self {
        Self::with_http(base_url, credentials, ReqwestClient::new())
    }

    pub fn with_timeout(
        base_url: &str,
        credentials: CredentialStore,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let http = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(base_url, credentials, http))
    }

    fn with_http(base_url: &str, credentials: CredentialStore, http: ReqwestClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            credentials,
            events,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Receive [`AuthEvent`]s sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    pub async fn get(&self, path: &str, query: &ListQuery) -> ClientResult<Value> {
        let mut req = self.request(Method::GET, path)?;
        if !query.is_empty() {
            req = req.query(query.params());
        }
        self.execute(Method::GET, path, req).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let req = self.request(Method::POST, path)?.json(body);
        self.execute(Method::POST, path, req).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let req = self.request(Method::PUT, path)?.json(body);
        self.execute(Method::PUT, path, req).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, path)?;
        self.execute(Method::DELETE, path, req).await
    }

    /// Build a request with the bearer header when a token is stored
    fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);

        if let Some(token) = self.credentials.access_token()? {
            req = req.bearer_auth(token);
        }

        Ok(req)
    }

    /// Execute request and handle errors
    async fn execute(&self, method: Method, path: &str, req: RequestBuilder) -> ClientResult<Value> {
        debug!("{method} {path}");

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("{method} {path} -> {}", status.as_u16());

        if status == StatusCode::UNAUTHORIZED {
            self.reject_session(path);
            return Err(ClientError::unauthorized(path, error_body(&text)));
        }

        if !status.is_success() {
            return Err(ClientError::api(status.as_u16(), error_body(&text)));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    fn reject_session(&self, path: &str) {
        warn!("Server rejected credentials for {path}; clearing stored tokens");

        if let Err(e) = self.credentials.clear_tokens() {
            error!("Failed to clear stored tokens: {e}");
        }

        // No subscribers is fine.
        let _ = self.events.send(AuthEvent::Unauthorized {
            path: path.to_string(),
        });
    }
}

/// Error bodies that are not JSON are kept as `{"detail": <text>}`.
fn error_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "detail": text.trim() }))
}

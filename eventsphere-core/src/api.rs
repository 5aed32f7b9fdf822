//! HTTP client for the EventSphere backend.
//!
//! Every response body is decoded into one concrete type here; a body that
//! does not fit is a contract failure rather than something callers sniff at.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::session::Session;

/// Whether a request carries the session's bearer token.
#[derive(Clone, Copy)]
pub enum Access<'a> {
    /// Attach `Authorization: Bearer <token>` when a token is present.
    Session(&'a Session),
    /// Send no credentials (public invitation links).
    Public,
}

/// Error bodies the backend sends: either a bare string or an object with a
/// `message` (or `error`) field.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    Text(String),
    Object {
        message: Option<String>,
        error: Option<String>,
    },
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        url::Url::parse(&base_url)
            .map_err(|e| ClientError::Config(format!("Invalid API URL '{base_url}': {e}")))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(ApiClient { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, access: Access<'_>) -> RequestBuilder {
        let request = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match access {
            Access::Session(session) => match session.get() {
                Some(token) => request.bearer_auth(token),
                None => request,
            },
            Access::Public => request,
        }
    }

    /// GET and decode.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, access: Access<'_>) -> ClientResult<T> {
        let resp = self.send(self.request(Method::GET, path, access), "GET", path).await?;
        decode(resp, path).await
    }

    /// POST a JSON body and decode the reply.
    pub async fn post<B, T>(&self, path: &str, body: &B, access: Access<'_>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, access).json(body);
        let resp = self.send(request, "POST", path).await?;
        decode(resp, path).await
    }

    /// POST a JSON body and return the reply as plain text.
    pub async fn post_for_text<B>(&self, path: &str, body: &B, access: Access<'_>) -> ClientResult<String>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, access).json(body);
        let resp = self.send(request, "POST", path).await?;
        resp.text()
            .await
            .map(|text| text.trim().to_string())
            .map_err(|e| ClientError::Network(format!("Failed to read response from {path}: {e}")))
    }

    /// Send a JSON body with `method`, ignoring whatever the backend replies
    /// with on success.
    pub async fn send_json<B>(&self, method: Method, path: &str, body: &B, access: Access<'_>) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let label = method.to_string();
        let request = self.request(method, path, access).json(body);
        self.send(request, &label, path).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str, access: Access<'_>) -> ClientResult<()> {
        self.send(self.request(Method::DELETE, path, access), "DELETE", path)
            .await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, method: &str, path: &str) -> ClientResult<Response> {
        debug!(method, path, "sending request");

        let resp = request.send().await.map_err(|e| {
            warn!(method, path, error = %e, "backend unreachable");
            ClientError::Network(format!("Failed to connect to {}: {e}", self.base_url))
        })?;

        let status = resp.status();
        debug!(method, path, status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(resp);
        }

        let message = parse_error_message(&resp.text().await.unwrap_or_default());
        warn!(method, path, status = status.as_u16(), %message, "backend returned an error");

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(if message.is_empty() {
                path.to_string()
            } else {
                message
            }));
        }

        Err(ClientError::Backend {
            status: status.as_u16(),
            message: if message.is_empty() {
                fallback_message(status)
            } else {
                message
            },
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response, path: &str) -> ClientResult<T> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ClientError::Network(format!("Failed to read response from {path}: {e}")))?;

    serde_json::from_slice(&bytes).map_err(|e| ClientError::Contract(format!("{path}: {e}")))
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

fn parse_error_message(body: &str) -> String {
    let body = body.trim();

    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(ErrorPayload::Text(text)) => text,
        Ok(ErrorPayload::Object { message, error }) => message.or(error).unwrap_or_default(),
        // Not JSON at all: the backend sent a plain-text message.
        Err(_) if !body.starts_with('{') && !body.starts_with('<') => body.to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_error() {
        assert_eq!(parse_error_message("Invalid credentials"), "Invalid credentials");
    }

    #[test]
    fn json_string_error() {
        assert_eq!(parse_error_message("\"Email already in use\""), "Email already in use");
    }

    #[test]
    fn json_object_error() {
        assert_eq!(
            parse_error_message(r#"{"message":"Event not found","status":404}"#),
            "Event not found"
        );
        assert_eq!(parse_error_message(r#"{"error":"Bad Request"}"#), "Bad Request");
    }

    #[test]
    fn html_error_page_is_ignored() {
        assert_eq!(parse_error_message("<html><body>502</body></html>"), "");
    }

    #[test]
    fn base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        assert!(matches!(ApiClient::new("not a url"), Err(ClientError::Config(_))));
    }
}

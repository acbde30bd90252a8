/// API Client: the single point of entry for every call to the RecruitSage backend.
///
/// ARCHITECTURAL RULE: pages and view models never build HTTP requests themselves.
/// Resource clients in `crate::api` wrap this module with fixed paths and typed shapes.
///
/// No retries, no caching, no de-duplication of identical in-flight calls, no timeout.
use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::session::SharedTokenStore;

pub mod headers;

/// What went wrong, coarsely. The message is what users see.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestErrorKind {
    /// The request never produced a response.
    Transport,
    /// The backend answered with a non-success status.
    Status(u16),
    /// A success response whose body did not have the expected shape.
    Decode,
    /// The request body could not be serialized; nothing was sent.
    Encode,
}

/// A response body: JSON when it parses, raw text otherwise. Error bodies are kept
/// on `RequestError` so structured payloads are never dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestError {
    pub kind: RequestErrorKind,
    pub message: String,
    pub body: Option<ResponseBody>,
}

impl RequestError {
    pub(crate) fn transport(fallback: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            kind: RequestErrorKind::Transport,
            message: format!("{fallback}: {cause}"),
            body: None,
        }
    }

    fn status(status: u16, body: ResponseBody, fallback: &str) -> Self {
        Self {
            kind: RequestErrorKind::Status(status),
            message: error_message(&body, fallback),
            body: Some(body),
        }
    }

    fn encode(fallback: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            kind: RequestErrorKind::Encode,
            message: format!("{fallback}: {cause}"),
            body: None,
        }
    }

    fn decode(fallback: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            kind: RequestErrorKind::Decode,
            message: format!("{fallback}: {cause}"),
            body: None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.kind {
            RequestErrorKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// A body that failed to serialize. Sending is refused.
    Unserializable(serde_json::Error),
    /// Content-type is left to the transport so the boundary parameter stays intact.
    Multipart(Form),
}

/// One outbound call: method, path relative to the base URL, extra path segments
/// (escaped when the URL is built), body, caller headers, and the message to show
/// when the backend gives no `detail`.
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    segments: Vec<String>,
    body: RequestBody,
    headers: HeaderMap,
    fallback: &'static str,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            segments: Vec::new(),
            body: RequestBody::Empty,
            headers: HeaderMap::new(),
            fallback: "Request failed",
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one path segment, e.g. an id. `/` and other reserved characters
    /// are percent-encoded.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn fallback(mut self, message: &'static str) -> Self {
        self.fallback = message;
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        self.body = match serde_json::to_value(body) {
            Ok(value) => RequestBody::Json(value),
            Err(e) => RequestBody::Unserializable(e),
        };
        self
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Caller headers override the default JSON content-type.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// Session-aware client shared by every resource client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: SharedTokenStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: SharedTokenStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the request and returns the parsed JSON body unchanged.
    /// An empty success body (e.g. `204 No Content`) is returned as `Value::Null`.
    pub async fn request(&self, request: ApiRequest) -> Result<Value, RequestError> {
        let ApiRequest {
            method,
            path,
            segments,
            body,
            headers: caller_headers,
            fallback,
        } = request;

        if let RequestBody::Unserializable(e) = &body {
            return Err(RequestError::encode(fallback, e));
        }

        let url = self
            .url(&path, &segments)
            .map_err(|e| RequestError::transport(fallback, e))?;
        let path = url.path().to_string();

        let token = self.tokens.get_token();
        let is_multipart = matches!(body, RequestBody::Multipart(_));
        let merged = headers::merge(&caller_headers, is_multipart, token.as_deref())
            .map_err(|e| RequestError::transport(fallback, e))?;

        let mut builder = self.client.request(method.clone(), url).headers(merged);
        builder = match body {
            RequestBody::Empty | RequestBody::Unserializable(_) => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        debug!(
            "{} {} (bearer: {})",
            method,
            path,
            if token.is_some() { "yes" } else { "no" }
        );

        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::transport(fallback, e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::transport(fallback, e))?;
        let body = parse_body(text);

        if !status.is_success() {
            let err = RequestError::status(status.as_u16(), body, fallback);
            warn!("{} {} returned {}: {}", method, path, status, err.message);
            return Err(err);
        }

        debug!("{} {} returned {}", method, path, status);

        match body {
            ResponseBody::Json(value) => Ok(value),
            ResponseBody::Text(text) if text.trim().is_empty() => Ok(Value::Null),
            ResponseBody::Text(_) => Err(RequestError::decode(
                fallback,
                "response body is not valid JSON",
            )),
        }
    }

    fn url(&self, path: &str, segments: &[String]) -> Result<Url, String> {
        let mut url =
            Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| e.to_string())?;
        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| format!("{} cannot take path segments", self.base_url))?
                .extend(segments);
        }
        Ok(url)
    }

    /// Convenience wrapper that deserializes the JSON body into `T`.
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, RequestError> {
        let fallback = request.fallback;
        let value = self.request(request).await?;
        serde_json::from_value(value).map_err(|e| RequestError::decode(fallback, e))
    }
}

/// Parses a response body as JSON, keeping the raw text when it is not JSON.
fn parse_body(text: String) -> ResponseBody {
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(text),
    }
}

/// `detail` wins when present; otherwise the per-call fallback.
fn error_message(body: &ResponseBody, fallback: &str) -> String {
    let detail = match body {
        ResponseBody::Json(value) => value.get("detail"),
        ResponseBody::Text(_) => None,
    };
    match detail {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}

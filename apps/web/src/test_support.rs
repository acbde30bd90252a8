//! In-process fake RecruitSage backend for request-level tests.
//!
//! Canned responses are keyed by method and path; every request is recorded with
//! its headers and body. Multipart bodies are additionally split into fields.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone)]
enum Canned {
    Json(u16, Value),
    Text(u16, String),
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub file_name: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub form: Vec<FormField>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json_body(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn form_text(&self, name: &str) -> Option<String> {
        self.form
            .iter()
            .find(|f| f.name == name)
            .map(|f| String::from_utf8_lossy(&f.data).into_owned())
    }

    pub fn form_file(&self, name: &str) -> Option<&FormField> {
        self.form.iter().find(|f| f.name == name)
    }
}

#[derive(Clone, Default)]
struct FakeState {
    routes: Arc<HashMap<(String, String), Canned>>,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

#[derive(Default)]
pub struct FakeBackend {
    routes: HashMap<(String, String), Canned>,
}

pub struct RunningBackend {
    pub base_url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: &str, path: &str, status: u16, body: Value) -> Self {
        self.routes
            .insert((method.to_string(), path.to_string()), Canned::Json(status, body));
        self
    }

    pub fn respond_text(mut self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(
            (method.to_string(), path.to_string()),
            Canned::Text(status, body.to_string()),
        );
        self
    }

    pub async fn start(self) -> RunningBackend {
        let state = FakeState {
            routes: Arc::new(self.routes),
            recorded: Arc::default(),
        };
        let recorded = state.recorded.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(handle).with_state(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningBackend {
            base_url: format!("http://{addr}"),
            recorded,
        }
    }
}

impl RunningBackend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(State(state): State<FakeState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();

    let is_multipart = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));
    let form = if is_multipart {
        read_form(&parts.headers, bytes.clone()).await
    } else {
        Vec::new()
    };

    state.recorded.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        headers: parts.headers.clone(),
        body: bytes,
        form,
    });

    match state.routes.get(&(method, path)) {
        Some(Canned::Json(status, body)) => {
            (status_code(*status), Json(body.clone())).into_response()
        }
        Some(Canned::Text(status, body)) => (status_code(*status), body.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"}))).into_response(),
    }
}

async fn read_form(headers: &HeaderMap, bytes: Bytes) -> Vec<FormField> {
    let mut builder = axum::http::Request::builder().method("POST").uri("/");
    for (name, value) in headers.iter() {
        builder = builder.header(name, value);
    }
    let Ok(request) = builder.body(Body::from(bytes)) else {
        return Vec::new();
    };
    let Ok(mut multipart) = Multipart::from_request(request, &()).await else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.unwrap_or_default();
        fields.push(FormField {
            name,
            file_name,
            data,
        });
    }
    fields
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

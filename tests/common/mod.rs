//! Shared test fixtures for integration tests.
//!
//! [`MockApi`] describes what each endpoint answers; [`serve`] runs it on an
//! ephemeral localhost port with axum so requests go over real HTTP.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rstest::fixture;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use udf_docs::HttpSource;

/// What an endpoint answers with.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Variants used across different integration test crates
pub enum Reply {
    /// `200 OK` with `{ "data": value }`.
    Data(Value),
    /// An error status with an empty body.
    Status(StatusCode),
    /// `200 OK` with a body that is not JSON.
    Garbage,
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Self::Data(data) => Json(json!({ "data": data })).into_response(),
            Self::Status(status) => status.into_response(),
            Self::Garbage => "<html>oops</html>".into_response(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MockApi {
    projects: Reply,
    functions: HashMap<String, Reply>,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl MockApi {
    pub fn new() -> Self {
        Self {
            projects: Reply::Data(json!([])),
            functions: HashMap::new(),
        }
    }

    /// Answer `/v1/projects` with something other than the registered list.
    pub fn projects_reply(mut self, reply: Reply) -> Self {
        self.projects = reply;
        self
    }

    /// Register a project (appended to the project list) and its functions reply.
    pub fn project(mut self, project: Value, functions: Reply) -> Self {
        let id = match &project["id"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if let Reply::Data(Value::Array(list)) = &mut self.projects {
            list.push(project);
        }
        self.functions.insert(id, functions);
        self
    }
}

/// A running mock API.
pub struct MockServer {
    pub origin: String,
    hits: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl MockServer {
    /// Request paths in the order they arrived.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().expect("hits lock").clone()
    }

    pub fn port(&self) -> u16 {
        self.origin
            .rsplit(':')
            .next()
            .and_then(|p| p.parse().ok())
            .expect("origin has a port")
    }
}

#[derive(Clone)]
struct AppState {
    api: Arc<MockApi>,
    hits: Arc<Mutex<Vec<String>>>,
}

async fn projects(State(state): State<AppState>) -> Reply {
    state
        .hits
        .lock()
        .expect("hits lock")
        .push("/v1/projects".to_string());
    state.api.projects.clone()
}

async fn functions(State(state): State<AppState>, Path(id): Path<String>) -> Reply {
    state
        .hits
        .lock()
        .expect("hits lock")
        .push(format!("/v1/projects/{}/functions", id));
    state
        .api
        .functions
        .get(&id)
        .cloned()
        .unwrap_or(Reply::Status(StatusCode::NOT_FOUND))
}

/// Serve `api` on `127.0.0.1` with an ephemeral port.
pub async fn serve(api: MockApi) -> MockServer {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let state = AppState {
        api: Arc::new(api),
        hits: hits.clone(),
    };

    let router = Router::new()
        .route("/v1/projects", get(projects))
        .route("/v1/projects/{id}/functions", get(functions))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener
        .local_addr()
        .expect("Failed to read mock API address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock API crashed");
    });

    MockServer {
        origin: format!("http://{}", addr),
        hits,
    }
}

/// An HTTP source that never routes localhost traffic through a proxy.
#[allow(dead_code)]
pub fn http_source(origin: impl Into<String>) -> HttpSource {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    HttpSource::with_client(client, origin)
}

/// A UDF payload as the API sends it.
#[allow(dead_code)]
pub fn udf_json(name: &str, params: &[(&str, bool, &str)]) -> Value {
    let params: Vec<_> = params
        .iter()
        .map(|(name, optional, data_type)| {
            json!({
                "name": name,
                "is_optional": optional,
                "data_type": data_type,
                "description": format!("The {}.", name),
            })
        })
        .collect();

    json!({
        "name": name,
        "description": format!("{} checks a condition.", name),
        "ordered_function_params": params,
    })
}

/// A built Sphinx functions page with a stale `udfs` section.
#[fixture]
#[allow(dead_code)]
pub fn functions_page() -> &'static str {
    concat!(
        "<!DOCTYPE html>\n<html><head><title>Functions</title></head><body>",
        r#"<div class="document"><div class="documentwrapper"><div class="bodywrapper">"#,
        r#"<div class="body" role="main">"#,
        r#"<div class="section" id="functions"><h1>Functions</h1></div>"#,
        r#"<div class="section" id="udfs"><h1>UDFs</h1><p>stale</p></div>"#,
        "</div></div></div></div>",
        r#"<div class="sphinxsidebar"></div>"#,
        "</body></html>\n",
    )
}

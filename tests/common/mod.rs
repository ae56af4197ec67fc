#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use on_this_day::config::DEFAULT_EVENT_MODEL;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub const PROXY_PATH: &str = "/api/create_n_get";

/// How the fake proxy answers one of the two models.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Text(&'static str),
    /// Panicking aborts the connection task, so the client sees a dropped connection.
    DropConnection,
    /// Holds the answer until the gate is opened.
    Gated(Arc<Notify>, Value),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub body: Value,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
}

struct Script {
    event: Reply,
    image: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

pub struct MockProxy {
    pub url: String,
    script: Arc<Script>,
}

impl MockProxy {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.calls.lock().unwrap().clone()
    }
}

pub async fn start_proxy(event: Reply, image: Reply) -> MockProxy {
    let script = Arc::new(Script {
        event,
        image,
        calls: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route(PROXY_PATH, post(answer))
        .with_state(Arc::clone(&script));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock proxy");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockProxy {
        url: format!("http://{addr}{PROXY_PATH}"),
        script,
    }
}

async fn answer(
    State(script): State<Arc<Script>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    script.calls.lock().unwrap().push(RecordedCall {
        body: body.clone(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        accept: header("accept"),
    });

    let reply = if body["model"] == DEFAULT_EVENT_MODEL {
        script.event.clone()
    } else {
        script.image.clone()
    };

    match reply {
        Reply::Json(value) => (StatusCode::OK, Json(value)).into_response(),
        Reply::Status(code) => StatusCode::from_u16(code).unwrap().into_response(),
        Reply::Text(text) => (StatusCode::OK, text).into_response(),
        Reply::DropConnection => panic!("mock proxy dropping connection"),
        Reply::Gated(gate, value) => {
            gate.notified().await;
            (StatusCode::OK, Json(value)).into_response()
        }
    }
}

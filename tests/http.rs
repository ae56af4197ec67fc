mod common;

use common::{start_proxy, Reply};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct ImageView {
    url: String,
    caption: String,
}

#[derive(Debug, Deserialize)]
struct ViewResponse {
    day_options: Vec<String>,
    selected_date: String,
    error: Option<String>,
    button_label: String,
    button_enabled: bool,
    image: Option<ImageView>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/view")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(proxy_url: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_on_this_day"))
        .env("PORT", port.to_string())
        .env("PROXY_URL", proxy_url)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn set_field(
    client: &Client,
    server: &TestServer,
    field: &str,
    value: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/date", server.base_url))
        .json(&json!({ "field": field, "value": value }))
        .send()
        .await
        .unwrap()
}

async fn trigger(client: &Client, server: &TestServer) -> ViewResponse {
    let response = client
        .post(format!("{}/api/trigger", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_lookup_then_clear() {
    let proxy = start_proxy(
        Reply::Json(json!({ "output": "Apollo 11 Moon Landing (1969)" })),
        Reply::Json(json!({ "output": "https://img/x.png" })),
    )
    .await;
    let server = spawn_server(&proxy.url).await;
    let client = Client::new();

    assert!(set_field(&client, &server, "year", "1969").await.status().is_success());
    let view: ViewResponse = set_field(&client, &server, "month", "07").await.json().await.unwrap();
    assert_eq!(view.day_options.len(), 31);
    let view: ViewResponse = set_field(&client, &server, "day", "20").await.json().await.unwrap();
    assert_eq!(view.selected_date, "Selected Date: 1969-07-20");

    let view = trigger(&client, &server).await;
    let image = view.image.expect("image rendered");
    assert_eq!(image.url, "https://img/x.png");
    assert_eq!(
        image.caption,
        "portrait of 'Apollo 11 Moon Landing (1969)' in the style of '1969' art"
    );
    assert_eq!(view.button_label, "Clear");

    let view = trigger(&client, &server).await;
    assert!(view.image.is_none());
    assert_eq!(view.button_label, "Enter");
    assert_eq!(view.selected_date, "Please select a date");
    assert!(view.day_options.is_empty());
}

#[tokio::test]
async fn http_incomplete_date_stays_on_enter() {
    let proxy = start_proxy(Reply::Json(json!({})), Reply::Json(json!({}))).await;
    let server = spawn_server(&proxy.url).await;
    let client = Client::new();

    set_field(&client, &server, "year", "1969").await;
    let view = trigger(&client, &server).await;

    assert_eq!(view.button_label, "Enter");
    assert!(view.button_enabled);
    assert!(view.error.is_some());
    assert!(proxy.calls().is_empty());
}

#[tokio::test]
async fn http_rejects_day_outside_month() {
    let proxy = start_proxy(Reply::Json(json!({})), Reply::Json(json!({}))).await;
    let server = spawn_server(&proxy.url).await;
    let client = Client::new();

    set_field(&client, &server, "year", "2023").await;
    set_field(&client, &server, "month", "02").await;
    let response = set_field(&client, &server, "day", "29").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/date", server.base_url))
        .json(&json!({ "field": "century", "value": "20" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn http_index_serves_page() {
    let proxy = start_proxy(Reply::Json(json!({})), Reply::Json(json!({}))).await;
    let server = spawn_server(&proxy.url).await;

    let html = Client::new()
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("id=\"enterButton\""));
    assert!(html.contains("Please select a date"));
}

#[tokio::test]
async fn http_lookup_survives_client_timeout() {
    let gate = Arc::new(Notify::new());
    let proxy = start_proxy(
        Reply::Gated(Arc::clone(&gate), json!({ "output": "Apollo 11 Moon Landing (1969)" })),
        Reply::Json(json!({ "output": "https://img/x.png" })),
    )
    .await;
    let server = spawn_server(&proxy.url).await;
    let client = Client::new();

    set_field(&client, &server, "year", "1969").await;
    set_field(&client, &server, "month", "07").await;
    set_field(&client, &server, "day", "20").await;

    let impatient = client
        .post(format!("{}/api/trigger", server.base_url))
        .timeout(Duration::from_millis(300))
        .send()
        .await;
    assert!(impatient.is_err());

    gate.notify_one();

    let deadline = Instant::now() + Duration::from_secs(3);
    let view = loop {
        let view: ViewResponse = client
            .get(format!("{}/api/view", server.base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        if view.button_label != "Wait" || Instant::now() > deadline {
            break view;
        }
        sleep(Duration::from_millis(100)).await;
    };

    assert_eq!(view.button_label, "Clear");
    assert!(view.button_enabled);
    assert_eq!(view.image.map(|image| image.url).as_deref(), Some("https://img/x.png"));
    assert_eq!(proxy.calls().len(), 2);

    let view = trigger(&client, &server).await;
    assert_eq!(view.button_label, "Enter");
}

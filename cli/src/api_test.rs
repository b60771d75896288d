use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use serde_json::{Value, json};

use super::*;

type Store = Arc<Mutex<Vec<Wire>>>;

async fn list(State(store): State<Store>) -> Json<Vec<Wire>> {
    Json(store.lock().unwrap().clone())
}

async fn create(State(store): State<Store>, Json(wire): Json<Wire>) -> impl IntoResponse {
    let mut wires = store.lock().unwrap();
    if wires.iter().any(|w| w.wire_id == wire.wire_id) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "detail": "Wire already exists" })));
    }
    wires.push(wire);
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

async fn update(State(store): State<Store>, Path(id): Path<String>, Json(wire): Json<Wire>) -> StatusCode {
    let mut wires = store.lock().unwrap();
    match wires.iter_mut().find(|w| w.wire_id == id) {
        Some(slot) => {
            *slot = wire;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn remove(State(store): State<Store>, Path(id): Path<String>) -> StatusCode {
    let mut wires = store.lock().unwrap();
    let before = wires.len();
    wires.retain(|w| w.wire_id != id);
    if wires.len() == before { StatusCode::NOT_FOUND } else { StatusCode::NO_CONTENT }
}

async fn execute(Json(body): Json<Value>) -> Json<Value> {
    let id = body["wire_id"].as_str().unwrap_or_default().to_owned();
    let text = body["inputs"]["text"].as_str().unwrap_or_default().to_owned();
    Json(json!({ "output": format!("{id}: {text}"), "tokens": 3 }))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn backend() -> ApiClient {
    let store: Store = Arc::default();
    let router = Router::new()
        .route("/wires/", get(list).post(create))
        .route("/wires/{id}", put(update).delete(remove))
        .route("/wires/execute", post(execute))
        .route("/wireflows/", get(|| async { "<html>oops</html>" }))
        .route("/wireflows/execute", post(|| async { Json(json!("plain text")) }))
        .with_state(store);
    ApiClient::new(&spawn(router).await).unwrap()
}

fn wire(id: &str) -> Wire {
    Wire {
        wire_id: id.to_owned(),
        description: "Summarize".to_owned(),
        prompt: "Summarize {text}".to_owned(),
        inputs: [("text".to_owned(), "Paste text".to_owned())].into(),
        output_key: "summary".to_owned(),
    }
}

#[tokio::test]
async fn created_wire_appears_once_in_list() {
    let client = backend().await;
    client.create_wire(&wire("summarize")).await.unwrap();
    let wires = client.list_wires().await.unwrap();
    assert_eq!(wires.iter().filter(|w| w.wire_id == "summarize").count(), 1);
}

#[tokio::test]
async fn duplicate_create_surfaces_backend_detail() {
    let client = backend().await;
    client.create_wire(&wire("summarize")).await.unwrap();
    let err = client.create_wire(&wire("summarize")).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: "Wire already exists".to_owned() });
}

#[tokio::test]
async fn update_keeps_id_and_replaces_fields() {
    let client = backend().await;
    client.create_wire(&wire("summarize")).await.unwrap();
    let mut changed = wire("summarize");
    changed.description = "Shorter".to_owned();
    client.update_wire(&changed).await.unwrap();

    let wires = client.list_wires().await.unwrap();
    assert_eq!(wires.len(), 1);
    assert_eq!(wires[0].wire_id, "summarize");
    assert_eq!(wires[0].description, "Shorter");
    assert_eq!(wires[0].prompt, "Summarize {text}");
}

#[tokio::test]
async fn delete_removes_wire_and_missing_id_is_status_error() {
    let client = backend().await;
    client.create_wire(&wire("summarize")).await.unwrap();
    client.delete_wire("summarize").await.unwrap();
    assert!(client.list_wires().await.unwrap().is_empty());

    let err = client.delete_wire("summarize").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert!(err.to_string().contains("Failed to delete wire"));
}

#[tokio::test]
async fn execute_returns_output_and_extra_fields() {
    let client = backend().await;
    let request = ExecuteRequest::Wire {
        wire_id: "summarize".to_owned(),
        inputs: [("text".to_owned(), "hello".to_owned())].into(),
    };
    let result = client.execute(&request).await.unwrap();
    assert_eq!(result.display_text(), "summarize: hello");
    assert_eq!(result.extra.get("tokens"), Some(&json!(3)));
}

#[tokio::test]
async fn bare_string_execute_response_becomes_output() {
    let client = backend().await;
    let request = ExecuteRequest::Wireflow { wireflow_id: "f1".to_owned(), inputs: Default::default() };
    let result = client.execute(&request).await.unwrap();
    assert_eq!(result.display_text(), "plain text");
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let client = backend().await;
    let err = client.list_wireflows().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn closed_port_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ApiClient::new(&format!("http://{addr}")).unwrap();
    let err = client.list_wires().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// Canned answers, keyed by the `current` / `command` query value.
#[derive(Clone, Default)]
pub struct Canned {
    pub complete: HashMap<String, Value>,
    pub execute: HashMap<String, Value>,
}

impl Canned {
    pub fn complete(mut self, current: &str, body: Value) -> Self {
        self.complete.insert(current.to_string(), body);
        self
    }

    pub fn execute(mut self, command: &str, body: Value) -> Self {
        self.execute.insert(command.to_string(), body);
        self
    }
}

#[derive(Clone)]
struct StubState {
    canned: Arc<Canned>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// In-process shell service on an ephemeral port.
///
/// Unknown commands and inputs answer 500.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl StubServer {
    /// Requests seen so far, as `"<endpoint> <path> <value>"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

pub fn spawn_stub(canned: Canned) -> Result<StubServer> {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        canned: Arc::new(canned),
        requests: requests.clone(),
    };
    let (addr_tx, addr_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let thread = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("stub runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub");
            let addr = listener.local_addr().expect("stub addr");
            let _ = addr_tx.send(addr);
            let app = axum::Router::new().fallback(handle).with_state(state);
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("serve stub");
        });
    });

    let addr = addr_rx
        .recv_timeout(std::time::Duration::from_secs(5))
        .context("stub server did not start")?;

    Ok(StubServer {
        base_url: format!("http://{}/rest", addr),
        requests,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

async fn handle(
    State(state): State<StubState>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let rest = uri.path().strip_prefix("/rest/").unwrap_or("");
    let (endpoint, tail) = rest.split_once('/').unwrap_or((rest, ""));
    let path = format!("/{}", tail);

    let (key, table) = match endpoint {
        "complete" => ("current", &state.canned.complete),
        "execute" => ("command", &state.canned.execute),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let value = query.get(key).cloned().unwrap_or_default();
    if let Ok(mut seen) = state.requests.lock() {
        seen.push(format!("{} {} {}", endpoint, path, value));
    }

    match table.get(&value) {
        Some(body) => axum::Json(body.clone()).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

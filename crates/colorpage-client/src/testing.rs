//! Test utilities for colorpage-client
//!
//! Provides an in-process conversion server so the client and the upload
//! flow can be exercised without a real deployment.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::{ConvertClient, Result};

/// Scripted behavior for the mock conversion endpoint
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with the given image bytes
    Converted(Vec<u8>),
    /// Given status with a JSON `{"error": ...}` body
    Error(u16, String),
    /// Given status with a body that is not JSON
    Garbage(u16),
}

/// What the mock endpoint saw in the last upload
#[derive(Debug, Clone, Default)]
pub struct ReceivedUpload {
    pub field_name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Mock conversion endpoint with a scripted response.
///
/// Records how many requests arrived and what the last multipart part
/// looked like, so tests can assert the wire contract and the
/// "no request issued" property.
#[derive(Clone)]
pub struct MockConvert {
    response: MockResponse,
    hits: Arc<AtomicUsize>,
    last_upload: Arc<Mutex<Option<ReceivedUpload>>>,
}

impl MockConvert {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            hits: Arc::new(AtomicUsize::new(0)),
            last_upload: Arc::new(Mutex::new(None)),
        }
    }

    /// Mock that answers 200 with the given image bytes
    pub fn converted(bytes: Vec<u8>) -> Self {
        Self::new(MockResponse::Converted(bytes))
    }

    /// Mock that answers `status` with `{"error": message}`
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::new(MockResponse::Error(status, message.into()))
    }

    /// Mock that answers `status` with a non-JSON body
    pub fn garbage(status: u16) -> Self {
        Self::new(MockResponse::Garbage(status))
    }

    /// Router exposing `POST /api/convert` backed by this mock
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/convert", post(handle_convert))
            .with_state(self.clone())
    }

    /// How many conversion requests the endpoint has received
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// The multipart part received by the most recent request
    pub fn last_upload(&self) -> Option<ReceivedUpload> {
        self.last_upload.lock().expect("upload lock").clone()
    }
}

async fn handle_convert(State(mock): State<MockConvert>, mut multipart: Multipart) -> Response {
    mock.hits.fetch_add(1, Ordering::SeqCst);

    let mut received: Option<ReceivedUpload> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        match field.bytes().await {
            Ok(bytes) => {
                received = Some(ReceivedUpload {
                    field_name,
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Err(_) => break,
        }
    }

    if received.is_some() {
        *mock.last_upload.lock().expect("upload lock") = received;
    }

    match &mock.response {
        MockResponse::Converted(bytes) => (
            StatusCode::OK,
            [("content-type", "image/png")],
            bytes.clone(),
        )
            .into_response(),
        MockResponse::Error(status, message) => {
            let status =
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(serde_json::json!({ "error": message }))).into_response()
        }
        MockResponse::Garbage(status) => {
            let status =
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "this is not json").into_response()
        }
    }
}

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: ConvertClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Create a new test server from an axum Router
    ///
    /// # Example
    ///
    /// ```ignore
    /// use colorpage_client::testing::{MockConvert, TestServer};
    ///
    /// let mock = MockConvert::converted(b"png".to_vec());
    /// let server = TestServer::start(mock.router()).await?;
    ///
    /// // Use server.client to make requests
    /// let result = server.client.convert(&file).await?;
    /// ```
    pub async fn start(router: Router) -> Result<Self> {
        Self::start_with_timeout(router, Duration::from_secs(5), Duration::from_secs(2)).await
    }

    /// Create a new test server with custom client timeouts
    pub async fn start_with_timeout(
        router: Router,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        // Spawn the server
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        let base_url = format!("http://{}", addr);
        let client = ConvertClient::with_config(&base_url, timeout, connect_timeout)?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &ConvertClient {
        &self.client
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal if not already done
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        // Abort the task if still running
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_format() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        let url = format!("http://{}", addr);
        assert_eq!(url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_mock_starts_unhit() {
        let mock = MockConvert::converted(vec![1, 2, 3]);
        assert_eq!(mock.hits(), 0);
        assert!(mock.last_upload().is_none());
    }
}

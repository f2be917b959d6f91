//! Local HTTP server standing in for the restaurant API.

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

pub struct MockSource {
    pub addr: SocketAddr,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockSource {
    /// Serves `body` with `status` on `/restaurants`, and the same body
    /// after `delay` on `/slow`.
    pub async fn start(status: StatusCode, body: String, delay: Duration) -> Self {
        let fast_body = body.clone();
        let app = Router::new()
            .route(
                "/restaurants",
                get(move || {
                    let body = fast_body.clone();
                    async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
                }),
            )
            .route(
                "/slow",
                get(move || {
                    let body = body.clone();
                    async move {
                        tokio::time::sleep(delay).await;
                        (status, [(header::CONTENT_TYPE, "application/json")], body)
                    }
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock source");
        let addr = listener.local_addr().expect("mock source addr");
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for MockSource {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

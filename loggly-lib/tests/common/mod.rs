//! In-process HTTP server standing in for the search API.

#![allow(dead_code)]

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper::Response;
use hyper_util::rt::TokioIo;
use loggly_lib::api::search::SearchMode;
use loggly_lib::auth::Credentials;
use loggly_lib::LogglyClient;
use serde_json::json;
use serde_json::Value;
use tokio::net::TcpListener;

/// Base URL the mock server hands out in `next` fields.
pub const NEXT_BASE: &str = "https://acme.loggly.com/apiv2/events/iterate?next=";

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string, e.g. `/events?rsid=42`.
    pub target: String,
    pub authorization: Option<String>,
}

/// Status and JSON body returned for a request.
pub type Reply = (u16, String);

type Handler = Arc<dyn Fn(&str, &str) -> Reply + Send + Sync>;

pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    /// Starts a server answering every request with `handler(path, query)`.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&str, &str) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Handler = Arc::new(handler);

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let handler = handler.clone();
                let recorded = recorded.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let handler = handler.clone();
                        let recorded = recorded.clone();
                        async move {
                            let path = req.uri().path().to_string();
                            let query = req.uri().query().unwrap_or_default().to_string();
                            let target = if query.is_empty() {
                                path.clone()
                            } else {
                                format!("{}?{}", path, query)
                            };

                            recorded.lock().unwrap().push(RecordedRequest {
                                method: req.method().to_string(),
                                target,
                                authorization: req
                                    .headers()
                                    .get("authorization")
                                    .and_then(|v| v.to_str().ok())
                                    .map(str::to_string),
                            });

                            let (status, body) = handler(&path, &query);
                            Ok::<_, Infallible>(
                                Response::builder()
                                    .status(status)
                                    .header("Content-Type", "application/json")
                                    .body(Full::new(Bytes::from(body)))
                                    .unwrap(),
                            )
                        }
                    });

                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Builds a client pointed at this server.
    pub fn client(&self, mode: SearchMode) -> LogglyClient {
        LogglyClient::builder()
            .account("acme")
            .credentials(Credentials::new("tobi", "ferret"))
            .base_url(self.url())
            .mode(mode)
            .build()
            .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.target).collect()
    }
}

/// Events `{"id": n}` for each id.
pub fn events(ids: &[u64]) -> Vec<Value> {
    ids.iter().map(|id| json!({ "id": id })).collect()
}

/// An iterate-endpoint body with the given events and cursor. An empty cursor
/// produces an empty `next`.
pub fn iterate_body(ids: &[u64], cursor: &str) -> String {
    let next = if cursor.is_empty() {
        String::new()
    } else {
        format!("{}{}", NEXT_BASE, cursor)
    };
    json!({ "events": events(ids), "next": next }).to_string()
}

pub fn ok(body: String) -> Reply {
    (200, body)
}

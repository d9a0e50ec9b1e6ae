//! In-process test client.
//!
//! Binds the app to an ephemeral port and drives it over real HTTP, so
//! integration tests exercise the same dispatch path as production.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioIo};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;

use crate::app::RouteScope;

/// Test client bound to a freshly started app instance.
pub struct TestClient {
    base: String,
    client: Client<HttpConnector, Full<Bytes>>,
}

impl TestClient {
    /// Builds the app, binds it to `127.0.0.1:0`, and starts serving it
    /// on a background task.
    pub async fn new(app: RouteScope) -> Self {
        let engine = Arc::new(app.build());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("test listener addr");

        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let engine = engine.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req| {
                        let engine = engine.clone();
                        async move { Ok::<_, Infallible>(engine.handle(req).await) }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self {
            base: format!("http://{}", addr),
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    pub fn get(&self, path: &str) -> TestRequest {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> TestRequest {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> TestRequest {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: &str) -> TestRequest {
        TestRequest {
            client: self.client.clone(),
            method,
            url: format!("{}{}", self.base, path),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }
}

/// A request under construction.
pub struct TestRequest {
    client: Client<HttpConnector, Full<Bytes>>,
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl TestRequest {
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(&self.url);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        let request = builder
            .body(Full::new(self.body))
            .expect("build test request");

        let response = self
            .client
            .request(request)
            .await
            .expect("send test request");

        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .expect("read test response body")
            .to_bytes();

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

/// A fully buffered response.
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("parse test response as JSON")
    }
}

//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use tokio::task::JoinHandle;

use simpleton::http::{HttpServer, SeedBuffer};
use simpleton::lifecycle::Shutdown;
use simpleton::net::listener::bind_addr;

/// A responder running on an ephemeral localhost port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    task: Option<JoinHandle<Result<(), std::io::Error>>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for `HttpServer::run` to return.
    #[allow(dead_code)]
    pub async fn stop(mut self) -> Result<(), std::io::Error> {
        self.shutdown.trigger();
        match self.task.take() {
            Some(task) => task.await.expect("server task panicked"),
            None => Ok(()),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a responder; it stops when the returned handle is dropped.
pub async fn start_server() -> TestServer {
    let listener = bind_addr("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(SeedBuffer::random().unwrap());
    let task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        addr,
        shutdown,
        task: Some(task),
    }
}

/// A client that opens a fresh connection per request.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

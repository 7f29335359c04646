//! In-process HTTP server standing in for the local model server and the
//! remote registry.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use msync_config::MsyncConfig;
use msync_registry::ModelClient;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub struct MockServer {
    server: Arc<tiny_http::Server>,
    handle: Option<JoinHandle<()>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    pub base_url: String,
}

impl MockServer {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Recorded) -> Reply + Send + 'static,
    {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind mock server"));
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("mock server has an IP address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let content_type = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Content-Type"))
                        .map(|h| h.value.to_string());
                    let recorded = Recorded {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        content_type,
                        body,
                    };
                    let reply = handler(&recorded);
                    requests.lock().expect("requests lock").push(recorded);

                    let response =
                        tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            handle: Some(handle),
            requests,
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Client whose local server and registry both point at `server`.
pub fn client_for(server: &MockServer) -> ModelClient {
    let mut config = MsyncConfig::default();
    config.local.base_url.clone_from(&server.base_url);
    config.registry.base_url.clone_from(&server.base_url);
    config.http.timeout_secs = 5;
    ModelClient::new(&config).expect("client builds")
}

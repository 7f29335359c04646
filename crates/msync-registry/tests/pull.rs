//! Update trigger against an in-process local server.

mod common;

use common::{MockServer, Reply, client_for};
use msync_registry::{ProgressDecoder, ProgressLine, RegistryError};
use pretty_assertions::assert_eq;

const PROGRESS: &str = concat!(
    "{\"status\":\"pulling manifest\"}\n",
    "{\"status\":\"downloading\",\"digest\":\"sha256:ab\",\"total\":100,\"completed\":50}\n",
    "{\"status\":\"downloading\",\"digest\":\"sha256:ab\",\"total\":100,\"completed\":100}\n",
    "{\"status\":\"success\"}\n",
);

#[tokio::test]
async fn pull_posts_json_name_and_streams_progress() {
    let server = MockServer::start(|req| {
        if req.method == "POST" && req.url == "/api/pull" {
            Reply::ok(PROGRESS)
        } else {
            Reply::status(404, "not found")
        }
    });
    let client = client_for(&server);

    let mut stream = client.pull("llama2:7b").await.unwrap();
    let mut decoder = ProgressDecoder::new();
    let mut lines = Vec::new();
    let mut raw = Vec::new();
    while let Some(chunk) = stream.next_chunk().await.unwrap() {
        raw.extend_from_slice(&chunk);
        lines.extend(decoder.push(&chunk));
    }
    lines.extend(decoder.finish());

    assert_eq!(String::from_utf8(raw).unwrap(), PROGRESS);
    assert_eq!(lines.len(), 4);
    assert!(matches!(&lines[3], ProgressLine::Event(event) if event.is_success()));
    assert!(stream.next_chunk().await.unwrap().is_none());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, r#"{"name":"llama2:7b"}"#);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn rejected_pull_is_an_api_error() {
    let server = MockServer::start(|_| Reply::status(400, r#"{"error":"invalid model name"}"#));
    let client = client_for(&server);

    let err = client.pull("bad").await.unwrap_err();
    match err {
        RegistryError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("invalid model name"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    let base_url = {
        let server = MockServer::start(|_| Reply::ok(""));
        server.base_url.clone()
    };
    // Server dropped: the port is closed.
    let mut config = msync_config::MsyncConfig::default();
    config.local.base_url = base_url;
    let client = msync_registry::ModelClient::new(&config).unwrap();

    let err = client.pull("a:1").await.unwrap_err();
    assert!(matches!(err, RegistryError::Http(_)));
}

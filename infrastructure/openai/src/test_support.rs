//! Loopback stand-in for the chat completions endpoint, shared with dependent crates' tests.

use std::sync::{Arc, Mutex};

use business::domain::shared::value_objects::ApiKey;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::client::OpenAIClient;

pub const CIAO_COMPLETION: &str = r#"{
    "id": "chatcmpl-123",
    "object": "chat.completion",
    "model": "gpt-4-0613",
    "choices": [
        {
            "index": 0,
            "message": {"role": "assistant", "content": "ciao!"},
            "finish_reason": "stop"
        }
    ],
    "usage": {"prompt_tokens": 20, "completion_tokens": 3, "total_tokens": 23}
}"#;

pub struct RecordedRequest {
    pub head: String,
    pub body: String,
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

fn header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(end) = header_end(&buffer) {
            break end;
        }
        if n == 0 {
            return None;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..end]).to_string();
    let body_start = end + 4;
    let body_end = body_start + content_length(&head);

    while buffer.len() < body_end {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buffer[body_start..body_end.min(buffer.len())]).to_string();
    Some(RecordedRequest { head, body })
}

/// Serves `body` with `status` to every connection and records each request.
///
/// Returns the base URL to hand to [`OpenAIClient::with_base_url`].
pub async fn spawn_stub(status: u16, body: &'static str) -> (String, Recorded) {
    spawn_stub_with_headers(status, "", body).await
}

/// Like [`spawn_stub`], with raw `name: value\r\n` lines added to every response.
pub async fn spawn_stub_with_headers(
    status: u16,
    extra_headers: &'static str,
    body: &'static str,
) -> (String, Recorded) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let Some(request) = read_request(&mut socket).await else {
                continue;
            };
            sink.lock().unwrap().push(request);

            let response = format!(
                "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\n{}content-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                extra_headers,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}/v1", addr), recorded)
}

/// Client aimed at a loopback stub, never routed through a proxy from the environment.
pub fn loopback_client(api_key: ApiKey, base_url: &str) -> OpenAIClient {
    let http = OpenAIClient::http_builder().no_proxy().build().unwrap();

    OpenAIClient::new(api_key)
        .unwrap()
        .with_http_client(http)
        .with_base_url(base_url)
}

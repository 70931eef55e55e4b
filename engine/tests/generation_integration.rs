use claims::{assert_err, assert_ok};
use engine::CanvasError;
use engine::generation::{GenerationClient, GenerationRequest};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// Helper module serving one canned HTTP response
mod http_helpers {
    use super::*;

    /// Reads a full request (headers plus `Content-Length` body) from the socket.
    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = stream.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&buffer);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buffer.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buffer).to_string()
    }

    /// Serves `body` with `status` once and returns the endpoint URL plus the captured request.
    pub async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request
        });

        (format!("http://{address}/api/stitch-generate"), handle)
    }

    pub fn client(endpoint: &str) -> GenerationClient {
        GenerationClient::new(endpoint, Duration::from_secs(5)).unwrap()
    }
}

use http_helpers::*;

#[tokio::test]
async fn component_generation_parses_the_service_envelope() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"success":true,"screenId":"scr_1","html":"<main/>","css":"","code":"<main/>","suggestions":null,"fallback":true}"#,
    )
    .await;

    let generation = assert_ok!(
        client(&endpoint)
            .generate(&GenerationRequest::new("landing hero"))
            .await
    );
    assert_eq!(generation.screen_id, "scr_1");
    assert_eq!(generation.best_code(), "<main/>");
    assert!(generation.fallback);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/stitch-generate"));
    assert!(request.contains(r#""deviceType":"DESKTOP""#));
    assert!(request.contains(r#""prompt":"landing hero""#));
}

#[tokio::test]
async fn error_status_surfaces_service_message() {
    let (endpoint, _server) = serve_once("400 Bad Request", r#"{"error":"Prompt is required"}"#).await;

    let err = client(&endpoint)
        .generate(&GenerationRequest::new("x"))
        .await
        .unwrap_err();
    match err {
        CanvasError::Generation { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Prompt is required");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn theme_generation_returns_the_partial_document() {
    let (endpoint, _server) = serve_once(
        "200 OK",
        r##"{"code":"```json\n{\"palette\":{\"accent\":\"#00D4FF\"}}\n```"}"##,
    )
    .await;

    let theme = assert_ok!(
        client(&endpoint)
            .generate_theme(GenerationRequest::new("cyan accents"))
            .await
    );
    assert_eq!(theme["palette"]["accent"], "#00D4FF");
}

#[tokio::test]
async fn blank_prompt_never_reaches_the_network() {
    let result = client("http://127.0.0.1:9/unused")
        .generate(&GenerationRequest::new("  "))
        .await;
    let err = assert_err!(result);
    assert!(err.is_invalid_input());
}

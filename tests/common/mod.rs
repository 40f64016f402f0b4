// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use djpress::db::{MemoryBackend, ProfileStore};
use djpress::models::{PressKit, PressPhoto};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Admin address used across tests.
#[allow(dead_code)]
pub const TEST_ADMIN: &str = "admin@djpress.test";

/// Create an in-memory store.
#[allow(dead_code)]
pub fn test_store() -> ProfileStore<MemoryBackend> {
    ProfileStore::new(MemoryBackend::new(), TEST_ADMIN)
}

/// A press kit that qualifies for the public directory.
#[allow(dead_code)]
pub fn public_kit(base: PressKit) -> PressKit {
    PressKit {
        bio: "A producer whose warm, hypnotic sets have filled clubs across Europe.".to_string(),
        photos: vec![PressPhoto::cover("p1", "https://img.example/cover.jpg")],
        ..base
    }
}

/// Serve exactly one HTTP request with a canned response.
///
/// Returns the base URL and a handle resolving to the raw request text.
#[allow(dead_code)]
pub async fn serve_once(
    status: u16,
    body: String,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Accept failed");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Write failed");
        socket.shutdown().await.ok();
        request
    });

    (format!("http://{}", addr), handle)
}

/// Read one request: headers plus a Content-Length body.
#[allow(dead_code)]
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("Read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
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
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

// SPDX-License-Identifier: MPL-2.0
//! Exercises the archive client and asset fetcher against a local HTTP server.

use deep_zoomer::archive::{AssetFetcher, SearchClient};
use deep_zoomer::error::{AssetError, FailureCause, SearchError};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const TIMEOUT: Duration = Duration::from_secs(5);

const ANDROMEDA_RESPONSE: &str = r#"{
    "collection": {
        "version": "1.0",
        "items": [
            {
                "data": [{
                    "title": "Andromeda Galaxy",
                    "description": "Our nearest large neighbor.",
                    "date_created": "2009-09-24T18:00:22Z",
                    "nasa_id": "PIA12345"
                }],
                "links": [{ "href": "https://images-assets.nasa.gov/image/PIA12345/PIA12345~thumb.jpg" }]
            },
            {
                "data": [{
                    "title": "M31 Core",
                    "description": "",
                    "date_created": "2012-01-02T00:00:00Z",
                    "nasa_id": "PIA15000"
                }],
                "links": [{ "href": "https://images-assets.nasa.gov/image/PIA15000/PIA15000~thumb.jpg" }]
            },
            {
                "data": [{
                    "title": "Andromeda in Ultraviolet",
                    "description": "GALEX view.",
                    "date_created": "2007-05-01T00:00:00Z",
                    "nasa_id": "PIA09000"
                }]
            }
        ]
    }
}"#;

/// Minimal HTTP/1.1 server answering every request with the same response.
struct TestServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    async fn start(status: &'static str, content_type: &'static str, body: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let head = read_head(&mut socket).await;
                let request_line = head.lines().next().unwrap_or_default().to_string();
                seen.lock().unwrap().push(request_line);

                let mut response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                )
                .into_bytes();
                response.extend_from_slice(&body);
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base: format!("http://{addr}"),
            requests,
        }
    }

    async fn json(status: &'static str, body: &str) -> Self {
        Self::start(status, "application/json", body.as_bytes().to_vec()).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 120, 40, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image_rs::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[tokio::test]
async fn search_issues_one_request_and_keeps_server_order() {
    let server = TestServer::json("200 OK", ANDROMEDA_RESPONSE).await;
    let client = SearchClient::new(server.url("/search"), TIMEOUT);

    let results = client.search("andromeda").await.unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["PIA12345", "PIA15000", "PIA09000"]);
    assert_eq!(results[0].title, "Andromeda Galaxy");
    assert!(!results[2].has_thumbnail());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        "GET /search?q=andromeda&media_type=image&page_size=24 HTTP/1.1"
    );
}

#[tokio::test]
async fn empty_collection_yields_no_results() {
    let server = TestServer::json("200 OK", r#"{"collection":{"items":[]}}"#).await;
    let client = SearchClient::new(server.url("/search"), TIMEOUT);

    let results = client.search("zzzz-no-such-thing").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let server = TestServer::json("500 Internal Server Error", r#"{"reason":"boom"}"#).await;
    let client = SearchClient::new(server.url("/search"), TIMEOUT);

    let err = client.search("andromeda").await.unwrap_err();
    assert!(matches!(
        err,
        SearchError::RequestFailed(FailureCause::Status(500))
    ));
    assert_eq!(err.i18n_key(), "notification-search-failed");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let server = TestServer::json("200 OK", "<html>maintenance</html>").await;
    let client = SearchClient::new(server.url("/search"), TIMEOUT);

    let err = client.search("andromeda").await.unwrap_err();
    assert!(matches!(err.cause(), FailureCause::Malformed(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SearchClient::new(format!("http://{addr}/search"), TIMEOUT);
    let err = client.search("andromeda").await.unwrap_err();
    assert!(matches!(err.cause(), FailureCause::Network(_)));
}

#[tokio::test]
async fn asset_fetch_downloads_and_decodes() {
    let server = TestServer::start("200 OK", "image/png", png_bytes(8, 4)).await;
    let fetcher = AssetFetcher::new(TIMEOUT);

    let data = fetcher.fetch(&server.url("/image/PIA12345~thumb.png")).await.unwrap();
    assert_eq!((data.width, data.height), (8, 4));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn asset_not_found_is_a_fetch_error() {
    let server = TestServer::json("404 Not Found", "{}").await;
    let fetcher = AssetFetcher::new(TIMEOUT);

    let err = fetcher.fetch(&server.url("/missing.jpg")).await.unwrap_err();
    assert!(matches!(err, AssetError::Fetch(FailureCause::Status(404))));
    assert_eq!(err.i18n_key(), "notification-image-download-failed");
}

#[tokio::test]
async fn asset_that_is_not_an_image_is_a_decode_error() {
    let server = TestServer::start("200 OK", "image/jpeg", b"not really a jpeg".to_vec()).await;
    let fetcher = AssetFetcher::new(TIMEOUT);

    let err = fetcher.fetch(&server.url("/broken.jpg")).await.unwrap_err();
    assert!(matches!(err, AssetError::Decode(_)));
}

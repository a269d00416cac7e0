use grouped_items::fetch::{FetchClient, FetchError, TransportError};
use grouped_items::item::{Record, Records};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Serve exactly one canned HTTP/1.1 response on 127.0.0.1, then close.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_head(&mut stream);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write");
        request
    });

    (format!("http://{}/hiring.json", addr), handle)
}

fn read_head(stream: &mut TcpStream) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client() -> FetchClient<grouped_items::fetch::HttpTransport> {
    FetchClient::http(Some(Duration::from_secs(5))).expect("client")
}

#[tokio::test]
async fn get_and_decode_over_tcp() {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"id": 684, "listId": 1, "name": "Item 684"}, {"id": 276, "listId": 1, "name": null}]"#,
    );

    let records: Records = client().fetch(&url).await.expect("fetch");
    assert_eq!(
        records,
        vec![Record::new(684, 1, Some("Item 684")), Record::new(276, 1, None)]
    );

    let request = server.join().expect("server thread");
    assert!(request.starts_with("GET /hiring.json HTTP/1.1\r\n"), "{request}");
    let head = request.to_ascii_lowercase();
    assert!(!head.contains("\r\nuser-agent:"), "custom user agent sent: {request}");
    assert!(!head.contains("content-length:"), "request carried a body: {request}");
}

#[tokio::test]
async fn empty_success_body_is_no_data() {
    let (url, server) = serve_once("200 OK", "");
    let err = client().fetch::<Records>(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::NoData), "{err:?}");
    server.join().expect("server thread");
}

#[tokio::test]
async fn error_status_is_transport_failure() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"error": "boom"}"#);
    let err = client().fetch::<Records>(&url).await.unwrap_err();
    assert!(
        matches!(err, FetchError::Transport(TransportError::Status(500))),
        "{err:?}"
    );
    server.join().expect("server thread");
}

#[tokio::test]
async fn connection_refused_is_transport_failure() {
    // Grab a free port, then close it so nothing is listening.
    let addr = TcpListener::bind("127.0.0.1:0")
        .expect("bind")
        .local_addr()
        .expect("local addr");
    let url = format!("http://{}/hiring.json", addr);

    let err = client().fetch::<Records>(&url).await.unwrap_err();
    assert!(
        matches!(err, FetchError::Transport(TransportError::Request(_))),
        "{err:?}"
    );
}

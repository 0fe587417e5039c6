use std::{
    collections::BTreeMap,
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    sync::mpsc,
    thread,
    time::Duration,
};

use gemform_core::{assemble, SubmitTransport, TransportError};
use gemform_domain::ContactInfo;
use gemform_http::HttpTransport;

struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

/// Serves exactly one request on a loopback port and replies with `status`.
fn serve_once(status: &'static str, reply: &'static str) -> (String, mpsc::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let address = format!("http://{}/search-agent", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept connection");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("read request line");

        let mut headers = Vec::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read header");
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                let name = name.trim().to_ascii_lowercase();
                let value = value.trim().to_string();
                if name == "content-length" {
                    content_length = value.parse().expect("numeric content-length");
                }
                headers.push((name, value));
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).expect("read body");

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
            reply.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().ok();

        tx.send(CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).expect("utf8 body"),
        })
        .ok();
    });

    (address, rx)
}

fn sample_payload() -> gemform_core::SubmissionPayload {
    let mut values = BTreeMap::new();
    values.insert("metal".to_string(), "Silver".to_string());
    values.insert("carat".to_string(), "Sterling".to_string());
    assemble(&ContactInfo::new("a@b.com", "123", "X"), &values)
}

#[test]
fn posts_json_payload_and_returns_receipt() {
    let (endpoint, captured) = serve_once("200 OK", r#"{"matches":3}"#);
    let mut headers = BTreeMap::new();
    headers.insert("x-api-key".to_string(), "secret".to_string());
    let transport =
        HttpTransport::new(endpoint, Duration::from_secs(5), &headers).expect("build transport");

    let payload = sample_payload();
    let receipt = transport.send(&payload).expect("send payload");
    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.body, r#"{"matches":3}"#);

    let request = captured
        .recv_timeout(Duration::from_secs(5))
        .expect("captured request");
    assert_eq!(request.request_line, "POST /search-agent HTTP/1.1");
    assert!(request
        .headers
        .contains(&("content-type".to_string(), "application/json".to_string())));
    assert!(request
        .headers
        .contains(&("x-api-key".to_string(), "secret".to_string())));

    let sent: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(sent, serde_json::to_value(&payload).unwrap());
}

#[test]
fn non_success_status_is_a_transport_error() {
    let (endpoint, _captured) = serve_once("503 Service Unavailable", "busy");
    let transport = HttpTransport::new(endpoint, Duration::from_secs(5), &BTreeMap::new())
        .expect("build transport");

    let err = transport.send(&sample_payload()).unwrap_err();
    assert_eq!(
        err,
        TransportError::Status {
            status: 503,
            body: "busy".into(),
        }
    );
}

#[test]
fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let endpoint = format!("http://{}/search-agent", listener.local_addr().unwrap());
    drop(listener);

    let transport = HttpTransport::new(endpoint, Duration::from_secs(5), &BTreeMap::new())
        .expect("build transport");
    let err = transport.send(&sample_payload()).unwrap_err();
    assert!(matches!(err, TransportError::Connect(_)), "got {err:?}");
}

#[test]
fn request_without_reply_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let endpoint = format!("http://{}/search-agent", listener.local_addr().unwrap());
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let server = thread::spawn(move || {
        let _connection = listener.accept().expect("accept connection");
        release_rx.recv().ok();
    });

    let transport = HttpTransport::new(endpoint, Duration::from_secs(1), &BTreeMap::new())
        .expect("build transport");
    let err = transport.send(&sample_payload()).unwrap_err();
    assert_eq!(err, TransportError::Timeout);

    drop(release_tx);
    server.join().expect("server thread");
}

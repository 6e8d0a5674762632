use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use vanilladata::download;

/// Serve one HTTP response with `body` on a loopback port and return the URL.
fn serve_once(body: Vec<u8>, with_length: bool) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = [0u8; 1024];
        let _ = stream.read(&mut request);
        let header = if with_length {
            format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
        } else {
            String::from("HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n")
        };
        stream.write_all(header.as_bytes()).expect("write header");
        stream.write_all(&body).expect("write body");
    });
    format!("http://{}", addr)
}

#[test]
fn writes_exactly_the_served_bytes() {
    let payload: Vec<u8> = (0..70_000u32).map(|i| (i % 251) as u8).collect();
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("payload.bin");

    let url = serve_once(payload.clone(), true);
    download(&url, "payload.bin", Some(&target), 25).expect("download");

    let written = fs::read(&target).expect("read back");
    assert_eq!(written, payload);
}

#[test]
fn missing_content_length_still_transfers_everything() {
    let payload = b"no length header on this one".to_vec();
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("unsized.bin");

    let url = serve_once(payload.clone(), false);
    download(&url, "unsized.bin", Some(&target), 5).expect("download");

    let written = fs::read(&target).expect("read back");
    assert_eq!(written, payload);
}

#[test]
fn connection_failure_is_an_error() {
    // Bind then drop to obtain a port with no listener behind it.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("never.bin");
    let result = download(&format!("http://{}", addr), "never.bin", Some(&target), 5);
    assert!(result.is_err());
}

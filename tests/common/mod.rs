//! One-shot HTTP responder for exercising the appliance and Vault clients.
#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use zfs_reporter::domain::config::ReporterConfig;

/// Accepts a single connection, answers it, and yields the raw request head.
pub struct OneShotServer {
    pub addr: SocketAddr,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason_phrase(status),
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buffer).await.expect("read request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..n]);
            }
            stream.write_all(response.as_bytes()).await.expect("write response");
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        Self { addr, handle }
    }

    /// The request the server received, lower-cased for header matching.
    pub async fn request(self) -> String {
        self.handle.await.expect("server task").to_lowercase()
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// Configuration pointing the appliance client at a local plain-HTTP port.
pub fn local_config(port: u16) -> ReporterConfig {
    let mut config = ReporterConfig::default();
    config.appliance.scheme = "http".to_string();
    config.appliance.port = port;
    config.appliance.accept_invalid_certs = false;
    config.appliance.timeout_secs = Some(10);
    config
}

pub const TWO_FILESYSTEMS: &str = r#"{
    "filesystems": [
        {
            "name": "home",
            "pool": "pool-0",
            "project": "default",
            "sharesmb": "on",
            "sharesmb_name": "home$",
            "sharenfs": "rw",
            "shareftp": "off",
            "space_data": 1073741824,
            "space_total": 2147483648
        },
        {
            "name": "scratch",
            "pool": "pool-1",
            "sharesmb": "off",
            "sharenfs": "off",
            "space_data": 0,
            "space_total": 512
        }
    ]
}"#;

pub fn filesystems_body(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"name": "fs{:02}", "pool": "pool-0", "space_data": {}}}"#, i, i * 100))
        .collect();
    format!(r#"{{"filesystems": [{}]}}"#, records.join(","))
}

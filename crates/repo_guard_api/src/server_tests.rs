//! Tests for server module

use super::*;
use github_client::{create_token_client, GitHubClient};
use repo_guard_core::{ProvisioningSettings, RepositoryProvisioner};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

fn test_state() -> AppState {
    let octocrab = create_token_client("test-token", Some("http://127.0.0.1:9")).unwrap();
    let provisioner = RepositoryProvisioner::new(
        Arc::new(GitHubClient::new(octocrab)),
        ProvisioningSettings::default(),
    );
    AppState::new(provisioner, None)
}

#[test]
fn test_default_config_listens_on_all_interfaces() {
    let addr = ApiConfig::default().socket_addr().unwrap();

    assert_eq!(addr.to_string(), "0.0.0.0:5000");
}

#[test]
fn test_socket_addr_from_config() {
    let config = ApiConfig {
        port: 8081,
        host: "127.0.0.1".to_string(),
    };

    let addr = config.socket_addr().unwrap();

    assert_eq!(addr.to_string(), "127.0.0.1:8081");
}

#[test]
fn test_socket_addr_accepts_ipv6() {
    let config = ApiConfig {
        port: 5000,
        host: "::".to_string(),
    };

    assert_eq!(config.socket_addr().unwrap().to_string(), "[::]:5000");
}

#[test]
fn test_socket_addr_rejects_hostname() {
    let config = ApiConfig {
        port: 5000,
        host: "not a host".to_string(),
    };

    assert!(config.socket_addr().is_err());
}

#[tokio::test]
async fn test_serve_on_answers_requests_until_shutdown() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = ApiServer::new(ApiConfig::default(), test_state());
    let handle = tokio::spawn(server.serve_on(listener, async move {
        let _ = stopped.await;
    }));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK"), "unexpected response: {raw}");
    assert!(raw.contains("\"status\":\"healthy\""));

    stop.send(()).unwrap();
    handle.await.unwrap().unwrap();
}

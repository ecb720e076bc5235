#[path = "../common/mod.rs"]
mod common;
use common::{lookup, request, TestServer};

use dnsc_domain::{DomainError, ErrorKind};
use std::net::Ipv4Addr;

async fn answering() -> TestServer {
    TestServer::answering(&[(Ipv4Addr::new(192, 0, 2, 1), 60)])
        .await
        .unwrap()
}

// ============================================================================
// Tolerant policy
// ============================================================================

#[tokio::test]
async fn test_tolerant_keeps_all_servers() {
    let first = answering().await;
    let broken = TestServer::silent().await.unwrap();
    let third = answering().await;

    let outcome = lookup(&request(
        &[first.server(), broken.server(), third.server()],
        &["A"],
        false,
    ))
    .await
    .unwrap();

    assert!(!outcome.aborted);
    assert_eq!(outcome.results.len(), 3);
    assert_eq!(outcome.error_count(), 1);

    let failed = outcome
        .results
        .iter()
        .find(|r| r.server == broken.server())
        .unwrap();
    assert_eq!(failed.error.as_ref().unwrap().kind, ErrorKind::Transport);
}

// ============================================================================
// Fatal policy
// ============================================================================

#[tokio::test]
async fn test_fatal_stops_at_first_error() {
    let first = answering().await;
    let broken = TestServer::empty().await.unwrap();
    let third = TestServer::silent().await.unwrap();

    let outcome = lookup(&request(
        &[first.server(), broken.server(), third.server()],
        &["A"],
        true,
    ))
    .await
    .unwrap();

    assert!(outcome.aborted);
    assert!(outcome.results.len() < 3);
    assert_eq!(outcome.results.iter().filter(|r| r.is_error()).count(), 1);
}

#[tokio::test]
async fn test_fatal_without_errors_completes() {
    let first = answering().await;
    let second = answering().await;

    let outcome = lookup(&request(&[first.server(), second.server()], &["A"], true))
        .await
        .unwrap();

    assert!(!outcome.aborted);
    assert_eq!(outcome.results.len(), 2);
}

// ============================================================================
// Validation before dispatch
// ============================================================================

#[tokio::test]
async fn test_bogus_protocol_never_reaches_servers() {
    let server = answering().await;

    let mut req = request(&[server.server()], &["SRV"], false);
    req.srv_protocols = vec!["bogus".to_string()];

    let result = lookup(&req).await;

    assert!(matches!(result, Err(DomainError::UnknownSrvProtocol(_))));
}

//! Lookup Flow Tests
//!
//! Expand → dispatch over UDP → collect → render, against loopback servers.

#[path = "../common/mod.rs"]
mod common;
use common::{lookup, request, TestDomains, TestServer};

use dnsc_application::services::SummaryRenderer;
use dnsc_domain::{ErrorKind, RecordType, ResultsOutput};
use std::net::Ipv4Addr;

// ============================================================================
// Fan-out
// ============================================================================

#[tokio::test]
async fn test_two_servers_agree() {
    let first = TestServer::answering(&[(Ipv4Addr::new(192, 0, 2, 1), 300)])
        .await
        .unwrap();
    let second = TestServer::answering(&[(Ipv4Addr::new(192, 0, 2, 1), 300)])
        .await
        .unwrap();

    let outcome = lookup(&request(&[first.server(), second.server()], &["A"], false))
        .await
        .unwrap();

    assert_eq!(outcome.results.len(), 2);
    assert_eq!(outcome.error_count(), 0);
    for result in &outcome.results {
        assert_eq!(result.requested_type, Some(RecordType::A));
        assert_eq!(result.query, TestDomains::example());
        assert_eq!(result.records()[0].value, "192.0.2.1");
    }

    let rendered = SummaryRenderer::new(ResultsOutput::MultiLine, true).render(&outcome.results);
    let rows: Vec<&str> = rendered
        .lines()
        .filter(|l| l.starts_with("127.0.0.1"))
        .collect();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_divergent_servers_show_side_by_side() {
    let old = TestServer::answering(&[(Ipv4Addr::new(198, 51, 100, 7), 60)])
        .await
        .unwrap();
    let new = TestServer::answering(&[
        (Ipv4Addr::new(203, 0, 113, 9), 60),
        (Ipv4Addr::new(203, 0, 113, 8), 60),
    ])
    .await
    .unwrap();

    let outcome = lookup(&request(&[old.server(), new.server()], &["A"], false))
        .await
        .unwrap();

    let rendered = SummaryRenderer::new(ResultsOutput::SingleLine, true).render(&outcome.results);
    assert!(rendered.contains("198.51.100.7 (A)"));
    assert!(rendered.contains("203.0.113.8 (A), 203.0.113.9 (A)"));
}

#[tokio::test]
async fn test_multiple_types_per_server() {
    let server = TestServer::answering(&[(Ipv4Addr::new(192, 0, 2, 1), 300)])
        .await
        .unwrap();

    let outcome = lookup(&request(&[server.server()], &["A", "AAAA", "MX"], false))
        .await
        .unwrap();

    assert_eq!(outcome.expected, 3);
    assert_eq!(outcome.results.len(), 3);
}

#[tokio::test]
async fn test_ptr_lookup_reaches_server() {
    let server = TestServer::answering(&[(Ipv4Addr::new(192, 0, 2, 1), 300)])
        .await
        .unwrap();

    let mut req = request(&[server.server()], &["PTR"], false);
    req.query = TestDomains::reverse_v4().to_string();

    let outcome = lookup(&req).await.unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert!(!outcome.results[0].is_error());
    assert_eq!(outcome.results[0].query, TestDomains::reverse_v4());
}

#[tokio::test]
async fn test_empty_answer_reported_as_no_records() {
    let server = TestServer::empty().await.unwrap();

    let outcome = lookup(&request(&[server.server()], &["A"], false))
        .await
        .unwrap();

    let err = outcome.results[0].error.as_ref().unwrap();
    assert_eq!(err.kind, ErrorKind::NoRecordsFound);

    let rendered = SummaryRenderer::new(ResultsOutput::MultiLine, true).render(&outcome.results);
    assert!(rendered.contains("no records found for query"));
}

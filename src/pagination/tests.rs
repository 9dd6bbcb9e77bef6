//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::default()).unwrap()
}

// ============================================================================
// Page / NextPage Tests
// ============================================================================

#[test]
fn test_page_next_url() {
    let page: Page = serde_json::from_value(json!({
        "results": [{"id": 1}],
        "meta": {"next": "https://api.meetup.com/2/members?offset=1", "count": 1}
    }))
    .unwrap();

    assert_eq!(
        page.next_page(),
        NextPage::Url("https://api.meetup.com/2/members?offset=1".to_string())
    );
}

#[test]
fn test_page_next_null_empty_or_absent() {
    for body in [
        json!({"results": [], "meta": {"next": null}}),
        json!({"results": [], "meta": {"next": ""}}),
        json!({"results": [], "meta": {}}),
        json!({"results": [], "meta": null}),
        json!({"results": []}),
    ] {
        let page: Page = serde_json::from_value(body.clone()).unwrap();
        assert!(page.next_page().is_done(), "expected done for {body}");
    }
}

#[test]
fn test_page_requires_results() {
    let result: std::result::Result<Page, _> =
        serde_json::from_value(json!({"meta": {"next": null}}));
    assert!(result.is_err());
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_advance() {
    let mut state = PaginationState::starting_at("https://a/1");
    assert_eq!(state.cursor.as_deref(), Some("https://a/1"));

    state.advance(3, NextPage::Url("https://a/2".to_string()));
    assert_eq!(state.pages, 1);
    assert_eq!(state.total_fetched, 3);
    assert_eq!(state.cursor.as_deref(), Some("https://a/2"));
    assert!(!state.done);

    state.advance(2, NextPage::Done);
    assert_eq!(state.pages, 2);
    assert_eq!(state.total_fetched, 5);
    assert!(state.cursor.is_none());
    assert!(state.done);
}

// ============================================================================
// Fetch Loop Tests
// ============================================================================

#[tokio::test]
async fn test_collect_two_pages_in_order() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/2/members/page2?group_id=7", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/2/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "a"}, {"id": "b"}],
            "meta": {"next": next, "total_count": 3}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/2/members/page2"))
        .and(query_param("group_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "c"}],
            "meta": {"next": null, "total_count": 3}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let mut seen = Vec::new();
    let collected = PageFetcher::new(&client)
        .collect(&format!("{}/2/members?group_id=7", mock_server.uri()), |info| {
            seen.push((info.page, info.records, info.total, info.total_count, info.has_next));
        })
        .await
        .unwrap();

    assert_eq!(
        collected.records,
        vec![json!({"id": "a"}), json!({"id": "b"}), json!({"id": "c"})]
    );
    assert_eq!(collected.pages, 2);
    assert_eq!(
        seen,
        vec![(1, 2, 2, Some(3), true), (2, 1, 3, Some(3), false)]
    );
}

#[tokio::test]
async fn test_collect_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 1}, {"id": 2}],
            "meta": {"next": null}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let collected = PageFetcher::new(&client)
        .collect(&format!("{}/2/events", mock_server.uri()), |_| {})
        .await
        .unwrap();

    assert_eq!(collected.records, vec![json!({"id": 1}), json!({"id": 2})]);
    assert_eq!(collected.pages, 1);
}

#[tokio::test]
async fn test_collect_null_meta_ends_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 1}],
            "meta": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let collected = PageFetcher::new(&client)
        .collect(&mock_server.uri(), |_| {})
        .await
        .unwrap();

    assert_eq!(collected.records, vec![json!({"id": 1})]);
    assert_eq!(collected.pages, 1);
}

#[tokio::test]
async fn test_collect_reports_rate_limit_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-RateLimit-Remaining", "29")
                .insert_header("X-RateLimit-Reset", "8")
                .set_body_json(json!({"results": [], "meta": {"next": null}})),
        )
        .mount(&mock_server)
        .await;

    let client = client();
    let mut limits = Vec::new();
    PageFetcher::new(&client)
        .collect(&mock_server.uri(), |info| limits.push(info.rate_limit))
        .await
        .unwrap();

    assert_eq!(limits.len(), 1);
    assert_eq!(limits[0].remaining, Some(29));
    assert_eq!(limits[0].reset_seconds, Some(8));
}

#[tokio::test]
async fn test_collect_stops_on_error_page() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/page2", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/page1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 1}],
            "meta": {"next": next}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "problem": "not authorized",
            "code": "not_authorized"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client();
    let err = PageFetcher::new(&client)
        .collect(&format!("{}/page1", mock_server.uri()), |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
}

#[tokio::test]
async fn test_collect_missing_results_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"next": null}
        })))
        .mount(&mock_server)
        .await;

    let client = client();
    let err = PageFetcher::new(&client)
        .collect(&format!("{}/?key=hunter2", mock_server.uri()), |_| {})
        .await
        .unwrap_err();

    match err {
        Error::Decode { url, message } => {
            assert!(!url.contains("hunter2"));
            assert!(message.contains("results"));
        }
        other => panic!("Expected Decode, got {other:?}"),
    }
}

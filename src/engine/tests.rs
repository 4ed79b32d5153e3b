//! Tests for engine module

use super::*;
use crate::api::ComponentsResponse;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use futures::StreamExt;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn api_for(server: &MockServer) -> FigmaApi {
    let config = HttpClientConfig::builder()
        .base_url(format!("{}/v1", server.uri()))
        .build();
    FigmaApi::new(HttpClient::with_config(config).unwrap())
}

fn file_components() -> Endpoint {
    Endpoint::FileComponents {
        file_key: "F1".to_string(),
    }
}

// ============================================================================
// SyncPage / SyncStats Tests
// ============================================================================

#[test]
fn test_sync_page() {
    let page = SyncPage::new(vec![1, 2], Some(Continuation::after("X")));
    assert!(!page.is_last());
    assert_eq!(page.len(), 2);
    assert_eq!(page.continuation, Some(Continuation::after("X")));

    let last: SyncPage<i32> = SyncPage::last(Vec::new());
    assert!(last.is_last());
    assert!(last.is_empty());
}

#[test]
fn test_sync_page_serialization() {
    let page = SyncPage::last(vec!["a"]);
    assert_eq!(serde_json::to_value(&page).unwrap(), json!({"result": ["a"]}));

    let page = SyncPage::new(vec!["a"], Some(Continuation::after("X")));
    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({"result": ["a"], "continuation": {"after": "X"}})
    );
}

#[test]
fn test_sync_stats_mutations() {
    let mut stats = SyncStats::new();

    stats.add_records(100);
    assert_eq!(stats.records_synced, 100);

    stats.add_page();
    stats.record(&SyncPage::last(vec![(), ()]));
    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.records_synced, 102);

    stats.set_duration(1500);
    assert_eq!(stats.duration_ms, 1500);
}

// ============================================================================
// SyncDriver Tests
// ============================================================================

#[tokio::test]
async fn test_step_without_continuation_sends_no_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/files/F1/components"))
        .respond_with(|req: &Request| {
            assert!(req.url.query_pairs().all(|(k, _)| k != "after"));
            ResponseTemplate::new(200).set_body_json(json!({
                "meta": {"components": [{"key": "K1"}], "cursor": {"after": "X"}}
            }))
        })
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let driver = SyncDriver::new(&api, file_components());
    let (response, next): (ComponentsResponse, NextPage) = driver.step(None).await.unwrap();

    assert_eq!(response.meta.components.len(), 1);
    assert_eq!(next, NextPage::Continue(Continuation::after("X")));
}

#[tokio::test]
async fn test_step_with_continuation_sends_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/files/F1/components"))
        .and(query_param("after", "X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"components": [{"key": "K2"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let driver = SyncDriver::new(&api, file_components());
    let continuation = Continuation::after("X");
    let (response, next): (ComponentsResponse, NextPage) =
        driver.step(Some(&continuation)).await.unwrap();

    assert_eq!(response.meta.components[0].key.as_deref(), Some("K2"));
    assert!(next.is_done());
}

#[tokio::test]
async fn test_single_page_endpoint_ignores_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/teams/42/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "projects": [{"id": 1}],
            "meta": {"cursor": {"after": "X"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let driver = SyncDriver::new(
        &api,
        Endpoint::TeamProjects {
            team_id: "42".to_string(),
        },
    );
    let (_, next): (serde_json::Value, NextPage) = driver.step(None).await.unwrap();

    assert!(next.is_done());
    assert!(driver.finish(vec![1], next).is_last());
}

#[tokio::test]
async fn test_step_failure_aborts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/files/F1/components"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"err": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let driver = SyncDriver::new(&api, file_components());
    let err = driver
        .step::<ComponentsResponse>(None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

// ============================================================================
// Host-style iteration
// ============================================================================

#[tokio::test]
async fn test_pages_follow_continuations_until_exhausted() {
    let calls = AtomicUsize::new(0);
    let stream = pages(None, |continuation: Option<Continuation>| {
        let call = calls.fetch_add(1, Ordering::SeqCst);
        async move {
            let page = match (call, continuation.map(|c| c.after)) {
                (0, None) => SyncPage::new(vec!["a", "b"], Some(Continuation::after("1"))),
                (1, Some(after)) if after == "1" => {
                    SyncPage::new(vec!["c"], Some(Continuation::after("2")))
                }
                (2, Some(after)) if after == "2" => SyncPage::last(vec!["d"]),
                other => panic!("unexpected step {other:?}"),
            };
            Ok(page)
        }
    });

    let mut rows = Vec::new();
    let (resume, stats) = drain(stream, None, |page| rows.extend(page.result))
        .await
        .unwrap();
    assert_eq!(rows, vec!["a", "b", "c", "d"]);
    assert_eq!(resume, None);
    assert_eq!(stats.pages_fetched, 3);
    assert_eq!(stats.records_synced, 4);
    assert!(!stats.truncated);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_pages_respect_max_pages() {
    let stream = pages(None, |_continuation: Option<Continuation>| async {
        Ok(SyncPage::new(vec![1], Some(Continuation::after("again"))))
    });

    let mut rows = Vec::new();
    let (resume, stats) = drain(stream, Some(2), |page| rows.extend(page.result))
        .await
        .unwrap();
    assert_eq!(rows, vec![1, 1]);
    assert_eq!(resume, Some(Continuation::after("again")));
    assert_eq!(stats.pages_fetched, 2);
    assert!(stats.truncated);
}

#[tokio::test]
async fn test_pages_stop_on_error() {
    let stream = pages(Some(Continuation::after("X")), |_continuation: Option<Continuation>| async {
        Err::<SyncPage<()>, _>(Error::http_status(500, "boom"))
    });
    futures::pin_mut!(stream);

    assert!(stream.next().await.unwrap().is_err());
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_drain_single_step_budget_keeps_continuation() {
    let calls = AtomicUsize::new(0);
    let stream = pages(Some(Continuation::after("5")), |continuation: Option<Continuation>| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move {
            assert_eq!(continuation, Some(Continuation::after("5")));
            Ok(SyncPage::new(vec!["x"], Some(Continuation::after("6"))))
        }
    });

    let mut seen = 0;
    let (resume, stats) = drain(stream, Some(1), |page| seen += page.len())
        .await
        .unwrap();

    assert_eq!(seen, 1);
    assert_eq!(resume, Some(Continuation::after("6")));
    assert!(stats.truncated);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_drain_propagates_step_error() {
    let stream = pages(None, |_continuation: Option<Continuation>| async {
        Err::<SyncPage<()>, _>(Error::http_status(502, "bad gateway"))
    });

    let err = drain(stream, None, |_page| {}).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

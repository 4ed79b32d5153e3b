//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → connector → HTTP requests → rows

use figma_connector::config::{AuthConfigDef, ConnectorConfig};
use figma_connector::engine::{self, SyncPage};
use figma_connector::{Connector, Continuation, Error, FigmaConnector, FormulaOutput, Result};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connector(server: &MockServer, auth: AuthConfigDef) -> FigmaConnector {
    let config = ConnectorConfig {
        api_base_url: server.uri(),
        auth,
        ..ConnectorConfig::default()
    };
    config.validate().unwrap();
    FigmaConnector::from_config(&config).unwrap()
}

fn bearer(server: &MockServer) -> FigmaConnector {
    connector(
        server,
        AuthConfigDef::Bearer {
            token: "test-token".to_string(),
        },
    )
}

fn rows(output: &FormulaOutput) -> Vec<Value> {
    match output {
        FormulaOutput::Sync { page } => page.result.clone(),
        other => panic!("expected sync output, got {other:?}"),
    }
}

fn component(key: &str, node_id: &str) -> Value {
    json!({
        "key": key,
        "file_key": "F1",
        "node_id": node_id,
        "thumbnail_url": format!("https://cdn/{key}.png"),
        "name": format!("Component {key}"),
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-02-01T00:00:00Z",
        "user": {"id": "u1", "handle": "ada", "img_url": "https://cdn/ada.png"},
        "containing_frame": {"pageId": "0:1", "pageName": "Page 1"}
    })
}

// ============================================================================
// Team components
// ============================================================================

#[tokio::test]
async fn test_team_components_two_rows_no_continuation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/42/components"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "error": false,
            "meta": {"components": [component("C1", "1:2"), component("C2", "3:4")]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = bearer(&server)
        .execute(
            "SyncTeamComponents",
            &json!({"teamUrl": "https://www.figma.com/files/team/42"}),
            None,
        )
        .await
        .unwrap();

    let rows = rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["link"], "https://www.figma.com/file/F1/?node-id=1%3A2");
    assert_eq!(rows[1]["link"], "https://www.figma.com/file/F1/?node-id=3%3A4");
    assert_eq!(rows[0]["description"], "");
    assert_eq!(
        rows[0]["user"],
        json!({"id": "u1", "handle": "ada", "img_url": "https://cdn/ada.png"})
    );
    assert!(output.continuation().is_none());
}

#[tokio::test]
async fn test_paginated_sync_via_page_stream() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/F1/components"))
        .and(query_param("after", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"components": [component("C3", "5:6")]}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/F1/components"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "components": [component("C1", "1:2"), component("C2", "3:4")],
                "cursor": {"after": 100}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/F1/dev_resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dev_resources": [{"id": "d1", "name": "Storybook", "url": "https://sb", "node_id": "5:6"}]
        })))
        .mount(&server)
        .await;

    let connector = bearer(&server);
    let args = json!({"fileUrl": "https://www.figma.com/design/F1/Library?node-id=0-1"});
    let (connector, args) = (&connector, &args);
    let step = move |continuation: Option<Continuation>| async move {
        let output = connector
            .execute("SyncFileComponents", args, continuation.as_ref())
            .await?;
        Ok::<SyncPage<Value>, Error>(match output {
            FormulaOutput::Sync { page } => page,
            _ => SyncPage::last(Vec::new()),
        })
    };

    let mut rows: Vec<Value> = Vec::new();
    let (resume, stats) = engine::drain(engine::pages(None, step), None, |page| {
        rows.extend(page.result);
    })
    .await
    .unwrap();

    assert_eq!(resume, None);
    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.records_synced, 3);
    assert!(!stats.truncated);
    let keys: Vec<&str> = rows.iter().filter_map(|r| r["key"].as_str()).collect();
    assert_eq!(keys, vec!["C1", "C2", "C3"]);
    assert_eq!(rows[2]["dev_resources"], json!([{"id": "d1", "name": "Storybook"}]));
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_personal_access_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("X-Figma-Token", "figd_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "ada@example.com"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let connector = connector(
        &server,
        AuthConfigDef::PersonalAccessToken {
            token: "figd_secret".to_string(),
        },
    );

    let status = connector.check().await;
    assert!(status.success);
    assert_eq!(status.connection_name.as_deref(), Some("ada@example.com"));
    assert_eq!(connector.connection_name().await, "ada@example.com");
}

#[tokio::test]
async fn test_refresh_token_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handle": "ada"})))
        .expect(2)
        .mount(&server)
        .await;

    let connector = connector(
        &server,
        AuthConfigDef::Oauth2Refresh {
            token_url: format!("{}/oauth/token", server.uri()),
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            refresh_token: "refresh".to_string(),
        },
    );

    // The cached token is reused for the second call
    assert!(connector.check().await.success);
    assert!(connector.check().await.success);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_upstream_error_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/F1/styles"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "err": "Not found"
        })))
        .mount(&server)
        .await;

    let err = bearer(&server)
        .execute(
            "SyncFileStyles",
            &json!({"fileUrl": "https://www.figma.com/file/F1/x"}),
            None,
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to access file styles: Not found");
    assert!(err.is_user_facing());
}

#[tokio::test]
async fn test_bulk_length_mismatch_is_input_error() -> Result<()> {
    let server = MockServer::start().await;

    let err = bearer(&server)
        .execute(
            "BulkCreateDevResources",
            &json!({
                "fileKeys": ["F1"],
                "nodeIds": ["1:2", "3:4"],
                "names": ["a"],
                "urls": ["u"]
            }),
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
    Ok(())
}

// ============================================================================
// Dev resources
// ============================================================================

#[tokio::test]
async fn test_dev_resources_sync_survives_failed_lookups() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/F1/dev_resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dev_resources": [
                {"id": "d1", "name": "Storybook", "url": "https://sb", "file_key": "F1", "node_id": "1:2"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/F1/components"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/F1/component_sets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = bearer(&server)
        .execute(
            "SyncDevResources",
            &json!({"fileUrl": "https://www.figma.com/file/F1/x"}),
            None,
        )
        .await
        .unwrap();

    let rows = rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "d1");
    assert!(rows[0].get("component").is_none());
    assert!(rows[0].get("component_set").is_none());
}

#[tokio::test]
async fn test_update_then_delete() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/dev_resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links_updated": ["d1"],
            "errors": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/files/F1/dev_resources/d1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let connector = bearer(&server);

    let updated = connector
        .execute(
            "UpdateDevResource",
            &json!({"resourceId": "d1", "name": "Docs", "url": "https://docs"}),
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        updated,
        FormulaOutput::Text {
            value: "Successfully updated dev resource: d1".to_string()
        }
    );

    let deleted = connector
        .execute(
            "DeleteDevResource",
            &json!({"fileKey": "F1", "resourceId": "d1"}),
            None,
        )
        .await
        .unwrap();
    assert_eq!(
        deleted,
        FormulaOutput::Text {
            value: "Successfully deleted dev resource: d1".to_string()
        }
    );
}

#[tokio::test]
async fn test_spec_round_trips_to_json() {
    let server = MockServer::start().await;
    let spec = serde_json::to_value(bearer(&server).spec()).unwrap();

    let names: Vec<&str> = spec["formulas"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["name"].as_str())
        .collect();
    assert_eq!(names.len(), 17);
    assert!(names.contains(&"SyncDevResources"));

    let actions = spec["formulas"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["is_action"] == true)
        .count();
    assert_eq!(actions, 5);
}

//! Tests for the auth module

use super::*;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = client.get("https://api.figma.com/v1/me");

    let built = auth.apply(req).await.unwrap().build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
}

#[tokio::test]
async fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::Bearer {
        token: "figu_access".to_string(),
    });

    let client = reqwest::Client::new();
    let req = client.get("https://api.figma.com/v1/me");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer figu_access"
    );
}

#[tokio::test]
async fn test_personal_access_token() {
    let auth = Authenticator::new(AuthConfig::PersonalAccessToken {
        token: "figd_pat".to_string(),
    });

    let client = reqwest::Client::new();
    let req = client.get("https://api.figma.com/v1/me");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(built.headers().get("X-Figma-Token").unwrap(), "figd_pat");
    assert!(built.headers().get("Authorization").is_none());
}

#[tokio::test]
async fn test_oauth2_refresh_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=my-refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "refreshed-token",
            "expires_in": 3600
        })))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(AuthConfig::Oauth2Refresh {
        token_url: format!("{}/v1/oauth/token", mock_server.uri()),
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "my-refresh-token".to_string(),
    });

    let client = reqwest::Client::new();
    let req = client.get("https://api.figma.com/v1/me");
    let built = auth.apply(req).await.unwrap().build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer refreshed-token"
    );
}

#[tokio::test]
async fn test_oauth2_refresh_is_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "cached-token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(AuthConfig::Oauth2Refresh {
        token_url: format!("{}/v1/oauth/token", mock_server.uri()),
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "refresh".to_string(),
    });

    let client = reqwest::Client::new();
    for _ in 0..3 {
        let req = client.get("https://api.figma.com/v1/me");
        let built = auth.apply(req).await.unwrap().build().unwrap();
        assert_eq!(
            built.headers().get("Authorization").unwrap(),
            "Bearer cached-token"
        );
    }
}

#[tokio::test]
async fn test_oauth2_refresh_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_grant"))
        .mount(&mock_server)
        .await;

    let auth = Authenticator::new(AuthConfig::Oauth2Refresh {
        token_url: format!("{}/v1/oauth/token", mock_server.uri()),
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "expired".to_string(),
    });

    let client = reqwest::Client::new();
    let err = auth
        .apply(client.get("https://api.figma.com/v1/me"))
        .await
        .unwrap_err();

    assert!(matches!(err, crate::error::Error::TokenRefresh { .. }));
    assert!(err.to_string().contains("400"));
}


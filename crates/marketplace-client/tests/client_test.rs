//! Tests for [`marketplace_client::MarketplaceClient`] against a mockito server.

use std::num::NonZeroU32;

use marketplace_client::{MarketplaceClient, MarketplaceError, ACCEPT_HEADER_VALUE};
use mockito::Matcher;
use serde_json::json;

const QUERY_PATH: &str = "/_apis/public/gallery/extensionquery";

fn three() -> NonZeroU32 {
    NonZeroU32::new(3).unwrap()
}

fn client_for(server: &mockito::ServerGuard) -> MarketplaceClient {
    MarketplaceClient::new(format!("{}{}", server.url(), QUERY_PATH))
}

/// **Test: the request carries both headers and the exact documented body.**
#[tokio::test]
async fn test_search_sends_documented_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", QUERY_PATH)
        .match_header("content-type", "application/json")
        .match_header("accept", ACCEPT_HEADER_VALUE)
        .match_body(Matcher::Json(json!({
            "filters": [{
                "criteria": [
                    {"filterType": 10, "value": "docker"},
                    {"filterType": 12, "value": "Microsoft.VisualStudio.Code"}
                ],
                "pageSize": 3,
                "pageNumber": 1,
                "sortBy": 4,
                "sortOrder": 0
            }],
            "flags": 914
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"extensions":[]}]}"#)
        .expect(1)
        .create_async()
        .await;

    let results = client_for(&server).search("docker", three()).await.unwrap();

    assert!(results.is_empty());
    mock.assert_async().await;
}

/// **Test: results come back in server order with icons resolved.**
#[tokio::test]
async fn test_search_parses_extensions() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", QUERY_PATH)
        .with_status(200)
        .with_body(
            r#"{"results":[{"extensions":[
                {"displayName":"Docker","extensionName":"vscode-docker",
                 "publisher":{"displayName":"Microsoft","publisherName":"ms-azuretools"},
                 "versions":[{"files":[{"assetType":"Microsoft.VisualStudio.Services.Icons.Small","source":"https://cdn/docker.png"}]}]},
                {"displayName":"Dev Containers","extensionName":"remote-containers",
                 "publisher":{"displayName":"Microsoft","publisherName":"ms-vscode-remote"},
                 "versions":[{"files":[]}]}
            ]}],"resultMetadata":[]}"#,
        )
        .create_async()
        .await;

    let results = client_for(&server).search("docker", three()).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item_name(), "ms-azuretools.vscode-docker");
    assert_eq!(results[0].icon_url.as_deref(), Some("https://cdn/docker.png"));
    assert_eq!(results[1].display_name, "Dev Containers");
    assert_eq!(results[1].icon_url, None);
}

/// **Test: non-2xx surfaces the status code and raw body without parsing.**
#[tokio::test]
async fn test_search_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", QUERY_PATH)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let err = client_for(&server).search("docker", three()).await.unwrap_err();

    match err {
        MarketplaceError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

/// **Test: a 2xx body that is not JSON is a decode error.**
#[tokio::test]
async fn test_search_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", QUERY_PATH)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client_for(&server).search("docker", three()).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::Decode(_)));
}

/// **Test: an unreachable endpoint is a request error.**
#[tokio::test]
async fn test_search_connection_refused() {
    let client = MarketplaceClient::new("http://127.0.0.1:9/_apis/public/gallery/extensionquery");

    let err = client.search("docker", three()).await.unwrap_err();

    assert!(matches!(err, MarketplaceError::Request(_)));
}

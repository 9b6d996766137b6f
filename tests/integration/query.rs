//! query / queryAll against a mock instance.

use super::common::{client_for, query_all_path, query_path, ACCESS_TOKEN};
use sforce_soql_api::{ClientConfig, HttpTransport, SoqlClient, SoqlConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOQL: &str = "SELECT Id, Name FROM Account WHERE Name = 'O''Brien & Sons'";

#[tokio::test]
async fn test_execute_query_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(query_path()))
        .and(query_param("q", SOQL))
        .and(header("Authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"done":true,"totalSize":1,"records":[{"Id":"1"}],"nextRecordsUrl":""}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .execute_query(SOQL)
        .await
        .expect("query should succeed");

    assert!(result.done);
    assert_eq!(result.total_size, 1);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0]["Id"], "1");
    assert_eq!(result.next_records_path(), None);
}

#[tokio::test]
async fn test_execute_query_all_uses_query_all_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(query_all_path()))
        .and(query_param("q", "SELECT Id FROM Account WHERE IsDeleted = true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "done": true,
            "totalSize": 2,
            "records": [
                {"attributes": {"type": "Account"}, "Id": "001A"},
                {"attributes": {"type": "Account"}, "Id": "001B"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .execute_query_all("SELECT Id FROM Account WHERE IsDeleted = true")
        .await
        .expect("queryAll should succeed");

    assert_eq!(result.total_size, 2);
    assert_eq!(result.records[1]["Id"], "001B");
}

#[tokio::test]
async fn test_server_error_for_every_operation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server Error"))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let errors = vec![
        client.execute_query("SELECT Id FROM Account").await.unwrap_err(),
        client.execute_query_all("SELECT Id FROM Account").await.unwrap_err(),
        client.get_next_page("/query/01-200").await.unwrap_err(),
    ];

    for err in errors {
        assert!(err.is_response(), "expected a response error, got {err}");
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Server Error"));
    }
}

#[tokio::test]
async fn test_salesforce_error_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!([{
            "errorCode": "INVALID_FIELD",
            "message": "No such column 'foo' on entity 'Account'"
        }])))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .execute_query("SELECT foo FROM Account")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("INVALID_FIELD"));
}

#[tokio::test]
async fn test_malformed_json_for_every_operation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"done\": tru"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert!(client.execute_query("SELECT Id FROM Account").await.unwrap_err().is_decode());
    assert!(client.execute_query_all("SELECT Id FROM Account").await.unwrap_err().is_decode());
    assert!(client.get_next_page("query/01-200").await.unwrap_err().is_decode());
}

#[tokio::test]
async fn test_unreachable_instance_is_transport_error() {
    let config = SoqlConfig::new("http://127.0.0.1:1").unwrap();
    let transport = HttpTransport::new(
        ClientConfig::builder()
            .with_tracing(false)
            .with_connect_timeout(std::time::Duration::from_secs(2))
            .build(),
    )
    .unwrap();
    let client = SoqlClient::with_transport(config, transport);

    let err = client
        .execute_query("SELECT Id FROM Account")
        .await
        .unwrap_err();

    assert!(err.is_transport(), "expected a transport error, got {err}");
    assert_eq!(err.status(), None);
}

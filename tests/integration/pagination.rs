//! Following nextRecordsUrl against a mock instance.

use super::common::{client_for, query_path, API_VERSION};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_next_page_with_leading_slash() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query/01-200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "done": true,
            "totalSize": 2,
            "records": [{"Id": "2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = serde_json::from_str::<sforce_soql_api::QueryResult>(
        r#"{"done":false,"totalSize":2,"records":[{"Id":"1"}],"nextRecordsUrl":"/query/01-200"}"#,
    )
    .unwrap();

    let next = client
        .get_next_page(first.next_records_path().unwrap())
        .await
        .expect("next page should succeed");

    assert!(next.done);
    assert_eq!(next.records[0]["Id"], "2");
}

#[tokio::test]
async fn test_fetch_all_walks_every_page() {
    let server = MockServer::start().await;
    let locator = format!("/services/data/v{}/query/01gD0000002HU6KIAW", API_VERSION);

    Mock::given(method("GET"))
        .and(path(query_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "done": false,
            "totalSize": 5,
            "records": [{"Id": "1"}, {"Id": "2"}],
            "nextRecordsUrl": format!("{}-2", locator)
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}-2", locator)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "done": false,
            "totalSize": 5,
            "records": [{"Id": "3"}, {"Id": "4"}],
            "nextRecordsUrl": format!("{}-4", locator)
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}-4", locator)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "done": true,
            "totalSize": 5,
            "records": [{"Id": "5"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .fetch_all("SELECT Id FROM Account")
        .await
        .expect("fetch_all should succeed");

    let ids: Vec<&str> = records
        .iter()
        .filter_map(|r| r.get("Id").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

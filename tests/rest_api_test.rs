use httpmock::prelude::*;
use live_rates::domain::model::Shipment;
use live_rates::domain::ports::{RateService, ReferenceData};
use live_rates::{LabelError, RestApiClient};

#[tokio::test]
async fn countries_come_from_the_references_endpoint() {
    let server = MockServer::start();

    let references_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/references")
            .header("Authorization", "Token key_123");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "countries": {"CA": "Canada", "US": "United States"}
            }));
    });

    let client = RestApiClient::new(server.url(""), Some("key_123".to_string()));
    let countries = client.countries().await.unwrap();

    references_mock.assert();
    assert_eq!(countries.get("CA").map(String::as_str), Some("Canada"));
    assert_eq!(countries.len(), 2);
}

#[tokio::test]
async fn missing_rates_field_decodes_as_an_empty_list() {
    let server = MockServer::start();

    let rates_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/proxy/rates");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    let client = RestApiClient::new(server.url(""), None);
    let rates = client.fetch_rates(&Shipment::default()).await.unwrap();

    rates_mock.assert();
    assert!(rates.is_empty());
}

#[tokio::test]
async fn unstructured_error_body_falls_back_to_the_status() {
    let server = MockServer::start();

    let rates_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/proxy/rates");
        then.status(500).body("Internal Server Error");
    });

    let client = RestApiClient::new(server.url(""), None);
    let err = client.fetch_rates(&Shipment::default()).await.unwrap_err();

    rates_mock.assert();
    assert!(matches!(err, LabelError::Service { .. }));
    assert!(err.user_message().contains("500"));
}

#[tokio::test]
async fn top_level_error_message_without_details_becomes_generic() {
    let server = MockServer::start();

    let rates_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/proxy/rates");
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "error": {"message": "Invalid token"}
            }));
    });

    let client = RestApiClient::new(server.url(""), None);
    let err = client.fetch_rates(&Shipment::default()).await.unwrap_err();

    rates_mock.assert();
    assert_eq!(err.user_message(), "Invalid token");
}

//! End-to-end tests of the HTTP client against a mock query endpoint.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wolframalpha_client::{AlphaError, Client, ClientConfig, Query};

const XML_CONTENT_TYPE: &str = "text/xml;charset=utf-8";

fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn xml_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", XML_CONTENT_TYPE)
        .set_body_bytes(body.into_bytes())
}

fn client_for(server: &MockServer) -> Client {
    Client::with_config(
        ClientConfig::new("DEMO").with_endpoint(format!("{}/v2/query", server.uri())),
    )
}

#[tokio::test]
async fn test_query_pi_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .and(query_param("input", "pi"))
        .and(query_param("appid", "DEMO"))
        .respond_with(xml_response(load_fixture("pi_result.xml")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.query("pi").await.unwrap();

    let results = result.results().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title().unwrap(), "Result");
    assert_eq!(
        result.details().unwrap(),
        BTreeMap::from([("Result", "3.14159…")])
    );
}

#[tokio::test]
async fn test_parameters_are_sent_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(xml_response(load_fixture("pi_full.xml")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = Query::new("population of France")
        .assumption("*C.pi-_*NamedConstant-")
        .assumption("DateOrder_**Day.Month.Year--")
        .option("format", "plaintext");
    client.send(&query).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let expected: Vec<(String, String)> = [
        ("assumption", "*C.pi-_*NamedConstant-"),
        ("assumption", "DateOrder_**Day.Month.Year--"),
        ("input", "population of France"),
        ("appid", "DEMO"),
        ("format", "plaintext"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(pairs, expected);
}

#[tokio::test]
async fn test_session_is_reused_across_queries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(xml_response(load_fixture("pi_result.xml")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.query("pi").await.unwrap();
    let first = client.session().unwrap() as *const reqwest::Client;
    client.query("pi").await.unwrap();
    let second = client.session().unwrap() as *const reqwest::Client;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_json_content_type_fails_before_parsing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_bytes(b"{\"not\": \"xml\"}".to_vec()),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("pi").await.unwrap_err();
    match err {
        AlphaError::UnexpectedContentType { expected, actual } => {
            assert_eq!(expected, XML_CONTENT_TYPE);
            assert_eq!(actual.as_deref(), Some("application/json"));
        }
        other => panic!("expected content type error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_content_type_must_match_exactly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/xml; charset=utf-8")
                .set_body_bytes(load_fixture("pi_result.xml").into_bytes()),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("pi").await.unwrap_err();
    assert!(matches!(err, AlphaError::UnexpectedContentType { .. }));
}

#[tokio::test]
async fn test_service_error_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(xml_response(load_fixture("invalid_appid.xml")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("pi").await.unwrap_err();
    assert_eq!(err.to_string(), "Error 1: Invalid appid");
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("pi").await.unwrap_err();
    assert!(matches!(err, AlphaError::Http(_)));
}

#[tokio::test]
async fn test_http_error_hides_app_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = Client::with_config(
        ClientConfig::new("SECRET-123").with_endpoint(format!("{}/v2/query", mock_server.uri())),
    );
    let err = client.query("pi").await.unwrap_err();
    match &err {
        AlphaError::Http(source) => {
            assert_eq!(source.status(), Some(reqwest::StatusCode::FORBIDDEN));
            assert!(source.url().is_none());
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
    assert!(!err.to_string().contains("SECRET-123"));
    assert!(!format!("{err:?}").contains("SECRET-123"));
}

#[tokio::test]
async fn test_malformed_xml_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(xml_response("<queryresult><pod></queryresult>".to_string()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.query("pi").await.unwrap_err();
    assert!(matches!(err, AlphaError::XmlParse(_)));
}

#[tokio::test]
async fn test_invalid_endpoint() {
    let client = Client::with_config(ClientConfig::new("DEMO").with_endpoint("not a url"));
    let err = client.query("pi").await.unwrap_err();
    assert!(matches!(err, AlphaError::InvalidEndpoint(_)));
}

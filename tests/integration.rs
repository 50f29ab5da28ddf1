//! End-to-end tests for the Tooling API client against a wiremock server.
//!
//! Run with:
//!   cargo test --test integration

use std::sync::Once;

use ferroforce::ToolingClient;
use ferroforce_tooling::{QueryResult, RunTestsAsyncRequest, RunTestsResult, TestLevel};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

async fn mock_client() -> (MockServer, ToolingClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = ToolingClient::new(server.uri(), "test-token").unwrap();
    (server, client)
}

// ============================================================================
// Describe
// ============================================================================

#[tokio::test]
async fn describe_global_returns_typed_metadata() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/tooling/sobjects/"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "encoding": "UTF-8",
            "maxBatchSize": 200,
            "sobjects": [
                {
                    "name": "ApexClass",
                    "label": "Apex Class",
                    "labelPlural": "Apex Classes",
                    "keyPrefix": "01p",
                    "activateable": false,
                    "createable": true,
                    "custom": false,
                    "customSetting": false,
                    "deletable": true,
                    "deprecatedAndHidden": false,
                    "feedEnabled": false,
                    "layoutable": false,
                    "mergeable": false,
                    "queryable": true,
                    "replicateable": false,
                    "retrieveable": true,
                    "searchable": true,
                    "triggerable": false,
                    "undeletable": false,
                    "updateable": true
                }
            ]
        })))
        .mount(&server)
        .await;

    let result = client.describe_global().await.expect("should succeed");

    assert_eq!(result.encoding, "UTF-8");
    assert_eq!(result.max_batch_size, 200);

    let sobject = &result.sobjects[0];
    assert_eq!(sobject.name, "ApexClass");
    assert_eq!(sobject.label_plural, "Apex Classes");
    assert!(sobject.createable && sobject.queryable && sobject.searchable);
    assert!(!sobject.triggerable && !sobject.custom);
}

// ============================================================================
// Execute Anonymous
// ============================================================================

#[tokio::test]
async fn execute_anonymous_failure_is_a_normal_result() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/tooling/executeAnonymous/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "compiled": true,
            "success": false,
            "exceptionMessage": "boom",
            "exceptionStackTrace": "AnonymousBlock: line 1, column 1",
            "line": 1,
            "column": 1
        })))
        .mount(&server)
        .await;

    let result = client
        .execute_anonymous("throw new CalloutException('boom');")
        .await
        .expect("a failed run must not surface as an error");

    assert!(result.compiled);
    assert!(!result.success);
    assert_eq!(result.exception_message.as_deref(), Some("boom"));
}

#[tokio::test]
async fn query_parameters_round_trip_through_percent_encoding() {
    let (server, client) = mock_client().await;
    let apex = "Map<String, Integer> m = new Map<String, Integer>{'a & b' => 1}; // ? = &";

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/tooling/executeAnonymous/"))
        .and(query_param("anonymousBody", apex))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "compiled": true,
            "success": true
        })))
        .mount(&server)
        .await;

    client.execute_anonymous(apex).await.expect("should succeed");

    // The raw query must be percent-encoded, and decoding it must restore
    // the original text exactly
    let requests = server.received_requests().await.unwrap();
    let raw_query = requests[0].url.query().unwrap().to_string();
    let encoded = raw_query.strip_prefix("anonymousBody=").unwrap();
    assert!(!encoded.contains('&'), "reserved characters must be encoded");
    assert_eq!(urlencoding::decode(encoded).unwrap(), apex);
}

// ============================================================================
// Query / Search
// ============================================================================

#[tokio::test]
async fn query_populates_caller_chosen_destination() {
    let (server, client) = mock_client().await;

    #[derive(Debug, serde::Deserialize)]
    struct ApexClassRow {
        #[serde(rename = "Id")]
        id: String,
        #[serde(rename = "Name")]
        name: String,
    }

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/tooling/query/"))
        .and(query_param("q", "SELECT Id, Name FROM ApexClass LIMIT 2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalSize": 2,
            "done": true,
            "records": [
                {"Id": "01pxx00000000001AAA", "Name": "OrderService"},
                {"Id": "01pxx00000000002AAA", "Name": "OrderServiceTest"}
            ]
        })))
        .mount(&server)
        .await;

    let result: QueryResult<ApexClassRow> = client
        .query("SELECT Id, Name FROM ApexClass LIMIT 2")
        .await
        .expect("should succeed");

    assert_eq!(result.total_size, 2);
    assert!(result.done);
    assert_eq!(result.records[0].name, "OrderService");
    assert!(result.records[1].id.starts_with("01p"));
}

#[tokio::test]
async fn search_populates_caller_chosen_destination() {
    let (server, client) = mock_client().await;
    let sosl = "FIND {Order} IN ALL FIELDS RETURNING ApexClass(Id, Name)";

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/tooling/search/"))
        .and(query_param("q", sosl))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "searchRecords": [{"Id": "01pxx00000000001AAA", "Name": "OrderService"}]
        })))
        .mount(&server)
        .await;

    let records: Vec<serde_json::Value> =
        client.search_records(sosl).await.expect("should succeed");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["Name"], "OrderService");
}

// ============================================================================
// Test Execution
// ============================================================================

#[tokio::test]
async fn run_tests_maps_results_losslessly() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/tooling/runTestsSynchronous/"))
        .and(query_param("classnames", "OrderServiceTest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "apexLogId": "07Lxx00000000001AAA",
            "numTestsRun": 3,
            "numFailures": 2,
            "totalTime": 2.5,
            "codeCoverage": [
                {
                    "id": "01pxx00000000001AAA",
                    "name": "OrderService",
                    "type": "Class",
                    "numLocations": 8,
                    "numLocationsNotCovered": 2,
                    "locationsNotCovered": [
                        {"line": 14, "column": 1, "numExecutions": 0, "time": 0.0},
                        {"line": 15, "column": 1, "numExecutions": 0, "time": 0.0}
                    ]
                }
            ],
            "codeCoverageWarnings": [],
            "failures": [
                {
                    "id": "01pxx00000000002AAA",
                    "message": "Assertion Failed",
                    "methodName": "testCreate",
                    "name": "OrderServiceTest",
                    "seeAllData": false,
                    "stackTrace": "Class.OrderServiceTest.testCreate: line 4",
                    "time": 0.9,
                    "type": "Class"
                },
                {
                    "id": "01pxx00000000002AAA",
                    "message": "NullPointerException",
                    "methodName": "testUpdate",
                    "name": "OrderServiceTest",
                    "seeAllData": false,
                    "stackTrace": "Class.OrderServiceTest.testUpdate: line 9",
                    "time": 0.7,
                    "type": "Class"
                }
            ],
            "successes": [
                {
                    "id": "01pxx00000000002AAA",
                    "methodName": "testDelete",
                    "name": "OrderServiceTest",
                    "seeAllData": false,
                    "time": 0.4
                }
            ]
        })))
        .mount(&server)
        .await;

    let result: RunTestsResult = client
        .run_tests(&["OrderServiceTest"])
        .await
        .expect("a run with failing tests is still an Ok result");

    assert_eq!(result.num_failures, 2);
    assert_eq!(result.failures.len(), 2);
    assert_eq!(result.num_tests_run, 3);
    assert_eq!(result.failures[1].message, "NullPointerException");
    assert_eq!(result.code_coverage[0].locations_not_covered.len(), 2);
    assert_eq!(result.successes[0].method_name, "testDelete");
}

#[tokio::test]
async fn run_tests_async_omits_absent_fields_and_returns_job_id() {
    let (server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/tooling/runTestsAsynchronous/"))
        .and(body_json(serde_json::json!({
            "classids": "01pA,01pB",
            "maxFailedTests": 1,
            "testLevel": "RunSpecifiedTests"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("707xx0000000001")))
        .mount(&server)
        .await;

    let request = RunTestsAsyncRequest::for_classes(&["01pA", "01pB"])
        .with_max_failed_tests(1)
        .with_test_level(TestLevel::RunSpecifiedTests);

    let job_id = client
        .run_tests_async(&request)
        .await
        .expect("should succeed");
    assert_eq!(job_id, "707xx0000000001");
}

#[tokio::test]
async fn run_tests_async_with_no_tuning_sends_minimal_body() {
    let (server, client) = mock_client().await;

    // Exact match: no maxFailedTests or testLevel keys may appear
    Mock::given(method("POST"))
        .and(path("/services/data/v62.0/tooling/runTestsAsynchronous/"))
        .and(body_json(serde_json::json!({"suiteids": "05Fxx00000000001"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("707xx0000000002")))
        .mount(&server)
        .await;

    let request = RunTestsAsyncRequest::for_suites(&["05Fxx00000000001"]);
    let job_id = client
        .run_tests_async(&request)
        .await
        .expect("should succeed");
    assert_eq!(job_id, "707xx0000000002");
}

// ============================================================================
// Failure semantics
// ============================================================================

#[tokio::test]
async fn construction_errors_surface_without_a_network_call() {
    init_tracing();
    // No server is running; a malformed instance URL must fail during
    // request construction, before any connection is attempted
    let client = ToolingClient::new("not a url", "token").unwrap();

    let err = client.describe_global().await.unwrap_err();
    assert!(err.to_string().contains("Invalid URL"), "got: {err}");

    let err = client.execute_anonymous("System.debug(1);").await.unwrap_err();
    assert!(err.to_string().contains("Invalid URL"), "got: {err}");

    let err = client
        .query::<serde_json::Value>("SELECT Id FROM ApexClass")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid URL"), "got: {err}");

    let err = client
        .search::<serde_json::Value>("FIND {x}")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid URL"), "got: {err}");

    let err = client.run_tests(&["OrderServiceTest"]).await.unwrap_err();
    assert!(err.to_string().contains("Invalid URL"), "got: {err}");

    let err = client
        .run_tests_async(&RunTestsAsyncRequest::for_classes(&["01pA"]))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid URL"), "got: {err}");
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    let (server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/tooling/query/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!([{
            "errorCode": "MALFORMED_QUERY",
            "message": "unexpected token: SELEC",
            "fields": []
        }])))
        .mount(&server)
        .await;

    let err = client
        .query::<serde_json::Value>("SELEC Id FROM ApexClass")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("MALFORMED_QUERY"), "got: {err}");
}

//! End-to-end client behavior against a recording transport stub.

use std::sync::Arc;

use uwopen_core::ApiError;
use uwopen_tests::{HttpClient, HttpError, RecordingHttpClient, UwClient};

const ENVELOPE: &str = r#"{"meta":{"status":200},"data":[1,2,3]}"#;

fn client_over(stub: &Arc<RecordingHttpClient>, key: &str) -> UwClient {
    UwClient::with_http_client(Arc::clone(stub) as Arc<dyn HttpClient>, key)
}

#[tokio::test]
async fn menu_hits_the_documented_url() {
    let stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let client = client_over(&stub, "abc");

    client.food_services.menu().await.expect("stub succeeds");

    assert_eq!(
        stub.recorded_urls(),
        vec!["https://api.uwaterloo.ca/v2/foodservices/menu.json?key=abc"]
    );
    // No deadline unless the client was configured with one.
    assert_eq!(stub.recorded_requests()[0].timeout_ms, None);
}

#[tokio::test]
async fn course_info_places_subject_and_catalog_number() {
    let stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let client = client_over(&stub, "K");

    client
        .courses
        .info_by_catalog_number("PHYS", "234")
        .await
        .expect("stub succeeds");

    assert_eq!(
        stub.recorded_urls(),
        vec!["https://api.uwaterloo.ca/v2/courses/PHYS/234.json?key=K"]
    );
}

#[tokio::test]
async fn courses_in_room_places_building_and_room() {
    let stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let client = client_over(&stub, "K");

    client
        .buildings
        .courses_in_room("MC", "4040")
        .await
        .expect("stub succeeds");

    assert_eq!(
        stub.recorded_urls(),
        vec!["https://api.uwaterloo.ca/v2/buildings/MC/4040/courses.json?key=K"]
    );
}

#[tokio::test]
async fn dated_menu_interleaves_year_and_week() {
    let stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let client = client_over(&stub, "K");

    client
        .food_services
        .menu_dated("2017", "32")
        .await
        .expect("stub succeeds");

    assert_eq!(
        stub.recorded_urls(),
        vec!["https://api.uwaterloo.ca/v2/foodservices/2017/32/menu.json?key=K"]
    );
}

#[tokio::test]
async fn parsed_envelope_is_returned_verbatim() {
    let stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let client = client_over(&stub, "K");

    let value = client.terms.list().await.expect("stub succeeds");

    assert_eq!(value["data"][0], 1);
    assert_eq!(value["meta"]["status"], 200);
}

#[tokio::test]
async fn malformed_body_surfaces_as_parse_error() {
    let stub = Arc::new(RecordingHttpClient::with_body("not json"));
    let client = client_over(&stub, "K");

    let err = client.weather.current().await.expect_err("must fail");
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    let stub = Arc::new(RecordingHttpClient::with_response(Err(HttpError::connect(
        "connection refused",
    ))));
    let client = client_over(&stub, "K");

    let err = client.events.all().await.expect_err("must fail");
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn truncated_body_surfaces_as_read_error() {
    let stub = Arc::new(RecordingHttpClient::with_response(Err(HttpError::read(
        "connection reset mid-body",
    ))));
    let client = client_over(&stub, "K");

    let err = client.news.all().await.expect_err("must fail");
    assert!(matches!(err, ApiError::Read(_)));
}

#[tokio::test]
async fn upstream_error_envelope_is_a_successful_call() {
    // Status codes are not inspected; a JSON error envelope parses fine and
    // the caller reads meta.status.
    let body = r#"{"meta":{"status":403,"message":"invalid key"},"data":null}"#;
    let stub = Arc::new(RecordingHttpClient::with_status(403, body));
    let client = client_over(&stub, "bad-key");

    let value = client.api.usage().await.expect("parse succeeds");
    assert_eq!(value["meta"]["status"], 403);
}

#[tokio::test]
async fn non_json_error_page_surfaces_as_parse_error() {
    let stub = Arc::new(RecordingHttpClient::with_status(500, "Internal Server Error"));
    let client = client_over(&stub, "K");

    let err = client.server.time().await.expect_err("must fail");
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn same_key_clients_are_indistinguishable() {
    let first_stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let second_stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let first = client_over(&first_stub, "K");
    let second = client_over(&second_stub, "K");

    first.codes.units().await.expect("stub succeeds");
    second.codes.units().await.expect("stub succeeds");

    assert_eq!(first_stub.recorded_urls(), second_stub.recorded_urls());

    // Further calls on one leave the other untouched.
    first.codes.subjects().await.expect("stub succeeds");
    assert_eq!(first_stub.recorded_urls().len(), 2);
    assert_eq!(second_stub.recorded_urls().len(), 1);
}

#[tokio::test]
async fn concurrent_calls_match_sequential_calls() {
    let sequential_stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let sequential = client_over(&sequential_stub, "K");
    sequential.weather.current().await.expect("stub succeeds");
    sequential.terms.list().await.expect("stub succeeds");
    sequential.events.holidays().await.expect("stub succeeds");
    sequential
        .resources
        .goosewatch()
        .await
        .expect("stub succeeds");

    let concurrent_stub = Arc::new(RecordingHttpClient::with_body(ENVELOPE));
    let concurrent = client_over(&concurrent_stub, "K");
    let handles = vec![
        tokio::spawn({
            let client = concurrent.clone();
            async move { client.weather.current().await }
        }),
        tokio::spawn({
            let client = concurrent.clone();
            async move { client.terms.list().await }
        }),
        tokio::spawn({
            let client = concurrent.clone();
            async move { client.events.holidays().await }
        }),
        tokio::spawn({
            let client = concurrent.clone();
            async move { client.resources.goosewatch().await }
        }),
    ];
    for handle in handles {
        handle.await.expect("task completes").expect("stub succeeds");
    }

    let mut expected = sequential_stub.recorded_urls();
    expected.sort();
    let mut actual = concurrent_stub.recorded_urls();
    actual.sort();
    assert_eq!(actual, expected);
}

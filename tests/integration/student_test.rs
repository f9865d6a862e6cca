//! Integration tests for the student endpoints.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_then_get_roundtrip() {
    let app = TestApp::new().await;

    let id = app
        .create_student("Ada Lovelace", "ada@example.com", 36)
        .await;
    assert!(id > 0);

    let response = app
        .request("GET", &format!("/api/student/{id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"].as_i64().unwrap(), id);
    assert_eq!(response.body["name"], "Ada Lovelace");
    assert_eq!(response.body["email"], "ada@example.com");
    assert_eq!(response.body["age"], 36);
}

#[tokio::test]
async fn create_with_empty_body_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/student", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "Error");
    assert_eq!(response.body["error"], "empty body");
}

#[tokio::test]
async fn create_with_malformed_json_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request_raw("POST", "/api/student", "{\"name\": \"Ada\",")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "Error");
}

#[tokio::test]
async fn create_with_invalid_fields_reports_every_field() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/student",
            Some(serde_json::json!({
                "name": "",
                "email": "bad",
                "age": -1,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "Error");

    let message = response.body["error"].as_str().unwrap();
    assert!(message.contains("name"), "missing name in: {message}");
    assert!(message.contains("email"), "missing email in: {message}");
    assert!(message.contains("age"), "missing age in: {message}");
}

#[tokio::test]
async fn get_with_non_numeric_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/student/abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], "Error");
}

#[tokio::test]
async fn get_with_unknown_id_is_a_server_error() {
    let app = TestApp::new().await;

    // Missing records are not distinguished from other storage failures,
    // so the lookup reports 500 rather than 404.
    let response = app.request("GET", "/api/student/9999", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["status"], "Error");
}

#[tokio::test]
async fn list_on_empty_store_is_an_empty_array() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/students", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn list_contains_exactly_the_created_students() {
    let app = TestApp::new().await;

    let inputs = [
        ("Ada Lovelace", "ada@example.com", 36),
        ("Alan Turing", "alan@example.com", 41),
        ("Grace Hopper", "grace@example.com", 85),
    ];
    for (name, email, age) in inputs {
        app.create_student(name, email, age).await;
    }

    let response = app.request("GET", "/api/students", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let students = response.body.as_array().unwrap();
    assert_eq!(students.len(), inputs.len());

    let mut emails: Vec<&str> = students
        .iter()
        .map(|s| s["email"].as_str().unwrap())
        .collect();
    emails.sort_unstable();
    assert_eq!(
        emails,
        vec!["ada@example.com", "alan@example.com", "grace@example.com"]
    );
}

#[tokio::test]
async fn reads_are_idempotent() {
    let app = TestApp::new().await;
    let id = app
        .create_student("Ada Lovelace", "ada@example.com", 36)
        .await;

    let first = app
        .request("GET", &format!("/api/student/{id}"), None)
        .await;
    let second = app
        .request("GET", &format!("/api/student/{id}"), None)
        .await;
    assert_eq!(first.status, second.status);
    assert_eq!(first.body, second.body);

    let first_list = app.request("GET", "/api/students", None).await;
    let second_list = app.request("GET", "/api/students", None).await;
    assert_eq!(first_list.body, second_list.body);
}

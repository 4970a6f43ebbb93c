//! End-to-end tests driving the `ledger` binary against a mock API.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{failure, read_session, run, seed_session, success, user_json};

fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

fn project_json() -> serde_json::Value {
    json!({
        "id": 3,
        "company": 4,
        "company_name": "Acme",
        "name": "Website revamp",
        "start_date": "2025-01-10",
        "project_value": "150000.00",
        "received_amount": "50000.00",
        "status": "PENDING",
        "created_by": 7,
        "created_at": "2025-01-10T09:00:00Z",
        "updated_at": "2025-01-11T09:00:00Z",
        "approvals": [
            {"id": 1, "project": 3, "approver": 7, "approved": true},
            {"id": 2, "project": 3, "approver": 8, "approved": false}
        ],
        "pending_count": 1
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn login_then_whoami_uses_cached_profile() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .and(body_json(json!({"username": "alice", "password": "secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(),
            "access": "A1",
            "refresh": "R1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &["auth", "login", "--username", "alice", "--password", "secret123"],
        home.path(),
        &api_url(&server),
    )
    .await;
    let stdout = success(&output);
    assert!(stdout.contains("Logged in successfully"));

    let stored = read_session(home.path());
    assert_eq!(stored["access_token"], "A1");
    assert_eq!(stored["refresh_token"], "R1");

    let output = run(&["auth", "whoami"], home.path(), &api_url(&server)).await;
    let stdout = success(&output);
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("Acme"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn project_list_refreshes_expired_token() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    seed_session(home.path(), "A1", "R1", Some(&user_json()));

    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .and(header("authorization", "Bearer A2"))
        .and(query_param("company", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_json()])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh/"))
        .and(body_json(json!({"refresh": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "A2"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        &["projects", "list", "--company", "4"],
        home.path(),
        &api_url(&server),
    )
    .await;
    let stdout = success(&output);

    assert!(stdout.contains("Website revamp"));
    assert!(stdout.contains("₹ 150,000.00"));
    assert!(stdout.contains("1 / 2"));

    let stored = read_session(home.path());
    assert_eq!(stored["access_token"], "A2");
    assert_eq!(stored["refresh_token"], "R1");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_session_asks_for_login() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let output = run(&["projects", "list"], home.path(), &api_url(&server)).await;
    let stderr = failure(&output);

    assert!(stderr.contains("Session expired, run `ledger auth login`"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_refresh_clears_tokens() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    seed_session(home.path(), "A1", "R1", Some(&user_json()));

    Mock::given(method("GET"))
        .and(path("/api/summary/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Token is blacklisted"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(&["summary", "--company", "4"], home.path(), &api_url(&server)).await;
    let stderr = failure(&output);
    assert!(stderr.contains("Session expired"));

    let stored = read_session(home.path());
    assert!(stored.get("access_token").is_none());
    assert!(stored.get("refresh_token").is_none());
    assert!(stored.get("user").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn business_error_message_is_printed() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    seed_session(home.path(), "A1", "R1", Some(&user_json()));

    Mock::given(method("POST"))
        .and(path("/api/projects/3/approve/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "You have already approved this project"
        })))
        .mount(&server)
        .await;

    let output = run(&["projects", "approve", "3"], home.path(), &api_url(&server)).await;
    let stderr = failure(&output);
    assert!(stderr.contains("Failed to approve project"));
    assert!(stderr.contains("You have already approved this project"));
}

#[tokio::test(flavor = "multi_thread")]
async fn json_output_is_machine_readable() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    seed_session(home.path(), "A1", "R1", None);

    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_json()])))
        .mount(&server)
        .await;

    let output = run(&["projects", "list", "--json"], home.path(), &api_url(&server)).await;
    let stdout = success(&output);
    let projects: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(projects[0]["name"], "Website revamp");
    assert_eq!(projects[0]["project_value"], "150000.00");
}

#[tokio::test(flavor = "multi_thread")]
async fn status_filter_applies_after_fetch() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    seed_session(home.path(), "A1", "R1", None);

    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_json()])))
        .mount(&server)
        .await;

    let output = run(
        &["projects", "list", "--status", "approved"],
        home.path(),
        &api_url(&server),
    )
    .await;
    let stdout = success(&output);
    assert!(!stdout.contains("Website revamp"));
    assert!(stdout.contains("No records"));
}

#[tokio::test(flavor = "multi_thread")]
async fn register_with_mismatched_passwords_fails_locally() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let output = run(
        &[
            "auth",
            "register",
            "--username",
            "bob",
            "--email",
            "bob@example.com",
            "--password",
            "one",
            "--password-confirm",
            "two",
        ],
        home.path(),
        &api_url(&server),
    )
    .await;
    let stderr = failure(&output);

    assert!(stderr.contains("passwords do not match"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn logout_forgets_the_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    seed_session(home.path(), "A1", "R1", Some(&user_json()));

    success(&run(&["auth", "logout"], home.path(), &api_url(&server)).await);
    assert_eq!(read_session(home.path()), json!({}));

    let output = run(&["auth", "whoami"], home.path(), &api_url(&server)).await;
    let stderr = failure(&output);
    assert!(stderr.contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn status_validates_against_the_server() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    seed_session(home.path(), "A1", "R1", Some(&user_json()));

    Mock::given(method("GET"))
        .and(path("/api/auth/me/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(&["auth", "status"], home.path(), &api_url(&server)).await;
    let stdout = success(&output);
    assert!(stdout.contains("Session is valid"));
}

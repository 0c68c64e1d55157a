//! Integration tests for the HTTP API.
//!
//! These tests drive the full router with `tower::ServiceExt::oneshot`:
//! 1. A visitor registers and answers the questionnaire
//! 2. The session picker lists and reloads saved chats
//! 3. The operator changes status, deletes and exports leads

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use kaya_concierge::adapters::ai::PassthroughAreaResolver;
use kaya_concierge::adapters::http::concierge_router;
use kaya_concierge::adapters::memory::InMemoryLeadRepository;
use kaya_concierge::config::AppConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(repo: &InMemoryLeadRepository) -> Router {
    concierge_router(
        Arc::new(repo.clone()),
        Arc::new(PassthroughAreaResolver),
        &AppConfig::default(),
    )
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>, Option<String>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec(), disposition)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes, _) = send_raw(app, method, uri, body).await;
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn register(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/sessions",
        Some(json!({ "name": name, "email": email, "mobile": "0501112233" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn say(app: &Router, token: &str, message: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        &format!("/api/sessions/{}/messages", token),
        Some(json!({ "message": message })),
    )
    .await
}

// =============================================================================
// Visitor chat
// =============================================================================

#[tokio::test]
async fn health_check_responds() {
    let repo = InMemoryLeadRepository::new();
    let (status, body) = send(&app(&repo), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn register_returns_greeting() {
    let repo = InMemoryLeadRepository::new();
    let body = register(&app(&repo), "Aisha", "aisha@example.com").await;

    assert_eq!(body["step"], "greeting");
    assert_eq!(
        body["reply"],
        "Welcome, Aisha to KAYA Real Estate. I am your digital concierge. Are you looking to find a new property today?"
    );
    assert_eq!(body["suggestions"], json!(["Yes, I'm looking!", "Just browsing"]));
}

#[tokio::test]
async fn blank_registration_field_is_400() {
    let repo = InMemoryLeadRepository::new();
    let (status, body) = send(
        &app(&repo),
        Method::POST,
        "/api/sessions",
        Some(json!({ "name": "Aisha", "email": "  ", "mobile": "050" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "email");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn questionnaire_flow_to_closing() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    let session = register(&app, "Aisha", "aisha@example.com").await;
    let token = session["session_token"].as_str().unwrap().to_string();

    let (_, body) = say(&app, &token, "Yes, I'm looking!").await;
    assert_eq!(body["step"], "unit");
    let (_, body) = say(&app, &token, "Studio / 1BR").await;
    assert_eq!(body["step"], "purpose");
    let (_, body) = say(&app, &token, "Buy").await;
    assert_eq!(body["reply"], "What is your ideal budget range for this investment?");
    let (_, body) = say(&app, &token, "1.5M - 3M").await;
    assert_eq!(body["step"], "area");
    let (_, body) = say(&app, &token, "Downtown Dubai").await;
    assert_eq!(body["step"], "qanda");
    assert_eq!(body["suggestions"], json!(["No, I'm ready", "Talk to an agent"]));

    let (status, body) = say(&app, &token, "Talk to an agent").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "closing");
    assert_eq!(body["suggestions"], json!([]));

    let lead_id = body["lead_id"].as_i64().unwrap();
    let (_, lead) = send(&app, Method::GET, &format!("/api/leads/{}", lead_id), None).await;
    assert_eq!(
        lead["description"],
        "Looking for Studio / 1BR to Buy in Downtown Dubai (Budget: 1.5M - 3M)"
    );
    assert_eq!(lead["step"], "closing");
}

#[tokio::test]
async fn blank_message_is_400() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    let session = register(&app, "Aisha", "aisha@example.com").await;
    let token = session["session_token"].as_str().unwrap();

    let (status, _) = say(&app, token, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_and_malformed_tokens() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);

    let (status, _) = say(&app, "00000000-0000-0000-0000-000000000000", "hi").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/sessions/nope", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_failure_is_503_and_retryable() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    let session = register(&app, "Aisha", "aisha@example.com").await;
    let token = session["session_token"].as_str().unwrap();

    repo.set_fail_writes(true);
    let (status, body) = say(&app, token, "Villa").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "DATABASE_ERROR");

    repo.set_fail_writes(false);
    let (status, body) = say(&app, token, "Villa").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transcript"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Session picker
// =============================================================================

#[tokio::test]
async fn new_list_load_and_logout() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    let session = register(&app, "Omar", "omar@example.com").await;
    let token = session["session_token"].as_str().unwrap().to_string();
    let first = session["lead_id"].as_i64().unwrap();
    say(&app, &token, "Villa").await;

    let (status, fresh) = send(&app, Method::POST, &format!("/api/sessions/{}/new", token), None).await;
    assert_eq!(status, StatusCode::CREATED);
    let second = fresh["lead_id"].as_i64().unwrap();
    assert!(second > first);
    assert_eq!(fresh["step"], "greeting");

    let (_, list) = send(&app, Method::GET, &format!("/api/sessions/{}/leads", token), None).await;
    let ids: Vec<i64> = list["leads"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, first]);

    let (status, loaded) = send(
        &app,
        Method::POST,
        &format!("/api/sessions/{}/leads/{}/load", token, first),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(loaded["lead_id"], first);
    assert_eq!(loaded["step"], "purpose");
    assert_eq!(loaded["preferences"]["unit"], "Villa");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/sessions/{}", token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &format!("/api/sessions/{}", token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cannot_load_another_visitors_lead() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    let mine = register(&app, "Omar", "omar@example.com").await;
    let theirs = register(&app, "Sara", "sara@example.com").await;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!(
            "/api/sessions/{}/leads/{}/load",
            mine["session_token"].as_str().unwrap(),
            theirs["lead_id"]
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Operator review
// =============================================================================

#[tokio::test]
async fn status_update_and_delete() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    let session = register(&app, "Noor", "noor@example.com").await;
    let lead_id = session["lead_id"].as_i64().unwrap();
    let uri = format!("/api/leads/{}", lead_id);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("{}/status", uri),
        Some(json!({ "status": "Agent Talking" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, lead) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(lead["status_label"], "Agent Talking");

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("{}/status", uri),
        Some(json!({ "status": "Closed" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the browser session outlives its deleted lead
    let (status, body) = say(&app, session["session_token"].as_str().unwrap(), "Villa").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn export_downloads_csv() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    let session = register(&app, "Noor", "noor@example.com").await;
    let token = session["session_token"].as_str().unwrap().to_string();
    register(&app, "Ali", "ali@example.com").await;
    say(&app, &token, "2BR please").await;
    say(&app, &token, "Rent").await;

    let (status, bytes, disposition) = send_raw(&app, Method::GET, "/api/leads/export", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        disposition.as_deref(),
        Some("attachment; filename=\"KAYA_Leads.csv\"")
    );

    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Name,Email,Mobile,Description,Status");
    assert_eq!(
        lines[1],
        "Noor,noor@example.com,0501112233,Looking for 2BR please to Rent in unspecified (Budget: unspecified),Pending"
    );
    assert_eq!(lines[2], "Ali,ali@example.com,0501112233,New Lead / Browsing,Pending");
}

#[tokio::test]
async fn export_keeps_formula_like_names_as_text() {
    let repo = InMemoryLeadRepository::new();
    let app = app(&repo);
    register(&app, "=HYPERLINK(\"http://evil\",\"x\")", "a@b.c").await;

    let (status, bytes, _) = send_raw(&app, Method::GET, "/api/leads/export", None).await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(bytes).unwrap();
    let row = text.lines().nth(1).unwrap();
    assert_eq!(
        row,
        "\"'=HYPERLINK(\"\"http://evil\"\",\"\"x\"\")\",a@b.c,0501112233,New Lead / Browsing,Pending"
    );
}

//! End-to-end smoke tests for the full petcared stack.
//!
//! Each test loads a roster file from disk into the in-memory repository,
//! wires the real services and axum router, and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use petcare_adapter_http_axum::router;
use petcare_adapter_http_axum::state::AppState;
use petcare_adapter_roster::InMemoryPetRepository;
use petcare_app::clock::FixedClock;
use petcare_app::services::pet_service::PetService;
use petcare_app::services::reminder_service::ReminderService;
use petcare_domain::calendar::CalendarDate;
use serde_json::{Value, json};
use tower::ServiceExt;

const ROSTER: &str = r#"
[[pets]]
id = "6f1c9a52-3c1e-4f0b-9d1a-1b2c3d4e5f60"
name = "Rex"
age_years = 0.2
last_vaccination_date = 2024-01-15

[[pets]]
name = "Luna"
species = "cat"
age_years = 0.4
last_vaccination_date = "2023-12-01"
last_deworming_date = "2024-02-10T23:30:00+07:00"

[[pets]]
name = "Milo"
age_years = 5
"#;

const REX_ID: &str = "6f1c9a52-3c1e-4f0b-9d1a-1b2c3d4e5f60";

fn roster_file(test: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "petcared-{}-{test}.toml",
        std::process::id()
    ));
    std::fs::write(&path, ROSTER).unwrap();
    path
}

/// Build a fully-wired router over the test roster, pinned to 2024-03-01.
fn app(test: &str) -> axum::Router {
    let path = roster_file(test);
    let repo = InMemoryPetRepository::from_roster_file(&path).expect("roster should load");
    std::fs::remove_file(path).unwrap();

    let clock = FixedClock(CalendarDate::from_ymd(2024, 3, 1).unwrap());
    router::build(AppState::new(
        PetService::new(repo.clone(), clock),
        ReminderService::new(repo, clock),
    ))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app("health")
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_roster_pets_sorted_by_name() {
    let resp = app("list")
        .oneshot(
            Request::builder()
                .uri("/api/pets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|pet| pet["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Luna", "Milo", "Rex"]);
}

#[tokio::test]
async fn should_keep_roster_id_and_dates() {
    let resp = app("get")
        .oneshot(
            Request::builder()
                .uri(format!("/api/pets/{REX_ID}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], REX_ID);
    assert_eq!(body["species"], "dog");
    assert_eq!(body["last_vaccination_date"], "2024-01-15");
    assert_eq!(body["last_deworming_date"], Value::Null);
}

#[tokio::test]
async fn should_delete_pet_and_then_report_not_found() {
    let app = app("delete");
    let uri = format!("/api/pets/{REX_ID}");

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_order_upcoming_reminders_by_urgency() {
    let resp = app("upcoming")
        .oneshot(
            Request::builder()
                .uri("/api/reminders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let summary: Vec<(&str, &str, i64)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["pet_name"].as_str().unwrap(),
                r["kind"].as_str().unwrap(),
                r["days_until_due"].as_i64().unwrap(),
            )
        })
        .collect();

    // Rex: 2024-01-15 + 3 weeks = 2024-02-05.
    // Luna: deworming 2024-02-10 + 1 month = 2024-03-10,
    //       vaccination 2023-12-01 + 6 months = 2024-06-01.
    assert_eq!(
        summary,
        vec![
            ("Rex", "vaccination", -25),
            ("Luna", "deworming", 9),
            ("Luna", "vaccination", 92),
        ]
    );
    assert_eq!(body[0]["message"]["priority"], "urgent");
    assert_eq!(body[1]["message"]["priority"], "medium");
    assert_eq!(body[2]["message"]["priority"], "low");
}

#[tokio::test]
async fn should_clear_overdue_reminder_after_recording_service() {
    let app = app("record");

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/pets/{REX_ID}/services"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "kind": "vaccination", "date": "2024-02-28" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/pets/{REX_ID}/reminders"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(resp).await;

    assert_eq!(body[0]["due_date"], "2024-03-20");
    assert_eq!(body[0]["days_until_due"], 19);
    assert_eq!(
        body[0]["message"]["vi"],
        "tiêm phòng của Rex sẽ đến trong 19 ngày nữa"
    );
}

// ---------------------------------------------------------------------------
// Calculators
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_clamp_month_end_when_calculating_deworming() {
    let resp = app("calculate")
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate/next-due")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "kind": "deworming", "last_date": "2024-01-31", "age_years": 0.3 })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["due_date"], "2024-02-29");
    assert_eq!(body["days_until_due"], -1);
}

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Duration, Local, Utc};
use tower::ServiceExt;

use kartbook::config::AppConfig;
use kartbook::handlers;
use kartbook::models::activity::RecentBooking;
use kartbook::models::weather::{Condition, WeatherReport};
use kartbook::services::activity::{self, ActivitySource};
use kartbook::services::responder::DEFAULT_RESPONSE;
use kartbook::services::weather::WeatherSource;
use kartbook::state::AppState;

// ── Mock Sources ──

struct FixedActivity;

#[async_trait]
impl ActivitySource for FixedActivity {
    async fn online_users(&self) -> anyhow::Result<u32> {
        Ok(9)
    }

    async fn next_booking(&self) -> anyhow::Result<RecentBooking> {
        Ok(RecentBooking {
            id: "booking-1".to_string(),
            name: "Julie B.".to_string(),
            experience: "Aventure Familiale".to_string(),
            city: "Antibes".to_string(),
            timestamp: Utc::now(),
        })
    }
}

struct FixedWeather;

#[async_trait]
impl WeatherSource for FixedWeather {
    async fn current(&self) -> anyhow::Result<WeatherReport> {
        Ok(WeatherReport {
            location: "Grasse, France".to_string(),
            condition: Condition::Sunny,
            temperature: 28,
            humidity: 50,
            wind_speed: 10,
            visibility: 12,
            pressure: 1015,
            uv_index: 6,
            forecast: vec![],
        })
    }
}

struct BrokenWeather;

#[async_trait]
impl WeatherSource for BrokenWeather {
    async fn current(&self) -> anyhow::Result<WeatherReport> {
        anyhow::bail!("station offline")
    }
}

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        typing_delay_min_ms: 0,
        typing_delay_max_ms: 0,
        submit_delay_ms: 0,
        weather_delay_ms: 0,
        online_users_interval_secs: 8,
        booking_interval_secs: 12,
        session_ttl_minutes: 30,
    }
}

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        test_config(),
        Box::new(FixedActivity),
        Box::new(FixedWeather),
    ))
}

fn test_app(state: Arc<AppState>) -> Router {
    handlers::router(state)
}

async fn call(
    state: &Arc<AppState>,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = test_app(state.clone()).oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

fn tomorrow() -> String {
    (Local::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

fn contact_json() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Marie",
        "lastName": "Dupont",
        "email": "marie.dupont@example.fr",
        "phone": "+33 6 12 34 56 78",
        "specialRequests": "Arrêt photo au musée du parfum"
    })
}

async fn open_reservation(state: &Arc<AppState>) -> String {
    let (status, json) = call(state, "POST", "/api/reservations", None).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_string()
}

// ── Health & Catalogue ──

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let res = test_app(state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_experiences_catalogue() {
    let state = test_state();
    let (status, json) = call(&state, "GET", "/api/experiences", None).await;
    assert_eq!(status, StatusCode::OK);

    let experiences = json["experiences"].as_array().unwrap();
    assert_eq!(experiences.len(), 4);
    assert_eq!(experiences[1]["id"], "couple");
    assert_eq!(experiences[1]["price"], 45);
    assert_eq!(experiences[1]["popular"], true);
    assert_eq!(experiences[3]["capacity_label"], "5-8 personnes");
    assert_eq!(json["time_slots"][0], "09:00");
    assert_eq!(json["time_slots"].as_array().unwrap().len(), 6);
    assert_eq!(json["max_participants"], 8);
}

// ── Reservation Wizard ──

#[tokio::test]
async fn test_full_reservation_flow() {
    let state = test_state();
    let id = open_reservation(&state).await;
    let base = format!("/api/reservations/{id}");

    let (status, json) = call(
        &state,
        "POST",
        &format!("{base}/experience"),
        Some(serde_json::json!({"experience": "solo"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "selecting_experience");
    assert_eq!(json["unit_price"], 25);

    let (status, json) = call(&state, "POST", &format!("{base}/next"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "selecting_schedule");
    assert_eq!(json["step_number"], 2);

    let (status, _) = call(
        &state,
        "POST",
        &format!("{base}/schedule"),
        Some(serde_json::json!({"date": tomorrow(), "time": "09:00", "participants": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = call(&state, "POST", &format!("{base}/next"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "entering_contact");
    assert_eq!(json["preview"]["date"], tomorrow());

    let (status, _) = call(&state, "POST", &format!("{base}/contact"), Some(contact_json())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = call(&state, "POST", &format!("{base}/submit"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "submitted");
    assert_eq!(json["summary"]["title"], "Aventure Solo");
    assert_eq!(json["summary"]["time"], "09:00");
    assert_eq!(json["summary"]["participants"], 1);
    assert_eq!(json["summary"]["unit_price"], 25);
    assert_eq!(json["summary"]["total_price"], 25);
    assert!(json["summary"]["reference"].as_str().is_some());
}

#[tokio::test]
async fn test_next_without_experience_rejected() {
    let state = test_state();
    let id = open_reservation(&state).await;

    let (status, json) = call(&state, "POST", &format!("/api/reservations/{id}/next"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "experience");

    let (_, json) = call(&state, "GET", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(json["step"], "selecting_experience");
}

#[tokio::test]
async fn test_unknown_experience_rejected() {
    let state = test_state();
    let id = open_reservation(&state).await;

    let (status, json) = call(
        &state,
        "POST",
        &format!("/api/reservations/{id}/experience"),
        Some(serde_json::json!({"experience": "tandem"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "experience");
}

#[tokio::test]
async fn test_schedule_guard_and_bad_slot() {
    let state = test_state();
    let id = open_reservation(&state).await;
    let base = format!("/api/reservations/{id}");

    call(
        &state,
        "POST",
        &format!("{base}/experience"),
        Some(serde_json::json!({"experience": "famille"})),
    )
    .await;
    call(&state, "POST", &format!("{base}/next"), None).await;

    // Only a date: cannot advance
    call(
        &state,
        "POST",
        &format!("{base}/schedule"),
        Some(serde_json::json!({"date": tomorrow(), "participants": 3})),
    )
    .await;
    let (status, json) = call(&state, "POST", &format!("{base}/next"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "time");

    // Unknown slot is rejected before it reaches the draft
    let (status, json) = call(
        &state,
        "POST",
        &format!("{base}/schedule"),
        Some(serde_json::json!({"date": tomorrow(), "time": "18:00", "participants": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "time");

    let (_, json) = call(&state, "GET", &base, None).await;
    assert_eq!(json["step"], "selecting_schedule");
    assert_eq!(json["total_price"], 105);
}

#[tokio::test]
async fn test_past_date_rejected() {
    let state = test_state();
    let id = open_reservation(&state).await;
    let base = format!("/api/reservations/{id}");
    let yesterday = (Local::now().date_naive() - Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();

    call(
        &state,
        "POST",
        &format!("{base}/experience"),
        Some(serde_json::json!({"experience": "group"})),
    )
    .await;
    call(&state, "POST", &format!("{base}/next"), None).await;
    call(
        &state,
        "POST",
        &format!("{base}/schedule"),
        Some(serde_json::json!({"date": yesterday, "time": "10:30", "participants": 6})),
    )
    .await;

    let (status, json) = call(&state, "POST", &format!("{base}/next"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "date");
}

#[tokio::test]
async fn test_participants_out_of_range() {
    let state = test_state();
    let id = open_reservation(&state).await;
    let base = format!("/api/reservations/{id}");
    call(
        &state,
        "POST",
        &format!("{base}/experience"),
        Some(serde_json::json!({"experience": "group"})),
    )
    .await;
    call(&state, "POST", &format!("{base}/next"), None).await;

    let (status, json) = call(
        &state,
        "POST",
        &format!("{base}/schedule"),
        Some(serde_json::json!({"date": tomorrow(), "time": "10:30", "participants": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "participants");
}

#[tokio::test]
async fn test_back_navigation_keeps_draft() {
    let state = test_state();
    let id = open_reservation(&state).await;
    let base = format!("/api/reservations/{id}");

    call(
        &state,
        "POST",
        &format!("{base}/experience"),
        Some(serde_json::json!({"experience": "couple"})),
    )
    .await;
    call(&state, "POST", &format!("{base}/next"), None).await;
    call(
        &state,
        "POST",
        &format!("{base}/schedule"),
        Some(serde_json::json!({"date": tomorrow(), "time": "15:00", "participants": 2})),
    )
    .await;
    let (_, before) = call(&state, "POST", &format!("{base}/next"), None).await;

    let (status, json) = call(&state, "POST", &format!("{base}/prev"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["step"], "selecting_schedule");
    assert_eq!(json["state"]["schedule"]["time"], "15:00");

    let (_, after) = call(&state, "POST", &format!("{base}/next"), None).await;
    assert_eq!(after["state"], before["state"]);
    assert_eq!(after["total_price"], 90);
}

#[tokio::test]
async fn test_submit_with_invalid_email() {
    let state = test_state();
    let id = open_reservation(&state).await;
    let base = format!("/api/reservations/{id}");

    call(
        &state,
        "POST",
        &format!("{base}/experience"),
        Some(serde_json::json!({"experience": "solo"})),
    )
    .await;
    call(&state, "POST", &format!("{base}/next"), None).await;
    call(
        &state,
        "POST",
        &format!("{base}/schedule"),
        Some(serde_json::json!({"date": tomorrow(), "time": "12:00"})),
    )
    .await;
    call(&state, "POST", &format!("{base}/next"), None).await;

    let mut contact = contact_json();
    contact["email"] = serde_json::json!("marie.dupont");
    call(&state, "POST", &format!("{base}/contact"), Some(contact)).await;

    let (status, json) = call(&state, "POST", &format!("{base}/submit"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "email");

    let (_, json) = call(&state, "GET", &base, None).await;
    assert_eq!(json["step"], "entering_contact");
    assert!(json.get("summary").is_none());
}

#[tokio::test]
async fn test_wrong_step_is_conflict() {
    let state = test_state();
    let id = open_reservation(&state).await;

    let (status, _) = call(
        &state,
        "POST",
        &format!("/api/reservations/{id}/submit"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call(
        &state,
        "POST",
        &format!("/api/reservations/{id}/contact"),
        Some(contact_json()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_reservation_not_found() {
    let state = test_state();
    let (status, _) = call(
        &state,
        "GET",
        "/api/reservations/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_discard_reservation() {
    let state = test_state();
    let id = open_reservation(&state).await;

    let (status, _) = call(&state, "DELETE", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&state, "GET", &format!("/api/reservations/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Chat ──

#[tokio::test]
async fn test_chat_opens_with_greeting() {
    let state = test_state();
    let (status, json) = call(&state, "POST", "/api/chat", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    assert_eq!(json["messages"][0]["author"], "bot");
    assert_eq!(json["quick_replies"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_chat_reservation_keyword() {
    let state = test_state();
    let (_, json) = call(&state, "POST", "/api/chat", None).await;
    let id = json["id"].as_str().unwrap().to_string();

    let (status, json) = call(
        &state,
        "POST",
        &format!("/api/chat/{id}/messages"),
        Some(serde_json::json!({"text": "Je veux réserver un parcours"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"]["author"], "user");
    assert_eq!(json["reply"]["author"], "bot");
    assert!(json["reply"]["text"]
        .as_str()
        .unwrap()
        .contains("page de réservation"));
    assert!(json["quick_replies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_pricing_and_default() {
    let state = test_state();
    let (_, json) = call(&state, "POST", "/api/chat", None).await;
    let id = json["id"].as_str().unwrap().to_string();
    let uri = format!("/api/chat/{id}/messages");

    let (_, json) = call(
        &state,
        "POST",
        &uri,
        Some(serde_json::json!({"text": "combien ça coûte"})),
    )
    .await;
    assert!(json["reply"]["text"].as_str().unwrap().contains("Escapade Romantique : 45€"));

    let (_, json) = call(&state, "POST", &uri, Some(serde_json::json!({"text": "bonjour"}))).await;
    assert_eq!(json["reply"]["text"], DEFAULT_RESPONSE);

    let (_, json) = call(&state, "GET", &format!("/api/chat/{id}"), None).await;
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[4]["id"], 5);
}

#[tokio::test]
async fn test_chat_empty_message_rejected() {
    let state = test_state();
    let (_, json) = call(&state, "POST", "/api/chat", None).await;
    let id = json["id"].as_str().unwrap().to_string();

    let (status, json) = call(
        &state,
        "POST",
        &format!("/api/chat/{id}/messages"),
        Some(serde_json::json!({"text": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "text");
}

// ── Activity, Weather, Site ──

#[tokio::test]
async fn test_activity_snapshot_after_ticks() {
    let state = test_state();
    activity::refresh_online_users(&state).await.unwrap();
    activity::publish_booking(&state).await.unwrap();

    let (status, json) = call(&state, "GET", "/api/activity", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["online_users"], 9);
    assert_eq!(json["recent_bookings"][0]["city"], "Antibes");
    assert_eq!(json["recent_bookings"][0]["time_ago"], "À l'instant");
    assert_eq!(
        json["notifications"][0]["message"],
        "Julie B. de Antibes vient de réserver \"Aventure Familiale\""
    );
    assert_eq!(json["today"]["bookings"], 12);
}

#[tokio::test]
async fn test_activity_events_broadcast() {
    let state = test_state();
    let mut rx = state.activity_tx.subscribe();
    activity::refresh_online_users(&state).await.unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.name(), "online_users");
}

#[tokio::test]
async fn test_weather() {
    let state = test_state();
    let (status, json) = call(&state, "GET", "/api/weather", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["condition"], "sunny");
    assert_eq!(json["description"], "Ensoleillé");
    assert!(json["recommendation"].as_str().unwrap().contains("Temps idéal"));
}

#[tokio::test]
async fn test_weather_source_failure() {
    let state = Arc::new(AppState::new(
        test_config(),
        Box::new(FixedActivity),
        Box::new(BrokenWeather),
    ));
    let (status, json) = call(&state, "GET", "/api/weather", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].as_str().unwrap().contains("station offline"));
}

#[tokio::test]
async fn test_faq_and_search() {
    let state = test_state();
    let (status, json) = call(&state, "GET", "/api/faq", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 5);

    let (_, json) = call(&state, "GET", "/api/faq?q=autonomie", None).await;
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits[0]["answer"].as_str().unwrap().contains("4 à 6 heures"));
}

#[tokio::test]
async fn test_stats_and_contact_info() {
    let state = test_state();
    let (_, json) = call(&state, "GET", "/api/stats", None).await;
    assert_eq!(json[0]["value"], 1250);
    assert_eq!(json.as_array().unwrap().len(), 6);

    let (_, json) = call(&state, "GET", "/api/contact-info", None).await;
    assert_eq!(json[0]["details"][0], "Place aux Aires");
}

#[tokio::test]
async fn test_contact_form() {
    let state = test_state();
    let (status, json) = call(
        &state,
        "POST",
        "/api/contact",
        Some(serde_json::json!({
            "name": "Pierre L.",
            "email": "pierre@example.fr",
            "subject": "Groupe de 8",
            "message": "Disponibilités en octobre ?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["subject"], "Groupe de 8");

    let (status, json) = call(
        &state,
        "POST",
        "/api/contact",
        Some(serde_json::json!({"name": "Pierre L.", "email": "pierre@example.fr"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "subject");
}

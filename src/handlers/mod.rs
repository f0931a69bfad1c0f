pub mod activity;
pub mod chat;
pub mod reservation;
pub mod site;
pub mod weather;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(site::health))
        .route("/api/experiences", get(reservation::list_experiences))
        .route("/api/reservations", post(reservation::create_reservation))
        .route(
            "/api/reservations/:id",
            get(reservation::get_reservation).delete(reservation::discard_reservation),
        )
        .route(
            "/api/reservations/:id/experience",
            post(reservation::select_experience),
        )
        .route(
            "/api/reservations/:id/schedule",
            post(reservation::set_schedule),
        )
        .route("/api/reservations/:id/contact", post(reservation::set_contact))
        .route("/api/reservations/:id/next", post(reservation::next_step))
        .route("/api/reservations/:id/prev", post(reservation::prev_step))
        .route("/api/reservations/:id/submit", post(reservation::submit))
        .route("/api/chat", post(chat::open_chat))
        .route("/api/chat/:id", get(chat::get_chat))
        .route("/api/chat/:id/messages", post(chat::post_message))
        .route("/api/activity", get(activity::get_activity))
        .route("/api/activity/events", get(activity::activity_stream))
        .route("/api/weather", get(weather::get_weather))
        .route("/api/faq", get(site::faq))
        .route("/api/stats", get(site::stats))
        .route("/api/contact-info", get(site::contact_info))
        .route("/api/contact", post(site::submit_contact))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::site::{self, ContactInfo, FaqCategory, FaqEntry, Stat};
use crate::services::contact::{self, ContactAck, ContactRequest};

pub async fn health() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
pub struct FaqQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum FaqView {
    Categories(&'static [FaqCategory]),
    Matches(Vec<&'static FaqEntry>),
}

// GET /api/faq[?q=...]
pub async fn faq(Query(query): Query<FaqQuery>) -> Json<FaqView> {
    match query.q {
        Some(q) if !q.trim().is_empty() => Json(FaqView::Matches(site::search_faq(&q))),
        _ => Json(FaqView::Categories(site::FAQ)),
    }
}

// GET /api/stats
pub async fn stats() -> Json<&'static [Stat]> {
    Json(site::STATS)
}

// GET /api/contact-info
pub async fn contact_info() -> Json<&'static [ContactInfo]> {
    Json(site::CONTACT_INFO)
}

// POST /api/contact
pub async fn submit_contact(
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactAck>), AppError> {
    let ack = contact::accept(&request)?;
    tracing::info!(reference = %ack.reference, subject = %ack.subject, "contact form received");
    Ok((StatusCode::ACCEPTED, Json(ack)))
}

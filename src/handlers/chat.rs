use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::chat::ChatMessage;
use crate::services::chat::Transcript;
use crate::state::{purge_expired, AppState, Session};

#[derive(Serialize)]
pub struct TranscriptView {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub quick_replies: Vec<&'static str>,
}

impl TranscriptView {
    fn new(id: Uuid, transcript: &Transcript) -> Self {
        Self {
            id,
            messages: transcript.messages().to_vec(),
            quick_replies: transcript.quick_replies().to_vec(),
        }
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("chat {id}"))
}

fn typing_delay(config: &AppConfig) -> Duration {
    let min = config.typing_delay_min_ms;
    let max = config.typing_delay_max_ms.max(min);
    Duration::from_millis(rand::thread_rng().gen_range(min..=max))
}

// POST /api/chat
pub async fn open_chat(State(state): State<Arc<AppState>>) -> (StatusCode, Json<TranscriptView>) {
    let id = Uuid::new_v4();
    let transcript = Transcript::new();
    let view = TranscriptView::new(id, &transcript);

    {
        let mut transcripts = state.transcripts.lock().unwrap();
        purge_expired(&mut transcripts, state.session_ttl());
        transcripts.insert(id, Session::new(transcript));
    }

    tracing::info!(chat = %id, "chat opened");
    (StatusCode::CREATED, Json(view))
}

// GET /api/chat/:id
pub async fn get_chat(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TranscriptView>, AppError> {
    let mut transcripts = state.transcripts.lock().unwrap();
    purge_expired(&mut transcripts, state.session_ttl());
    let session = transcripts.get(&id).ok_or_else(|| not_found(id))?;
    Ok(Json(TranscriptView::new(id, &session.value)))
}

#[derive(Deserialize)]
pub struct PostMessage {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct ExchangeView {
    pub message: ChatMessage,
    pub reply: ChatMessage,
    pub quick_replies: Vec<&'static str>,
}

// POST /api/chat/:id/messages
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(body): Json<PostMessage>,
) -> Result<Json<ExchangeView>, AppError> {
    let message = {
        let mut transcripts = state.transcripts.lock().unwrap();
        purge_expired(&mut transcripts, state.session_ttl());
        let session = transcripts.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.touch();
        session.value.push_user(&body.text)?
    };

    // The bot "types" for a moment before answering.
    let delay = typing_delay(&state.config);
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let mut transcripts = state.transcripts.lock().unwrap();
    let session = transcripts.get_mut(&id).ok_or_else(|| not_found(id))?;
    let reply = session.value.push_reply(&state.rules, &message.text);

    tracing::info!(
        chat = %id,
        keyword = state.rules.matched_keyword(&message.text).unwrap_or("default"),
        "bot replied"
    );

    Ok(Json(ExchangeView {
        message,
        reply,
        quick_replies: session.value.quick_replies().to_vec(),
    }))
}

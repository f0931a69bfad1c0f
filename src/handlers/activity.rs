use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, Sse};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::models::activity::{
    format_time_ago, ActivitySnapshot, DailyFigures, Notification, RecentBooking,
};
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: RecentBooking,
    pub time_ago: String,
}

#[derive(Serialize)]
pub struct ActivityView {
    pub online_users: u32,
    pub recent_bookings: Vec<BookingView>,
    pub notifications: Vec<Notification>,
    pub today: DailyFigures,
}

impl From<ActivitySnapshot> for ActivityView {
    fn from(snapshot: ActivitySnapshot) -> Self {
        let now = Utc::now();
        Self {
            online_users: snapshot.online_users,
            recent_bookings: snapshot
                .recent_bookings
                .into_iter()
                .map(|booking| BookingView {
                    time_ago: format_time_ago(booking.timestamp, now),
                    booking,
                })
                .collect(),
            notifications: snapshot.notifications,
            today: snapshot.today,
        }
    }
}

// GET /api/activity
pub async fn get_activity(State(state): State<Arc<AppState>>) -> Json<ActivityView> {
    let snapshot = state.activity.lock().unwrap().snapshot(Utc::now());
    Json(snapshot.into())
}

// GET /api/activity/events (SSE)
pub async fn activity_stream(
    State(state): State<Arc<AppState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let rx = state.activity_tx.subscribe();

    // Start every subscriber from the current picture
    let snapshot: ActivityView = state.activity.lock().unwrap().snapshot(Utc::now()).into();
    let initial = tokio_stream::once(Ok::<_, Infallible>(
        Event::default()
            .event("snapshot")
            .data(serde_json::to_string(&snapshot).unwrap_or_default()),
    ));

    let live_stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().data(data).event(event.name())))
        }
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
            tracing::debug!(skipped = n, "activity subscriber lagged");
            None
        }
    });

    let keepalive_stream = tokio_stream::StreamExt::map(
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok(Event::default().comment("keepalive")),
    );

    let combined = initial.chain(live_stream);
    let merged = StreamExt::merge(combined, keepalive_stream);

    Sse::new(merged)
}

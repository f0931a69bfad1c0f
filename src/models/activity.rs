use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentBooking {
    pub id: String,
    pub name: String,
    pub experience: String,
    pub city: String,
    pub timestamp: DateTime<Utc>,
}

impl RecentBooking {
    pub fn announcement(&self) -> String {
        format!(
            "{} de {} vient de réserver \"{}\"",
            self.name, self.city, self.experience
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActivityEvent {
    OnlineUsers { count: u32 },
    Booking { booking: RecentBooking, notification: Notification },
}

impl ActivityEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ActivityEvent::OnlineUsers { .. } => "online_users",
            ActivityEvent::Booking { .. } => "booking",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyFigures {
    pub bookings: u32,
    pub satisfaction_percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivitySnapshot {
    pub online_users: u32,
    pub recent_bookings: Vec<RecentBooking>,
    pub notifications: Vec<Notification>,
    pub today: DailyFigures,
}

/// Relative French timestamp used by the activity widget.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "À l'instant".to_string();
    }
    if minutes < 60 {
        return format!("Il y a {minutes} min");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("Il y a {hours}h");
    }
    "Hier".to_string()
}

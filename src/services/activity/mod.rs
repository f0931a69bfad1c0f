pub mod simulated;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::activity::{
    ActivityEvent, ActivitySnapshot, DailyFigures, Notification, RecentBooking,
};
use crate::state::AppState;

const MAX_RECENT_BOOKINGS: usize = 5;
const MAX_NOTIFICATIONS: usize = 3;
const NOTIFICATION_TTL_SECS: i64 = 8;

/// Where the "live" widget gets its numbers. The shipped implementation
/// invents them; a real booking feed can be dropped in without touching handlers.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn online_users(&self) -> anyhow::Result<u32>;
    async fn next_booking(&self) -> anyhow::Result<RecentBooking>;
}

#[derive(Debug, Default)]
pub struct ActivityFeed {
    online_users: u32,
    recent: VecDeque<RecentBooking>,
    notifications: VecDeque<Notification>,
}

impl ActivityFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_online_users(&mut self, count: u32) -> ActivityEvent {
        self.online_users = count;
        ActivityEvent::OnlineUsers { count }
    }

    /// Newest first; keeps the last five bookings and three notifications.
    pub fn record_booking(&mut self, booking: RecentBooking) -> ActivityEvent {
        let notification = Notification {
            id: booking.id.clone(),
            message: booking.announcement(),
            timestamp: booking.timestamp,
        };

        self.recent.push_front(booking.clone());
        self.recent.truncate(MAX_RECENT_BOOKINGS);

        self.notifications.push_front(notification.clone());
        self.notifications.truncate(MAX_NOTIFICATIONS);

        ActivityEvent::Booking {
            booking,
            notification,
        }
    }

    pub fn prune_notifications(&mut self, now: DateTime<Utc>) {
        self.notifications
            .retain(|n| (now - n.timestamp).num_seconds() < NOTIFICATION_TTL_SECS);
    }

    pub fn snapshot(&mut self, now: DateTime<Utc>) -> ActivitySnapshot {
        self.prune_notifications(now);
        ActivitySnapshot {
            online_users: self.online_users,
            recent_bookings: self.recent.iter().cloned().collect(),
            notifications: self.notifications.iter().cloned().collect(),
            today: DailyFigures {
                bookings: 12,
                satisfaction_percent: 98,
            },
        }
    }
}

pub async fn refresh_online_users(state: &Arc<AppState>) -> anyhow::Result<()> {
    let count = state.activity_source.online_users().await?;
    let event = state.activity.lock().unwrap().set_online_users(count);
    // No subscribers is fine
    let _ = state.activity_tx.send(event);
    Ok(())
}

pub async fn publish_booking(state: &Arc<AppState>) -> anyhow::Result<()> {
    let booking = state.activity_source.next_booking().await?;
    tracing::debug!(name = %booking.name, city = %booking.city, "simulated booking");
    let event = state.activity.lock().unwrap().record_booking(booking);
    let _ = state.activity_tx.send(event);
    Ok(())
}

/// Drives the feed until the runtime shuts down. Both timers fire once immediately.
pub async fn run_feed(state: Arc<AppState>) {
    let mut users_tick = tokio::time::interval(Duration::from_secs(
        state.config.online_users_interval_secs,
    ));
    let mut booking_tick =
        tokio::time::interval(Duration::from_secs(state.config.booking_interval_secs));

    loop {
        tokio::select! {
            _ = users_tick.tick() => {
                if let Err(e) = refresh_online_users(&state).await {
                    tracing::warn!(error = %e, "failed to refresh online users");
                }
            }
            _ = booking_tick.tick() => {
                if let Err(e) = publish_booking(&state).await {
                    tracing::warn!(error = %e, "failed to fetch recent booking");
                }
            }
        }
    }
}

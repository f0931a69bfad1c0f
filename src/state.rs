use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::activity::ActivityEvent;
use crate::services::activity::{ActivityFeed, ActivitySource};
use crate::services::chat::Transcript;
use crate::services::responder::RuleTable;
use crate::services::weather::WeatherSource;
use crate::services::wizard::Wizard;

/// One visitor's in-memory session. Dropped on expiry; never written anywhere.
pub struct Session<T> {
    pub value: T,
    pub last_activity: DateTime<Utc>,
}

impl<T> Session<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            last_activity: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

pub type Sessions<T> = Mutex<HashMap<Uuid, Session<T>>>;

/// Drops sessions idle for longer than `ttl`. Returns how many went.
pub fn purge_expired<T>(sessions: &mut HashMap<Uuid, Session<T>>, ttl: Duration) -> usize {
    let cutoff = Utc::now() - ttl;
    let before = sessions.len();
    sessions.retain(|_, s| s.last_activity >= cutoff);
    before - sessions.len()
}

pub struct AppState {
    pub config: AppConfig,
    pub rules: RuleTable,
    pub wizards: Sessions<Wizard>,
    pub transcripts: Sessions<Transcript>,
    pub activity: Mutex<ActivityFeed>,
    pub activity_source: Box<dyn ActivitySource>,
    pub activity_tx: broadcast::Sender<ActivityEvent>,
    pub weather: Box<dyn WeatherSource>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        activity_source: Box<dyn ActivitySource>,
        weather: Box<dyn WeatherSource>,
    ) -> Self {
        let (activity_tx, _) = broadcast::channel(64);
        Self {
            config,
            rules: RuleTable::default(),
            wizards: Mutex::new(HashMap::new()),
            transcripts: Mutex::new(HashMap::new()),
            activity: Mutex::new(ActivityFeed::new()),
            activity_source,
            activity_tx,
            weather,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::minutes(self.config.session_ttl_minutes)
    }
}

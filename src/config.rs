use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub typing_delay_min_ms: u64,
    pub typing_delay_max_ms: u64,
    pub submit_delay_ms: u64,
    pub weather_delay_ms: u64,
    pub online_users_interval_secs: u64,
    pub booking_interval_secs: u64,
    pub session_ttl_minutes: i64,
}

/// Upper bound for `SESSION_TTL_MINUTES`: one day.
pub const MAX_SESSION_TTL_MINUTES: i64 = 24 * 60;

fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: var_or("PORT", 3000),
            typing_delay_min_ms: var_or("TYPING_DELAY_MIN_MS", 1000),
            typing_delay_max_ms: var_or("TYPING_DELAY_MAX_MS", 2000),
            submit_delay_ms: var_or("SUBMIT_DELAY_MS", 1000),
            weather_delay_ms: var_or("WEATHER_DELAY_MS", 1000),
            online_users_interval_secs: var_or("ONLINE_USERS_INTERVAL_SECS", 8).max(1),
            booking_interval_secs: var_or("BOOKING_INTERVAL_SECS", 12).max(1),
            session_ttl_minutes: var_or("SESSION_TTL_MINUTES", 30)
                .clamp(1, MAX_SESSION_TTL_MINUTES),
        }
    }
}

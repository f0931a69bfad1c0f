use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

use super::ActivitySource;
use crate::models::activity::RecentBooking;

const NAMES: [&str; 6] = [
    "Marie D.",
    "Pierre L.",
    "Sophie M.",
    "Thomas R.",
    "Julie B.",
    "Antoine C.",
];

const EXPERIENCES: [&str; 4] = [
    "Aventure Solo",
    "Escapade Romantique",
    "Aventure Familiale",
    "Expérience Groupe",
];

const CITIES: [&str; 7] = ["Paris", "Lyon", "Marseille", "Nice", "Cannes", "Monaco", "Antibes"];

/// Random activity for the demo site.
pub struct SimulatedActivity;

fn pick(choices: &[&'static str]) -> &'static str {
    choices.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}

#[async_trait]
impl ActivitySource for SimulatedActivity {
    async fn online_users(&self) -> anyhow::Result<u32> {
        Ok(rand::thread_rng().gen_range(5..20))
    }

    async fn next_booking(&self) -> anyhow::Result<RecentBooking> {
        Ok(RecentBooking {
            id: uuid::Uuid::new_v4().to_string(),
            name: pick(&NAMES).to_string(),
            experience: pick(&EXPERIENCES).to_string(),
            city: pick(&CITIES).to_string(),
            timestamp: Utc::now(),
        })
    }
}

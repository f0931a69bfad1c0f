use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::weather::{Condition, ForecastDay, WeatherReport};

#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self) -> anyhow::Result<WeatherReport>;
}

/// Plausible random weather for Grasse. No network access.
pub struct SimulatedWeather {
    location: String,
}

impl SimulatedWeather {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl Default for SimulatedWeather {
    fn default() -> Self {
        Self::new("Grasse, France")
    }
}

fn forecast() -> Vec<ForecastDay> {
    [
        ("Aujourd'hui", 22, Condition::Sunny),
        ("Demain", 24, Condition::Cloudy),
        ("Après-demain", 20, Condition::Rainy),
    ]
    .into_iter()
    .map(|(day, temperature, condition)| ForecastDay {
        day: day.to_string(),
        temperature,
        condition,
    })
    .collect()
}

#[async_trait]
impl WeatherSource for SimulatedWeather {
    async fn current(&self) -> anyhow::Result<WeatherReport> {
        let mut rng = rand::thread_rng();
        let condition = *Condition::ALL
            .choose(&mut rng)
            .ok_or_else(|| anyhow::anyhow!("no weather conditions to pick from"))?;

        Ok(WeatherReport {
            location: self.location.clone(),
            condition,
            temperature: rng.gen_range(15..30),
            humidity: rng.gen_range(40..80),
            wind_speed: rng.gen_range(5..25),
            visibility: rng.gen_range(10..15),
            pressure: rng.gen_range(1000..1050),
            uv_index: rng.gen_range(1..9),
            forecast: forecast(),
        })
    }
}

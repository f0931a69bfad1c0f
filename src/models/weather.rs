use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Condition::Sunny, Condition::Cloudy, Condition::Rainy];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Ensoleillé",
            Condition::Cloudy => "Nuageux",
            Condition::Rainy => "Pluvieux",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub day: String,
    pub temperature: i32,
    pub condition: Condition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub condition: Condition,
    /// °C
    pub temperature: i32,
    /// %
    pub humidity: u32,
    /// km/h
    pub wind_speed: u32,
    /// km
    pub visibility: u32,
    /// hPa
    pub pressure: u32,
    pub uv_index: u32,
    pub forecast: Vec<ForecastDay>,
}

impl WeatherReport {
    pub fn recommendation(&self) -> &'static str {
        recommendation(self.condition, self.temperature)
    }
}

/// Sales pitch matched to the current weather.
pub fn recommendation(condition: Condition, temperature: i32) -> &'static str {
    match condition {
        Condition::Rainy => "Conditions parfaites pour découvrir Grasse en kart couvert ! 🌧️",
        Condition::Sunny if temperature > 25 => {
            "Temps idéal pour une balade en kart électrique ! ☀️"
        }
        Condition::Cloudy => "Parfait pour explorer sans la chaleur du soleil ! ⛅",
        Condition::Sunny => "Excellentes conditions pour votre aventure grassoise ! 🌤️",
    }
}

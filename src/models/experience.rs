use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::validation::ValidationError;

pub const MIN_PARTICIPANTS: u8 = 1;
pub const MAX_PARTICIPANTS: u8 = 8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceId {
    Solo,
    Couple,
    #[serde(alias = "famille")]
    Family,
    #[serde(alias = "groupe")]
    Group,
}

impl ExperienceId {
    pub const ALL: [ExperienceId; 4] = [
        ExperienceId::Solo,
        ExperienceId::Couple,
        ExperienceId::Family,
        ExperienceId::Group,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceId::Solo => "solo",
            ExperienceId::Couple => "couple",
            ExperienceId::Family => "family",
            ExperienceId::Group => "group",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "solo" => Ok(ExperienceId::Solo),
            "couple" => Ok(ExperienceId::Couple),
            "family" | "famille" => Ok(ExperienceId::Family),
            "group" | "groupe" => Ok(ExperienceId::Group),
            _ => Err(ValidationError::UnknownExperience(s.to_string())),
        }
    }

    pub fn details(&self) -> &'static Experience {
        match self {
            ExperienceId::Solo => &CATALOGUE[0],
            ExperienceId::Couple => &CATALOGUE[1],
            ExperienceId::Family => &CATALOGUE[2],
            ExperienceId::Group => &CATALOGUE[3],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: &'static str,
    pub description: &'static str,
    /// Euros per participant.
    pub price: u32,
    pub duration_minutes: u32,
    pub min_capacity: u8,
    pub max_capacity: u8,
    pub popular: bool,
}

impl Experience {
    pub fn capacity(&self) -> RangeInclusive<u8> {
        self.min_capacity..=self.max_capacity
    }

    pub fn capacity_label(&self) -> String {
        let unit = |n: u8| if n > 1 { "personnes" } else { "personne" };
        if self.min_capacity == self.max_capacity {
            format!("{} {}", self.min_capacity, unit(self.min_capacity))
        } else {
            format!(
                "{}-{} {}",
                self.min_capacity,
                self.max_capacity,
                unit(self.max_capacity)
            )
        }
    }
}

pub static CATALOGUE: [Experience; 4] = [
    Experience {
        id: ExperienceId::Solo,
        title: "Aventure Solo",
        description: "Explorez Grasse à votre rythme",
        price: 25,
        duration_minutes: 45,
        min_capacity: 1,
        max_capacity: 1,
        popular: false,
    },
    Experience {
        id: ExperienceId::Couple,
        title: "Escapade Romantique",
        description: "Un moment unique à deux",
        price: 45,
        duration_minutes: 60,
        min_capacity: 2,
        max_capacity: 2,
        popular: true,
    },
    Experience {
        id: ExperienceId::Family,
        title: "Aventure Familiale",
        description: "Parfait pour toute la famille",
        price: 35,
        duration_minutes: 75,
        min_capacity: 2,
        max_capacity: 4,
        popular: false,
    },
    Experience {
        id: ExperienceId::Group,
        title: "Expérience Groupe",
        description: "Idéal pour les groupes",
        price: 20,
        duration_minutes: 90,
        min_capacity: 5,
        max_capacity: 8,
        popular: false,
    },
];

pub fn unit_price(id: ExperienceId) -> u32 {
    id.details().price
}

pub fn total_price(id: ExperienceId, participants: Participants) -> u32 {
    unit_price(id) * u32::from(participants.get())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeSlot {
    H0900,
    H1030,
    H1200,
    H1330,
    H1500,
    H1630,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::H0900,
        TimeSlot::H1030,
        TimeSlot::H1200,
        TimeSlot::H1330,
        TimeSlot::H1500,
        TimeSlot::H1630,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::H0900 => "09:00",
            TimeSlot::H1030 => "10:30",
            TimeSlot::H1200 => "12:00",
            TimeSlot::H1330 => "13:30",
            TimeSlot::H1500 => "15:00",
            TimeSlot::H1630 => "16:30",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s.trim())
            .ok_or_else(|| ValidationError::UnknownTimeSlot(s.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Participant count, always within `MIN_PARTICIPANTS..=MAX_PARTICIPANTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Participants(u8);

impl Participants {
    pub fn new(n: i64) -> Result<Self, ValidationError> {
        if n < i64::from(MIN_PARTICIPANTS) || n > i64::from(MAX_PARTICIPANTS) {
            return Err(ValidationError::ParticipantCount(n));
        }
        Ok(Self(n as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Participants {
    fn default() -> Self {
        Self(MIN_PARTICIPANTS)
    }
}

impl<'de> Deserialize<'de> for Participants {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(deserializer)?;
        Participants::new(n).map_err(serde::de::Error::custom)
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::experience::{ExperienceId, Participants, TimeSlot};
use super::validation::{self, ValidationError};

/// Step-2 input as the user has filled it so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    #[serde(default)]
    pub participants: Participants,
}

impl ScheduleDraft {
    /// Checks the step-2 guard against `today` and returns the complete schedule.
    pub fn validate(&self, today: NaiveDate) -> Result<Schedule, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingDate)?;
        if date < today {
            return Err(ValidationError::PastDate(date));
        }
        let time = self.time.ok_or(ValidationError::MissingTime)?;
        Ok(Schedule {
            date,
            time,
            participants: self.participants,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub participants: Participants,
}

impl From<Schedule> for ScheduleDraft {
    fn from(s: Schedule) -> Self {
        Self {
            date: Some(s.date),
            time: Some(s.time),
            participants: s.participants,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<Contact, ValidationError> {
        Ok(Contact {
            first_name: validation::required("firstName", &self.first_name)?,
            last_name: validation::required("lastName", &self.last_name)?,
            email: validation::email(&self.email)?,
            phone: validation::required("phone", &self.phone)?,
            special_requests: self
                .special_requests
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: Option<String>,
}

/// A submitted reservation. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub reference: String,
    pub experience: ExperienceId,
    pub schedule: Schedule,
    pub contact: Contact,
    pub submitted_at: DateTime<Utc>,
}

impl Reservation {
    pub fn summary(&self) -> ReservationSummary {
        let exp = self.experience.details();
        let participants = self.schedule.participants.get();
        ReservationSummary {
            reference: self.reference.clone(),
            experience: self.experience,
            title: exp.title.to_string(),
            description: exp.description.to_string(),
            date: self.schedule.date,
            time: self.schedule.time,
            participants,
            unit_price: exp.price,
            total_price: exp.price * u32::from(participants),
        }
    }
}

/// Confirmation view shown after submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationSummary {
    pub reference: String,
    pub experience: ExperienceId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub participants: u8,
    pub unit_price: u32,
    pub total_price: u32,
}

/// Running recap shown beside the contact form; date and time may still be unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPreview {
    pub experience: ExperienceId,
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub participants: u8,
    pub unit_price: u32,
    pub total_price: u32,
}

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

/// A user-correctable input problem. Every variant knows which field it is
/// about so the caller can point the user at it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("no experience selected")]
    MissingExperience,

    #[error("unknown experience: {0}")]
    UnknownExperience(String),

    #[error("no date selected")]
    MissingDate,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("date {0} is in the past")]
    PastDate(NaiveDate),

    #[error("no time slot selected")]
    MissingTime,

    #[error("unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("participant count must be between 1 and 8, got {0}")]
    ParticipantCount(i64),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("message is empty")]
    EmptyMessage,
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingExperience | ValidationError::UnknownExperience(_) => {
                "experience"
            }
            ValidationError::MissingDate
            | ValidationError::InvalidDate(_)
            | ValidationError::PastDate(_) => "date",
            ValidationError::MissingTime | ValidationError::UnknownTimeSlot(_) => "time",
            ValidationError::ParticipantCount(_) => "participants",
            ValidationError::MissingField(field) => field,
            ValidationError::InvalidEmail(_) => "email",
            ValidationError::EmptyMessage => "text",
        }
    }
}

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s.trim())
}

/// Trims `value` and fails with `MissingField(field)` when nothing is left.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

pub fn email(value: &str) -> Result<String, ValidationError> {
    let email = required("email", value)?;
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail(email));
    }
    Ok(email)
}

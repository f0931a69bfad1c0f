//! Three-step reservation wizard.
//!
//! Each state carries exactly what its step has established, so a wizard in
//! `EnteringContact` always holds a complete, validated schedule. Drafts for
//! later steps ride along in earlier states: going back never loses input.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::models::experience::{self, ExperienceId};
use crate::models::reservation::{
    ContactDraft, DraftPreview, Reservation, ReservationSummary, Schedule, ScheduleDraft,
};
use crate::models::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    SelectingExperience,
    SelectingSchedule,
    EnteringContact,
    Submitted,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::SelectingExperience => "selecting_experience",
            Step::SelectingSchedule => "selecting_schedule",
            Step::EnteringContact => "entering_contact",
            Step::Submitted => "submitted",
        }
    }

    /// 1-based position shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            Step::SelectingExperience => 1,
            Step::SelectingSchedule => 2,
            Step::EnteringContact => 3,
            Step::Submitted => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("not allowed while {}", .0.as_str())]
    WrongStep(Step),

    #[error("reservation already submitted")]
    AlreadySubmitted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceStep {
    pub experience: Option<ExperienceId>,
    pub schedule: ScheduleDraft,
    pub contact: ContactDraft,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStep {
    pub experience: ExperienceId,
    pub schedule: ScheduleDraft,
    pub contact: ContactDraft,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactStep {
    pub experience: ExperienceId,
    pub schedule: Schedule,
    pub contact: ContactDraft,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardState {
    SelectingExperience(ExperienceStep),
    SelectingSchedule(ScheduleStep),
    EnteringContact(ContactStep),
    Submitted(Reservation),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::SelectingExperience(ExperienceStep {
                experience: None,
                schedule: ScheduleDraft::default(),
                contact: ContactDraft::default(),
            }),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        match self.state {
            WizardState::SelectingExperience(_) => Step::SelectingExperience,
            WizardState::SelectingSchedule(_) => Step::SelectingSchedule,
            WizardState::EnteringContact(_) => Step::EnteringContact,
            WizardState::Submitted(_) => Step::Submitted,
        }
    }

    pub fn experience(&self) -> Option<ExperienceId> {
        match &self.state {
            WizardState::SelectingExperience(s) => s.experience,
            WizardState::SelectingSchedule(s) => Some(s.experience),
            WizardState::EnteringContact(s) => Some(s.experience),
            WizardState::Submitted(r) => Some(r.experience),
        }
    }

    fn schedule_draft(&self) -> ScheduleDraft {
        match &self.state {
            WizardState::SelectingExperience(s) => s.schedule.clone(),
            WizardState::SelectingSchedule(s) => s.schedule.clone(),
            WizardState::EnteringContact(s) => s.schedule.clone().into(),
            WizardState::Submitted(r) => r.schedule.clone().into(),
        }
    }

    pub fn unit_price(&self) -> Option<u32> {
        self.experience().map(experience::unit_price)
    }

    /// `unit_price × participants`, or `None` before an experience is chosen.
    pub fn total_price(&self) -> Option<u32> {
        let participants = self.schedule_draft().participants;
        self.experience()
            .map(|id| experience::total_price(id, participants))
    }

    pub fn preview(&self) -> Option<DraftPreview> {
        let id = self.experience()?;
        let exp = id.details();
        let schedule = self.schedule_draft();
        Some(DraftPreview {
            experience: id,
            title: exp.title.to_string(),
            description: exp.description.to_string(),
            date: schedule.date,
            time: schedule.time,
            participants: schedule.participants.get(),
            unit_price: exp.price,
            total_price: experience::total_price(id, schedule.participants),
        })
    }

    pub fn summary(&self) -> Option<ReservationSummary> {
        match &self.state {
            WizardState::Submitted(r) => Some(r.summary()),
            _ => None,
        }
    }

    pub fn select_experience(&mut self, id: ExperienceId) -> Result<(), WizardError> {
        let step = self.step();
        match &mut self.state {
            WizardState::SelectingExperience(s) => {
                s.experience = Some(id);
                Ok(())
            }
            WizardState::Submitted(_) => Err(WizardError::AlreadySubmitted),
            _ => Err(WizardError::WrongStep(step)),
        }
    }

    pub fn set_schedule(&mut self, draft: ScheduleDraft) -> Result<(), WizardError> {
        let step = self.step();
        match &mut self.state {
            WizardState::SelectingSchedule(s) => {
                s.schedule = draft;
                Ok(())
            }
            WizardState::Submitted(_) => Err(WizardError::AlreadySubmitted),
            _ => Err(WizardError::WrongStep(step)),
        }
    }

    pub fn set_contact(&mut self, draft: ContactDraft) -> Result<(), WizardError> {
        let step = self.step();
        match &mut self.state {
            WizardState::EnteringContact(s) => {
                s.contact = draft;
                Ok(())
            }
            WizardState::Submitted(_) => Err(WizardError::AlreadySubmitted),
            _ => Err(WizardError::WrongStep(step)),
        }
    }

    /// Advances one step if the current step's guard holds. The schedule
    /// guard rejects dates before `today`, so callers pass the date at call time.
    ///
    /// The contact step has no "next": use [`Wizard::submit`].
    pub fn next_step(&mut self, today: NaiveDate) -> Result<Step, WizardError> {
        let next = match &self.state {
            WizardState::SelectingExperience(s) => {
                let experience = s.experience.ok_or(ValidationError::MissingExperience)?;
                WizardState::SelectingSchedule(ScheduleStep {
                    experience,
                    schedule: s.schedule.clone(),
                    contact: s.contact.clone(),
                })
            }
            WizardState::SelectingSchedule(s) => {
                let schedule = s.schedule.validate(today)?;
                WizardState::EnteringContact(ContactStep {
                    experience: s.experience,
                    schedule,
                    contact: s.contact.clone(),
                })
            }
            WizardState::EnteringContact(_) => {
                return Err(WizardError::WrongStep(Step::EnteringContact))
            }
            WizardState::Submitted(_) => return Err(WizardError::AlreadySubmitted),
        };
        self.state = next;
        Ok(self.step())
    }

    /// Goes back one step, keeping everything entered so far. A no-op on step 1.
    pub fn prev_step(&mut self) -> Result<Step, WizardError> {
        let prev = match &self.state {
            WizardState::SelectingExperience(_) => return Ok(Step::SelectingExperience),
            WizardState::SelectingSchedule(s) => {
                WizardState::SelectingExperience(ExperienceStep {
                    experience: Some(s.experience),
                    schedule: s.schedule.clone(),
                    contact: s.contact.clone(),
                })
            }
            WizardState::EnteringContact(s) => WizardState::SelectingSchedule(ScheduleStep {
                experience: s.experience,
                schedule: s.schedule.clone().into(),
                contact: s.contact.clone(),
            }),
            WizardState::Submitted(_) => return Err(WizardError::AlreadySubmitted),
        };
        self.state = prev;
        Ok(self.step())
    }

    /// Validates the contact step, freezes the draft and returns the confirmation view.
    /// On failure the wizard is left untouched.
    pub fn submit(&mut self) -> Result<ReservationSummary, WizardError> {
        let reservation = match &self.state {
            WizardState::EnteringContact(s) => Reservation {
                reference: uuid::Uuid::new_v4().to_string(),
                experience: s.experience,
                schedule: s.schedule.clone(),
                contact: s.contact.validate()?,
                submitted_at: Utc::now(),
            },
            WizardState::Submitted(_) => return Err(WizardError::AlreadySubmitted),
            _ => return Err(WizardError::WrongStep(self.step())),
        };
        let summary = reservation.summary();
        self.state = WizardState::Submitted(reservation);
        Ok(summary)
    }
}

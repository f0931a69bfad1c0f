use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::experience::{
    Experience, ExperienceId, Participants, TimeSlot, MAX_PARTICIPANTS, MIN_PARTICIPANTS,
    CATALOGUE,
};
use crate::models::reservation::{ContactDraft, DraftPreview, ReservationSummary, ScheduleDraft};
use crate::models::validation::ValidationError;
use crate::services::wizard::{Step, Wizard, WizardError, WizardState};
use crate::state::{purge_expired, AppState, Session};

#[derive(Serialize)]
pub struct ExperienceView {
    #[serde(flatten)]
    pub experience: &'static Experience,
    pub capacity_label: String,
}

#[derive(Serialize)]
pub struct CatalogueView {
    pub experiences: Vec<ExperienceView>,
    pub time_slots: Vec<TimeSlot>,
    pub min_participants: u8,
    pub max_participants: u8,
}

// GET /api/experiences
pub async fn list_experiences() -> Json<CatalogueView> {
    Json(CatalogueView {
        experiences: CATALOGUE
            .iter()
            .map(|experience| ExperienceView {
                experience,
                capacity_label: experience.capacity_label(),
            })
            .collect(),
        time_slots: TimeSlot::ALL.to_vec(),
        min_participants: MIN_PARTICIPANTS,
        max_participants: MAX_PARTICIPANTS,
    })
}

#[derive(Serialize)]
pub struct WizardView {
    pub id: Uuid,
    pub step: Step,
    pub step_number: u8,
    pub state: WizardState,
    pub unit_price: Option<u32>,
    pub total_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<DraftPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ReservationSummary>,
}

impl WizardView {
    fn new(id: Uuid, wizard: &Wizard) -> Self {
        let step = wizard.step();
        Self {
            id,
            step,
            step_number: step.number(),
            state: wizard.state().clone(),
            unit_price: wizard.unit_price(),
            total_price: wizard.total_price(),
            preview: wizard.preview(),
            summary: wizard.summary(),
        }
    }
}

/// Runs `f` against the wizard behind `id` and returns the updated view.
fn with_wizard<F>(state: &AppState, id: Uuid, f: F) -> Result<Json<WizardView>, AppError>
where
    F: FnOnce(&mut Wizard) -> Result<(), WizardError>,
{
    let mut wizards = state.wizards.lock().unwrap();
    purge_expired(&mut wizards, state.session_ttl());
    let session = wizards
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("reservation {id}")))?;
    session.touch();

    let result = f(&mut session.value);
    if let Err(e) = &result {
        tracing::info!(reservation = %id, step = session.value.step().as_str(), error = %e, "wizard guard failed");
    }
    result?;
    Ok(Json(WizardView::new(id, &session.value)))
}

// POST /api/reservations
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<WizardView>) {
    let id = Uuid::new_v4();
    let wizard = Wizard::new();
    let view = WizardView::new(id, &wizard);

    {
        let mut wizards = state.wizards.lock().unwrap();
        let purged = purge_expired(&mut wizards, state.session_ttl());
        if purged > 0 {
            tracing::debug!(purged, "dropped idle reservation drafts");
        }
        wizards.insert(id, Session::new(wizard));
    }

    tracing::info!(reservation = %id, "reservation draft opened");
    (StatusCode::CREATED, Json(view))
}

// GET /api/reservations/:id
pub async fn get_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, id, |_| Ok(()))
}

// DELETE /api/reservations/:id
pub async fn discard_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state.wizards.lock().unwrap().remove(&id);
    match removed {
        Some(_) => {
            tracing::info!(reservation = %id, "reservation draft discarded");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AppError::NotFound(format!("reservation {id}"))),
    }
}

#[derive(Deserialize)]
pub struct ExperienceForm {
    #[serde(default)]
    pub experience: String,
}

// POST /api/reservations/:id/experience
pub async fn select_experience(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(form): Json<ExperienceForm>,
) -> Result<Json<WizardView>, AppError> {
    let experience = ExperienceId::parse(&form.experience)?;
    with_wizard(&state, id, |w| w.select_experience(experience))
}

/// Raw step-2 form. Strings are parsed here so problems come back tagged with their field.
#[derive(Deserialize)]
pub struct ScheduleForm {
    pub date: Option<String>,
    pub time: Option<String>,
    pub participants: Option<i64>,
}

impl ScheduleForm {
    pub fn into_draft(self) -> Result<ScheduleDraft, ValidationError> {
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDate(s.to_string()))?,
            ),
        };
        let time = match self.time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) => Some(s.parse::<TimeSlot>()?),
        };
        let participants = match self.participants {
            Some(n) => Participants::new(n)?,
            None => Participants::default(),
        };
        Ok(ScheduleDraft {
            date,
            time,
            participants,
        })
    }
}

// POST /api/reservations/:id/schedule
pub async fn set_schedule(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(form): Json<ScheduleForm>,
) -> Result<Json<WizardView>, AppError> {
    let draft = form.into_draft()?;
    with_wizard(&state, id, |w| w.set_schedule(draft))
}

// POST /api/reservations/:id/contact
pub async fn set_contact(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ContactDraft>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, id, |w| w.set_contact(draft))
}

// POST /api/reservations/:id/next
pub async fn next_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    let today = Local::now().date_naive();
    with_wizard(&state, id, |w| w.next_step(today).map(|_| ()))
}

// POST /api/reservations/:id/prev
pub async fn prev_step(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    with_wizard(&state, id, |w| w.prev_step().map(|_| ()))
}

// POST /api/reservations/:id/submit
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    // Nothing is sent anywhere; the pause stands in for a round trip.
    if state.config.submit_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.submit_delay_ms)).await;
    }

    let view = with_wizard(&state, id, |w| w.submit().map(|_| ()))?;
    if let Some(summary) = &view.summary {
        tracing::info!(
            reservation = %id,
            reference = %summary.reference,
            experience = summary.experience.as_str(),
            total = summary.total_price,
            "reservation submitted"
        );
    }
    Ok(view)
}

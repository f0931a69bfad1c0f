pub mod activity;
pub mod chat;
pub mod experience;
pub mod reservation;
pub mod site;
pub mod validation;
pub mod weather;

pub use activity::{ActivityEvent, ActivitySnapshot, Notification, RecentBooking};
pub use chat::{Author, ChatMessage};
pub use experience::{Experience, ExperienceId, Participants, TimeSlot};
pub use reservation::{
    Contact, ContactDraft, DraftPreview, Reservation, ReservationSummary, Schedule, ScheduleDraft,
};
pub use validation::ValidationError;
pub use weather::{Condition, WeatherReport};

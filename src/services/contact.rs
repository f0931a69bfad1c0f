use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::validation::{self, ValidationError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    pub reference: String,
    pub name: String,
    pub subject: String,
    pub received_at: DateTime<Utc>,
}

/// Checks the contact form. Nothing is sent anywhere; the acknowledgement is all there is.
pub fn accept(request: &ContactRequest) -> Result<ContactAck, ValidationError> {
    let name = validation::required("name", &request.name)?;
    validation::email(&request.email)?;
    let subject = validation::required("subject", &request.subject)?;
    validation::required("message", &request.message)?;

    Ok(ContactAck {
        reference: uuid::Uuid::new_v4().to_string(),
        name,
        subject,
        received_at: Utc::now(),
    })
}

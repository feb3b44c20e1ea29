use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub usn: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub participant_id: String,
}

impl RegistrationRequest {
    /// `name` and `participantId` must be present; everything else is free-form.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.participant_id.trim().is_empty() {
            return Err(AppError::Validation(
                "Missing required registration data.".to_string(),
            ));
        }
        Ok(())
    }

    /// Cell values in the registration tab's column order.
    pub fn to_row(&self, registered_at: String) -> Vec<String> {
        vec![
            self.name.clone(),
            self.usn.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.event.clone(),
            self.participant_id.clone(),
            registered_at,
        ]
    }
}

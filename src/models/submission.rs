use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub participant_id: String,
    #[serde(default)]
    pub event_category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media_url: String,
}

impl SubmissionRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            &self.participant_id,
            &self.event_category,
            &self.description,
            &self.media_url,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(AppError::Validation(
                "Missing required data (ID, Category, Description, or URL).".to_string(),
            ));
        }
        Ok(())
    }

    /// Cell values in the submissions tab's column order. The media URL is
    /// stored under the tab's `submissionLink` column.
    pub fn to_row(&self, submitted_at: String) -> Vec<String> {
        vec![
            self.participant_id.clone(),
            self.event_category.clone(),
            self.description.clone(),
            self.media_url.clone(),
            submitted_at,
        ]
    }
}

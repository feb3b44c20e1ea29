use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::row_timestamp;
use crate::models::submission::SubmissionRequest;
use crate::sheets::SheetsError;
use crate::state::SharedState;

const SUBMISSIONS_TAB: &str = "Submissions";

pub async fn submit(
    State(state): State<SharedState>,
    Json(payload): Json<SubmissionRequest>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    let info = state.sheets.load_info().await.map_err(sheet_error)?;

    // Second tab by position, with a named fallback for reordered documents
    let tab = info
        .tab_at(1)
        .or_else(|| info.tab_named(SUBMISSIONS_TAB))
        .ok_or_else(|| {
            AppError::Configuration(format!(
                "Submission tab named '{SUBMISSIONS_TAB}' not found in spreadsheet."
            ))
        })?;

    let row = payload.to_row(row_timestamp());
    state
        .sheets
        .append_row(tab, row)
        .await
        .map_err(sheet_error)?;

    tracing::info!(
        "Submission saved to Google Sheets for {}: {}",
        payload.participant_id,
        payload.media_url
    );

    Ok(Json(json!({
        "success": true,
        "message": "Submission successful! Data saved to Google Sheets.",
        "data": {
            "participantId": payload.participant_id,
            "eventCategory": payload.event_category,
            "submissionLink": payload.media_url,
        }
    })))
}

fn sheet_error(err: SheetsError) -> AppError {
    AppError::Backend {
        message: err.to_string(),
        details: None,
    }
}

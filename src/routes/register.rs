use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::models::registration::RegistrationRequest;
use crate::models::row_timestamp;
use crate::sheets::SheetsError;
use crate::state::SharedState;

pub async fn register(
    State(state): State<SharedState>,
    Json(payload): Json<RegistrationRequest>,
) -> Result<Json<Value>, AppError> {
    payload.validate()?;

    let info = state.sheets.load_info().await.map_err(sheet_error)?;

    // Registrations live on the first tab of the document
    let tab = info.tab_at(0).ok_or_else(|| {
        AppError::Configuration("Registration tab not found in spreadsheet.".to_string())
    })?;

    let row = payload.to_row(row_timestamp());
    state
        .sheets
        .append_row(tab, row)
        .await
        .map_err(sheet_error)?;

    tracing::info!(
        "New registration saved to Google Sheets: {}",
        payload.participant_id
    );

    Ok(Json(json!({
        "success": true,
        "message": "Registration successful and data saved to Google Sheets.",
        "data": {
            "name": payload.name,
            "participantId": payload.participant_id,
            "event": payload.event,
        }
    })))
}

fn sheet_error(err: SheetsError) -> AppError {
    AppError::Backend {
        message: "Server error during sheet registration.".to_string(),
        details: Some(err.to_string()),
    }
}

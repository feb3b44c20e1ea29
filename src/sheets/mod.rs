pub mod auth;
pub mod client;

pub use auth::ServiceAccountAuth;
pub use client::{SheetInfo, SpreadsheetClient, Tab};

#[derive(Debug)]
pub enum SheetsError {
    /// Key parsing, assertion signing, or token exchange failed.
    Auth(String),
    /// Transport-level failure, including the metadata load timeout.
    Request(reqwest::Error),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
}

impl std::fmt::Display for SheetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetsError::Auth(msg) => write!(f, "{msg}"),
            SheetsError::Request(err) if err.is_timeout() => {
                write!(f, "Timed out waiting for Google Sheets: {err}")
            }
            SheetsError::Request(err) => write!(f, "Google Sheets request failed: {err}"),
            SheetsError::Api { status, message } => {
                write!(f, "Google Sheets API error ({status}): {message}")
            }
        }
    }
}

impl From<reqwest::Error> for SheetsError {
    fn from(err: reqwest::Error) -> Self {
        SheetsError::Request(err)
    }
}

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use super::SheetsError;
use super::auth::ServiceAccountAuth;
use crate::config::Config;

/// Upper bound on the metadata load; exceeding it surfaces as a failure.
const METADATA_TIMEOUT: Duration = Duration::from_secs(30);

/// One sheet (tab) inside the spreadsheet document.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub title: String,
    pub index: usize,
}

/// Tab listing loaded from the document's metadata.
#[derive(Debug, Clone)]
pub struct SheetInfo {
    tabs: Vec<Tab>,
}

impl SheetInfo {
    pub fn tab_at(&self, index: usize) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.index == index)
    }

    pub fn tab_named(&self, title: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.title == title)
    }
}

#[derive(Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
    #[serde(default)]
    index: usize,
}

/// Client for one spreadsheet document, shared process-wide. Read-only after
/// startup apart from the token cache inside `ServiceAccountAuth`.
pub struct SpreadsheetClient {
    http: reqwest::Client,
    auth: ServiceAccountAuth,
    base_url: String,
    sheet_id: String,
}

impl SpreadsheetClient {
    pub fn new(config: &Config) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SheetsError::Request)?;

        let auth = ServiceAccountAuth::new(
            &config.service_account_email,
            &config.private_key,
            &config.token_url,
            http.clone(),
        )?;

        Ok(Self {
            http,
            auth,
            base_url: config.sheets_base_url.trim_end_matches('/').to_string(),
            sheet_id: config.sheet_id.clone(),
        })
    }

    /// Loads the document's tab listing.
    pub async fn load_info(&self) -> Result<SheetInfo, SheetsError> {
        let token = self.auth.token().await?;
        let url = format!("{}/v4/spreadsheets/{}", self.base_url, self.sheet_id);

        let resp = self
            .http
            .get(&url)
            .query(&[("fields", "sheets.properties")])
            .bearer_auth(&token)
            .timeout(METADATA_TIMEOUT)
            .send()
            .await?;
        let resp = check_status(resp).await?;

        let meta: SpreadsheetMetadata = resp.json().await?;
        let tabs = meta
            .sheets
            .into_iter()
            .map(|s| Tab {
                title: s.properties.title,
                index: s.properties.index,
            })
            .collect();

        Ok(SheetInfo { tabs })
    }

    /// Appends one row of cell values to the given tab.
    pub async fn append_row(&self, tab: &Tab, values: Vec<String>) -> Result<(), SheetsError> {
        let token = self.auth.token().await?;
        let url = format!(
            "{}/v4/spreadsheets/{}/values/'{}'!A1:append",
            self.base_url, self.sheet_id, tab.title
        );

        let resp = self
            .http
            .post(&url)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&token)
            .json(&json!({ "values": [values] }))
            .send()
            .await?;
        check_status(resp).await?;

        Ok(())
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(256).collect());

    Err(SheetsError::Api {
        status: status.as_u16(),
        message,
    })
}

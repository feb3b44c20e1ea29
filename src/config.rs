use std::net::IpAddr;

pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_account_email: String,
    pub private_key: String,
    pub sheet_id: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub sheets_base_url: String,
    pub token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let service_account_email = env_required("GOOGLE_SERVICE_ACCOUNT_EMAIL")?;

        // .env files carry the PEM on one line with literal \n escapes
        let private_key = env_required("GOOGLE_PRIVATE_KEY")?.replace("\\n", "\n");

        let sheet_id = env_required("GOOGLE_SHEET_ID")?;

        let host: IpAddr = env_or("SHEETDROP_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SHEETDROP_HOST: {e}"))?;

        let port: u16 = env_or("SHEETDROP_PORT", "3003")
            .parse()
            .map_err(|e| format!("Invalid SHEETDROP_PORT: {e}"))?;

        let max_body_size: usize = env_or("SHEETDROP_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid SHEETDROP_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("SHEETDROP_LOG_LEVEL", "info");

        // Overridable so tests can point at a local stand-in for the Google API
        let sheets_base_url = env_or("SHEETDROP_SHEETS_BASE_URL", DEFAULT_SHEETS_BASE_URL);
        let token_url = env_or("SHEETDROP_TOKEN_URL", DEFAULT_TOKEN_URL);

        Ok(Config {
            service_account_email,
            private_key,
            sheet_id,
            host,
            port,
            max_body_size,
            log_level,
            sheets_base_url,
            token_url,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

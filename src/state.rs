use std::sync::Arc;

use crate::config::Config;
use crate::sheets::SpreadsheetClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub sheets: SpreadsheetClient,
}

pub mod registration;
pub mod submission;

use chrono::Local;

/// Human-readable wall-clock stamp recorded on every appended row.
pub fn row_timestamp() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

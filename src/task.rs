use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A task record as the backend reports it. `state` and `result` are
/// opaque to this client; the backend owns the task lifecycle.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: String,
    pub state: String, // e.g. "PENDING", "STARTED", "SUCCESS", "FAILURE"
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl Task {
    /// Completion timestamp with time-of-day, or "-" when the backend has
    /// not recorded one yet. Unparseable values are shown as-is.
    pub fn date_display(&self) -> String {
        match self.date.as_deref() {
            None | Some("") | Some("None") => "-".to_string(),
            Some(raw) => parse_backend_date(raw)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| raw.to_string()),
        }
    }

    pub fn result_display(&self) -> &str {
        match self.result.as_deref() {
            None | Some("") | Some("None") => "-",
            Some(r) => r,
        }
    }
}

// The backend stringifies a Python datetime ("2024-11-30 12:34:56.789012"),
// sometimes with a trailing UTC offset.
fn parse_backend_date(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    let trimmed = raw.trim_end_matches("+00:00");
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("History parse error: {0}")]
    HistoryParse(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTime(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::HistoryParse(err.to_string())
    }
}

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Empty Input: cannot summarise zero readings")]
    EmptyInput,
    #[error("Invalid Input: {0:?} is not a number")]
    InvalidInput(String),
    #[error("Parse Error: line {line}, column {column}: {value:?} is not an integer")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },
    #[error("Invalid Date: {0:?} is not an ISO-8601 date")]
    InvalidDate(String),
    #[error("File Not Found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Logger Error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, ReportError>;

use log::{Level, Log, Metadata, Record as LogRecord};
use serde::Serialize;

/// Logger that writes `[LEVEL] message` lines to stderr, keeping stdout for reports.
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error | Level::Warn => {
                eprintln!("[{}] {}: {}", record.level(), record.target(), record.args())
            }
            _ => eprintln!("[{}] {}", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

/// One day of readings as loaded from the input CSV. Temperatures are in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherRow {
    pub date: String,
    pub temp_min: i32,
    pub temp_max: i32,
}

/// Result of a min/max search: the extreme value and the index it was found at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extremum {
    Found { value: f64, index: usize },
    Empty,
}

impl Extremum {
    pub fn found(self) -> Option<(f64, usize)> {
        match self {
            Extremum::Found { value, index } => Some((value, index)),
            Extremum::Empty => None,
        }
    }
}

/// A single notable reading in an [`Overview`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub celsius: f64,
    pub iso_date: String,
    pub date: String,
}

/// Whole-table statistics behind the "Day Overview" report. All temperatures in Celsius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub days: usize,
    pub lowest: Reading,
    pub highest: Reading,
    pub average_low: f64,
    pub average_high: f64,
}

/// Per-day entry of the daily report, in Celsius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReading {
    pub date: String,
    pub min_celsius: f64,
    pub max_celsius: f64,
}

/// Configuration for report rendering
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub mode: ReportMode,
    pub format: OutputFormat,
}

/// Which sections of the report to produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    Overview,
    Daily,
    #[default]
    Both,
}

/// Output encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

use crate::convert::{convert_date, convert_f_to_c, format_temperature};
use crate::error::{ReportError, Result};
use crate::load::load_data_from_csv;
use crate::stats::{calculate_mean, find_max, find_min};
use crate::structs::{
    DailyReading, Extremum, Overview, OutputFormat, Reading, ReportConfig, ReportMode, WeatherRow,
};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of reporting on one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<String>,
}

#[derive(Serialize)]
struct JsonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    overview: Option<Overview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily: Option<Vec<DailyReading>>,
}

impl Overview {
    /// Reduces a table to its lowest/highest readings and average low/high.
    ///
    /// Lowest and highest use the last matching day when several days tie.
    ///
    /// # Errors
    /// Returns `ReportError::EmptyInput` for an empty table, or `InvalidDate` if the
    /// date of a selected row cannot be parsed.
    pub fn from_table(table: &[WeatherRow]) -> Result<Overview> {
        let lows: Vec<f64> = table.iter().map(|row| f64::from(row.temp_min)).collect();
        let highs: Vec<f64> = table.iter().map(|row| f64::from(row.temp_max)).collect();

        let lowest = reading_at(table, find_min(&lows))?;
        let highest = reading_at(table, find_max(&highs))?;

        Ok(Overview {
            days: table.len(),
            lowest,
            highest,
            average_low: convert_f_to_c(calculate_mean(&lows)?),
            average_high: convert_f_to_c(calculate_mean(&highs)?),
        })
    }

    /// Renders the "Day Overview" text block.
    pub fn render(&self) -> String {
        format!(
            "{} Day Overview\n  \
             The lowest temperature will be {}, and will occur on {}.\n  \
             The highest temperature will be {}, and will occur on {}.\n  \
             The average low this week is {}.\n  \
             The average high this week is {}.\n",
            self.days,
            celsius(self.lowest.celsius),
            self.lowest.date,
            celsius(self.highest.celsius),
            self.highest.date,
            celsius(self.average_low),
            celsius(self.average_high),
        )
    }
}

fn reading_at(table: &[WeatherRow], extremum: Extremum) -> Result<Reading> {
    let (value, index) = extremum.found().ok_or(ReportError::EmptyInput)?;
    let iso_date = table[index].date.clone();
    Ok(Reading {
        celsius: convert_f_to_c(value),
        date: convert_date(&iso_date)?,
        iso_date,
    })
}

fn celsius(value: f64) -> String {
    format_temperature(format!("{value:.1}"))
}

/// Builds the overall summary for a table of daily readings.
///
/// # Arguments
/// * `table` - Rows in file order, temperatures in Fahrenheit
///
/// # Returns
/// A multi-line report of the form:
/// ```text
/// 5 Day Overview
///   The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.
///   ...
/// ```
///
/// # Errors
/// Returns `ReportError::EmptyInput` if the table has no rows, or `InvalidDate` for an
/// unparsable date on a selected row.
pub fn generate_summary(table: &[WeatherRow]) -> Result<String> {
    Ok(Overview::from_table(table)?.render())
}

/// Converts every row into a Celsius reading with a human readable date, in table order.
pub fn daily_readings(table: &[WeatherRow]) -> Result<Vec<DailyReading>> {
    table
        .iter()
        .map(|row| {
            Ok(DailyReading {
                date: convert_date(&row.date)?,
                min_celsius: convert_f_to_c(f64::from(row.temp_min)),
                max_celsius: convert_f_to_c(f64::from(row.temp_max)),
            })
        })
        .collect()
}

/// Builds one block per row with that day's minimum and maximum.
///
/// An empty table yields an empty string.
///
/// # Errors
/// Returns `ReportError::InvalidDate` if any row's date cannot be parsed.
pub fn generate_daily_summary(table: &[WeatherRow]) -> Result<String> {
    let mut out = String::new();
    for day in daily_readings(table)? {
        out.push_str(&format!(
            "---- {} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n\n",
            day.date,
            celsius(day.min_celsius),
            celsius(day.max_celsius),
        ));
    }
    Ok(out)
}

/// Renders the sections selected by `config` for a single table.
///
/// In text form with [`ReportMode::Both`] the overview comes first, followed by a blank
/// line and the daily blocks.
pub fn render_report(table: &[WeatherRow], config: &ReportConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => match config.mode {
            ReportMode::Overview => generate_summary(table),
            ReportMode::Daily => generate_daily_summary(table),
            ReportMode::Both => Ok(format!(
                "{}\n{}",
                generate_summary(table)?,
                generate_daily_summary(table)?
            )),
        },
        OutputFormat::Json => {
            let overview = match config.mode {
                ReportMode::Overview | ReportMode::Both => Some(Overview::from_table(table)?),
                ReportMode::Daily => None,
            };
            let daily = match config.mode {
                ReportMode::Daily | ReportMode::Both => Some(daily_readings(table)?),
                ReportMode::Overview => None,
            };
            Ok(serde_json::to_string_pretty(&JsonReport { overview, daily })?)
        }
    }
}

/// Loads and reports on a single CSV file.
pub fn process_file(path: &Path, config: &ReportConfig) -> Result<String> {
    let table = load_data_from_csv(path)?;
    render_report(&table, config)
}

/// Reports on several CSV files in parallel.
///
/// Each file is handled independently: a failure in one does not affect the others.
/// The returned reports are in the same order as `paths`.
pub fn process_files(paths: &[PathBuf], config: &ReportConfig) -> Vec<FileReport> {
    debug!("Processing {} file(s) with {:?}", paths.len(), config);
    paths
        .par_iter()
        .map(|path| {
            let result = process_file(path, config);
            if let Err(err) = &result {
                debug!("Report for {} failed: {}", path.display(), err);
            }
            FileReport {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

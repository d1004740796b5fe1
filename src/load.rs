use crate::error::{ReportError, Result};
use crate::structs::WeatherRow;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::{fs, io, path::Path};

const DATE_COLUMN: usize = 0;
const MIN_COLUMN: usize = 1;
const MAX_COLUMN: usize = 2;

/// Reads daily weather readings from a CSV file.
///
/// The first line is treated as a header and discarded without validation, even when
/// it is blank. Every following non-blank line must hold `date,temp_min,temp_max`, with
/// both temperatures written as whole degrees Fahrenheit. Blank lines are skipped; a
/// line of empty fields such as `,,` is not blank and fails to parse. Rows keep file order.
///
/// # Arguments
/// * `path` - Path of the CSV file to read
///
/// # Returns
/// Returns the loaded rows. The file is fully read and closed before parsing starts.
///
/// # Errors
/// Returns error if:
/// - The file does not exist (`FileNotFound`) or cannot be read as UTF-8 (`Io`)
/// - The content is not valid CSV (`Csv`)
/// - A temperature is missing or not an integer (`Parse`)
pub fn load_data_from_csv(path: &Path) -> Result<Vec<WeatherRow>> {
    debug!("Reading CSV file: {}", path.display());
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ReportError::FileNotFound(path.to_path_buf()),
        _ => ReportError::Io(err),
    })?;
    let body = contents.split_once('\n').map_or("", |(_, rest)| rest);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            skipped += 1;
            continue;
        }
        rows.push(parse_row(&record)?);
    }

    debug!(
        "Loaded {} rows from {} ({} blank lines skipped)",
        rows.len(),
        path.display(),
        skipped
    );
    Ok(rows)
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

fn parse_row(record: &StringRecord) -> Result<WeatherRow> {
    // Positions are relative to the body, which starts after the header line
    let line = record.position().map_or(0, |pos| pos.line()) + 1;
    let date = record.get(DATE_COLUMN).unwrap_or_default().to_string();

    Ok(WeatherRow {
        date,
        temp_min: parse_int(record, MIN_COLUMN, line)?,
        temp_max: parse_int(record, MAX_COLUMN, line)?,
    })
}

fn parse_int(record: &StringRecord, column: usize, line: u64) -> Result<i32> {
    let raw = record.get(column).unwrap_or_default();
    raw.trim().parse::<i32>().map_err(|_| ReportError::Parse {
        line,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn loads_rows_after_header() {
        let tmp = csv_file("date,min,max\n2021-07-02T07:00:00+08:00,49,67\n2021-07-03T07:00:00+08:00,57,68\n");
        let rows = load_data_from_csv(tmp.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2021-07-02T07:00:00+08:00");
        assert_eq!(rows[0].temp_min, 49);
        assert_eq!(rows[0].temp_max, 67);
        assert_eq!(
            rows[1],
            WeatherRow {
                date: "2021-07-03T07:00:00+08:00".to_string(),
                temp_min: 57,
                temp_max: 68,
            }
        );
    }

    #[test]
    fn skips_blank_lines() {
        let tmp = csv_file("date,min,max\n\n2021-07-02,49,67\n\n\n2021-07-03,-5,12\n\n");
        let rows = load_data_from_csv(tmp.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].temp_min, -5);
    }

    #[test]
    fn first_line_is_discarded_even_when_blank() {
        let tmp = csv_file("\n2021-07-02,49,67\n2021-07-03,57,68\n");
        let rows = load_data_from_csv(tmp.path()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2021-07-03");

        let tmp = csv_file("date,min,max\r\n2021-07-02,49,67\r\n");
        let rows = load_data_from_csv(tmp.path()).unwrap();
        assert_eq!(rows[0].temp_max, 67);
    }

    #[test]
    fn empty_fields_are_not_blank_lines() {
        let tmp = csv_file("date,min,max\n2021-07-02,49,67\n,,\n");
        match load_data_from_csv(tmp.path()) {
            Err(ReportError::Parse { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
                assert_eq!(value, "");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        let tmp = csv_file("date,min,max\n   \n2021-07-02,49,67\n");
        assert_eq!(load_data_from_csv(tmp.path()).unwrap().len(), 1);
    }

    #[test]
    fn header_only_gives_empty_table() {
        let tmp = csv_file("date,min,max\n");
        assert!(load_data_from_csv(tmp.path()).unwrap().is_empty());
        let tmp = csv_file("date,min,max");
        assert!(load_data_from_csv(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_integer_temperatures() {
        let tmp = csv_file("date,min,max\n2021-07-02,49,67\n2021-07-03,cold,68\n");
        match load_data_from_csv(tmp.path()) {
            Err(ReportError::Parse { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, 1);
                assert_eq!(value, "cold");
            }
            other => panic!("expected parse error, got {other:?}"),
        }

        let tmp = csv_file("date,min,max\n2021-07-02,49,67.5\n");
        assert!(matches!(
            load_data_from_csv(tmp.path()),
            Err(ReportError::Parse { column: 2, .. })
        ));
    }

    #[test]
    fn rejects_short_rows() {
        let tmp = csv_file("date,min,max\n2021-07-02,49\n");
        assert!(matches!(
            load_data_from_csv(tmp.path()),
            Err(ReportError::Parse { column: 2, .. })
        ));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match load_data_from_csv(&path) {
            Err(ReportError::FileNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}

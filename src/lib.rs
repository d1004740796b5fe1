pub mod convert;
pub mod error;
pub mod load;
pub mod report;
pub mod stats;
pub mod structs;

// Re-export public API
pub use convert::{convert_date, convert_f_to_c, format_temperature, parse_temperature};
pub use error::{ReportError, Result};
pub use load::load_data_from_csv;
pub use report::{
    FileReport, daily_readings, generate_daily_summary, generate_summary, process_file,
    process_files, render_report,
};
pub use stats::{calculate_mean, find_max, find_min};
pub use structs::{
    DailyReading, Extremum, Overview, OutputFormat, Reading, ReportConfig, ReportMode,
    SimpleLogger, WeatherRow,
};

use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;
use std::time::Instant;
use weather::{OutputFormat, ReportConfig, ReportError, ReportMode, SimpleLogger, process_files};

static LOGGER: SimpleLogger = SimpleLogger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV files (header line, then `date,min_f,max_f` rows)
    #[arg(required = true)]
    input_files: Vec<PathBuf>,

    /// Which report sections to print
    #[arg(long, value_enum, default_value = "both")]
    mode: ReportMode,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), ReportError> {
    let start = Instant::now();
    log::set_logger(&LOGGER)?;

    let args = Args::parse();
    if args.debug {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Info);
    }

    let config = ReportConfig {
        mode: args.mode,
        format: args.format,
    };
    debug!(
        "Reporting on {} file(s) | Mode={:?}, Format={:?}",
        args.input_files.len(),
        config.mode,
        config.format
    );

    let reports = process_files(&args.input_files, &config);
    let multiple = reports.len() > 1;

    let mut first_error = None;
    for report in reports {
        match report.result {
            Ok(text) => {
                if multiple && config.format == OutputFormat::Text {
                    println!("==== {} ====", report.path.display());
                }
                println!("{}", text);
            }
            Err(err) => {
                error!("Failed to report on {}: {}", report.path.display(), err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    debug!("Completed in {:.2?}", start.elapsed());
    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

//! Dashboard report runner.
//!
//! Loads configuration (TOML file named by `CLINOPS_CONFIG`, `.env`
//! honored), runs the analytics pipeline once, and prints the dashboard —
//! plain text by default, JSON with `--json`.

use std::process::ExitCode;

use clinops_service::config::Config;
use clinops_service::logging::{self, LogLevel, Stage};
use clinops_service::report;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let json_output = std::env::args().any(|arg| arg == "--json");
    let min_level = match std::env::var("CLINOPS_LOG_LEVEL").ok().as_deref() {
        Some("debug") => LogLevel::Debug,
        Some("warn") => LogLevel::Warning,
        Some("error") => LogLevel::Error,
        _ => LogLevel::Info,
    };
    let log_file = std::env::var("CLINOPS_LOG_FILE").ok();
    // Suppress console log noise when emitting machine-readable output.
    logging::init_logger(
        if json_output { LogLevel::Error } else { min_level },
        log_file.as_deref(),
        false,
    );

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            logging::error(Stage::System, None, &err.to_string());
            return ExitCode::FAILURE;
        }
    };

    let dashboard = report::build_report(&config);

    if json_output {
        match serde_json::to_string_pretty(&dashboard) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                logging::error(
                    Stage::System,
                    None,
                    &format!("failed to serialize report: {}", err),
                );
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", report::render_text(&dashboard));
    }

    ExitCode::SUCCESS
}

//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (command-line bridge to the engine).
// CONTEXT: `run` is what the binary calls; `execute` is the same flow without
// process-level side effects, so tests can drive it directly.

use std::process::ExitCode;

pub mod api_types;
pub mod config;
pub mod logging;
pub mod report;

pub use api_types::{NumerologyReport, PositionGroup, ReportSummary};
pub use config::{AppConfig, Cli, OutputFormat};
pub use logging::{close_log_file, format_line, init_log_file, next_seq, write_log, Level};
pub use report::{
    build_report, calculate_report, preview_report, render, render_text, MSG_BAD_DATE,
    MSG_CALCULATION_FAILED, MSG_MISSING_INPUT, PREVIEW_DATE, PREVIEW_NAME,
};

#[cfg(test)]
mod tests;

/// Computes the configured report and renders it for stdout.
pub fn execute(config: &AppConfig) -> Result<String, String> {
    log_enter!("CLI", "execute", "format={} preview={}", config.format.as_str(), config.preview);

    let report = if config.preview {
        preview_report()?
    } else {
        calculate_report(
            config.name.as_deref().unwrap_or_default(),
            config.date.as_deref().unwrap_or_default(),
        )?
    };

    let output = render(&report, config.format)?;
    log_exit!("CLI", "execute", "{} bytes", output.len());
    Ok(output)
}

pub fn run() -> ExitCode {
    let config = AppConfig::from_args();

    if let Some(path) = &config.log_file {
        match init_log_file(path) {
            Ok(path) => {
                log_info!("SYS", "pinaculo starting, log={}", path.display());
            }
            Err(e) => {
                eprintln!("[LOG_INIT] FAILED: {}", e);
                eprintln!("[LOG_INIT] Continuing with console-only logging");
            }
        }
    } else {
        log_debug!("SYS", "pinaculo starting, console-only logging");
    }

    let code = match execute(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(message) => {
            log_warn!("CLI", "failed: {}", message);
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    };

    close_log_file();
    code
}

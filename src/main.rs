//! cfgcompat CLI entry point.

use std::process::ExitCode;

use cfgcompat::cli::{CheckCommand, Cli, Command};
use cfgcompat::compat::EXIT_ERROR;
use cfgcompat::report::{json, ReportFormat};
use cfgcompat::ui::{create_ui, should_use_colors};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cfgcompat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cfgcompat=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cfgcompat starting with args: {:?}", cli);

    let use_colors = !cli.no_color && should_use_colors();
    let mut ui = create_ui(cli.output_mode(), use_colors);

    let report_format = cli.check.report_format();
    let command = CheckCommand::new(cli.check);

    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            if report_format == ReportFormat::Json {
                match json::render_error(&e) {
                    Ok(text) => ui.data(&text),
                    Err(render_err) => tracing::warn!("Could not render JSON error: {}", render_err),
                }
            }
            ui.error(&format!("Error: {}", e));
            ExitCode::from(EXIT_ERROR as u8)
        }
    }
}

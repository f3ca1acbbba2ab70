//! lwc-test CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use lwc_test::cli::commands::setup::json_error;
use lwc_test::cli::{Cli, CommandDispatcher};
use lwc_test::shell::is_ci;
use lwc_test::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lwc_test=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lwc_test=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("lwc-test starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.json, cli.quiet, cli.verbose);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine where the project search starts
    let start_dir = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = create_ui(!is_ci() && !cli.json, output_mode);

    let dispatcher = CommandDispatcher::new(start_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            if cli.json {
                println!("{}", json_error(&e));
            } else {
                ui.error(&format!("Error: {}", e));
                if let Some(hint) = e.hint() {
                    ui.show_hint(hint);
                }
            }
            ExitCode::from(1)
        }
    }
}

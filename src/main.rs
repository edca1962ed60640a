//! workshop_eol_report CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workshop_eol_report::toolbox::{descriptor, Action, ExecuteCommand, ExecuteParams};
use workshop_eol_report::Result;

/// End-of-life status report for workshop repos.
///
/// The toolbox harness selects the invocation mode through the
/// `TOOLBOX_ACTION` environment variable and pipes parameters on stdin;
/// these flags only tune ambient behavior.
#[derive(Debug, Parser)]
#[command(name = "workshop_eol_report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Diagnostics go to stderr; stdout is reserved for protocol output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("workshop_eol_report=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("workshop_eol_report=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match Action::from_env()? {
        Action::Describe => {
            println!("{}", descriptor());
            Ok(())
        }
        Action::Execute => {
            let params = ExecuteParams::from_stdin()?;
            let cmd = ExecuteCommand::new(params, Duration::from_secs(cli.timeout));
            cmd.run(&mut std::io::stdout().lock())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("starting with args: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

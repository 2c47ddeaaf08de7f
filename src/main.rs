use filecheck::cli::{self, Invocation};
use filecheck::commands::check::{self, RunOutcome};
use filecheck::error::Result;
use filecheck::{LOG_ENV, MonitorContext};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    match run() {
        Ok(outcome) => {
            tracing::debug!(?outcome, "run finished");
        }
        Err(e) => {
            // The scheduler reads the message from stdout.
            println!("{e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<RunOutcome> {
    let request = match cli::parse_request(std::env::args_os())? {
        Invocation::Run(request) => request,
        Invocation::Info(info) => info.exit(),
    };

    let ctx = MonitorContext::new()?;
    let stdout = io::stdout();
    check::execute(&ctx, &request, &mut stdout.lock())
}

/// Logs go to stderr; stdout carries only metric lines or the error message.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

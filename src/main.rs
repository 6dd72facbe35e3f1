//! update-modules - npm dependency update checker CLI tool
//!
//! Lists the dependencies of a package.json whose latest published version
//! differs from the declared one and installs them on confirmation.

use clap::Parser;
use log::{debug, LevelFilter};
use std::io::{self, Write};
use std::process::ExitCode;
use update_modules::cli::CliArgs;
use update_modules::orchestrator::Orchestrator;
use update_modules::output::TITLE;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logger(args.debug);
    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            println!("{}Error: {}", TITLE, e);
            ExitCode::FAILURE
        }
    }
}

/// Route log records to stdout, prefixed like every other status line
fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("update_modules", level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}{}", TITLE, record.args()))
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    debug!("Debug mode is enabled.");
    debug!("update-modules v{}", env!("CARGO_PKG_VERSION"));
    debug!("Target: {}", args.path.display());

    let orchestrator = Orchestrator::new(args)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = orchestrator.run(stdin.lock(), &mut stdout).await?;
    stdout.flush()?;

    debug!("Finished: {:?}", outcome);
    Ok(outcome.exit_code())
}

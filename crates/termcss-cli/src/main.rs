use std::io;
use std::process::ExitCode;

use clap::Parser;
use termcss_cli::report::error_text;
use termcss_cli::{run, Args, FileStorage, Format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    let report = match run(&args, &FileStorage, &mut stdout.lock()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{}", error_text(&err));
            return ExitCode::FAILURE;
        }
    };

    let message = match args.format {
        Format::Text => report.to_text(),
        Format::Json => match report.to_json() {
            Ok(json) => json,
            Err(err) => {
                eprintln!("{}", error_text(&err.into()));
                return ExitCode::FAILURE;
            }
        },
    };

    // Keep stdout clean for the stylesheet itself.
    if args.stdout {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }

    if report.status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use vmailctl::VmailError;
use vmailctl::cli::{self, Cli};
use vmailctl::usage::USAGE;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(cli::normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => {
            let rendered = e.render().to_string();
            let first = rendered.lines().next().unwrap_or_default();
            return report(&VmailError::Usage(first.to_string()));
        }
    };

    init_tracing(cli.verbose);

    match cli::run(cli).await {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn report(err: &VmailError) -> ExitCode {
    println!("{err}");
    if err.wants_usage() {
        println!();
        println!("{USAGE}");
    }
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,vmailctl=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }
}

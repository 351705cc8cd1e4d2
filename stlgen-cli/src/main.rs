/// stlgen - Cube and cylinder scenes to ASCII STL
///
/// Without arguments this writes the demo scene (a cube and a cylinder) to
/// `test.stl`. Set `RUST_LOG` or pass `--verbose` for more detail.

use clap::Parser;
use std::process::ExitCode;
use stlgen_cli::Cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match stlgen_cli::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

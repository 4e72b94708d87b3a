use clap::Parser;
use jotpad::error::JotpadError;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::setup::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        if matches!(e, JotpadError::CorruptData(_)) {
            eprintln!("Run `jotpad clear` to reset the notes storage.");
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

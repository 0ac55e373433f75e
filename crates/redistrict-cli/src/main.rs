use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod report;

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use report::emit;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; --verbose only changes the default
    let default = if cli.verbose { "redistrict=debug" } else { "redistrict=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli);
    let survey = config.source.load()?;
    tracing::debug!(plans = survey.len(), ?config.rules, "plans loaded");

    let mut out = std::io::stdout().lock();
    match cli.command {
        Commands::Consensus(args) => {
            let output = commands::consensus(&config, &survey, args.group.map(Into::into))?;
            emit(&output, config.format, &mut out)
        }
        Commands::Score => emit(&commands::score_plans(&survey)?, config.format, &mut out),
        Commands::Rank => emit(&commands::rank(&survey)?, config.format, &mut out),
        Commands::Validate => emit(&commands::validate(&config, &survey)?, config.format, &mut out),
    }
}

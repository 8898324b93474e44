use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod generator;
mod output;
mod provider;
mod reconcile;
mod story;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so story JSON on stdout stays pipeable
    let filter = if cli.verbose {
        EnvFilter::new("lorey=debug")
    } else {
        EnvFilter::new("lorey=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(args) => cli::generate::execute(args).await,
        Commands::Reconcile(args) => cli::reconcile::execute(args),
        Commands::Check(args) => cli::check::execute(args),
        Commands::Show(args) => cli::show::execute(args),
        Commands::Schema(args) => cli::schema::execute(args),
    }
}

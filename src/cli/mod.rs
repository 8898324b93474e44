pub mod check;
pub mod generate;
pub mod reconcile;
pub mod schema;
pub mod show;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lorey")]
#[command(
    author,
    version,
    about = "Turn lessons into illustrated, quiz-driven stories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a story from a lesson and save it
    Generate(GenerateArgs),

    /// Repair the image and quiz layout of a story document
    Reconcile(ReconcileArgs),

    /// Report layout problems in a story document without changing it
    Check(CheckArgs),

    /// Print a saved story
    Show(ShowArgs),

    /// Print a JSON Schema
    Schema(SchemaArgs),
}

#[derive(Parser, Clone)]
pub struct GenerateArgs {
    /// Plain-text lesson file ("-" for stdin)
    #[arg(value_name = "LESSON")]
    pub lesson: PathBuf,

    /// Path to config file
    #[arg(short, long, default_value = "lorey.yaml")]
    pub config: PathBuf,

    /// Story universe (overrides config)
    #[arg(short, long, env = "LOREY_UNIVERSE")]
    pub universe: Option<String>,

    /// Number of paragraphs to request (overrides config)
    #[arg(long)]
    pub paragraphs: Option<usize>,

    /// Override output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the prompt without calling the model
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct ReconcileArgs {
    /// Story JSON or raw model output ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Path to config file (for the default universe)
    #[arg(short, long, default_value = "lorey.yaml")]
    pub config: PathBuf,

    /// Universe named in synthesized image prompts (overrides config)
    #[arg(short, long, env = "LOREY_UNIVERSE")]
    pub universe: Option<String>,

    /// Write the reconciled story here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the reconciliation report as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct CheckArgs {
    /// Story JSON or raw model output ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print violations as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Clone)]
pub struct ShowArgs {
    /// Story ID
    pub id: String,

    /// Path to config file (for the output directory)
    #[arg(short, long, default_value = "lorey.yaml")]
    pub config: PathBuf,

    /// Override output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print markdown instead of JSON
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Parser, Clone)]
pub struct SchemaArgs {
    /// Which document to describe
    #[arg(value_enum, default_value_t = SchemaTarget::Config)]
    pub target: SchemaTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    /// lorey.yaml
    Config,
    /// Reconciliation report
    Report,
}

/// Read a file, or stdin when the path is "-"
pub(crate) fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}

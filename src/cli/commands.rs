//! CLI command definitions for contest-forge.
//!
//! Both subcommands take trailing positional paths: one or more input
//! shards followed by the output workbook path, mirroring how the shards
//! are usually passed as a shell glob.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::pipeline;
use crate::select::DEFAULT_BASE_SEED;

/// Contest problem store filter and report exporter.
#[derive(Parser)]
#[command(name = "contest-forge")]
#[command(about = "Filter contest problem stores and export cross-language solution reports")]
#[command(version)]
#[command(
    long_about = "contest-forge reads sharded JSONL problem stores, keeps problems that satisfy \
per-language solution-availability criteria, deterministically samples solutions per language, \
and writes a flat XLSX report.\n\nExample usage:\n  contest-forge full-equiv train.jsonl-00000-of-00128 \
train.jsonl-00001-of-00128 full_equiv_report.xlsx"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Keep problems where every language has two accepted and one rejected attempt.
    #[command(name = "full-equiv", alias = "full")]
    FullEquiv(FilterArgs),

    /// Keep problems where every language has at least one accepted attempt.
    #[command(name = "cross-equiv", alias = "cross")]
    CrossEquiv(FilterArgs),
}

/// Arguments shared by the two filter subcommands.
#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Input shard paths followed by the output workbook path.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Base seed for deterministic sampling.
    #[arg(long, default_value_t = DEFAULT_BASE_SEED, env = "CONTEST_FORGE_SEED")]
    pub seed: u64,

    /// Output the run summary as JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy)]
enum FilterVariant {
    FullEquiv,
    CrossEquiv,
}

impl FilterVariant {
    fn name(self) -> &'static str {
        match self {
            FilterVariant::FullEquiv => "full-equiv",
            FilterVariant::CrossEquiv => "cross-equiv",
        }
    }
}

/// Final run summary emitted with `--json`.
#[derive(Debug, Serialize)]
struct RunSummary {
    status: String,
    variant: String,
    processed: u64,
    selected: u64,
    seed: u64,
    output: String,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli())
}

/// Run the CLI with the parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::FullEquiv(args) => run_filter_command(args, FilterVariant::FullEquiv),
        Commands::CrossEquiv(args) => run_filter_command(args, FilterVariant::CrossEquiv),
    }
}

fn run_filter_command(args: FilterArgs, variant: FilterVariant) -> anyhow::Result<()> {
    let Some((shards, output)) = split_paths(&args.paths) else {
        // Too few paths is reported on stdout, before any shard is opened.
        println!(
            "Usage: contest-forge {} <shard>... <output.xlsx>",
            variant.name()
        );
        std::process::exit(1)
    };

    tracing::info!(
        variant = variant.name(),
        shards = shards.len(),
        seed = args.seed,
        output = %output.display(),
        "Starting filter run"
    );

    let report = match variant {
        FilterVariant::FullEquiv => pipeline::run_full_equiv(shards, &output, args.seed)?,
        FilterVariant::CrossEquiv => pipeline::run_cross_equiv(shards, &output, args.seed)?,
    };

    if args.json {
        let summary = RunSummary {
            status: "success".to_string(),
            variant: variant.name().to_string(),
            processed: report.processed,
            selected: report.selected,
            seed: args.seed,
            output: report.output.display().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

/// Split the trailing positionals into (input shards, output path).
/// Returns `None` when fewer than two paths were given.
fn split_paths(paths: &[String]) -> Option<(Vec<PathBuf>, PathBuf)> {
    let (output, shards) = paths.split_last()?;
    if shards.is_empty() {
        return None;
    }
    Some((shards.iter().map(PathBuf::from).collect(), PathBuf::from(output)))
}

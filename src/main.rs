mod cli;
mod engine;
mod error;
mod frequency;
mod haplotype;
mod model;
mod output;
mod reader;
mod stats;

use crate::error::Result;
use chrono::Local;
use clap::Parser;
use miette::IntoDiagnostic;

/// Compute pairwise linkage disequilibrium between phased variants.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Input VCF file (plain or gzip-compressed) with phased GT calls.
    #[arg(short = 'i', long, value_hint = clap::ValueHint::FilePath)]
    vcf: String,

    /// Comma-separated variant IDs to compare. Defaults to every variant in the VCF.
    #[arg(short, long)]
    variants: Option<String>,

    /// File with one variant ID per line.
    #[arg(long, conflicts_with = "variants", value_hint = clap::ValueHint::FilePath)]
    variants_file: Option<String>,

    /// Output directory.
    #[arg(
        short,
        long,
        value_hint = clap::ValueHint::DirPath,
        default_value_t = format!("fastld_output_{}", Local::now().format("%Y%m%d_%H%M%S"))
    )]
    output_directory: String,

    /// Only use sample columns whose name starts with this prefix (e.g. "HG").
    #[arg(long)]
    sample_prefix: Option<String>,

    /// Number of individuals in the population. Defaults to the number of samples used.
    #[arg(long)]
    population_size: Option<u64>,

    /// Write LD matrices to a .npz archive instead of a TSV table.
    #[arg(long)]
    npz: bool,

    /// Number of worker threads.
    #[arg(short, long)]
    threads: Option<usize>,
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    std::fs::create_dir_all(&args.output_directory)
        .map_err(|e| error::CustomError::OutputDir { source: e })?;

    let input_spec = cli::build_input_spec(&args)?;
    input_spec.print_paths();
    cli::run(&input_spec)?;
    Ok(())
}

fn main() -> miette::Result<()> {
    try_main().into_diagnostic()
}

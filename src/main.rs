use analyzer::{Analyzer, ClassificationSummary, RowVerdict};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use comfy_table::Table;
use configuration::{load_config, Config};
use core_types::{Classification, TradeRow};
use dataset::{read_dataset, write_dataset, DatasetError};
use generator::TradeGenerator;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Strategy Lab application.
fn main() -> ExitCode {
    // Load environment variables from .env file, if there is one.
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only the classification report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install the log subscriber: {}", e);
    }

    // Parse command-line arguments
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Run failed.");
            if matches!(e.downcast_ref::<DatasetError>(), Some(DatasetError::Open { .. })) {
                eprintln!("Error: {}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Synthesizes random trading-strategy datasets and classifies every strategy
/// by its drawdown and recovery factor.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random dataset, write it to a file, and classify each row.
    Generate(GenerateArgs),
    /// Classify the rows of an existing dataset file.
    Classify(ClassifyArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Where to write the generated dataset.
    output: PathBuf,

    /// Seed for a reproducible dataset (overrides `generation.seed`).
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rows to generate (overrides `generation.rows`).
    #[arg(long)]
    rows: Option<usize>,
}

#[derive(Args)]
struct ClassifyArgs {
    /// The dataset file to read.
    dataset: PathBuf,
}

#[derive(Args)]
struct ReportArgs {
    /// Path to a TOML configuration file. Defaults to `config.toml` when present.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Evaluate rows in parallel. Output order is unchanged.
    #[arg(long, global = true)]
    parallel: bool,

    /// Print a table of label counts after the per-row report.
    #[arg(long, global = true)]
    summary: bool,

    /// Also write every row's metrics and label as JSON to this path.
    #[arg(long, global = true, value_name = "PATH")]
    metrics_json: Option<PathBuf>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn run(cli: Cli) -> Result<()> {
    let mut config =
        load_config(cli.report.config.as_deref()).context("Failed to load configuration")?;
    config.analysis.parallel |= cli.report.parallel;
    config.analysis.summary |= cli.report.summary;

    let rows = match cli.command {
        Commands::Generate(args) => handle_generate(args, &mut config)?,
        Commands::Classify(args) => read_dataset(&args.dataset)
            .with_context(|| format!("Failed to load dataset {}", args.dataset.display()))?,
    };

    let verdicts = evaluate(&rows, &config)?;

    print_classifications(&verdicts);
    if config.analysis.summary {
        print_summary(&ClassificationSummary::from_verdicts(&verdicts));
    }
    if let Some(path) = &cli.report.metrics_json {
        write_metrics_json(path, &verdicts)?;
    }

    Ok(())
}

/// Generates the dataset and persists it before anything is classified.
fn handle_generate(args: GenerateArgs, config: &mut Config) -> Result<Vec<TradeRow>> {
    if let Some(seed) = args.seed {
        config.generation.seed = Some(seed);
    }
    if let Some(rows) = args.rows {
        config.generation.rows = rows;
    }

    let mut generator = TradeGenerator::new(&config.generation)?;
    let rows = generator.generate_rows();

    // No context here: the open error already carries the user-facing message.
    write_dataset(&args.output, &rows)?;
    Ok(rows)
}

fn evaluate(rows: &[TradeRow], config: &Config) -> Result<Vec<RowVerdict>> {
    let progress_bar = ProgressBar::new(rows.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("=>-"),
    );

    let analyzer = Analyzer::new(config.analysis.parallel);
    let verdicts = analyzer.evaluate_all_with(rows, || progress_bar.inc(1));
    progress_bar.finish_and_clear();

    tracing::info!(rows = verdicts.len(), "Classification complete.");
    Ok(verdicts)
}

// ==============================================================================
// Reporting
// ==============================================================================

fn print_classifications(verdicts: &[RowVerdict]) {
    for (index, verdict) in verdicts.iter().enumerate() {
        println!("Row {}: Classification = {}", index + 1, verdict.classification);
    }
}

fn print_summary(summary: &ClassificationSummary) {
    let mut table = Table::new();
    table.set_header(vec!["Classification", "Code", "Rows"]);
    for label in Classification::ALL {
        table.add_row(vec![
            label.name().to_string(),
            label.code().to_string(),
            summary.count(label).to_string(),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        String::new(),
        summary.total().to_string(),
    ]);
    println!("{table}");
}

#[derive(Serialize)]
struct RowRecord<'a> {
    row: usize,
    #[serde(flatten)]
    verdict: &'a RowVerdict,
}

fn write_metrics_json(path: &Path, verdicts: &[RowVerdict]) -> Result<()> {
    let records: Vec<RowRecord> = verdicts
        .iter()
        .enumerate()
        .map(|(index, verdict)| RowRecord {
            row: index + 1,
            verdict,
        })
        .collect();

    let file = File::create(path)
        .with_context(|| format!("Failed to create metrics file at {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &records).context("Failed to write metrics JSON")?;
    writer.flush()?;

    tracing::info!(path = %path.display(), "Metrics report written.");
    Ok(())
}

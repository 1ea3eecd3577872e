use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gapfill_engine::{reconcile, EngineError, ReconciledBlank, Template, DEFAULT_MARKER};
use gapfill_protocol::prefill_blanks;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gapfill")]
#[command(about = "Template blank reconciliation for fill-in exercises", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sentinel marker that separates template segments
    #[arg(long, global = true, default_value = DEFAULT_MARKER)]
    marker: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a template's fixed segments and blank count
    Segment(SegmentArgs),

    /// Recover per-blank content from a flattened candidate file
    Reconcile(ReconcileArgs),

    /// Assemble a full source file from a template and blank contents
    Fill(FillArgs),
}

#[derive(Args)]
struct SegmentArgs {
    /// Template file (`-` reads stdin)
    template: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ReconcileArgs {
    /// Template file (`-` reads stdin)
    template: PathBuf,

    /// Candidate file (`-` reads stdin)
    candidate: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// On mismatch, report empty blanks instead of failing
    #[arg(long)]
    allow_mismatch: bool,
}

#[derive(Args)]
struct FillArgs {
    /// Template file (`-` reads stdin)
    template: PathBuf,

    /// One content file per blank, in blank order
    blanks: Vec<PathBuf>,

    /// Write the assembled source here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentOutput {
    blank_count: usize,
    segments: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReconcileOutput {
    matched: bool,
    blank_count: usize,
    blanks: Vec<ReconciledBlank>,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Auto-enable quiet mode when --json is used (to keep stdout clean for JSON parsing)
    let json_output = match &cli.command {
        Commands::Segment(args) => args.json,
        Commands::Reconcile(args) => args.json,
        Commands::Fill(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Segment(args) => run_segment(args, &cli.marker),
        Commands::Reconcile(args) => run_reconcile(args, &cli.marker),
        Commands::Fill(args) => run_fill(args, &cli.marker),
    }
}

/// Print a template's segmentation
fn run_segment(args: SegmentArgs, marker: &str) -> Result<()> {
    let text = read_input(&args.template)?;
    let template = Template::parse_with_marker(&text, marker)?;

    if args.json {
        let output = SegmentOutput {
            blank_count: template.blank_count(),
            segments: template.segments().to_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} blanks across {} segments",
            template.blank_count(),
            template.segments().len()
        );
        for (i, segment) in template.segments().iter().enumerate() {
            println!("--- segment {i} ---");
            println!("{segment}");
        }
    }

    Ok(())
}

/// Recover blank contents from a candidate source file
fn run_reconcile(args: ReconcileArgs, marker: &str) -> Result<()> {
    let template_text = read_input(&args.template)?;
    let candidate = read_input(&args.candidate)?;
    let template = Template::parse_with_marker(&template_text, marker)?;

    let (matched, blanks) = match reconcile(&candidate, &template) {
        Ok(blanks) => (true, blanks),
        Err(EngineError::TemplateMismatch(reason)) if args.allow_mismatch => {
            log::warn!("candidate does not match template ({reason}); reporting empty blanks");
            let contents = prefill_blanks(&template, &candidate);
            let blanks = contents
                .into_iter()
                .enumerate()
                .map(|(index, content)| ReconciledBlank { index, content })
                .collect();
            (false, blanks)
        }
        Err(err) => return Err(err.into()),
    };

    if args.json {
        let output = ReconcileOutput {
            matched,
            blank_count: template.blank_count(),
            blanks,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if !matched {
            println!("(candidate did not match; all blanks empty)");
        }
        for blank in &blanks {
            println!("--- blank {} ---", blank.index);
            println!("{}", blank.content);
        }
    }

    Ok(())
}

/// Assemble a source file from a template and per-blank content files
fn run_fill(args: FillArgs, marker: &str) -> Result<()> {
    let template_text = read_input(&args.template)?;
    let template = Template::parse_with_marker(&template_text, marker)?;

    let mut blanks = Vec::with_capacity(args.blanks.len());
    for path in &args.blanks {
        blanks.push(read_input(path)?);
    }
    let assembled = template.fill(&blanks)?;

    match &args.output {
        Some(path) => fs::write(path, &assembled)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{assembled}"),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

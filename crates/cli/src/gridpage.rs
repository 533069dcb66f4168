//! gridpage - Render a grouped table as a one-page PDF
//!
//! A command line tool that groups records by location, lays them out as a
//! table with spanned group cells, and writes the result as PDF, JSON cells
//! or plain text.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use gridpage_core::api::{DocumentOptions, generate_document, layout_records};
use gridpage_core::converter::TextConverter;
use gridpage_core::group::GroupOrder;
use gridpage_core::model::{ColumnSpec, Record, load_records, sample_records};
use tracing_subscriber::EnvFilter;

/// Output type for the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum OutputType {
    /// Single-page PDF document (default)
    #[default]
    Pdf,
    /// Laid-out cells as JSON
    Json,
    /// Plain text table
    Text,
}

/// Render a grouped table of records as a one-page PDF.
#[derive(Parser, Debug)]
#[command(name = "gridpage")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to file where output is written, or "-" for stdout (json/text only)
    #[arg(short = 'o', long, default_value = "table.pdf")]
    outfile: String,

    /// JSON file with an array of {id, name, age, location} records
    /// (defaults to the built-in dataset)
    #[arg(long)]
    records: Option<PathBuf>,

    /// JSON file with document options; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Type of output to generate (inferred from the outfile extension)
    #[arg(short = 't', long = "output-type", value_enum)]
    output_type: Option<OutputType>,

    /// Order groups by key instead of first appearance
    #[arg(long = "sort-groups", action = ArgAction::SetTrue)]
    sort_groups: bool,

    /// Write the page contents uncompressed
    #[arg(long = "no-compress", action = ArgAction::SetTrue)]
    no_compress: bool,

    /// Height of one data row
    #[arg(long = "row-height")]
    row_height: Option<f64>,

    /// Height of the header row
    #[arg(long = "header-height")]
    header_height: Option<f64>,

    /// Document title stored in the PDF info dictionary
    #[arg(long)]
    title: Option<String>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

/// Infer output type from file extension.
fn infer_output_type(path: &str) -> OutputType {
    let path_lower = path.to_lowercase();
    if path_lower.ends_with(".json") {
        OutputType::Json
    } else if path_lower.ends_with(".txt") {
        OutputType::Text
    } else {
        OutputType::Pdf
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Build DocumentOptions from the config file and command line flags.
fn build_options(args: &Args) -> Result<DocumentOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => DocumentOptions::default(),
    };

    if args.sort_groups {
        options.group_order = GroupOrder::Sorted;
    }
    if args.no_compress {
        options.compress = false;
    }
    if let Some(h) = args.row_height {
        options.params.row_height = h;
    }
    if let Some(h) = args.header_height {
        options.params.header_height = h;
    }
    if let Some(title) = &args.title {
        options.title = Some(title.clone());
    }
    options.validate()?;
    Ok(options)
}

fn read_records(path: Option<&Path>) -> Result<Vec<Record>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open records {}", path.display()))?;
            load_records(BufReader::new(file))
                .with_context(|| format!("invalid records {}", path.display()))
        }
        None => Ok(sample_records()),
    }
}

fn open_output(outfile: &str) -> Result<Box<dyn Write>> {
    if outfile == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    let file = File::create(outfile)
        .with_context(|| format!("failed to create output file {outfile}"))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn run(args: &Args) -> Result<()> {
    let options = build_options(args)?;
    let records = read_records(args.records.as_deref())?;
    let columns = ColumnSpec::default();
    let output_type = args
        .output_type
        .unwrap_or_else(|| infer_output_type(&args.outfile));
    tracing::debug!(?output_type, records = records.len(), "rendering table");

    match output_type {
        OutputType::Pdf => {
            anyhow::ensure!(args.outfile != "-", "PDF output needs a file path");
            let path = generate_document(&records, &columns, &args.outfile, &options)?;
            println!("PDF file generated: {}", path.display());
        }
        OutputType::Json => {
            let table = layout_records(&records, &columns, &options)?;
            let mut out = open_output(&args.outfile)?;
            serde_json::to_writer_pretty(&mut out, &table.cells)?;
            writeln!(out)?;
            out.flush()?;
        }
        OutputType::Text => {
            let table = layout_records(&records, &columns, &options)?;
            let mut out = open_output(&args.outfile)?;
            TextConverter::new(&mut out, true).receive_table(&table.groups, &columns)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Failed to generate PDF file: {e:#}");
        std::process::exit(1);
    }
}

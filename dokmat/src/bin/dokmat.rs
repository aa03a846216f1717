use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dokmat::{MatrixError, MatrixFile, MatrixFileExt, SparseMatrix};
use tracing::debug;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "dokmat - add, subtract, multiply and inspect sparse integer matrix files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of equal shape
    Add(BinaryArgs),
    /// Subtract the right matrix from the left
    Subtract(BinaryArgs),
    /// Multiply the left matrix by the right
    Multiply(BinaryArgs),
    /// Show matrix statistics
    Stats {
        /// Matrix file
        path: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the value stored at one coordinate
    Get {
        /// Matrix file
        path: PathBuf,
        /// Row index
        #[arg(allow_negative_numbers = true)]
        row: i64,
        /// Column index
        #[arg(allow_negative_numbers = true)]
        col: i64,
    },
    /// Print a matrix in normalized text form
    Show {
        /// Matrix file
        path: PathBuf,
    },
}

#[derive(clap::Args)]
struct BinaryArgs {
    /// Left operand file
    left: PathBuf,
    /// Right operand file
    right: PathBuf,
    /// Write the result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Add(args) => handle_binary(args, "add", SparseMatrix::add)?,
        Commands::Subtract(args) => handle_binary(args, "subtract", SparseMatrix::subtract)?,
        Commands::Multiply(args) => handle_binary(args, "multiply", SparseMatrix::multiply)?,
        Commands::Stats { path, json } => handle_stats(path, *json)?,
        Commands::Get { path, row, col } => {
            let matrix = SparseMatrix::load(path)?;
            println!("{}", matrix.get(*row, *col)?);
        }
        Commands::Show { path } => {
            let matrix = SparseMatrix::load(path)?;
            print!("{}", matrix.text());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_binary(
    args: &BinaryArgs,
    name: &str,
    op: fn(&SparseMatrix, &SparseMatrix) -> Result<SparseMatrix, MatrixError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let left = SparseMatrix::load(&args.left)?;
    let right = SparseMatrix::load(&args.right)?;

    let start = std::time::Instant::now();
    let result = op(&left, &right)?;
    debug!(
        operation = name,
        nnz = result.nnz(),
        elapsed = ?start.elapsed(),
        "operation complete"
    );

    println!("Matrix 1: {left}");
    println!("Matrix 2: {right}");
    println!("Result:   {result}");

    if let Some(output) = &args.output {
        let written = result.save(output)?;
        println!("Saved {written} elements to {}", output.display());
    }

    Ok(())
}

fn handle_stats(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (matrix, report) = MatrixFile::read(path)?;
    let stats = matrix.statistics();

    if json {
        print_json(&stats)?;
        return Ok(());
    }

    println!("{matrix}");
    println!("{stats}");
    println!(
        "elements loaded: {} (skipped {})",
        report.elements_loaded,
        report.skipped_count()
    );
    Ok(())
}

#[cfg(feature = "serde")]
fn print_json(stats: &dokmat::MatrixStatistics) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_stats: &dokmat::MatrixStatistics) -> Result<(), Box<dyn std::error::Error>> {
    Err("JSON output requires the 'serde' feature".into())
}

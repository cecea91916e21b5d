//! treescan - Scan a directory once, then query it.
//!
//! Usage:
//!   treescan report [ROOT]                      Scan statistics
//!   treescan size <ROOT> <PATH>                 Size of one file
//!   treescan exists <ROOT> <PATH>               Whether a file exists
//!   treescan ls <ROOT> [DIR] [--ext E|--name N] Files inside a directory
//!   treescan all [ROOT]                         Every file below the root
//!   treescan --help                             Show help

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, bail};
use tracing_subscriber::EnvFilter;

use treescan_scan::{FileInfo, ScanConfig, Scanner, WalkStrategy};

#[derive(Parser)]
#[command(
    name = "treescan",
    version,
    about = "Scan a directory tree once and answer lookups from memory",
    long_about = "treescan mirrors a directory tree in memory and answers file \
                  lookups against it.\n\n\
                  Query paths are '/'-separated and relative to the scanned root."
)]
struct Cli {
    /// Traversal strategy
    #[arg(short, long, global = true, default_value = "native")]
    strategy: StrategyArg,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and show statistics
    Report {
        /// Root directory (defaults to current directory)
        #[arg(default_value = "")]
        root: PathBuf,
    },

    /// Show the size of a file
    Size {
        /// Root directory
        root: PathBuf,
        /// File path relative to the root
        path: String,
    },

    /// Check whether a file exists
    Exists {
        /// Root directory
        root: PathBuf,
        /// File path relative to the root
        path: String,
    },

    /// List the files directly inside a directory
    Ls {
        /// Root directory
        root: PathBuf,
        /// Directory relative to the root (defaults to the root)
        #[arg(default_value = "")]
        dir: String,
        /// Only files with this extension (no leading dot, empty for none)
        #[arg(short, long, conflicts_with = "name")]
        ext: Option<String>,
        /// Only files with this name, extension excluded
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List every file below the root
    All {
        /// Root directory (defaults to current directory)
        #[arg(default_value = "")]
        root: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum StrategyArg {
    #[default]
    Native,
    Jwalk,
}

impl From<StrategyArg> for WalkStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Native => WalkStrategy::Native,
            StrategyArg::Jwalk => WalkStrategy::Jwalk,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let strategy = WalkStrategy::from(cli.strategy);

    match cli.command {
        Command::Report { root } => {
            let scanner = open(root, strategy)?;
            print_report(&scanner, cli.format)?;
        }
        Command::Size { root, path } => {
            let scanner = open(root, strategy)?;
            let size = scanner.get_file_size(&path);
            match cli.format {
                OutputFormat::Text => match size {
                    Some(size) => println!("{} ({size} bytes)", format_size(size)),
                    None => println!("not found"),
                },
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "path": path, "size": size }));
                }
            }
            if size.is_none() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Exists { root, path } => {
            let scanner = open(root, strategy)?;
            let exists = scanner.is_file_exists(&path);
            match cli.format {
                OutputFormat::Text => println!("{exists}"),
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "path": path, "exists": exists }));
                }
            }
            if !exists {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Ls {
            root,
            dir,
            ext,
            name,
        } => {
            let scanner = open(root, strategy)?;
            let files = match (ext, name) {
                (Some(ext), _) => scanner.get_files_with_extension(&dir, &ext),
                (None, Some(name)) => scanner.get_files_with_name(&dir, &name),
                (None, None) => scanner.get_files(&dir),
            };
            print_files(&files, cli.format)?;
        }
        Command::All { root } => {
            let scanner = open(root, strategy)?;
            print_files(&scanner.get_all_files(), cli.format)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Scan a root, failing when the scan did not complete.
fn open(root: PathBuf, strategy: WalkStrategy) -> Result<Scanner> {
    let config = ScanConfig::new(&root).with_strategy(strategy);
    let scanner = Scanner::with_config(&config);
    if !scanner.get_report().initialized {
        bail!("Cannot scan {}", root.display());
    }
    for warning in scanner.warnings() {
        eprintln!("warning: {}", warning.message);
    }
    Ok(scanner)
}

fn print_report(scanner: &Scanner, format: OutputFormat) -> Result<()> {
    let report = scanner.get_report();
    match format {
        OutputFormat::Text => {
            println!("{}", "─".repeat(60));
            println!(" {}", scanner.root_name());
            println!(
                " {} files, {} folders",
                report.total_files, report.total_folders
            );
            println!(" Scanned in {} ms", report.scan_time_ms());
            if !scanner.warnings().is_empty() {
                println!(" {} warning(s) during scan", scanner.warnings().len());
            }
            println!("{}", "─".repeat(60));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn print_files(files: &[FileInfo], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for file in files {
                println!("{:>10}  {}", format_size(file.size), file.path);
            }
            let total: u64 = files.iter().map(|f| f.size).sum();
            println!("{} file(s), {}", files.len(), format_size(total));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(files)?);
        }
    }
    Ok(())
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

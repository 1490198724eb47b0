//! # flocc
//!
//! Fast lines-of-code counter.
//!
//! Scans filesystem trees or git revisions, classifies each file's lines
//! as code, comment, or blank, deduplicates identical files, and prints a
//! per-language summary or a hierarchical JSON report.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! flocc
//!
//! # Count several trees in one run
//! flocc src/ vendor/
//!
//! # Count a revision of the repository in the current directory
//! flocc --git v6.8 v6.9
//!
//! # Count HEAD of another repository
//! flocc --repo ../linux
//!
//! # Write the per-directory breakdown as JSON
//! flocc --json report.json src/
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use flocclib::{scan_path, scan_revision, write_summary, DirNode, FileResult, UnknownExts};

/// Fast lines-of-code counter
#[derive(Parser, Debug)]
#[command(name = "flocc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Filesystem paths to scan, or revision names with --git
    arguments: Vec<String>,

    /// Path to the git repository to use, implies --git
    #[arg(short, long, value_name = "PATH")]
    repo: Option<String>,

    /// Interpret arguments as git revisions instead of filesystem paths
    #[arg(short, long)]
    git: bool,

    /// Write detailed statistics to <FILE> in JSON format
    #[arg(long, value_name = "FILE")]
    json: Option<String>,

    /// Dump counts of unknown file extensions after the reports
    #[arg(long)]
    dump_unknown: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code: u8 = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> io::Result<ExitCode> {
    let use_git = cli.git || cli.repo.is_some();
    let repo = cli.repo.as_deref().unwrap_or(".");

    let mut args = cli.arguments;
    if args.is_empty() {
        args.push(if use_git { "HEAD" } else { "." }.to_string());
    }

    let mut json = match &cli.json {
        Some(path) => match File::create(path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(err) => {
                eprintln!("Error: can't open json file for writing {path}: {err}");
                return Ok(ExitCode::FAILURE);
            }
        },
        None => None,
    };

    let mut unknown = UnknownExts::new();
    let mut first = true;

    if let Some(out) = json.as_mut() {
        write!(out, "[")?;
    }

    for arg in &args {
        let started = Instant::now();
        let scanned = if use_git {
            scan_revision(repo, arg, &mut unknown)
        } else {
            scan_path(arg, &mut unknown)
        };
        let elapsed = started.elapsed();

        let files = match scanned {
            Ok(files) => files,
            Err(err) => {
                eprintln!("Error: {err}");
                continue;
            }
        };

        match json.as_mut() {
            Some(out) => {
                if !first {
                    write!(out, ",")?;
                }
                first = false;
                write_json_tree(out, &files)?;
            }
            None => write_summary(&mut io::stdout().lock(), arg, &files, elapsed)?,
        }
    }

    if let Some(out) = json.as_mut() {
        writeln!(out, "]")?;
        out.flush()?;
    }

    if cli.dump_unknown {
        unknown.write_listing(&mut io::stdout().lock())?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Build the per-directory tree for one argument and serialize it.
fn write_json_tree(out: &mut impl Write, files: &[FileResult]) -> io::Result<()> {
    let mut root = DirNode::new_root();
    for file in files {
        root.insert(file);
    }

    serde_json::to_writer(out, &root).map_err(io::Error::from)
}

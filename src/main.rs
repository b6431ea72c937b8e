//! hekate-ini: inspect and normalise hekate-style INI files.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use hekate_ini::{config, input, Document, Entry};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "hekate-ini")]
#[command(about = "Round-trip parser for hekate-style INI files", long_about = None)]
struct Args {
    /// Files or directories to read
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Print the value of this option (leading options, or within --section)
    #[arg(long, value_name = "KEY")]
    get: Option<String>,

    /// Select the first entry whose text matches this name
    #[arg(long, value_name = "NAME")]
    section: Option<String>,

    /// Compare keys and section names without regard to case
    #[arg(long, short = 'i')]
    ignore_case: bool,

    /// Print the parsed document as JSON
    #[arg(long)]
    json: bool,

    /// Rewrite each file in its normalised form
    #[arg(long)]
    write: bool,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Log parser decisions to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to initialise logging");
    }

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> io::Result<bool> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if args.ignore_case {
        cfg.case_sensitive = false;
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(false);
    }

    let mut all_ok = true;
    for path in &documents {
        let doc = match Document::from_file(path, cfg.parse_options()) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("Error: {e}");
                all_ok = false;
                continue;
            }
        };

        if args.write {
            if let Err(e) = doc.write_to_file(path, cfg.committer()) {
                eprintln!("Error: {e}");
                all_ok = false;
            }
            continue;
        }

        if documents.len() > 1 {
            println!("==> {} <==", path.display());
        }
        all_ok &= report(
            &doc,
            path,
            args.section.as_deref(),
            args.get.as_deref(),
            args.json,
            cfg.case_sensitive,
        )?;
    }

    Ok(all_ok)
}

/// Prints the requested view of one document, returning whether the lookup hit.
fn report(
    doc: &Document,
    path: &Path,
    section: Option<&str>,
    key: Option<&str>,
    json: bool,
    case_sensitive: bool,
) -> io::Result<bool> {
    match (section, key) {
        (None, None) => {
            if json {
                let rendered = serde_json::to_string_pretty(doc).map_err(io::Error::other)?;
                println!("{rendered}");
            } else {
                print!("{doc}");
            }
            Ok(true)
        }
        (None, Some(key)) => match doc.find_first_option(key, case_sensitive) {
            Some(option) => {
                println!("{}", option.value);
                Ok(true)
            }
            None => {
                eprintln!("{}: no option {key:?}", path.display());
                Ok(false)
            }
        },
        (Some(name), key) => {
            let Some(entry) = doc.find_section(name, case_sensitive) else {
                eprintln!("{}: no section {name:?}", path.display());
                return Ok(false);
            };
            match (entry, key) {
                (_, None) if json => {
                    let rendered =
                        serde_json::to_string_pretty(entry).map_err(io::Error::other)?;
                    println!("{rendered}");
                    Ok(true)
                }
                (_, None) => {
                    print!("{entry}");
                    Ok(true)
                }
                (Entry::Section(section), Some(key)) => match section.find_first_option(key) {
                    Some(option) => {
                        println!("{}", option.value);
                        Ok(true)
                    }
                    None => {
                        eprintln!("{}: no option {key:?} in [{name}]", path.display());
                        Ok(false)
                    }
                },
                (other, Some(_)) => {
                    eprintln!(
                        "{}: {name:?} matched a {:?} line, which has no options",
                        path.display(),
                        other.kind()
                    );
                    Ok(false)
                }
            }
        }
    }
}

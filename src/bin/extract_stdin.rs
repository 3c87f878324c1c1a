//! Simple CLI that reads HTML from stdin (or a file) and prints the extract
//! result as JSON to stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pagebrief::{extract_bytes_with_options, Options};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML file to read instead of stdin
    file: Option<PathBuf>,

    /// Source URL recorded in the output
    #[arg(short, long)]
    url: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let html = match &args.file {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let options = Options {
        url: args.url,
        ..Options::default()
    };
    let result = extract_bytes_with_options(&html, &options);

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}

//! Reads plain text from stdin and prints `{"summary": [...]}`.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use pagebrief::{summarize, DEFAULT_SUMMARY_SENTENCES};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of sentences to keep (0 means the default)
    #[arg(short, long, default_value_t = DEFAULT_SUMMARY_SENTENCES)]
    sentences: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read from stdin")?;

    let summary = summarize(&text, args.sentences);
    println!("{}", serde_json::json!({ "summary": summary }));

    Ok(())
}

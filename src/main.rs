//! Dictionary Converter - CLI
//!
//! Reads a word-frequency CSV and regenerates the JavaScript dictionary module.

use anyhow::Result;
use clap::Parser;
use dictionary_converter::{
    commands::{ConvertConfig, run_convert},
    output::print_convert_summary,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dictionary_converter",
    about = "Converts a word-frequency CSV into a JavaScript dictionary module",
    version,
    author
)]
struct Cli {
    /// CSV dictionary with a header row; the first column holds the candidate words
    #[arg(short, long, default_value = "dict_input/filtered_frequency.csv")]
    input: PathBuf,

    /// Path of the generated JavaScript module
    #[arg(short, long, default_value = "src/data/dictionary_data.js")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConvertConfig::new(cli.input, cli.output);
    let summary = run_convert(&config)?;
    print_convert_summary(&summary);

    Ok(())
}

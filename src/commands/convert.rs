//! Dictionary conversion command
//!
//! Runs the full pipeline: load the frequency CSV, render the JavaScript
//! module, write it out.

use crate::dictionary::{load_from_csv, render_module, write_module};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a conversion run
///
/// Paths are injected here rather than read from constants, so tests can run
/// against temporary files.
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertConfig {
    #[must_use]
    pub const fn new(input: PathBuf, output: PathBuf) -> Self {
        Self { input, output }
    }
}

/// Result of a conversion run
pub struct ConvertSummary {
    pub total_words: usize,
    pub output: PathBuf,
    pub duration: Duration,
}

/// Convert the input CSV into the generated JavaScript module
///
/// The emitted array preserves the CSV row order of the surviving words,
/// which carries the source's frequency ranking. The output file is replaced
/// wholesale; parent directories are created if absent.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or if the output
/// directory or file cannot be written. There is no retry and no cleanup of a
/// partially written output.
///
/// # Panics
///
/// Will not panic - the spinner template is a fixed valid string.
pub fn run_convert(config: &ConvertConfig) -> Result<ConvertSummary> {
    let start = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));

    spinner.set_message(format!("Reading {}...", config.input.display()));
    let words = load_from_csv(&config.input)?;
    spinner.println(format!("Found {} valid words", words.len()));

    spinner.set_message(format!("Writing {}...", config.output.display()));
    let module = render_module(&words, &config.input.display().to_string());
    write_module(&config.output, &module)
        .with_context(|| format!("Failed to write module {}", config.output.display()))?;

    spinner.finish_and_clear();

    Ok(ConvertSummary {
        total_words: words.len(),
        output: config.output.clone(),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "word,freq\nCat,500\na,10\nco-op,3\ndon't,7\n123,1\n";

    #[test]
    fn convert_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("frequency.csv");
        let output = dir.path().join("data").join("dictionary_data.js");
        fs::write(&input, SAMPLE).unwrap();

        let config = ConvertConfig::new(input, output.clone());
        let summary = run_convert(&config).unwrap();

        assert_eq!(summary.total_words, 3);
        assert_eq!(summary.output, output);

        let module = fs::read_to_string(&output).unwrap();
        assert!(module.contains("// Total words: 3"));
        assert!(module.contains("{ word: \"cat\", letters: { a: 1, c: 1, t: 1 } },"));
        assert!(module.contains("{ word: \"co-op\", letters: { c: 1, o: 2, p: 1 } },"));
        assert!(module.contains("{ word: \"don't\", letters: { d: 1, n: 1, o: 1, t: 1 } }"));
        assert!(module.ends_with("export default DICTIONARY;\n"));
    }

    #[test]
    fn convert_preserves_input_order() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("frequency.csv");
        let output = dir.path().join("out.js");
        fs::write(&input, "word,freq\nzebra,9\napple,8\nmango,7\n").unwrap();

        run_convert(&ConvertConfig::new(input, output.clone())).unwrap();

        let module = fs::read_to_string(&output).unwrap();
        let zebra = module.find("\"zebra\"").unwrap();
        let apple = module.find("\"apple\"").unwrap();
        let mango = module.find("\"mango\"").unwrap();
        assert!(zebra < apple && apple < mango);
    }

    #[test]
    fn convert_twice_is_byte_identical() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("frequency.csv");
        let output = dir.path().join("out.js");
        fs::write(&input, SAMPLE).unwrap();

        let config = ConvertConfig::new(input, output.clone());

        run_convert(&config).unwrap();
        let first = fs::read(&output).unwrap();

        run_convert(&config).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn convert_missing_input_fails() {
        let dir = tempdir().unwrap();
        let config = ConvertConfig::new(
            dir.path().join("missing.csv"),
            dir.path().join("out.js"),
        );

        assert!(run_convert(&config).is_err());
    }
}

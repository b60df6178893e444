//! Display functions for command results

use crate::commands::ConvertSummary;
use colored::Colorize;

/// Print the result of a conversion run
pub fn print_convert_summary(summary: &ConvertSummary) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "{} Wrote {} words to {}",
        "Done!".green().bold(),
        summary.total_words.to_string().bright_yellow().bold(),
        summary.output.display()
    );
    println!("  Took {:.2}s", summary.duration.as_secs_f64());
    println!("{}", "─".repeat(60).cyan());
}

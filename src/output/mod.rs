//! Terminal output formatting
//!
//! Display utilities for CLI results.

pub mod display;

pub use display::print_convert_summary;

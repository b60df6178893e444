//! Command implementations

pub mod convert;

pub use convert::{ConvertConfig, ConvertSummary, run_convert};

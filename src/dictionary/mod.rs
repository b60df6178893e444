//! Dictionary input and output
//!
//! Reading word lists from frequency CSV files and emitting the generated
//! JavaScript data module.

pub mod emitter;
pub mod reader;

pub use emitter::{render_module, write_module};
pub use reader::load_from_csv;

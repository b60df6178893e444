//! Generated JavaScript module emission
//!
//! Renders the filtered word list as a JavaScript data module exporting a
//! `DICTIONARY` array constant, and writes it to disk. The rendering is
//! byte-deterministic: the same word list always produces the same module,
//! with each entry's letter keys sorted lexicographically.

use crate::core::WordEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the exported array constant
pub const MODULE_CONST: &str = "DICTIONARY";

/// Render a word entry's letter map as a JavaScript object literal
///
/// Keys are sorted lexicographically and braces are space-padded:
/// `{ c: 1, o: 2, p: 1 }`.
#[must_use]
pub fn letters_literal(entry: &WordEntry) -> String {
    let mut pairs: Vec<(u8, u32)> = entry.letters().iter().map(|(&l, &c)| (l, c)).collect();
    pairs.sort_unstable_by_key(|&(letter, _)| letter);

    let body = pairs
        .iter()
        .map(|&(letter, count)| format!("{}: {count}", letter as char))
        .collect::<Vec<_>>()
        .join(", ");

    if body.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {body} }}")
    }
}

/// Render a word entry as a JavaScript object literal
#[must_use]
pub fn entry_literal(entry: &WordEntry) -> String {
    format!(
        "{{ word: \"{}\", letters: {} }}",
        entry.word(),
        letters_literal(entry)
    )
}

/// Render the complete generated module
///
/// `source_label` names the input the module was generated from and is quoted
/// verbatim in the banner. Layout: a three-line banner (provenance,
/// regeneration instruction, word count), the exported array with one entry
/// per line and a comma after every element except the last, then a default
/// export of the same constant.
#[must_use]
pub fn render_module(entries: &[WordEntry], source_label: &str) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 8);

    lines.push(format!("// Auto-generated from {source_label} - do not edit by hand"));
    lines.push("// Run `dictionary_converter` to regenerate".to_string());
    lines.push(format!("// Total words: {}", entries.len()));
    lines.push(String::new());
    lines.push(format!("export const {MODULE_CONST} = ["));

    for (i, entry) in entries.iter().enumerate() {
        let comma = if i + 1 < entries.len() { "," } else { "" };
        lines.push(format!("    {}{comma}", entry_literal(entry)));
    }

    lines.push("];".to_string());
    lines.push(String::new());
    lines.push(format!("export default {MODULE_CONST};"));

    lines.join("\n") + "\n"
}

/// Write the rendered module to disk, creating parent directories as needed
///
/// The target file is overwritten wholesale. A failed write may leave a
/// truncated file behind; the next successful run replaces it.
///
/// # Errors
///
/// Returns an I/O error if a parent directory cannot be created or the file
/// cannot be written.
pub fn write_module<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents)
}

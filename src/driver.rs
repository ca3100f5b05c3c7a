//! File-level driver shared by the CLI binary and the integration tests.
//!
//! Reads a text file and a pattern file, runs the selected engine, writes
//! one 1-based offset per line to the output file, and returns the match
//! count. All I/O and argument concerns live here; the engines themselves
//! only ever see `(&[u8], &[u8])`.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::bwt::build_index;
use crate::scan;
use crate::search::search_with;
use crate::types::Traversal;

/// Which matcher answers the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// BWT index with backward search (wildcard-capable).
    Bwt,
    /// Z-algorithm scanner (wildcard-capable, no index).
    Z,
    /// Reverse Boyer-Moore scanner (exact patterns only).
    ReverseBm,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Engine::Bwt => "bwt",
            Engine::Z => "z",
            Engine::ReverseBm => "reverse-bm",
        };
        f.write_str(name)
    }
}

/// Run one engine over in-memory inputs.
///
/// Degenerate inputs (empty text, empty pattern, pattern longer than the
/// text) are empty results, not errors, for every engine.
pub fn find_matches(text: &[u8], pattern: &[u8], engine: Engine, traversal: Traversal) -> Result<Vec<usize>> {
    if text.is_empty() || pattern.is_empty() || pattern.len() > text.len() {
        return Ok(Vec::new());
    }
    let matches = match engine {
        Engine::Bwt => {
            let index = build_index(text).context("building BWT index")?;
            search_with(&index, pattern, traversal).context("running backward search")?
        }
        Engine::Z => scan::z::find_matches(text, pattern),
        Engine::ReverseBm => scan::reverse_bm::find_matches(text, pattern),
    };
    Ok(matches)
}

/// Full file-to-file run. Returns the number of matches written.
pub fn match_files(
    text_path: &Path,
    pattern_path: &Path,
    output_path: &Path,
    engine: Engine,
    traversal: Traversal,
) -> Result<usize> {
    let text = read_trimmed(text_path)?;
    let pattern = read_trimmed(pattern_path)?;

    let matches = find_matches(&text, &pattern, engine, traversal)?;

    let mut out = fs::File::create(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    for offset in &matches {
        // 1-based offsets on the wire, 0-based everywhere else.
        writeln!(out, "{}", offset + 1)
            .with_context(|| format!("writing {}", output_path.display()))?;
    }

    Ok(matches.len())
}

/// Read a file and strip leading/trailing ASCII whitespace, so a trailing
/// newline in the pattern file does not become a pattern byte.
pub fn read_trimmed(path: &Path) -> Result<Vec<u8>> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(raw.trim_ascii().to_vec())
}

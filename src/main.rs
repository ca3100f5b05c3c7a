use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use wildex::driver::{self, Engine};
use wildex::{build_index, Traversal, TERMINATOR};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Match {
            text,
            pattern,
            output,
            engine,
            breadth_first,
        } => run_match(&text, &pattern, &output, engine, breadth_first),
        Commands::Inspect { text, json } => run_inspect(&text, json),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_match(
    text_path: &str,
    pattern_path: &str,
    output_path: &str,
    engine: Engine,
    breadth_first: bool,
) -> Result<()> {
    let traversal = if breadth_first {
        Traversal::BreadthFirst
    } else {
        Traversal::DepthFirst
    };

    let count = driver::match_files(
        Path::new(text_path),
        Path::new(pattern_path),
        Path::new(output_path),
        engine,
        traversal,
    )?;

    println!("Found {} matches. Results written to {}", count, output_path);
    Ok(())
}

fn run_inspect(text_path: &str, json: bool) -> Result<()> {
    let text = driver::read_trimmed(Path::new(text_path))?;
    let index = build_index(&text).context("building BWT index")?;
    index.verify().context("verifying index invariants")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&index)?);
        return Ok(());
    }

    println!("text:         {} bytes", index.text_len());
    println!(
        "alphabet:     {} symbols (terminator included)",
        index.tables.alphabet_len()
    );
    println!("bwt:          {}", printable(&index.bwt));
    println!("suffix array: {:?}", index.suffix_array);
    for &symbol in index.tables.alphabet() {
        let slot = index.tables.slot(symbol).expect("alphabet symbol has a slot");
        println!(
            "  {}  first {:>4}  count {:>4}",
            printable(&[symbol]),
            index.tables.first(slot),
            index.tables.count(slot)
        );
    }
    Ok(())
}

/// Render index bytes for the summary view, terminator shown as `$`.
fn printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b == TERMINATOR {
                '$'
            } else if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect()
}

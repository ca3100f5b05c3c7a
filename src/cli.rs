//! CLI definitions for the wildex command-line interface.
//!
//! Two subcommands: `match` to run a pattern file against a text file and
//! persist the 1-based offsets, and `inspect` to build the index for a text
//! and dump its structure.

use clap::{Parser, Subcommand};

use wildex::driver::Engine;

#[derive(Parser)]
#[command(
    name = "wildex",
    about = "Wildcard-tolerant substring search over a BWT index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every occurrence of a pattern in a text file
    #[command(name = "match")]
    Match {
        /// File containing the text to search
        text: String,

        /// File containing the pattern; `#` matches any single byte
        pattern: String,

        /// Output file, one 1-based offset per line
        #[arg(short, long, default_value = "matches.txt")]
        output: String,

        /// Matching engine
        #[arg(long, value_enum, default_value_t = Engine::Bwt)]
        engine: Engine,

        /// Explore wildcard branches breadth-first instead of depth-first
        ///
        /// The match set is identical either way; this exists for debugging
        /// and for demonstrating exploration-order independence.
        #[arg(long)]
        breadth_first: bool,
    },

    /// Build the index for a text file and print its structure
    Inspect {
        /// File containing the text to index
        text: String,

        /// Emit the full index as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

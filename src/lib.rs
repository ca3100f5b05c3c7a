//! Wildcard-tolerant exact-substring search over a Burrows-Wheeler index.
//!
//! The pattern byte `#` matches any single text byte. Matching runs as a
//! backward search: the pattern is consumed right-to-left while a
//! suffix-array interval narrows through LF-mapping steps, fanning out over
//! the alphabet at every wildcard.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   bwt.rs   │───▶│  tables.rs  │───▶│  search.rs  │───▶│ collect.rs  │
//! │ (BWT +     │    │ (rank +     │    │ (backward   │    │ (offsets,   │
//! │  suffix    │    │  first-occ  │    │  search,    │    │  dedup,     │
//! │  array)    │    │  tables)    │    │  wildcards) │    │  ordering)  │
//! └────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!        │                 │                  │
//!        ▼                 ▼                  ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify.rs                       │
//! │   (ValidationError, structural checks, full index   │
//! │    invariant suite behind Index::verify)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The `scan` module holds two index-free matchers over the same offset
//! contract (a Z-algorithm scanner and a reverse Boyer-Moore scanner);
//! `driver` is the thin file-level layer used by the CLI.
//!
//! # Usage
//!
//! ```
//! use wildex::{build_index, search};
//!
//! let index = build_index(b"banana").unwrap();
//! assert_eq!(search(&index, b"ana").unwrap(), vec![1, 3]);
//! assert_eq!(search(&index, b"#a").unwrap(), vec![0, 2, 4]);
//! ```

// Module declarations
mod bwt;
mod collect;
pub mod driver;
pub mod scan;
mod search;
mod tables;
pub mod testing;
mod types;
mod verify;

// Re-exports for public API
pub use bwt::{build_bwt, build_index};
pub use search::{search, search_with};
pub use tables::OccurrenceTables;
pub use types::{Index, SearchRange, Traversal, TERMINATOR, WILDCARD};
pub use verify::ValidationError;

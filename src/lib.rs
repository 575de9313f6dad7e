//! # pdfmeta
//!
//! Read and write custom key/value metadata in the document information
//! dictionary (`/Info`) of PDF files.
//!
//! ## What this crate does
//!
//! 1. **Write metadata** — merges a mapping of string keys and values into a
//!    PDF's existing `/Info` dictionary and replaces the file atomically: the
//!    new document is written to a temporary file next to the original and
//!    renamed over it, so no partially written PDF is ever visible.
//! 2. **Read metadata** — returns the `/Info` dictionary as a plain mapping,
//!    optionally without the eight standard keys (`Title`, `Author`, …).
//!
//! Keys in the public API never carry the `/` of PDF name syntax; the crate
//! adds and strips it internally.
//!
//! ## Quick example
//!
//! ```no_run
//! use std::collections::BTreeMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut entries = BTreeMap::new();
//! entries.insert("Reviewer", "jdoe");
//! entries.insert("Revision", "7");
//! pdfmeta::write_metadata("report.pdf", &entries)?;
//!
//! // Only the custom keys, standard ones filtered out.
//! for (key, value) in pdfmeta::read_custom_metadata("report.pdf")? {
//!     println!("{key} = {value}");
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

mod document;
mod keys;
mod pdf_utils;
mod reader;
mod writer;

pub use keys::{is_standard_key, STANDARD_KEYS};
pub use reader::{read_custom_metadata, read_metadata, read_metadata_from, read_metadata_from_bytes};
pub use writer::{write_metadata, write_metadata_to, write_metadata_with_config};

/// Metadata as seen by callers: unprefixed keys mapped to string values.
pub type MetadataMap = BTreeMap<String, String>;

// ── Configuration ────────────────────────────────────────────────────────────

/// Options for the metadata writer.
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    /// When `true`, `/ModDate` is set to the current local time on every
    /// write. Off by default: a plain write leaves all existing entries as
    /// they were.
    pub update_mod_date: bool,

    /// When `true`, the temporary file is flushed to disk (`fsync`) before it
    /// is renamed over the original.
    pub sync_before_replace: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            update_mod_date: false,
            sync_before_replace: true,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The PDF file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A filesystem I/O error occurred (open, read, write, sync or rename).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// lopdf rejected the document as malformed, or failed to serialize it.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),

    /// A caller-supplied key breaks the key contract (empty, already
    /// `/`-prefixed, or containing whitespace).
    #[error("Invalid metadata key '{0}': {1}")]
    InvalidKey(String, String),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, MetadataError>;

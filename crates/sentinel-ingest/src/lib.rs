//! Sentinel Ingest: turns uploaded document bytes into plain text.
//!
//! The scoring engine only ever sees decoded text; container parsing and
//! the "nothing readable" rejection live here.

pub mod file;
pub mod office;

pub use file::{extract_file, extract_text, DocumentKind};

//! # flocclib
//!
//! A fast lines-of-code counting library that separates code, comments,
//! and blank lines across a few dozen languages.
//!
//! ## Overview
//!
//! The heart of the library is a byte-level streaming line classifier: a
//! small state machine driven by a declarative [`SourceSpec`] describing
//! one language's comment and string conventions. One driver serves every
//! supported language; the per-language differences live entirely in data.
//! The classifier never decodes characters, which keeps it byte-exact,
//! deterministic, and fast on whole source trees.
//!
//! Around the classifier sit the conventional parts of a LOC counter:
//!
//! - **Path classification**: [`classify_path`] maps a file name to a
//!   [`FileKind`] via its extension.
//! - **Sources**: [`scan_path`] walks the filesystem, [`scan_revision`]
//!   walks the tree of a git revision. Both yield classified
//!   [`FileResult`]s with content-duplicate flags.
//! - **Aggregation**: [`DirNode`] rolls results up per directory for the
//!   hierarchical JSON report; [`write_summary`] renders the per-language
//!   table.
//!
//! ## Example
//!
//! ```rust
//! use flocclib::{classify_buffer, classify_path, FileKind};
//!
//! let kind = classify_path("src/main.c");
//! assert_eq!(kind, FileKind::C);
//!
//! let counts = classify_buffer(kind, b"int x = 0;\n// note\n");
//! assert_eq!(counts.code, 1);
//! assert_eq!(counts.comment, 1);
//! assert_eq!(counts.whitespace, 0);
//! ```

pub mod counter;
pub mod digest;
pub mod error;
pub mod kind;
pub mod report;
pub mod source;
pub mod spec;
pub mod stats;
pub mod tree;

pub use counter::{classify_buffer, count_source, LineCounts};
pub use digest::{content_digest, DedupTable};
pub use error::FloccError;
pub use kind::{classify_path, FileKind, UnknownExts};
pub use report::write_summary;
pub use source::{scan_path, scan_revision};
pub use spec::{spec_for, SourceSpec};
pub use stats::{FileResult, LocResult};
pub use tree::DirNode;

/// Result type for flocclib operations
pub type Result<T> = std::result::Result<T, FloccError>;

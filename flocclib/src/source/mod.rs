//! File collectors.
//!
//! Two implementations of one capability: produce a classified
//! [`crate::FileResult`] for every regular file reachable from the input,
//! with a duplicate flag derived from a per-run dedup key. The filesystem
//! walker hashes file contents; the revision-tree walker reuses the blob
//! object id, which is already a content address.

mod fs;
mod git;

pub use fs::scan_path;
pub use git::scan_revision;

//! Revision-tree walker.
//!
//! Walks the tree of a git revision without touching a working copy.
//! Blob object ids double as dedup keys, so no content digest is computed
//! here.

use std::path::Path;

use crate::counter::classify_buffer;
use crate::digest::DedupTable;
use crate::error::FloccError;
use crate::kind::{classify_path, FileKind, UnknownExts};
use crate::stats::FileResult;
use crate::Result;

/// Collect and classify every blob in the tree of `rev` within the
/// repository at `repo_path`.
pub fn scan_revision(
    repo_path: impl AsRef<Path>,
    rev: &str,
    unknown: &mut UnknownExts,
) -> Result<Vec<FileResult>> {
    let repo = gix::discover(repo_path.as_ref())
        .map_err(|e| FloccError::Git(format!("failed to open repository: {e}")))?;

    let commit = resolve_commit(&repo, rev)?;
    let tree = commit
        .tree()
        .map_err(|e| FloccError::Git(format!("failed to get tree for '{rev}': {e}")))?;

    let mut seen = DedupTable::new();
    let mut results = Vec::new();
    walk_tree(&repo, &tree, String::new(), &mut seen, unknown, &mut results)?;

    Ok(results)
}

/// Resolve a revision specifier to a commit, dereferencing annotated
/// tags to their target.
fn resolve_commit<'repo>(repo: &'repo gix::Repository, rev: &str) -> Result<gix::Commit<'repo>> {
    let object = repo
        .rev_parse_single(rev.as_bytes())
        .map_err(|e| FloccError::Git(format!("failed to resolve '{rev}': {e}")))?
        .object()
        .map_err(|e| FloccError::Git(format!("failed to look up '{rev}': {e}")))?;

    object
        .peel_tags_to_end()
        .map_err(|e| FloccError::Git(format!("failed to peel '{rev}': {e}")))?
        .try_into_commit()
        .map_err(|_| FloccError::Git(format!("'{rev}' does not name a commit")))
}

/// Pre-order walk of a tree, classifying blobs and recursing into
/// subtrees.
fn walk_tree(
    repo: &gix::Repository,
    tree: &gix::Tree<'_>,
    prefix: String,
    seen: &mut DedupTable,
    unknown: &mut UnknownExts,
    results: &mut Vec<FileResult>,
) -> Result<()> {
    for entry in tree.iter() {
        let entry =
            entry.map_err(|e| FloccError::Git(format!("failed to read tree entry: {e}")))?;
        let name = format!("{prefix}{}", entry.filename());

        if entry.mode().is_tree() {
            let subtree = repo
                .find_object(entry.oid())
                .map_err(|e| FloccError::Git(format!("failed to find tree: {e}")))?
                .try_into_tree()
                .map_err(|_| FloccError::Git("object is not a tree".to_string()))?;
            walk_tree(repo, &subtree, format!("{name}/"), seen, unknown, results)?;
        } else if entry.mode().is_blob() {
            let kind = classify_path(&name);
            if kind == FileKind::Ignore {
                continue;
            }
            if kind == FileKind::Unknown {
                unknown.record(&name);
            }

            // The object id is already a content address.
            let duplicate = seen.is_duplicate(entry.oid().to_string());

            let blob = repo
                .find_object(entry.oid())
                .map_err(|e| FloccError::Git(format!("failed to find blob: {e}")))?
                .try_into_blob()
                .map_err(|_| FloccError::Git("object is not a blob".to_string()))?;
            let counts = classify_buffer(kind, &blob.data);

            results.push(FileResult {
                name,
                kind,
                counts,
                duplicate,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_repository_is_an_error() {
        let mut unknown = UnknownExts::new();
        let result = scan_revision("/nonexistent/flocc/repo", "HEAD", &mut unknown);
        assert!(matches!(result, Err(FloccError::Git(_))));
    }
}

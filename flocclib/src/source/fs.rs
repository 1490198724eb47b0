//! Filesystem walker.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::counter::classify_buffer;
use crate::digest::{content_digest, DedupTable};
use crate::error::FloccError;
use crate::kind::{classify_path, FileKind, UnknownExts};
use crate::stats::FileResult;
use crate::Result;

/// Whether a walk entry is a dotfile or dot-directory.
///
/// The root entry is always kept so that `.` works as an input.
fn hidden(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }

    entry
        .file_name()
        .to_str()
        .map_or(false, |name| name.starts_with('.') && name != "." && name != "..")
}

/// Classify one regular file.
///
/// `buffer` is the walk-scoped scratch buffer; its capacity is retained
/// across files. Open and read failures are reported on stderr and the
/// file is skipped.
fn scan_one(
    path: &Path,
    name: String,
    seen: &mut DedupTable,
    buffer: &mut Vec<u8>,
    unknown: &mut UnknownExts,
) -> Option<FileResult> {
    let kind = classify_path(&name);
    if kind == FileKind::Ignore {
        return None;
    }
    if kind == FileKind::Unknown {
        unknown.record(&name);
    }

    buffer.clear();
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("flocc: can't open {} for reading: {err}", path.display());
            return None;
        }
    };
    if let Err(err) = file.read_to_end(buffer) {
        eprintln!("flocc: error reading {}: {err}", path.display());
        return None;
    }

    let duplicate = seen.is_duplicate(content_digest(buffer));
    let counts = classify_buffer(kind, buffer);

    Some(FileResult {
        name,
        kind,
        counts,
        duplicate,
    })
}

/// Walk `path` and classify every regular file under it.
///
/// A single regular file is scanned directly under its given name; a
/// directory is walked pre-order with dotfile subtrees pruned, and file
/// names are reported relative to it (`foo/` and `foo` give identical
/// names). Anything else is an error.
pub fn scan_path(path: impl AsRef<Path>, unknown: &mut UnknownExts) -> Result<Vec<FileResult>> {
    let path = path.as_ref();
    let mut seen = DedupTable::new();
    let mut buffer = Vec::new();
    let mut results = Vec::new();

    if path.is_file() {
        let name = path.to_string_lossy().into_owned();
        if let Some(result) = scan_one(path, name, &mut seen, &mut buffer, unknown) {
            results.push(result);
        }
    } else if path.is_dir() {
        for entry in WalkDir::new(path).into_iter().filter_entry(|e| !hidden(e)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("flocc: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry
                .path()
                .strip_prefix(path)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .into_owned();
            if let Some(result) = scan_one(entry.path(), name, &mut seen, &mut buffer, unknown) {
                results.push(result);
            }
        }
    } else if !path.exists() {
        return Err(FloccError::PathNotFound(path.to_path_buf()));
    } else {
        return Err(FloccError::UnsupportedPath(path.to_path_buf()));
    }

    Ok(results)
}

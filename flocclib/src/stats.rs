//! Core data structures for per-file and aggregated results

use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::counter::LineCounts;
use crate::kind::FileKind;

/// Classification record for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    /// Display name (path relative to the scanned root, or within the
    /// revision tree)
    pub name: String,
    /// Language classification
    pub kind: FileKind,
    /// Per-line classification counts
    pub counts: LineCounts,
    /// Whether an identical file was seen earlier in the same run
    pub duplicate: bool,
}

/// Aggregated counts over a set of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LocResult {
    /// Number of files folded into this result
    pub files: u32,
    /// Code lines
    pub code: u32,
    /// Comment lines
    pub comment: u32,
    /// Whitespace lines
    pub whitespace: u32,
}

impl LocResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap one file's counts.
    pub fn from_counts(counts: &LineCounts) -> Self {
        Self {
            files: 1,
            code: counts.code,
            comment: counts.comment,
            whitespace: counts.whitespace,
        }
    }

    /// Total classified lines.
    pub fn lines(&self) -> u32 {
        self.code + self.comment + self.whitespace
    }
}

impl Add for LocResult {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            code: self.code + other.code,
            comment: self.comment + other.comment,
            whitespace: self.whitespace + other.whitespace,
        }
    }
}

impl AddAssign for LocResult {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.code += other.code;
        self.comment += other.comment;
        self.whitespace += other.whitespace;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_carries_one_file() {
        let counts = LineCounts {
            code: 10,
            comment: 3,
            whitespace: 2,
        };
        let result = LocResult::from_counts(&counts);

        assert_eq!(result.files, 1);
        assert_eq!(result.code, 10);
        assert_eq!(result.lines(), 15);
    }

    #[test]
    fn addition_is_componentwise() {
        let a = LocResult {
            files: 1,
            code: 10,
            comment: 3,
            whitespace: 2,
        };
        let b = LocResult {
            files: 2,
            code: 5,
            comment: 1,
            whitespace: 0,
        };

        let sum = a + b;
        assert_eq!(sum.files, 3);
        assert_eq!(sum.code, 15);
        assert_eq!(sum.comment, 4);
        assert_eq!(sum.whitespace, 2);

        let mut acc = LocResult::new();
        acc += a;
        acc += b;
        assert_eq!(acc, sum);
    }
}

//! Per-directory aggregation tree for the JSON report.
//!
//! The tree is a pure build over classified files: each file folds its
//! [`LocResult`] into the root, every directory along its parent path,
//! and finally a leaf carrying its own kind. Parent-child ownership is a
//! plain tree; `BTreeMap` keeps both entry names and per-kind results in
//! deterministic order.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::kind::FileKind;
use crate::stats::{FileResult, LocResult};

/// One node in the per-directory roll-up tree.
#[derive(Debug)]
pub struct DirNode {
    kind: FileKind,
    results: BTreeMap<FileKind, LocResult>,
    entries: BTreeMap<String, DirNode>,
}

impl DirNode {
    fn new(kind: FileKind) -> Self {
        Self {
            kind,
            results: BTreeMap::new(),
            entries: BTreeMap::new(),
        }
    }

    /// Create an empty root directory node.
    pub fn new_root() -> Self {
        Self::new(FileKind::Directory)
    }

    fn add(&mut self, kind: FileKind, result: LocResult) {
        *self.results.entry(kind).or_default() += result;
    }

    fn child(&mut self, name: &str, kind: FileKind) -> &mut DirNode {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| DirNode::new(kind))
    }

    /// Fold one file into the tree, creating intermediate directories on
    /// demand. Duplicates are inserted like any other file.
    pub fn insert(&mut self, file: &FileResult) {
        let result = LocResult::from_counts(&file.counts);
        self.add(file.kind, result);

        let mut components = file
            .name
            .split('/')
            .filter(|c| !c.is_empty() && *c != ".")
            .peekable();

        let mut node = self;
        while let Some(component) = components.next() {
            node = if components.peek().is_some() {
                node.child(component, FileKind::Directory)
            } else {
                node.child(component, file.kind)
            };
            node.add(file.kind, result);
        }
    }
}

#[derive(serde::Serialize)]
struct ResultRow<'a> {
    #[serde(rename = "Type")]
    kind: &'a str,
    #[serde(rename = "Files")]
    files: u32,
    #[serde(rename = "Code")]
    code: u32,
    #[serde(rename = "Comment")]
    comment: u32,
    #[serde(rename = "Blank")]
    blank: u32,
}

impl Serialize for DirNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let results: Vec<ResultRow> = self
            .results
            .iter()
            .map(|(kind, r)| ResultRow {
                kind: kind.label(),
                files: r.files,
                code: r.code,
                comment: r.comment,
                blank: r.whitespace,
            })
            .collect();

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Type", self.kind.label())?;
        map.serialize_entry("Results", &results)?;
        if self.kind == FileKind::Directory {
            map.serialize_entry("Entries", &self.entries)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::LineCounts;

    fn file(name: &str, kind: FileKind, code: u32, comment: u32, whitespace: u32) -> FileResult {
        FileResult {
            name: name.to_string(),
            kind,
            counts: LineCounts {
                code,
                comment,
                whitespace,
            },
            duplicate: false,
        }
    }

    #[test]
    fn ancestors_accumulate_descendant_results() {
        let mut root = DirNode::new_root();
        root.insert(&file("src/a.c", FileKind::C, 10, 2, 1));
        root.insert(&file("src/sub/b.c", FileKind::C, 5, 0, 0));
        root.insert(&file("run.sh", FileKind::Shell, 3, 1, 0));

        let c_total = root.results[&FileKind::C];
        assert_eq!(c_total.files, 2);
        assert_eq!(c_total.code, 15);
        assert_eq!(c_total.comment, 2);

        let src = &root.entries["src"];
        assert_eq!(src.results[&FileKind::C].code, 15);
        let sub = &src.entries["sub"];
        assert_eq!(sub.results[&FileKind::C].code, 5);
        let leaf = &sub.entries["b.c"];
        assert_eq!(leaf.kind, FileKind::C);
        assert_eq!(leaf.results[&FileKind::C].files, 1);
    }

    #[test]
    fn json_shape() {
        let mut root = DirNode::new_root();
        root.insert(&file("a.c", FileKind::C, 2, 1, 0));

        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(
            json,
            "{\"Type\":\"Directory\",\
             \"Results\":[{\"Type\":\"C\",\"Files\":1,\"Code\":2,\"Comment\":1,\"Blank\":0}],\
             \"Entries\":{\"a.c\":{\"Type\":\"C\",\
             \"Results\":[{\"Type\":\"C\",\"Files\":1,\"Code\":2,\"Comment\":1,\"Blank\":0}]}}}"
        );
    }

    #[test]
    fn leaves_omit_entries() {
        let mut root = DirNode::new_root();
        root.insert(&file("x.rs", FileKind::Rust, 1, 0, 0));

        let value: serde_json::Value = serde_json::to_value(&root).unwrap();
        let leaf = &value["Entries"]["x.rs"];
        assert_eq!(leaf["Type"], "Rust");
        assert!(leaf.get("Entries").is_none());
    }

    #[test]
    fn results_follow_kind_declaration_order() {
        let mut root = DirNode::new_root();
        root.insert(&file("b.rs", FileKind::Rust, 1, 0, 0));
        root.insert(&file("a.c", FileKind::C, 1, 0, 0));

        let json = serde_json::to_string(&root).unwrap();
        // C is declared before Rust, whatever the insertion order was.
        let c_pos = json.find("\"Type\":\"C\"").unwrap();
        let rust_pos = json.find("\"Type\":\"Rust\"").unwrap();
        assert!(c_pos < rust_pos);
    }

    #[test]
    fn duplicates_are_still_inserted() {
        let mut root = DirNode::new_root();
        root.insert(&file("a.c", FileKind::C, 1, 0, 0));
        let mut dup = file("b.c", FileKind::C, 1, 0, 0);
        dup.duplicate = true;
        root.insert(&dup);

        assert_eq!(root.results[&FileKind::C].files, 2);
        assert_eq!(root.entries.len(), 2);
    }
}

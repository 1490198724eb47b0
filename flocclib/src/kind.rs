//! File classification by extension.
//!
//! [`classify_path`] is a pure function from a path to a [`FileKind`];
//! everything the rest of the library knows about a file's language starts
//! here. Unknown extensions are tallied in a run-scoped [`UnknownExts`]
//! owned by the driver, so there is no process-global state.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Serialize, Serializer};

/// The language or role of a file.
///
/// The declaration order is fixed: it determines the order of the
/// `Results` arrays in the JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileKind {
    Directory,
    Unknown,
    Ignore,
    C,
    CCppHeader,
    Cpp,
    Assembly,
    Python,
    Perl,
    Xml,
    Html,
    Svg,
    Xslt,
    Java,
    Yacc,
    DeviceTree,
    Makefile,
    Kconfig,
    Shell,
    Yaml,
    Latex,
    Text,
    Coccinelle,
    Asn1,
    Sed,
    Awk,
    Rust,
    Go,
    Json,
    JavaScript,
    Css,
    Lex,
    Ruby,
    TypeScript,
}

impl FileKind {
    /// Stable human-readable label used in reports and JSON.
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Directory => "Directory",
            FileKind::Unknown => "Unknown",
            FileKind::Ignore => "Ignore",
            FileKind::C => "C",
            FileKind::CCppHeader => "C/C++ Header",
            FileKind::Cpp => "C++",
            FileKind::Assembly => "Assembly",
            FileKind::Python => "Python",
            FileKind::Perl => "Perl",
            FileKind::Xml => "XML",
            FileKind::Html => "HTML",
            FileKind::Svg => "SVG",
            FileKind::Xslt => "XSLT",
            FileKind::Java => "Java",
            FileKind::Yacc => "Yacc",
            FileKind::DeviceTree => "Device-Tree",
            FileKind::Makefile => "Makefile",
            FileKind::Kconfig => "Kconfig",
            FileKind::Shell => "Shell",
            FileKind::Yaml => "YAML",
            FileKind::Latex => "LaTeX",
            FileKind::Text => "Text",
            FileKind::Coccinelle => "Coccinelle",
            FileKind::Asn1 => "ASN.1",
            FileKind::Sed => "Sed",
            FileKind::Awk => "Awk",
            FileKind::Rust => "Rust",
            FileKind::Go => "Go",
            FileKind::Json => "JSON",
            FileKind::JavaScript => "JavaScript",
            FileKind::Css => "CSS",
            FileKind::Lex => "Lex",
            FileKind::Ruby => "Ruby",
            FileKind::TypeScript => "TypeScript",
        }
    }
}

impl Serialize for FileKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classify a path by its file extension.
///
/// The directory prefix is stripped at the last `/`, then the basename is
/// partitioned at its last `.`. Extensions are matched literally and
/// case-sensitively (`.c` is C, `.C` is C++). Basenames without an
/// extension recognize only `Makefile` and `Kconfig`.
pub fn classify_path(path: &str) -> FileKind {
    let base = path.rsplit('/').next().unwrap_or(path);

    let Some(pos) = base.rfind('.') else {
        return match base {
            "Makefile" => FileKind::Makefile,
            "Kconfig" => FileKind::Kconfig,
            _ => FileKind::Unknown,
        };
    };

    match &base[pos..] {
        ".c" => FileKind::C,
        ".h" | ".hh" => FileKind::CCppHeader,
        ".cc" | ".C" | ".c++" => FileKind::Cpp,
        ".S" => FileKind::Assembly,
        ".py" => FileKind::Python,
        ".pl" | ".pm" => FileKind::Perl,
        ".xml" => FileKind::Xml,
        ".html" | ".htm" | ".xhtml" => FileKind::Html,
        ".svg" => FileKind::Svg,
        ".xsl" | ".xslt" => FileKind::Xslt,
        ".java" => FileKind::Java,
        ".y" => FileKind::Yacc,
        ".dts" | ".dtsi" => FileKind::DeviceTree,
        ".sh" => FileKind::Shell,
        ".yaml" => FileKind::Yaml,
        ".tex" => FileKind::Latex,
        ".txt" | ".rst" => FileKind::Text,
        ".cocci" => FileKind::Coccinelle,
        ".asn1" => FileKind::Asn1,
        ".sed" => FileKind::Sed,
        ".awk" => FileKind::Awk,
        ".rs" => FileKind::Rust,
        ".go" => FileKind::Go,
        ".json" => FileKind::Json,
        ".js" => FileKind::JavaScript,
        ".css" => FileKind::Css,
        ".l" => FileKind::Lex,
        ".rb" => FileKind::Ruby,
        ".ts" | ".tsx" => FileKind::TypeScript,
        _ => FileKind::Unknown,
    }
}

/// Tally of file extensions that [`classify_path`] did not recognize.
///
/// Owned by one run and passed explicitly into the walkers; rendered by
/// the CLI's `--dump-unknown` option.
#[derive(Debug, Default)]
pub struct UnknownExts {
    counts: BTreeMap<String, u32>,
}

impl UnknownExts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the extension of an unknown path. Paths without an
    /// extension are not tallied.
    pub fn record(&mut self, path: &str) {
        let base = path.rsplit('/').next().unwrap_or(path);
        if let Some(pos) = base.rfind('.') {
            *self.counts.entry(base[pos..].to_string()).or_insert(0) += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Write the sorted listing used by `--dump-unknown`.
    pub fn write_listing(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Unknown Extensions:")?;
        for (ext, count) in &self.counts {
            writeln!(out, "  [{ext}]: {count}")?;
        }
        Ok(())
    }
}

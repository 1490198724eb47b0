//! Comment and string conventions for the supported languages.
//!
//! Each language is described by a tiny [`SourceSpec`] value consumed by
//! the generic classifier in [`crate::counter`]. Polymorphism is by data:
//! one driver, many specs, and most kinds share a spec with their
//! syntactic relatives.

use crate::kind::FileKind;

/// Declarative description of one language's comment and string syntax.
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    /// Block comment delimiters, e.g. `("/*", "*/")`. Both non-empty.
    pub block_comment: Option<(&'static [u8], &'static [u8])>,
    /// Line comment openers in match order; the first match wins.
    pub line_comments: &'static [&'static [u8]],
    /// Whether double-quoted strings are recognized.
    pub strings: bool,
}

pub(crate) const C_SPEC: SourceSpec = SourceSpec {
    block_comment: Some((b"/*", b"*/")),
    line_comments: &[b"//"],
    strings: true,
};

pub(crate) const ASM_SPEC: SourceSpec = SourceSpec {
    block_comment: Some((b"/*", b"*/")),
    line_comments: &[b"#"],
    strings: true,
};

pub(crate) const PYTHON_SPEC: SourceSpec = SourceSpec {
    block_comment: Some((b"\"\"\"", b"\"\"\"")),
    line_comments: &[b"#"],
    strings: true,
};

pub(crate) const SHELL_SPEC: SourceSpec = SourceSpec {
    block_comment: None,
    line_comments: &[b"#"],
    strings: true,
};

pub(crate) const XML_SPEC: SourceSpec = SourceSpec {
    block_comment: Some((b"<!--", b"-->")),
    line_comments: &[],
    strings: false,
};

pub(crate) const LATEX_SPEC: SourceSpec = SourceSpec {
    block_comment: None,
    line_comments: &[b"%"],
    strings: true,
};

pub(crate) const TEXT_SPEC: SourceSpec = SourceSpec {
    block_comment: None,
    line_comments: &[],
    strings: true,
};

pub(crate) const ASN1_SPEC: SourceSpec = SourceSpec {
    block_comment: None,
    line_comments: &[b"--"],
    strings: true,
};

pub(crate) const RUST_SPEC: SourceSpec = SourceSpec {
    block_comment: None,
    line_comments: &[b"//"],
    strings: true,
};

pub(crate) const CSS_SPEC: SourceSpec = SourceSpec {
    block_comment: Some((b"/*", b"*/")),
    line_comments: &[],
    strings: true,
};

pub(crate) const RUBY_SPEC: SourceSpec = SourceSpec {
    block_comment: Some((b"=begin", b"=end")),
    line_comments: &[b"#"],
    strings: true,
};

/// Map a file kind to the spec used to classify it.
///
/// `Unknown`, `Directory` and `Ignore` have no spec; their buffers count
/// as zero lines. Perl uses the shell spec after the `__END__` trim
/// applied in [`crate::counter::classify_buffer`].
pub fn spec_for(kind: FileKind) -> Option<&'static SourceSpec> {
    match kind {
        FileKind::C
        | FileKind::CCppHeader
        | FileKind::Cpp
        | FileKind::Java
        | FileKind::Yacc
        | FileKind::DeviceTree
        | FileKind::Coccinelle
        | FileKind::Go
        | FileKind::JavaScript
        | FileKind::Lex
        | FileKind::TypeScript => Some(&C_SPEC),
        FileKind::Assembly => Some(&ASM_SPEC),
        FileKind::Python => Some(&PYTHON_SPEC),
        FileKind::Xml | FileKind::Html | FileKind::Svg | FileKind::Xslt => Some(&XML_SPEC),
        FileKind::Makefile
        | FileKind::Kconfig
        | FileKind::Shell
        | FileKind::Yaml
        | FileKind::Sed
        | FileKind::Awk
        | FileKind::Perl => Some(&SHELL_SPEC),
        FileKind::Latex => Some(&LATEX_SPEC),
        FileKind::Text | FileKind::Json => Some(&TEXT_SPEC),
        FileKind::Asn1 => Some(&ASN1_SPEC),
        FileKind::Rust => Some(&RUST_SPEC),
        FileKind::Css => Some(&CSS_SPEC),
        FileKind::Ruby => Some(&RUBY_SPEC),
        FileKind::Directory | FileKind::Unknown | FileKind::Ignore => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_family_shares_one_spec() {
        let c = spec_for(FileKind::C).unwrap();
        for kind in [
            FileKind::CCppHeader,
            FileKind::Cpp,
            FileKind::Java,
            FileKind::Go,
            FileKind::TypeScript,
        ] {
            let spec = spec_for(kind).unwrap();
            assert!(std::ptr::eq(c, spec));
        }
    }

    #[test]
    fn xml_has_no_strings() {
        let spec = spec_for(FileKind::Xml).unwrap();
        assert!(!spec.strings);
        assert!(spec.line_comments.is_empty());
        assert_eq!(spec.block_comment, Some((b"<!--".as_slice(), b"-->".as_slice())));
    }

    #[test]
    fn perl_uses_shell_spec() {
        let perl = spec_for(FileKind::Perl).unwrap();
        let shell = spec_for(FileKind::Shell).unwrap();
        assert!(std::ptr::eq(perl, shell));
    }

    #[test]
    fn markers_have_no_spec() {
        assert!(spec_for(FileKind::Unknown).is_none());
        assert!(spec_for(FileKind::Directory).is_none());
        assert!(spec_for(FileKind::Ignore).is_none());
    }
}

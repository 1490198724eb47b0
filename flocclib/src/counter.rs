//! Byte-level streaming line classification.
//!
//! This is the hot path of the whole counter. [`count_source`] scans a
//! byte buffer exactly once, driven by a [`SourceSpec`], and assigns every
//! non-empty logical line to one of three buckets: code, comment, or
//! whitespace. The scanner keeps one byte of lookbehind for the string
//! escape rule and never decodes characters, so it is byte-exact and
//! insensitive to the input encoding for ASCII-superset encodings.
//!
//! Line attribution rules, in brief:
//!
//! - lines are separated by `\n`; a line with no bytes before its
//!   terminator is not counted at all;
//! - code dominates comment within a line (`x = 1; // tail` is code);
//! - a block comment opener wins over a line comment at the same
//!   position, and both win over string recognition;
//! - strings and block comments span newlines, carrying their flag into
//!   each continuation line.

use serde::Serialize;

use crate::kind::FileKind;
use crate::spec::{spec_for, SourceSpec};

/// Per-category line counts for one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    /// Lines containing at least one code token
    pub code: u32,
    /// Lines inside or opening a comment, with no code
    pub comment: u32,
    /// Non-empty lines with neither code nor comment
    pub whitespace: u32,
}

impl LineCounts {
    /// Total classified lines.
    pub fn total(&self) -> u32 {
        self.code + self.comment + self.whitespace
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Begin,
    InString,
    LineComment,
    BlockComment,
}

/// The C `isspace` set. `u8::is_ascii_whitespace` omits vertical tab.
#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

#[inline]
fn match_block_open(spec: &SourceSpec, buf: &[u8], i: usize) -> Option<usize> {
    let (open, _) = spec.block_comment?;
    buf[i..].starts_with(open).then_some(open.len())
}

#[inline]
fn match_block_close(spec: &SourceSpec, buf: &[u8], i: usize) -> Option<usize> {
    let (_, close) = spec.block_comment?;
    buf[i..].starts_with(close).then_some(close.len())
}

#[inline]
fn match_line_comment(spec: &SourceSpec, buf: &[u8], i: usize) -> Option<usize> {
    spec.line_comments
        .iter()
        .find(|pat| buf[i..].starts_with(pat))
        .map(|pat| pat.len())
}

fn finish_line(counts: &mut LineCounts, code: bool, comment: bool, seen: &mut bool) {
    if !*seen {
        return;
    }

    if code {
        counts.code += 1;
    } else if comment {
        counts.comment += 1;
    } else {
        counts.whitespace += 1;
    }

    *seen = false;
}

/// Classify every line of `buffer` according to `spec`.
///
/// Pure and total: an empty buffer yields zero counts, and malformed
/// input (unterminated string or block comment) is absorbed, the final
/// partial line being emitted under whichever state was active.
pub fn count_source(spec: &SourceSpec, buffer: &[u8]) -> LineCounts {
    let mut counts = LineCounts::default();
    let mut state = State::Begin;
    let mut code = false;
    let mut comment = false;
    // Whether the current line holds any byte before its terminator.
    let mut seen = false;
    let mut last = 0u8;
    let mut c = 0u8;
    let mut i = 0;

    while i < buffer.len() {
        last = c;
        c = buffer[i];
        if c != b'\n' {
            seen = true;
        }

        match state {
            State::Begin => {
                if let Some(len) = match_block_open(spec, buffer, i) {
                    comment = true;
                    state = State::BlockComment;
                    i += len;
                    continue;
                }
                if let Some(len) = match_line_comment(spec, buffer, i) {
                    comment = true;
                    state = State::LineComment;
                    i += len;
                    continue;
                }
                if spec.strings && c == b'"' {
                    code = true;
                    state = State::InString;
                } else if c == b'\n' {
                    finish_line(&mut counts, code, comment, &mut seen);
                    code = false;
                    comment = false;
                } else if !is_space(c) {
                    code = true;
                }
            }
            State::InString => {
                if c == b'"' && last != b'\\' {
                    state = State::Begin;
                } else if c == b'\n' {
                    // The string spans the newline; the next line is code
                    // no matter what else it holds.
                    finish_line(&mut counts, code, comment, &mut seen);
                    comment = false;
                    code = true;
                }
            }
            State::LineComment => {
                if c == b'\n' {
                    finish_line(&mut counts, code, comment, &mut seen);
                    code = false;
                    comment = false;
                    state = State::Begin;
                }
            }
            State::BlockComment => {
                if let Some(len) = match_block_close(spec, buffer, i) {
                    state = State::Begin;
                    i += len;
                    continue;
                }
                if c == b'\n' {
                    finish_line(&mut counts, code, comment, &mut seen);
                    code = false;
                    comment = true;
                }
            }
        }

        i += 1;
    }

    // Emit the unterminated tail line.
    if c != b'\n' {
        finish_line(&mut counts, code, comment, &mut seen);
    }

    counts
}

/// Length of the prefix preceding a Perl `__END__` marker.
///
/// The marker is a `\n` immediately followed by `__END__`; the prefix
/// stops one byte before that `\n`. Without a marker the whole buffer is
/// kept.
fn perl_prefix_len(buffer: &[u8]) -> usize {
    const MARKER: &[u8] = b"__END__";

    for i in 0..buffer.len() {
        if buffer[i] != b'\n' {
            continue;
        }

        let rest = &buffer[i + 1..];
        if rest.len() < MARKER.len() {
            break;
        }

        if rest.starts_with(MARKER) {
            return i.saturating_sub(1);
        }
    }

    buffer.len()
}

/// Classify a buffer under the spec for `kind`.
///
/// Kinds without a spec (`Unknown`, `Directory`, `Ignore`) count as zero
/// lines. Perl buffers are truncated at their `__END__` marker first.
pub fn classify_buffer(kind: FileKind, buffer: &[u8]) -> LineCounts {
    let Some(spec) = spec_for(kind) else {
        return LineCounts::default();
    };

    let buffer = if kind == FileKind::Perl {
        &buffer[..perl_prefix_len(buffer)]
    } else {
        buffer
    };

    count_source(spec, buffer)
}

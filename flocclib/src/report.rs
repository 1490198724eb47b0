//! Plain-text tabular report.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;

use crate::kind::FileKind;
use crate::stats::{FileResult, LocResult};

fn write_timing(out: &mut impl Write, elapsed: Duration, files: u32, lines: u32) -> io::Result<()> {
    let ms = (elapsed.as_millis() as u64).max(1);

    // One decimal of throughput via integer math.
    let files_x10 = u64::from(files) * 10_000 / ms;
    let lines_x10 = u64::from(lines) * 10_000 / ms;

    writeln!(
        out,
        "  T={}.{:03}s ({}.{} files/s,  {}.{} lines/s)",
        ms / 1000,
        ms % 1000,
        files_x10 / 10,
        files_x10 % 10,
        lines_x10 / 10,
        lines_x10 % 10
    )
}

/// Write the per-language summary table for one scanned argument.
///
/// `Unknown` files are excluded. The file total counts every non-unknown
/// file seen; line sums cover non-duplicates only. Rows are ordered
/// alphabetically by kind label.
pub fn write_summary(
    out: &mut impl Write,
    arg: &str,
    files: &[FileResult],
    elapsed: Duration,
) -> io::Result<()> {
    let mut per_kind: BTreeMap<&'static str, LocResult> = BTreeMap::new();
    let mut total_files = 0u32;
    let mut unique_files = 0u32;
    let mut total = LocResult::new();

    for file in files {
        if file.kind == FileKind::Unknown {
            continue;
        }

        total_files += 1;
        if file.duplicate {
            continue;
        }
        unique_files += 1;

        let result = LocResult::from_counts(&file.counts);
        *per_kind.entry(file.kind.label()).or_default() += result;
        total += result;
    }

    writeln!(out, "Results for {arg}:")?;
    writeln!(
        out,
        "  Scanned {unique_files} unique files ({total_files} total)"
    )?;
    write_timing(out, elapsed, unique_files, total.lines())?;

    writeln!(
        out,
        "{:<20}{:<12}{:<12}{:<12}{:<12}",
        "", "Files", "Code", "Comment", "Blank"
    )?;
    writeln!(out, "  {:-<68}", "")?;

    for (label, result) in &per_kind {
        writeln!(
            out,
            "  {:<18}{:<12}{:<12}{:<12}{:<12}",
            label, result.files, result.code, result.comment, result.whitespace
        )?;
    }

    writeln!(out, "  {:-<68}", "")?;
    writeln!(
        out,
        "{:<20}{:<12}{:<12}{:<12}{:<12}",
        "  Total", total_files, total.code, total.comment, total.whitespace
    )
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

    fn render(files: &[FileResult]) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, "testdir", files, Duration::from_millis(250)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn duplicates_count_as_files_but_not_lines() {
        let mut dup = file("b.c", FileKind::C, 4, 1, 0);
        dup.duplicate = true;
        let files = vec![file("a.c", FileKind::C, 4, 1, 0), dup];

        let report = render(&files);

        assert!(report.contains("Scanned 1 unique files (2 total)"));
        // Line sums exclude the duplicate.
        assert!(report.contains("  C                 1           4           1           0"));
        assert!(report.contains("  Total             2           4           1           0"));
    }

    #[test]
    fn unknown_files_are_excluded() {
        let files = vec![
            file("a.rs", FileKind::Rust, 2, 0, 0),
            file("blob.bin", FileKind::Unknown, 0, 0, 0),
        ];

        let report = render(&files);

        assert!(report.contains("Scanned 1 unique files (1 total)"));
        assert!(!report.contains("Unknown"));
    }

    #[test]
    fn rows_sorted_by_label() {
        let files = vec![
            file("x.rs", FileKind::Rust, 1, 0, 0),
            file("y.c", FileKind::C, 1, 0, 0),
            file("z.awk", FileKind::Awk, 1, 0, 0),
        ];

        let report = render(&files);
        let awk = report.find("  Awk").unwrap();
        let c = report.find("  C ").unwrap();
        let rust = report.find("  Rust").unwrap();
        assert!(awk < c && c < rust);
    }

    #[test]
    fn timing_line_shape() {
        let report = render(&[file("a.c", FileKind::C, 100, 0, 0)]);
        // 1 file, 100 lines in 250ms -> 4.0 files/s, 400.0 lines/s
        assert!(report.contains("T=0.250s (4.0 files/s,  400.0 lines/s)"));
    }

    #[test]
    fn header_layout() {
        let report = render(&[]);
        assert!(report.contains("Results for testdir:"));
        assert!(report
            .lines()
            .any(|l| l.starts_with("                    Files       Code")));
    }
}

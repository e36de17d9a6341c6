use std::io::{self, Write};
use std::path::Path;

use pairdist::io::{AttributeReport, PairReport};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub struct RunSummary<'a> {
    pub atoms1: usize,
    pub atoms2: usize,
    pub pairs: PairReport,
    pub attributes: AttributeReport,
    pub attribute_file: &'a Path,
}

pub fn print_run_summary(summary: &RunSummary<'_>) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = write_run_summary(&mut out, summary);
}

fn write_run_summary(out: &mut impl Write, summary: &RunSummary<'_>) -> io::Result<()> {
    let mut rows = vec![
        ("Atoms #0", summary.atoms1.to_string()),
        ("Atoms #1", summary.atoms2.to_string()),
        ("Atom Pairs", summary.pairs.pairs.to_string()),
    ];

    let unpaired = summary.atoms1.abs_diff(summary.atoms2);
    if unpaired > 0 {
        rows.push(("Unpaired Atoms", unpaired.to_string()));
    }
    if summary.pairs.skipped > 0 {
        rows.push(("Skipped Pairs", summary.pairs.skipped.to_string()));
    }
    if summary.pairs.mismatches > 0 {
        rows.push(("Name Mismatches", summary.pairs.mismatches.to_string()));
    }

    rows.push(("Distances", summary.attributes.records.to_string()));
    if summary.attributes.skipped > 0 {
        rows.push(("Malformed Lines", summary.attributes.skipped.to_string()));
    }
    rows.push((
        "Attribute File",
        summary.attribute_file.display().to_string(),
    ));

    print_kv_table(out, "Run Summary", &rows)
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    )?;
    writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐")?;
    writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    )?;
    writeln!(out, "{INDENT}├{k_line}┼{v_line}┤")?;

    for (key, val) in rows {
        writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        )?;
    }

    writeln!(out, "{INDENT}└{k_line}┴{v_line}┘")
}

//! Fixed-width rendering of measurement records.

use std::fmt::{self, Write};

use crate::measurement::MeasurementRecord;
use crate::types::Nanos;

/// Width of the preamble rule printed above the table.
const PREAMBLE_RULE_WIDTH: usize = 50;

/// Which container finished first and by how much.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub winner: &'static str,
    /// `slower / faster`; `1.0` on a tie, infinite when only the winner
    /// measured zero nanoseconds.
    pub ratio: f64,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ratio.is_infinite() {
            write!(f, "{} faster (0 ns)", self.winner)
        } else {
            write!(f, "{} {:.1}x faster", self.winner, self.ratio)
        }
    }
}

/// Compares two timings. Equal timings, including both zero, go to `name_a`
/// with a ratio of exactly 1.0.
pub fn verdict(
    duration_a: Nanos,
    duration_b: Nanos,
    name_a: &'static str,
    name_b: &'static str,
) -> Verdict {
    if duration_a == duration_b {
        return Verdict {
            winner: name_a,
            ratio: 1.0,
        };
    }

    let (winner, fast, slow) = if duration_a < duration_b {
        (name_a, duration_a, duration_b)
    } else {
        (name_b, duration_b, duration_a)
    };

    let ratio = if fast == 0 {
        f64::INFINITY
    } else {
        slow as f64 / fast as f64
    };
    Verdict { winner, ratio }
}

/// Renders the comparison table. Pure: the records are only read.
pub fn format_table(
    records: &[MeasurementRecord],
    name_a: &'static str,
    name_b: &'static str,
    rule_width: usize,
) -> String {
    let mut table = String::new();
    // `String` never rejects a write.
    let _ = write_table(&mut table, records, name_a, name_b, rule_width);
    table
}

/// Full report: a short preamble followed by the table.
pub fn format_report(
    records: &[MeasurementRecord],
    name_a: &'static str,
    name_b: &'static str,
    operation_count: usize,
    rule_width: usize,
) -> String {
    let mut report = String::new();
    let _ = write_report(
        &mut report,
        records,
        name_a,
        name_b,
        operation_count,
        rule_width,
    );
    report
}

pub fn write_table(
    out: &mut impl Write,
    records: &[MeasurementRecord],
    name_a: &'static str,
    name_b: &'static str,
    rule_width: usize,
) -> fmt::Result {
    let heavy = "=".repeat(rule_width);
    let light = "-".repeat(rule_width);

    writeln!(out, "{heavy}")?;
    writeln!(
        out,
        "{} vs {} PERFORMANCE COMPARISON",
        name_a.to_uppercase(),
        name_b.to_uppercase()
    )?;
    writeln!(out, "{heavy}")?;
    writeln!(
        out,
        "| {:<8} | {:<18} | {:<8} | {:<16} | {:<16} | {:<24} |",
        "Method",
        "Operation Type",
        "Count",
        format!("{name_a}(ns)"),
        format!("{name_b}(ns)"),
        "Performance"
    )?;
    writeln!(out, "{light}")?;

    for record in records {
        let verdict = verdict(record.duration_a_ns, record.duration_b_ns, name_a, name_b);
        writeln!(
            out,
            "| {:<8} | {:<18} | {:<8} | {:>16} | {:>16} | {:<24} |",
            record.group.as_str(),
            record.label,
            record.iteration_count,
            record.duration_a_ns,
            record.duration_b_ns,
            verdict.to_string()
        )?;
    }
    writeln!(out, "{heavy}")
}

pub fn write_report(
    out: &mut impl Write,
    records: &[MeasurementRecord],
    name_a: &'static str,
    name_b: &'static str,
    operation_count: usize,
    rule_width: usize,
) -> fmt::Result {
    writeln!(out, "Comparison of {name_a} and {name_b} performance")?;
    writeln!(out, "Number of operations: {operation_count}")?;
    writeln!(out, "{}", "=".repeat(PREAMBLE_RULE_WIDTH))?;
    writeln!(out)?;
    write_table(out, records, name_a, name_b, rule_width)
}

//! Rendering of an [`AnalysisReport`] for the terminal or as JSON.

use std::fmt::Write as _;

use crate::analyzer::AnalysisReport;
use crate::colors::Painter;
use crate::types::{DuplicateGroup, OutputMode, ResolvedDuplicate, ScoredLocation};

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn write_scored(out: &mut String, p: &Painter, label: &str, loc: &ScoredLocation) {
    let _ = writeln!(
        out,
        "    {} {}:{} (score {})",
        label,
        p.path(&loc.location.file),
        loc.location.line,
        loc.score
    );
    for reason in &loc.reasons {
        let _ = writeln!(out, "        {}", p.dim(reason));
    }
}

fn write_resolved(out: &mut String, p: &Painter, resolved: &ResolvedDuplicate) {
    let _ = writeln!(
        out,
        "  {} ({}) - confidence {}, gap {}",
        p.symbol(&resolved.name),
        resolved.kind.as_str(),
        p.confidence(resolved.confidence),
        resolved.gap()
    );
    write_scored(out, p, "├─ CANONICAL", &resolved.canonical);
    for alt in &resolved.alternatives {
        write_scored(out, p, "├─ alternative", alt);
    }
    let _ = writeln!(out);
}

fn write_mirror(out: &mut String, p: &Painter, group: &DuplicateGroup) {
    let _ = writeln!(out, "  {} ({})", p.symbol(&group.name), group.kind.as_str());
    for loc in &group.locations {
        let _ = writeln!(out, "    ├─ {}:{}", p.path(&loc.file), loc.line);
    }
    let _ = writeln!(out);
}

/// Render the report in human-readable format.
pub fn render_human(report: &AnalysisReport, p: &Painter) -> String {
    let mut out = String::new();

    if report.resolved.is_empty() {
        let _ = writeln!(out, "No accidental duplicates found - all export names are unique!");
        let _ = writeln!(out);
    } else {
        let _ = writeln!(
            out,
            "{}",
            p.header(&format!(
                "ACCIDENTAL DUPLICATES ({} groups) - consolidate into the canonical location:",
                report.resolved.len()
            ))
        );
        let _ = writeln!(out);
        for resolved in &report.resolved {
            write_resolved(&mut out, p, resolved);
        }
    }

    if !report.cross_stack_mirrors.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            p.header(&format!(
                "CROSS-STACK MIRRORS ({} groups) - keep in sync:",
                report.cross_stack_mirrors.len()
            ))
        );
        let _ = writeln!(out);
        for group in &report.cross_stack_mirrors {
            write_mirror(&mut out, p, group);
        }
    }

    let s = &report.summary;
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  Files analyzed: {}", s.files);
    let _ = writeln!(out, "  Exports analyzed: {}", s.exports);
    let _ = writeln!(out, "  Accidental duplicates: {} (actionable)", s.accidental_groups);
    let _ = writeln!(out, "  Cross-stack mirrors: {} (usually OK)", s.cross_stack_groups);
    let _ = writeln!(out, "  Total duplicate definitions: {}", s.duplicate_definitions);
    let _ = writeln!(
        out,
        "  Confidence: {} high, {} medium, {} low",
        s.high_confidence, s.medium_confidence, s.low_confidence
    );

    out
}

/// Render the report based on output mode.
pub fn render_report(
    report: &AnalysisReport,
    output: OutputMode,
    p: &Painter,
) -> serde_json::Result<String> {
    match output {
        OutputMode::Json => render_json(report),
        OutputMode::Human => Ok(render_human(report, p)),
    }
}

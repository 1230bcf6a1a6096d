//! End-to-end pipeline: inventory -> grouped duplicates -> canonical picks.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{Confidence, DependencySample, DuplicateGroup, Inventory, ResolvedDuplicate};

use super::canonical::resolve_duplicates;
use super::twins::detect_duplicates;

/// Knobs for a single analysis run.
#[derive(Clone, Copy, Debug)]
pub struct AnalyzeOptions {
    /// Resolve groups on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Counts over one analysis run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub files: usize,
    pub exports: usize,
    pub accidental_groups: usize,
    pub cross_stack_groups: usize,
    /// Sum of locations over the accidental groups.
    pub duplicate_definitions: usize,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
}

/// Everything downstream reporting needs from one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub duplicates: Vec<DuplicateGroup>,
    pub cross_stack_mirrors: Vec<DuplicateGroup>,
    pub resolved: Vec<ResolvedDuplicate>,
    pub summary: AnalysisSummary,
}

/// Run the grouper and the resolver over an inventory snapshot.
pub fn analyze(
    inventory: &Inventory,
    dependencies: &[DependencySample],
    options: AnalyzeOptions,
) -> AnalysisReport {
    let data = detect_duplicates(&inventory.files);
    let resolved = resolve_duplicates(
        &data.duplicates,
        &inventory.files,
        dependencies,
        options.parallel,
    );

    let count = |tier: Confidence| resolved.iter().filter(|r| r.confidence == tier).count();
    let summary = AnalysisSummary {
        files: inventory.files.len(),
        exports: inventory.files.iter().map(|f| f.exports.len()).sum(),
        accidental_groups: data.duplicates.len(),
        cross_stack_groups: data.cross_stack_mirrors.len(),
        duplicate_definitions: data.duplicates.iter().map(|g| g.locations.len()).sum(),
        high_confidence: count(Confidence::High),
        medium_confidence: count(Confidence::Medium),
        low_confidence: count(Confidence::Low),
    };

    info!(
        files = summary.files,
        accidental = summary.accidental_groups,
        cross_stack = summary.cross_stack_groups,
        "duplicate analysis complete"
    );

    AnalysisReport {
        duplicates: data.duplicates,
        cross_stack_mirrors: data.cross_stack_mirrors,
        resolved,
        summary,
    }
}

//! Canonical location resolution for accidental duplicates.
//!
//! Every location of a group is scored by the rule list in [`signals`], then
//! ranked. The top location becomes canonical, the rest are alternatives, and
//! the score gap to the runner-up sets the confidence tier.
//!
//! Tie-break order after score: more importers, fewer lines (unknown files
//! count as 999 lines), then path and line so the ranking never depends on
//! map iteration.

pub mod context;
pub mod signals;

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::types::{
    Confidence, DependencySample, DuplicateCategory, DuplicateGroup, FileRecord,
    ResolvedDuplicate, ScoredLocation,
};
use crate::words::split_words;

pub use context::ResolveContext;
pub use signals::{Candidate, Contribution, SIGNALS, Signal, score_location};

/// Score every location of one group.
pub fn score_group(group: &DuplicateGroup, ctx: &ResolveContext<'_>) -> Vec<ScoredLocation> {
    let name_words = split_words(&group.name);

    group
        .locations
        .iter()
        .enumerate()
        .map(|(idx, location)| {
            let candidate = Candidate {
                name: &group.name,
                name_words: &name_words,
                location,
                siblings: group
                    .locations
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| *other != idx)
                    .map(|(_, sibling)| sibling)
                    .collect(),
                file: ctx.file(&location.file),
            };
            score_location(&candidate, ctx)
        })
        .collect()
}

fn compare_ranked(a: &ScoredLocation, b: &ScoredLocation, ctx: &ResolveContext<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| {
            ctx.imported_by_count(&b.location.file)
                .cmp(&ctx.imported_by_count(&a.location.file))
        })
        .then_with(|| {
            ctx.line_count_or_unknown(&a.location.file)
                .cmp(&ctx.line_count_or_unknown(&b.location.file))
        })
        .then_with(|| a.location.file.cmp(&b.location.file))
        .then_with(|| a.location.line.cmp(&b.location.line))
}

/// Sort scored locations best-first.
pub fn rank_locations(scored: &mut [ScoredLocation], ctx: &ResolveContext<'_>) {
    scored.sort_by(|a, b| compare_ranked(a, b, ctx));
}

/// Resolve the canonical location of one accidental duplicate.
///
/// Only accidental groups may be passed in; the grouper never hands over
/// anything else. Returns `None` only for a group without locations.
pub fn resolve_duplicate(
    group: &DuplicateGroup,
    ctx: &ResolveContext<'_>,
) -> Option<ResolvedDuplicate> {
    debug_assert_eq!(
        group.category,
        DuplicateCategory::Accidental,
        "resolver called on a {} group ({})",
        group.category.as_str(),
        group.name
    );

    let mut scored = score_group(group, ctx);
    rank_locations(&mut scored, ctx);

    let mut ranked = scored.into_iter();
    let canonical = ranked.next()?;
    let alternatives: Vec<ScoredLocation> = ranked.collect();

    let gap = alternatives
        .first()
        .map(|alt| canonical.score - alt.score)
        .unwrap_or(Confidence::SOLE_CANDIDATE_GAP);
    let confidence = Confidence::from_gap(gap);

    trace!(
        name = %group.name,
        canonical = %canonical.location.file,
        score = canonical.score,
        gap,
        confidence = confidence.as_str(),
        "resolved duplicate"
    );

    Some(ResolvedDuplicate {
        name: group.name.clone(),
        kind: group.kind,
        canonical,
        alternatives,
        confidence,
    })
}

/// Convenience wrapper building a one-off context for a single group.
pub fn resolve_group(
    group: &DuplicateGroup,
    files: &[FileRecord],
    dependencies: &[DependencySample],
) -> Option<ResolvedDuplicate> {
    let ctx = ResolveContext::new(files, dependencies);
    resolve_duplicate(group, &ctx)
}

/// Resolve every group, keeping input order.
///
/// Groups are independent, so `parallel` fans them out over rayon; the
/// result is identical to the sequential run.
pub fn resolve_duplicates(
    groups: &[DuplicateGroup],
    files: &[FileRecord],
    dependencies: &[DependencySample],
    parallel: bool,
) -> Vec<ResolvedDuplicate> {
    let ctx = ResolveContext::new(files, dependencies);

    let resolved: Vec<ResolvedDuplicate> = if parallel {
        groups
            .par_iter()
            .filter_map(|group| resolve_duplicate(group, &ctx))
            .collect()
    } else {
        groups
            .iter()
            .filter_map(|group| resolve_duplicate(group, &ctx))
            .collect()
    };

    debug!(
        groups = groups.len(),
        resolved = resolved.len(),
        parallel,
        "resolved canonical locations"
    );

    resolved
}

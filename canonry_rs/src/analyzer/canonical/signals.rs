//! Scoring signals for canonical-location ranking.
//!
//! Each signal is an independent pure function over one candidate location.
//! A location's score is the sum of every signal that fires:
//!
//! | Signal | Delta |
//! |---|---|
//! | filename equals the export name | +40 |
//! | otherwise, filename shares words with the name | +15 per word |
//! | parent directory shares a word | +12 |
//! | path under `/shared/` or `/common/` | +15 |
//! | imported by a sibling location's file | +25 |
//! | imports a sibling location's file | -15 |
//! | popularity (importers x 3) | up to +18 |
//! | generic file name (`utils`, `helpers`) | -25 |
//! | file size | -12 / -6 / +10 |
//! | export count | -12 / +8 |
//! | related exports in the same file (x 5) | up to +15 |
//! | only location with a signature | +5 |
//! | a sibling has a different signature | -10 |

use std::collections::HashSet;

use crate::analyzer::twins::{file_base_name, parent_dir_name};
use crate::types::{FileRecord, Location, ScoredLocation};
use crate::words::split_words;

use super::context::ResolveContext;

pub const EXACT_FILENAME_BONUS: i32 = 40;
pub const FILENAME_WORD_BONUS: i32 = 15;
pub const DIRECTORY_WORD_BONUS: i32 = 12;
pub const SHARED_LOCATION_BONUS: i32 = 15;
pub const DEPENDED_UPON_BONUS: i32 = 25;
pub const DEPENDS_ON_SIBLING_PENALTY: i32 = -15;
pub const POPULARITY_PER_IMPORTER: i32 = 3;
pub const POPULARITY_CAP: i32 = 18;
pub const GENERIC_FILE_PENALTY: i32 = -25;
pub const CLUSTER_PER_EXPORT: i32 = 5;
pub const CLUSTER_CAP: i32 = 15;
pub const UNIQUE_SIGNATURE_BONUS: i32 = 5;
pub const DIVERGENT_SIGNATURE_PENALTY: i32 = -10;

const SHARED_DIR_MARKERS: &[&str] = &["/shared/", "/common/"];

/// Everything a signal may look at for one candidate location.
#[derive(Debug)]
pub struct Candidate<'a> {
    /// Export name of the group.
    pub name: &'a str,
    /// `split_words(name)`, computed once per group.
    pub name_words: &'a [String],
    pub location: &'a Location,
    /// The other locations of the same group.
    pub siblings: Vec<&'a Location>,
    /// Inventory metadata of `location.file`, if known.
    pub file: Option<&'a FileRecord>,
}

/// Delta contributed by one signal, with its audit-trail entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contribution {
    pub delta: i32,
    pub reason: String,
}

impl Contribution {
    fn new(delta: i32, reason: impl Into<String>) -> Self {
        Self {
            delta,
            reason: reason.into(),
        }
    }
}

pub type Signal = fn(&Candidate<'_>, &ResolveContext<'_>) -> Option<Contribution>;

/// All signals, in the order their reasons are reported.
pub const SIGNALS: &[Signal] = &[
    filename_match,
    directory_match,
    shared_location,
    depended_upon,
    depends_on_sibling,
    popularity,
    generic_file_penalty,
    size_focus,
    export_count_focus,
    cluster_bonus,
    unique_signature,
    divergent_signature,
];

/// Fold every signal over a candidate.
pub fn score_location(candidate: &Candidate<'_>, ctx: &ResolveContext<'_>) -> ScoredLocation {
    let mut score = 0;
    let mut reasons = Vec::new();

    for signal in SIGNALS {
        if let Some(contribution) = signal(candidate, ctx) {
            score += contribution.delta;
            reasons.push(contribution.reason);
        }
    }

    ScoredLocation {
        location: candidate.location.clone(),
        score,
        reasons,
    }
}

fn signed(delta: i32) -> String {
    format!("{:+}", delta)
}

/// Exact filename match, else one bonus per name word found in the filename.
pub fn filename_match(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let base = file_base_name(&c.location.file).to_lowercase();
    if base.is_empty() {
        return None;
    }
    if base == c.name.to_lowercase() {
        return Some(Contribution::new(
            EXACT_FILENAME_BONUS,
            format!("filename matches name exactly ({})", signed(EXACT_FILENAME_BONUS)),
        ));
    }

    let hits = c
        .name_words
        .iter()
        .filter(|word| base.contains(word.as_str()) || word.contains(base.as_str()))
        .count() as i32;
    if hits == 0 {
        return None;
    }
    let delta = FILENAME_WORD_BONUS * hits;
    Some(Contribution::new(
        delta,
        format!("filename '{}' shares {} word(s) with name ({})", base, hits, signed(delta)),
    ))
}

/// Parent directory name contains a word of the export name.
pub fn directory_match(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let dir = parent_dir_name(&c.location.file)?.to_lowercase();

    let word = c.name_words.iter().find(|word| dir.contains(word.as_str()))?;
    Some(Contribution::new(
        DIRECTORY_WORD_BONUS,
        format!(
            "directory '{}' matches '{}' ({})",
            dir,
            word,
            signed(DIRECTORY_WORD_BONUS)
        ),
    ))
}

/// File lives under a shared/common directory.
pub fn shared_location(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let path = c.location.file.replace('\\', "/");
    SHARED_DIR_MARKERS
        .iter()
        .any(|marker| path.contains(marker))
        .then(|| {
            Contribution::new(
                SHARED_LOCATION_BONUS,
                format!("shared/common location ({})", signed(SHARED_LOCATION_BONUS)),
            )
        })
}

/// Another location's file imports this one.
pub fn depended_upon(c: &Candidate<'_>, ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let importer = c
        .siblings
        .iter()
        .find(|sibling| ctx.is_imported_by(&c.location.file, &sibling.file))?;
    Some(Contribution::new(
        DEPENDED_UPON_BONUS,
        format!("imported by {} ({})", importer.file, signed(DEPENDED_UPON_BONUS)),
    ))
}

/// This file imports another location's file.
pub fn depends_on_sibling(c: &Candidate<'_>, ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let target = c
        .siblings
        .iter()
        .find(|sibling| ctx.is_imported_by(&sibling.file, &c.location.file))?;
    Some(Contribution::new(
        DEPENDS_ON_SIBLING_PENALTY,
        format!("imports {} ({})", target.file, signed(DEPENDS_ON_SIBLING_PENALTY)),
    ))
}

/// Importer count from the dependency sample.
pub fn popularity(c: &Candidate<'_>, ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let sample = ctx.dependency(&c.location.file)?;
    let count = i32::try_from(sample.imported_by_count).unwrap_or(i32::MAX);
    let delta = count.saturating_mul(POPULARITY_PER_IMPORTER).min(POPULARITY_CAP);
    (delta > 0).then(|| {
        Contribution::new(
            delta,
            format!("imported by {} file(s) ({})", sample.imported_by_count, signed(delta)),
        )
    })
}

/// Generic catch-all file names are a poor home for a canonical definition.
pub fn generic_file_penalty(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    c.file.filter(|f| f.is_generic_name).map(|_| {
        Contribution::new(
            GENERIC_FILE_PENALTY,
            format!("generic file name ({})", signed(GENERIC_FILE_PENALTY)),
        )
    })
}

/// Small files are focused; large ones are dumping grounds.
pub fn size_focus(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let lines = c.file?.line_count;
    let delta = match lines {
        n if n > 500 => -12,
        n if n > 300 => -6,
        n if n <= 80 => 10,
        _ => return None,
    };
    Some(Contribution::new(
        delta,
        format!("{} lines ({})", lines, signed(delta)),
    ))
}

/// Few exports per file means a focused module.
pub fn export_count_focus(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let exports = c.file?.exports.len();
    let delta = match exports {
        n if n > 10 => -12,
        n if n <= 3 => 8,
        _ => return None,
    };
    Some(Contribution::new(
        delta,
        format!("{} exports in file ({})", exports, signed(delta)),
    ))
}

/// Other exports of the same file that share a word with the name.
pub fn cluster_bonus(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let file = c.file?;
    if c.name_words.is_empty() {
        return None;
    }
    let name_words: HashSet<&str> = c.name_words.iter().map(String::as_str).collect();

    let related = file
        .exports
        .iter()
        .filter(|export| export.name != c.name)
        .filter(|export| {
            split_words(&export.name)
                .iter()
                .any(|word| name_words.contains(word.as_str()))
        })
        .count();
    if related == 0 {
        return None;
    }

    let related_i32 = i32::try_from(related).unwrap_or(i32::MAX);
    let delta = related_i32.saturating_mul(CLUSTER_PER_EXPORT).min(CLUSTER_CAP);
    Some(Contribution::new(
        delta,
        format!("{} related export(s) in file ({})", related, signed(delta)),
    ))
}

/// The only location that carries a signature.
pub fn unique_signature(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    c.location.signature()?;
    c.siblings
        .iter()
        .all(|sibling| sibling.signature().is_none())
        .then(|| {
            Contribution::new(
                UNIQUE_SIGNATURE_BONUS,
                format!("only location with a signature ({})", signed(UNIQUE_SIGNATURE_BONUS)),
            )
        })
}

/// A sibling carries a signature that differs from this location's.
pub fn divergent_signature(c: &Candidate<'_>, _ctx: &ResolveContext<'_>) -> Option<Contribution> {
    let own = c.location.signature();
    c.siblings
        .iter()
        .any(|sibling| sibling.signature().is_some_and(|sig| Some(sig) != own))
        .then(|| {
            Contribution::new(
                DIVERGENT_SIGNATURE_PENALTY,
                format!("signature differs from a sibling ({})", signed(DIVERGENT_SIGNATURE_PENALTY)),
            )
        })
}

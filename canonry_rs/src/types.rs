use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Dependency sample bound used when none is configured.
pub const DEFAULT_DEPENDENCY_SAMPLE_LIMIT: usize = 30;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

/// Declaration kind of an exported symbol.
///
/// Unknown strings coming from an inventory producer decode to [`ExportKind::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Function,
    Class,
    Type,
    Interface,
    Const,
    Enum,
    #[default]
    #[serde(other)]
    Other,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Function => "function",
            ExportKind::Class => "class",
            ExportKind::Type => "type",
            ExportKind::Interface => "interface",
            ExportKind::Const => "const",
            ExportKind::Enum => "enum",
            ExportKind::Other => "other",
        }
    }
}

/// Size bucket of a file, assigned by the inventory producer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    #[default]
    Ok,
    Medium,
    High,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub name: String,
    #[serde(default)]
    pub kind: ExportKind,
    #[serde(default)]
    pub line: usize,
    /// Rendered signature, opaque to the engine. Only compared for equality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl ExportRecord {
    pub fn new(name: impl Into<String>, kind: ExportKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }
}

/// One source file of the inventory with the metadata the scorer reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub path: String,
    #[serde(default)]
    pub line_count: usize,
    #[serde(default)]
    pub exports: Vec<ExportRecord>,
    #[serde(default)]
    pub size_class: SizeClass,
    #[serde(default)]
    pub is_generic_name: bool,
}

/// Full export inventory produced by the parsing layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub files: Vec<FileRecord>,
}

/// Importer set of one of the most-imported files.
///
/// The sample is bounded and lossy: files outside it are treated as having no
/// recorded importers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencySample {
    pub file: String,
    #[serde(default)]
    pub imported_by_count: usize,
    #[serde(default)]
    pub imported_by: BTreeSet<String>,
}

/// Single file+line where a duplicated symbol is exported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Location {
    /// Signature if present and non-empty.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateCategory {
    /// Same symbol defined in several files of one stack; needs consolidation.
    Accidental,
    /// Intentional mirror between the backend and frontend stacks.
    CrossStack,
    /// Same name, different signatures; unrelated functions. Never reported.
    Polymorphic,
    /// Fewer than two real files left once barrels are removed. Never reported.
    BarrelFiltered,
}

impl DuplicateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateCategory::Accidental => "accidental",
            DuplicateCategory::CrossStack => "cross-stack",
            DuplicateCategory::Polymorphic => "polymorphic",
            DuplicateCategory::BarrelFiltered => "barrel-filtered",
        }
    }
}

/// Symbol name exported from more than one file.
///
/// `locations` holds at most one entry per file and no barrel files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub name: String,
    pub kind: ExportKind,
    pub locations: Vec<Location>,
    pub category: DuplicateCategory,
}

/// Output of the grouper: reportable groups split by category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateData {
    pub duplicates: Vec<DuplicateGroup>,
    pub cross_stack_mirrors: Vec<DuplicateGroup>,
}

/// A candidate location with its total score and the signals that fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLocation {
    #[serde(flatten)]
    pub location: Location,
    pub score: i32,
    pub reasons: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Gap assumed when a group has no alternative candidate.
    pub const SOLE_CANDIDATE_GAP: i32 = 100;

    /// Tier for the score gap between the top two candidates.
    pub fn from_gap(gap: i32) -> Self {
        if gap >= 20 {
            Confidence::High
        } else if gap >= 10 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Canonical pick for one accidental duplicate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDuplicate {
    pub name: String,
    pub kind: ExportKind,
    pub canonical: ScoredLocation,
    pub alternatives: Vec<ScoredLocation>,
    pub confidence: Confidence,
}

impl ResolvedDuplicate {
    /// Score difference between the canonical pick and the runner-up.
    pub fn gap(&self) -> i32 {
        self.alternatives
            .first()
            .map(|alt| self.canonical.score - alt.score)
            .unwrap_or(Confidence::SOLE_CANDIDATE_GAP)
    }
}

//! Helpers for producers of the inventory and dependency snapshots.
//!
//! The engine only reads `size_class`, `is_generic_name` and the dependency
//! sample; these functions derive them the same way for every producer.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::analyzer::twins::file_base_name;
use crate::types::{DependencySample, ExportRecord, FileRecord, Inventory, SizeClass};

/// Base names that say nothing about what a file contains.
pub const GENERIC_FILE_NAMES: &[&str] = &[
    "utils",
    "util",
    "helpers",
    "helper",
    "misc",
    "common",
    "shared-utils",
    "stuff",
];

impl SizeClass {
    pub fn from_line_count(lines: usize) -> Self {
        match lines {
            0..=300 => SizeClass::Ok,
            301..=500 => SizeClass::Medium,
            501..=800 => SizeClass::High,
            _ => SizeClass::Critical,
        }
    }
}

/// Check a path's base name against the denylist plus configured extras.
pub fn is_generic_file_name(path: &str, extra: &[String]) -> bool {
    let base = file_base_name(path).to_lowercase();
    GENERIC_FILE_NAMES.contains(&base.as_str())
        || extra.iter().any(|name| name.to_lowercase() == base)
}

impl FileRecord {
    /// Build a record, deriving size class and generic-name flag.
    pub fn from_parts(
        path: impl Into<String>,
        line_count: usize,
        exports: Vec<ExportRecord>,
        extra_generic_names: &[String],
    ) -> Self {
        let path = path.into();
        let is_generic_name = is_generic_file_name(&path, extra_generic_names);
        Self {
            size_class: SizeClass::from_line_count(line_count),
            is_generic_name,
            path,
            line_count,
            exports,
        }
    }
}

/// File entry as written by an inventory producer.
///
/// `sizeClass` and `isGenericName` are optional on the wire; explicit values
/// are kept as given and only omitted ones are derived.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDocument {
    pub path: String,
    #[serde(default)]
    pub line_count: usize,
    #[serde(default)]
    pub exports: Vec<ExportRecord>,
    #[serde(default)]
    pub size_class: Option<SizeClass>,
    #[serde(default)]
    pub is_generic_name: Option<bool>,
}

impl FileDocument {
    pub fn into_record(self, extra_generic_names: &[String]) -> FileRecord {
        let size_class = self
            .size_class
            .unwrap_or_else(|| SizeClass::from_line_count(self.line_count));
        let is_generic_name = self
            .is_generic_name
            .unwrap_or_else(|| is_generic_file_name(&self.path, extra_generic_names));
        FileRecord {
            path: self.path,
            line_count: self.line_count,
            exports: self.exports,
            size_class,
            is_generic_name,
        }
    }
}

/// Inventory document: `{"files": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct InventoryDocument {
    #[serde(default)]
    pub files: Vec<FileDocument>,
}

impl InventoryDocument {
    /// Build the engine's inventory, deriving only the omitted metadata.
    pub fn into_inventory(self, extra_generic_names: &[String]) -> Inventory {
        Inventory {
            files: self
                .files
                .into_iter()
                .map(|file| file.into_record(extra_generic_names))
                .collect(),
        }
    }
}

/// Import edge from the dependency-graph producer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEdge {
    /// Importing file
    pub from: String,
    /// Imported file
    pub to: String,
}

/// Keep the `limit` most-imported files of an import graph.
///
/// Importers are counted once per distinct file; self-imports are ignored.
/// Ties are broken by path so the sample is stable.
pub fn build_dependency_sample(edges: &[ImportEdge], limit: usize) -> Vec<DependencySample> {
    let mut importers: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for edge in edges {
        if edge.from == edge.to {
            continue;
        }
        importers
            .entry(edge.to.as_str())
            .or_default()
            .insert(edge.from.clone());
    }

    let mut sample: Vec<DependencySample> = importers
        .into_iter()
        .map(|(file, imported_by)| DependencySample {
            file: file.to_string(),
            imported_by_count: imported_by.len(),
            imported_by,
        })
        .collect();

    bound_dependency_sample(&mut sample, limit);
    sample
}

/// Keep the `limit` most-imported entries of a sample, most imported first.
///
/// Ties are broken by path.
pub fn bound_dependency_sample(sample: &mut Vec<DependencySample>, limit: usize) {
    sample.sort_by(|a, b| {
        b.imported_by_count
            .cmp(&a.imported_by_count)
            .then_with(|| a.file.cmp(&b.file))
    });
    sample.truncate(limit);
}

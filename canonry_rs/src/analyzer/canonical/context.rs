//! Per-run lookup tables shared by every signal.
//!
//! Built once per analysis from the caller's snapshots and dropped with it,
//! so nothing survives between runs.

use std::collections::HashMap;

use crate::types::{DependencySample, FileRecord};

/// Line count assumed for files missing from the inventory.
pub const UNKNOWN_LINE_COUNT: usize = 999;

/// Borrowed indexes over the inventory and the dependency sample.
#[derive(Debug, Default)]
pub struct ResolveContext<'a> {
    files: HashMap<&'a str, &'a FileRecord>,
    dependencies: HashMap<&'a str, &'a DependencySample>,
}

impl<'a> ResolveContext<'a> {
    pub fn new(files: &'a [FileRecord], dependencies: &'a [DependencySample]) -> Self {
        let mut file_index: HashMap<&'a str, &'a FileRecord> = HashMap::with_capacity(files.len());
        for file in files {
            file_index.entry(file.path.as_str()).or_insert(file);
        }

        let mut dep_index: HashMap<&'a str, &'a DependencySample> =
            HashMap::with_capacity(dependencies.len());
        for sample in dependencies {
            dep_index.entry(sample.file.as_str()).or_insert(sample);
        }

        Self {
            files: file_index,
            dependencies: dep_index,
        }
    }

    pub fn file(&self, path: &str) -> Option<&'a FileRecord> {
        self.files.get(path).copied()
    }

    pub fn dependency(&self, path: &str) -> Option<&'a DependencySample> {
        self.dependencies.get(path).copied()
    }

    /// Recorded importer count; zero outside the sample.
    pub fn imported_by_count(&self, path: &str) -> usize {
        self.dependency(path)
            .map(|d| d.imported_by_count)
            .unwrap_or(0)
    }

    /// Line count, or [`UNKNOWN_LINE_COUNT`] when the file has no metadata.
    pub fn line_count_or_unknown(&self, path: &str) -> usize {
        self.file(path)
            .map(|f| f.line_count)
            .unwrap_or(UNKNOWN_LINE_COUNT)
    }

    /// True when the sample records `importer` among the importers of `target`.
    pub fn is_imported_by(&self, target: &str, importer: &str) -> bool {
        self.dependency(target)
            .is_some_and(|d| d.imported_by.contains(importer))
    }
}

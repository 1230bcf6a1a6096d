//! Reading the inventory and dependency documents from disk.
//!
//! The inventory is `{"files": [...]}`. The dependency document is either the
//! sample itself (`[{"file", "importedByCount", "importedBy"}]`) or raw import
//! edges (`{"edges": [{"from", "to"}]}`) that are reduced to a sample here.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CanonryError, Result};
use crate::inventory::{
    ImportEdge, InventoryDocument, bound_dependency_sample, build_dependency_sample,
};
use crate::types::{DependencySample, Inventory};

/// Accepted shapes of the dependency document.
#[derive(Debug)]
pub enum DependencyDocument {
    Sample(Vec<DependencySample>),
    Edges(Vec<ImportEdge>),
}

#[derive(Deserialize)]
struct EdgesDocument {
    edges: Vec<ImportEdge>,
}

impl DependencyDocument {
    /// Parse either shape. A top-level array is a sample, anything else must
    /// be an edges object, so decode errors name the field that failed.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        if content.trim_start().starts_with('[') {
            serde_json::from_str(content).map(DependencyDocument::Sample)
        } else {
            serde_json::from_str::<EdgesDocument>(content)
                .map(|doc| DependencyDocument::Edges(doc.edges))
        }
    }

    /// Reduce to the `limit` most-imported files.
    pub fn into_sample(self, limit: usize) -> Vec<DependencySample> {
        match self {
            DependencyDocument::Sample(mut sample) => {
                bound_dependency_sample(&mut sample, limit);
                sample
            }
            DependencyDocument::Edges(edges) => build_dependency_sample(&edges, limit),
        }
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CanonryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn json_error(path: &Path) -> impl FnOnce(serde_json::Error) -> CanonryError + '_ {
    move |source| CanonryError::Json {
        path: path.to_path_buf(),
        source,
    }
}

/// Load an inventory document, deriving metadata the producer omitted.
pub fn load_inventory(path: &Path, extra_generic_names: &[String]) -> Result<Inventory> {
    let content = read(path)?;
    let document: InventoryDocument = serde_json::from_str(&content).map_err(json_error(path))?;
    let inventory = document.into_inventory(extra_generic_names);
    debug!(
        path = %path.display(),
        files = inventory.files.len(),
        "loaded inventory"
    );
    Ok(inventory)
}

/// Load a dependency document and reduce it to at most `limit` entries.
pub fn load_dependencies(path: &Path, limit: usize) -> Result<Vec<DependencySample>> {
    let content = read(path)?;
    let document = DependencyDocument::parse(&content).map_err(json_error(path))?;
    let sample = document.into_sample(limit);
    debug!(
        path = %path.display(),
        entries = sample.len(),
        "loaded dependency sample"
    );
    Ok(sample)
}

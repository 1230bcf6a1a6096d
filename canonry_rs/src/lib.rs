//! # canonry
//!
//! **Duplicate export resolver** - finds symbols exported from more than one
//! file and decides which definition should be treated as authoritative.
//!
//! Naive answers ("keep the first file alphabetically") go wrong in polyglot
//! codebases. canonry separates three situations that look alike:
//!
//! - **Accidental duplicates** - the same helper written twice in one stack
//! - **Cross-stack mirrors** - a DTO defined once for the backend and once
//!   for the frontend, on purpose
//! - **Polymorphic names** - unrelated functions that share a name
//!
//! Accidental duplicates are then ranked location by location with a set of
//! additive signals (filename and directory semantics, shared folders,
//! dependency direction, popularity, file focus, signatures) to pick a
//! canonical location, ordered alternatives, and a confidence tier.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use canonry::analyzer::{AnalyzeOptions, analyze};
//! use canonry::types::{ExportKind, ExportRecord, FileRecord, Inventory};
//!
//! let file = |path: &str| FileRecord {
//!     path: path.to_string(),
//!     line_count: 20,
//!     exports: vec![ExportRecord::new("slugify", ExportKind::Function, 1)],
//!     ..Default::default()
//! };
//! let inventory = Inventory {
//!     files: vec![file("src/text/slugify.ts"), file("src/pages/blog.ts")],
//! };
//!
//! let report = analyze(&inventory, &[], AnalyzeOptions::default());
//! assert_eq!(report.resolved[0].canonical.location.file, "src/text/slugify.ts");
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! canonry inventory.json                    # human report
//! canonry inventory.json --deps deps.json   # with dependency sample
//! canonry inventory.json --json             # machine-readable
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Duplicate grouping and canonical resolution.
///
/// # Submodules
///
/// - [`analyzer::twins`] - grouping and categorization of same-named exports
/// - [`analyzer::canonical`] - signal scoring, ranking and confidence
/// - [`analyzer::runner`] - the end-to-end [`analyze`](analyzer::analyze) pipeline
pub mod analyzer;

/// Command-line argument parsing and the binary's run loop.
pub mod cli;

/// Terminal colors for the human report.
pub mod colors;

/// Optional `.canonry/config.toml` support.
pub mod config;

/// Error type for snapshot and config loading.
pub mod error;

/// Helpers for inventory producers: size classes, generic names,
/// dependency samples from import edges.
pub mod inventory;

/// Human and JSON rendering of analysis reports.
pub mod output;

/// Reading inventory and dependency documents from disk.
pub mod snapshot;

/// Data model shared by every stage.
///
/// # Key Types
///
/// - [`FileRecord`](types::FileRecord) / [`ExportRecord`](types::ExportRecord) - inventory input
/// - [`DependencySample`](types::DependencySample) - bounded importer sample
/// - [`DuplicateGroup`](types::DuplicateGroup) - same-named exports across files
/// - [`ResolvedDuplicate`](types::ResolvedDuplicate) - canonical pick with alternatives
pub mod types;

/// Identifier word splitting shared by all name comparisons.
pub mod words;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use analyzer::{AnalysisReport, AnalyzeOptions, analyze, detect_duplicates, resolve_duplicates};
pub use config::CanonryConfig;
pub use error::{CanonryError, Result};
pub use types::{
    Confidence, DependencySample, DuplicateCategory, DuplicateData, DuplicateGroup, ExportKind,
    ExportRecord, FileRecord, Inventory, Location, ResolvedDuplicate, ScoredLocation,
};
pub use words::split_words;

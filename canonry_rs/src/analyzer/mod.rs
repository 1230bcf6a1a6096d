pub mod canonical;
pub mod runner;
pub mod twins;

pub use canonical::{ResolveContext, resolve_duplicate, resolve_duplicates};
pub use runner::{AnalysisReport, AnalysisSummary, AnalyzeOptions, analyze};
pub use twins::{classify_groups, detect_duplicates};

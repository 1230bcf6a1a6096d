//! Twins Module - Duplicate Export Grouping
//!
//! Groups symbols exported under the same name from different files and sorts
//! each group into one category:
//!
//! 1. **Cross-stack**: the name lives in both the backend (`.cs`) and another
//!    stack. Usually an API contract mirrored on purpose (DTOs).
//! 2. **Polymorphic**: the locations carry different signatures. Different
//!    functions that happen to share a name; suppressed.
//! 3. **Accidental**: everything else. Candidates for consolidation.
//!
//! Barrel files (`index.*`) only forward symbols, so they never count as a
//! definition. A name left with fewer than two real files is dropped.
//!
//! The check order matters: mirrors have per-language signatures by
//! construction, so cross-stack must win before signature divergence.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::types::{
    DuplicateCategory, DuplicateData, DuplicateGroup, ExportKind, FileRecord, Location,
};

/// Export name that never forms a group (default exports are anonymous).
const DEFAULT_EXPORT: &str = "default";

/// Base name of re-export-only modules.
const BARREL_BASE_NAME: &str = "index";

/// Language stack inferred from a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stack {
    Backend,
    Frontend,
    Unknown,
}

/// Detect stack from file extension
pub fn detect_stack(path: &str) -> Stack {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("cs") => Stack::Backend,
        Some("ts" | "tsx" | "js" | "jsx") => Stack::Frontend,
        _ => Stack::Unknown,
    }
}

/// Inventory paths may use either separator, whatever the host platform.
fn is_path_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// File name without its last extension: `src/utils/index.ts` -> `index`.
pub fn file_base_name(path: &str) -> &str {
    let name = path.rsplit(is_path_separator).next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

/// Name of the directory holding the file: `src/money/format.ts` -> `money`.
pub fn parent_dir_name(path: &str) -> Option<&str> {
    let mut segments = path.rsplit(is_path_separator);
    segments.next()?;
    segments.next().filter(|dir| !dir.is_empty())
}

/// Check if a file is a barrel (re-export hub) rather than a definition site.
pub fn is_barrel_file(path: &str) -> bool {
    file_base_name(path) == BARREL_BASE_NAME
}

/// Raw occurrence of an export before per-file deduplication.
struct Occurrence {
    kind: ExportKind,
    location: Location,
}

/// Build map: symbol name -> every occurrence, in inventory order.
fn collect_occurrences(files: &[FileRecord]) -> BTreeMap<&str, Vec<Occurrence>> {
    let mut symbol_map: BTreeMap<&str, Vec<Occurrence>> = BTreeMap::new();

    for file in files {
        for export in &file.exports {
            if export.name == DEFAULT_EXPORT {
                continue;
            }
            symbol_map
                .entry(export.name.as_str())
                .or_default()
                .push(Occurrence {
                    kind: export.kind,
                    location: Location {
                        file: file.path.clone(),
                        line: export.line,
                        signature: export.signature.clone(),
                    },
                });
        }
    }

    symbol_map
}

/// Keep the first occurrence per file.
fn dedup_by_file(occurrences: Vec<Occurrence>) -> Vec<Occurrence> {
    let mut seen: HashSet<String> = HashSet::new();
    occurrences
        .into_iter()
        .filter(|occ| seen.insert(occ.location.file.clone()))
        .collect()
}

/// Categorize the non-barrel locations of one group.
///
/// First match wins: cross-stack, then polymorphic, then accidental.
pub fn categorize(locations: &[Location]) -> DuplicateCategory {
    let stacks: HashSet<Stack> = locations.iter().map(|l| detect_stack(&l.file)).collect();
    let has_backend = stacks.contains(&Stack::Backend);
    let has_other = stacks.contains(&Stack::Frontend) || stacks.contains(&Stack::Unknown);
    if has_backend && has_other {
        return DuplicateCategory::CrossStack;
    }

    let signatures: Vec<&str> = locations.iter().filter_map(Location::signature).collect();
    if signatures.len() >= 2 && signatures.iter().any(|sig| *sig != signatures[0]) {
        return DuplicateCategory::Polymorphic;
    }

    DuplicateCategory::Accidental
}

/// Group and categorize every duplicated export name.
///
/// Returns all categories, including the suppressed `polymorphic` and
/// `barrel-filtered` groups, in name order. Barrel-filtered groups keep the
/// real locations that survived (fewer than two). Names exported from a
/// single file never appear.
pub fn classify_groups(files: &[FileRecord]) -> Vec<DuplicateGroup> {
    let mut groups = Vec::new();

    for (name, occurrences) in collect_occurrences(files) {
        if occurrences.len() < 2 {
            continue;
        }

        let unique = dedup_by_file(occurrences);
        if unique.len() < 2 {
            continue;
        }
        let kind = unique[0].kind;

        let locations: Vec<Location> = unique
            .into_iter()
            .map(|occ| occ.location)
            .filter(|loc| !is_barrel_file(&loc.file))
            .collect();

        let category = if locations.len() < 2 {
            DuplicateCategory::BarrelFiltered
        } else {
            categorize(&locations)
        };

        groups.push(DuplicateGroup {
            name: name.to_string(),
            kind,
            locations,
            category,
        });
    }

    groups
}

/// Detect duplicate exports and route them by category.
///
/// Accidental groups go to `duplicates`, cross-stack groups to
/// `cross_stack_mirrors`; both sorted by location count (most duplicated
/// first, then by name). Polymorphic and barrel-filtered groups are dropped.
pub fn detect_duplicates(files: &[FileRecord]) -> DuplicateData {
    let mut data = DuplicateData::default();
    let mut polymorphic = 0usize;
    let mut barrel_filtered = 0usize;

    for group in classify_groups(files) {
        match group.category {
            DuplicateCategory::Accidental => data.duplicates.push(group),
            DuplicateCategory::CrossStack => data.cross_stack_mirrors.push(group),
            DuplicateCategory::Polymorphic => polymorphic += 1,
            DuplicateCategory::BarrelFiltered => barrel_filtered += 1,
        }
    }

    // Groups arrive in name order; a stable sort keeps that as the tie-break.
    data.duplicates
        .sort_by(|a, b| b.locations.len().cmp(&a.locations.len()));
    data.cross_stack_mirrors
        .sort_by(|a, b| b.locations.len().cmp(&a.locations.len()));

    debug!(
        accidental = data.duplicates.len(),
        cross_stack = data.cross_stack_mirrors.len(),
        polymorphic,
        barrel_filtered,
        "grouped duplicate exports"
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExportRecord;

    fn mock_file_with_exports(path: &str, exports: Vec<(&str, ExportKind)>) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            line_count: 40,
            exports: exports
                .into_iter()
                .enumerate()
                .map(|(i, (name, kind))| ExportRecord::new(name, kind, i + 1))
                .collect(),
            ..Default::default()
        }
    }

    fn mock_file_with_signature(path: &str, name: &str, signature: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            exports: vec![ExportRecord::new(name, ExportKind::Function, 1).with_signature(signature)],
            ..Default::default()
        }
    }

    #[test]
    fn base_and_parent_names_accept_both_separators() {
        assert_eq!(file_base_name("src/utils/index.ts"), "index");
        assert_eq!(file_base_name("src\\shared\\formatCurrency.ts"), "formatCurrency");
        assert_eq!(file_base_name("lib/archive.tar.gz"), "archive.tar");
        assert_eq!(file_base_name(".eslintrc"), ".eslintrc");
        assert!(is_barrel_file("web\\src\\index.tsx"));

        assert_eq!(parent_dir_name("src/money/format.ts"), Some("money"));
        assert_eq!(parent_dir_name("src\\shared\\format.ts"), Some("shared"));
        assert_eq!(parent_dir_name("format.ts"), None);
        assert_eq!(parent_dir_name("/format.ts"), None);
    }

    #[test]
    fn test_detect_stack() {
        assert_eq!(detect_stack("Api/UserDto.cs"), Stack::Backend);
        assert_eq!(detect_stack("src/user.ts"), Stack::Frontend);
        assert_eq!(detect_stack("src/User.tsx"), Stack::Frontend);
        assert_eq!(detect_stack("src/user.js"), Stack::Frontend);
        assert_eq!(detect_stack("src/User.jsx"), Stack::Frontend);
        assert_eq!(detect_stack("src/user.py"), Stack::Unknown);
        assert_eq!(detect_stack("Makefile"), Stack::Unknown);
    }

    #[test]
    fn test_is_barrel_file() {
        assert!(is_barrel_file("src/components/index.ts"));
        assert!(is_barrel_file("index.js"));
        assert!(!is_barrel_file("src/indexer.ts"));
        assert!(!is_barrel_file("src/index/search.ts"));
    }

    #[test]
    fn test_no_duplicates() {
        let files = vec![
            mock_file_with_exports("a.ts", vec![("foo", ExportKind::Function)]),
            mock_file_with_exports("b.ts", vec![("bar", ExportKind::Function)]),
        ];

        let data = detect_duplicates(&files);
        assert!(data.duplicates.is_empty());
        assert!(data.cross_stack_mirrors.is_empty());
    }

    #[test]
    fn test_simple_accidental_duplicate() {
        let files = vec![
            mock_file_with_exports("src/a.ts", vec![("Button", ExportKind::Class)]),
            mock_file_with_exports("src/b.ts", vec![("Button", ExportKind::Class)]),
        ];

        let data = detect_duplicates(&files);
        assert_eq!(data.duplicates.len(), 1);
        let group = &data.duplicates[0];
        assert_eq!(group.name, "Button");
        assert_eq!(group.kind, ExportKind::Class);
        assert_eq!(group.category, DuplicateCategory::Accidental);
        assert_eq!(group.locations.len(), 2);
    }

    #[test]
    fn test_default_export_is_ignored() {
        let files = vec![
            mock_file_with_exports("a.ts", vec![("default", ExportKind::Function)]),
            mock_file_with_exports("b.ts", vec![("default", ExportKind::Function)]),
        ];
        assert!(classify_groups(&files).is_empty());
    }

    #[test]
    fn test_same_file_twice_is_not_a_duplicate() {
        let files = vec![mock_file_with_exports(
            "a.ts",
            vec![("parse", ExportKind::Function), ("parse", ExportKind::Function)],
        )];
        assert!(classify_groups(&files).is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_per_file() {
        let files = vec![
            mock_file_with_exports(
                "a.ts",
                vec![("Thing", ExportKind::Type), ("Thing", ExportKind::Type)],
            ),
            mock_file_with_exports("b.ts", vec![("Thing", ExportKind::Type)]),
        ];

        let data = detect_duplicates(&files);
        let group = &data.duplicates[0];
        assert_eq!(group.locations.len(), 2);
        assert_eq!(group.locations[0].file, "a.ts");
        assert_eq!(group.locations[0].line, 1);
    }

    #[test]
    fn test_barrel_only_duplicate_is_dropped() {
        let files = vec![
            mock_file_with_exports("src/ui/Button.tsx", vec![("Button", ExportKind::Function)]),
            mock_file_with_exports("src/ui/index.ts", vec![("Button", ExportKind::Function)]),
            mock_file_with_exports("src/index.ts", vec![("Button", ExportKind::Function)]),
        ];

        let data = detect_duplicates(&files);
        assert!(data.duplicates.is_empty());
        assert!(data.cross_stack_mirrors.is_empty());

        let groups = classify_groups(&files);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, DuplicateCategory::BarrelFiltered);
        assert_eq!(groups[0].locations.len(), 1);
    }

    #[test]
    fn test_barrel_locations_are_removed_from_reported_group() {
        let files = vec![
            mock_file_with_exports("src/a/Card.tsx", vec![("Card", ExportKind::Function)]),
            mock_file_with_exports("src/b/Card.tsx", vec![("Card", ExportKind::Function)]),
            mock_file_with_exports("src/index.ts", vec![("Card", ExportKind::Function)]),
        ];

        let data = detect_duplicates(&files);
        assert_eq!(data.duplicates.len(), 1);
        assert!(
            data.duplicates[0]
                .locations
                .iter()
                .all(|l| !is_barrel_file(&l.file))
        );
        assert_eq!(data.duplicates[0].locations.len(), 2);
    }

    #[test]
    fn test_cross_stack_wins_over_divergent_signatures() {
        let files = vec![
            mock_file_with_signature("Api/Dtos/UserDto.cs", "UserDto", "class UserDto { int Id; }"),
            mock_file_with_signature("web/src/api/userDto.ts", "UserDto", "interface UserDto { id: number }"),
        ];

        let data = detect_duplicates(&files);
        assert!(data.duplicates.is_empty());
        assert_eq!(data.cross_stack_mirrors.len(), 1);
        assert_eq!(
            data.cross_stack_mirrors[0].category,
            DuplicateCategory::CrossStack
        );
    }

    #[test]
    fn test_backend_with_unknown_stack_is_cross_stack() {
        let files = vec![
            mock_file_with_exports("Api/Order.cs", vec![("Order", ExportKind::Class)]),
            mock_file_with_exports("tools/order.py", vec![("Order", ExportKind::Class)]),
        ];
        let data = detect_duplicates(&files);
        assert_eq!(data.cross_stack_mirrors.len(), 1);
    }

    #[test]
    fn test_backend_only_is_not_cross_stack() {
        let files = vec![
            mock_file_with_exports("Api/A/Order.cs", vec![("Order", ExportKind::Class)]),
            mock_file_with_exports("Api/B/Order.cs", vec![("Order", ExportKind::Class)]),
        ];
        let data = detect_duplicates(&files);
        assert_eq!(data.duplicates.len(), 1);
        assert!(data.cross_stack_mirrors.is_empty());
    }

    #[test]
    fn test_polymorphic_group_is_suppressed() {
        let files = vec![
            mock_file_with_signature("src/a.ts", "parse", "(input: string) => Ast"),
            mock_file_with_signature("src/b.ts", "parse", "(bytes: Uint8Array) => Header"),
        ];

        let data = detect_duplicates(&files);
        assert!(data.duplicates.is_empty());
        assert!(data.cross_stack_mirrors.is_empty());
        assert_eq!(classify_groups(&files)[0].category, DuplicateCategory::Polymorphic);
    }

    #[test]
    fn test_single_signature_is_not_polymorphic() {
        let files = vec![
            mock_file_with_signature("src/a.ts", "parse", "(input: string) => Ast"),
            mock_file_with_exports("src/b.ts", vec![("parse", ExportKind::Function)]),
        ];
        assert_eq!(classify_groups(&files)[0].category, DuplicateCategory::Accidental);
    }

    #[test]
    fn test_identical_signatures_are_accidental() {
        let files = vec![
            mock_file_with_signature("src/a.ts", "slugify", "(s: string) => string"),
            mock_file_with_signature("src/b.ts", "slugify", "(s: string) => string"),
            mock_file_with_signature("src/c.ts", "slugify", ""),
        ];
        assert_eq!(classify_groups(&files)[0].category, DuplicateCategory::Accidental);
    }

    #[test]
    fn test_sorted_by_location_count_then_name() {
        let files = vec![
            mock_file_with_exports(
                "a.ts",
                vec![("Beta", ExportKind::Type), ("Alpha", ExportKind::Type), ("Gamma", ExportKind::Type)],
            ),
            mock_file_with_exports(
                "b.ts",
                vec![("Beta", ExportKind::Type), ("Alpha", ExportKind::Type), ("Gamma", ExportKind::Type)],
            ),
            mock_file_with_exports("c.ts", vec![("Gamma", ExportKind::Type)]),
        ];

        let data = detect_duplicates(&files);
        let names: Vec<&str> = data.duplicates.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }
}

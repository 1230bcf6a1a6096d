//! The formatCurrency scenario: a focused shared file beats popular generic
//! utility files.

use canonry::analyzer::canonical::resolve_group;
use canonry::analyzer::{AnalyzeOptions, analyze};
use canonry::types::{
    Confidence, DependencySample, DuplicateCategory, ExportKind, ExportRecord, FileRecord,
    Inventory,
};
use pretty_assertions::assert_eq;

const SHARED: &str = "src/shared/formatting/formatCurrency.ts";
const UTILS: &str = "src/utils.ts";
const HELPERS: &str = "src/helpers.ts";

fn exports(first: &str, fillers: &[&str]) -> Vec<ExportRecord> {
    std::iter::once(first)
        .chain(fillers.iter().copied())
        .enumerate()
        .map(|(i, name)| ExportRecord::new(name, ExportKind::Function, i * 10 + 1))
        .collect()
}

fn inventory() -> Inventory {
    Inventory {
        files: vec![
            FileRecord {
                path: SHARED.to_string(),
                line_count: 15,
                exports: exports("formatCurrency", &[]),
                ..Default::default()
            },
            FileRecord {
                path: UTILS.to_string(),
                line_count: 450,
                exports: exports(
                    "formatCurrency",
                    &[
                        "debounce", "throttle", "sleep", "clamp", "uniqueBy", "groupBy", "chunk",
                        "deepClone", "noop", "identity", "pick",
                    ],
                ),
                is_generic_name: true,
                ..Default::default()
            },
            FileRecord {
                path: HELPERS.to_string(),
                line_count: 120,
                exports: exports("formatCurrency", &["isEmail", "isPhone", "toTitle", "noopHandler"]),
                is_generic_name: true,
                ..Default::default()
            },
        ],
    }
}

fn sample(file: &str, importers: &[&str]) -> DependencySample {
    DependencySample {
        file: file.to_string(),
        imported_by_count: importers.len(),
        imported_by: importers.iter().map(|s| s.to_string()).collect(),
    }
}

fn dependencies() -> Vec<DependencySample> {
    vec![
        sample(
            UTILS,
            &[
                "src/app.ts",
                "src/pages/cart.ts",
                "src/pages/checkout.ts",
                "src/pages/orders.ts",
                "src/components/Price.tsx",
                "src/components/Total.tsx",
            ],
        ),
        sample(SHARED, &[UTILS]),
        sample(HELPERS, &[UTILS, "src/pages/profile.ts"]),
    ]
}

#[test]
fn shared_focused_file_is_canonical_with_high_confidence() {
    let inventory = inventory();
    let deps = dependencies();
    let report = analyze(&inventory, &deps, AnalyzeOptions::default());

    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].category, DuplicateCategory::Accidental);

    let resolved = &report.resolved[0];
    assert_eq!(resolved.name, "formatCurrency");
    assert_eq!(resolved.canonical.location.file, SHARED);
    assert_eq!(resolved.confidence, Confidence::High);
    assert!(resolved.gap() >= 20);

    // 40 exact + 12 directory + 15 shared + 25 imported by utils + 3 popularity
    // + 10 small file + 8 single export
    assert_eq!(resolved.canonical.score, 113);

    let alternatives: Vec<(&str, i32)> = resolved
        .alternatives
        .iter()
        .map(|a| (a.location.file.as_str(), a.score))
        .collect();
    // helpers: 25 imported by utils + 6 popularity - 25 generic
    // utils: -15 imports shared + 18 popularity - 25 generic - 6 size - 12 exports
    assert_eq!(alternatives, vec![(HELPERS, 6), (UTILS, -40)]);
}

#[test]
fn canonical_holds_without_dependency_data() {
    let inventory = inventory();
    let group = &analyze(&inventory, &[], AnalyzeOptions::default()).duplicates[0];
    let resolved = resolve_group(group, &inventory.files, &[]).unwrap();

    assert_eq!(resolved.canonical.location.file, SHARED);
    assert_eq!(resolved.canonical.score, 85);
    assert_eq!(resolved.confidence, Confidence::High);
}

#[test]
fn reasons_explain_every_signal() {
    let inventory = inventory();
    let deps = dependencies();
    let report = analyze(&inventory, &deps, AnalyzeOptions::default());
    let canonical = &report.resolved[0].canonical;

    assert_eq!(canonical.reasons.len(), 7);
    assert!(canonical.reasons.iter().any(|r| r.contains("shared/common location")));
    assert!(canonical.reasons.iter().any(|r| r.contains("imported by src/utils.ts")));

    let utils = report.resolved[0]
        .alternatives
        .iter()
        .find(|a| a.location.file == UTILS)
        .unwrap();
    assert!(utils.reasons.iter().any(|r| r.contains("generic file name")));
    assert!(utils.reasons.iter().any(|r| r.contains(&format!("imports {}", SHARED))));
}

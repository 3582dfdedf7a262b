//! Variant selection tests
//!
//! Config file + CLI override layering feeding the selector.

use android_artifact_map::{
    collect_build_outputs, map_build_artifacts, select, ConfigOverrides, Preference,
    SelectionConfig, VariantKey,
};
use std::fs;
use tempfile::TempDir;

fn write_outputs(dir: &TempDir, names: &[&str]) {
    for name in names {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }
}

#[test]
fn test_select_from_scanned_directory() {
    let dir = TempDir::new().unwrap();
    write_outputs(
        &dir,
        &[
            "apk/demo/release/app-demo-release.apk",
            "bundle/demoRelease/app-demo-release.aab",
            "apk/full/release/app-full-release.apk",
            "apk/demo/debug/app-demo-debug.apk",
        ],
    );

    let paths = collect_build_outputs(dir.path()).unwrap();
    assert_eq!(paths.len(), 4);

    let config = SelectionConfig::default()
        .with_overrides(ConfigOverrides {
            build_type: Some("release".to_string()),
            ..Default::default()
        })
        .unwrap();
    let selected = select(&map_build_artifacts(&paths), &config);

    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].key, VariantKey::new("app", "release", "demo"));
    assert!(selected[0].deployable[0].ends_with("app-demo-release.aab"));
    assert_eq!(selected[1].key, VariantKey::new("app", "release", "full"));
    assert!(selected[1].deployable[0].ends_with("app-full-release.apk"));
}

#[test]
fn test_config_file_then_overrides() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".artifact-map.toml");
    fs::write(
        &config_path,
        "module = \"app\"\nproduct_flavour = \"demo\"\nprefer = \"aab\"\n",
    )
    .unwrap();

    let config = SelectionConfig::load(Some(config_path.as_path()))
        .unwrap()
        .with_overrides(ConfigOverrides {
            prefer: Some(Preference::Apk),
            ..Default::default()
        })
        .unwrap();

    let map = map_build_artifacts(&[
        "out/app-demo-release.apk",
        "out/app-demo-release.aab",
        "out/app-full-release.apk",
    ]);
    let selected = select(&map, &config);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].deployable, vec!["out/app-demo-release.apk"]);
}

#[test]
fn test_no_match_is_empty() {
    let config = SelectionConfig {
        module: Some("tv".to_string()),
        ..Default::default()
    };
    let map = map_build_artifacts(&["out/app-release.aab"]);
    assert!(select(&map, &config).is_empty());
}

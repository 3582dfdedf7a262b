//! Human-readable output
//!
//! Plain-text rendering of the artifact mapping and of selected variants,
//! for CI logs. JSON output goes through serde instead.

use apk_name_parser::{parse_artifact_info, split_dimension};

use crate::artifact_map::{Artifact, ArtifactMap};
use crate::selection::SelectedVariant;

/// `density: hdpi, abi: arm64-v8a` for a split piece, in removal order.
fn split_label(piece: &str) -> String {
    parse_artifact_info(piece)
        .split_info
        .split_params
        .iter()
        .map(|param| match split_dimension(param) {
            Some(dimension) => format!("{}: {}", dimension, param),
            None => param.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_artifact_lines(lines: &mut Vec<String>, artifact: &Artifact) {
    if let Some(apk) = &artifact.apk {
        lines.push(format!("    APK: {}", apk));
    }
    if let Some(aab) = &artifact.aab {
        lines.push(format!("    AAB: {}", aab));
    }
    if let Some(universal) = &artifact.universal_apk {
        lines.push(format!("    Universal APK: {}", universal));
    }
    if !artifact.split.is_empty() {
        lines.push(format!("    Split APKs ({}):", artifact.split.len()));
        for piece in &artifact.split {
            lines.push(format!("      - {} ({})", piece, split_label(piece)));
        }
    }
}

/// Render every variant of the mapping, followed by replaced slots.
pub fn render_map(map: &ArtifactMap) -> String {
    let mut lines = Vec::new();

    if map.is_empty() {
        lines.push("No build artifacts.".to_string());
        return lines.join("\n");
    }

    lines.push(format!("Build artifacts ({} variants):", map.len()));
    for (key, artifact) in map.variants() {
        lines.push(String::new());
        lines.push(format!("  {}", key));
        push_artifact_lines(&mut lines, artifact);
    }

    if !map.overwrites().is_empty() {
        lines.push(String::new());
        lines.push("Replaced:".to_string());
        for overwrite in map.overwrites() {
            lines.push(format!(
                "  {} {}: {} -> {}",
                overwrite.key, overwrite.kind, overwrite.previous, overwrite.replacement
            ));
        }
    }

    lines.join("\n")
}

/// Render selected variants with their deployable files.
pub fn render_selection(selected: &[SelectedVariant]) -> String {
    let mut lines = Vec::new();

    if selected.is_empty() {
        lines.push("No matching variants.".to_string());
        return lines.join("\n");
    }

    for variant in selected {
        lines.push(variant.key.to_string());
        if variant.deployable.is_empty() {
            lines.push("  Deploy: <nothing>".to_string());
        } else {
            lines.push("  Deploy:".to_string());
            for pth in &variant.deployable {
                lines.push(format!("    - {}", pth));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact_map::map_build_artifacts;
    use crate::config::SelectionConfig;
    use crate::selection::select;

    #[test]
    fn test_render_empty_map() {
        assert_eq!(render_map(&ArtifactMap::new()), "No build artifacts.");
    }

    #[test]
    fn test_render_map() {
        let map = map_build_artifacts(&[
            "out/app-debug.apk",
            "out/app-demo-hdpi-release.apk",
            "out/app-demo-universal-release.apk",
            "out/app-demo-release.aab",
            "out/app-demo-release-bitrise-signed.aab",
        ]);
        let text = render_map(&map);
        assert!(text.starts_with("Build artifacts (2 variants):"));
        assert!(text.contains("  app / debug / <none>"));
        assert!(text.contains("    APK: out/app-debug.apk"));
        assert!(text.contains("    Universal APK: out/app-demo-universal-release.apk"));
        assert!(text.contains("    Split APKs (2):"));
        assert!(text.contains("      - out/app-demo-hdpi-release.apk (density: hdpi)"));
        assert!(text.contains("      - out/app-demo-universal-release.apk (abi: universal)"));
        assert!(text.contains(
            "  app / release / demo AAB: out/app-demo-release.aab -> out/app-demo-release-bitrise-signed.aab"
        ));
    }

    #[test]
    fn test_split_label_lists_dimensions() {
        assert_eq!(
            split_label("out/app-demo-hdpiArm64-v8a-release.apk"),
            "abi: arm64-v8a, density: hdpi"
        );
        assert_eq!(split_label("out/app-xhdpiMips-debug.apk"), "legacy abi: mips, density: xhdpi");
    }

    #[test]
    fn test_render_selection() {
        let map = map_build_artifacts(&["out/app-release.aab"]);
        let selected = select(&map, &SelectionConfig::default());
        let text = render_selection(&selected);
        assert_eq!(text, "app / release / <none>\n  Deploy:\n    - out/app-release.aab");
        assert_eq!(render_selection(&[]), "No matching variants.");
    }
}

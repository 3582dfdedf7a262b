//! Split artifact group resolution.

use apk_name_parser::parse_artifact_info;
use log::debug;
use thiserror::Error;

use crate::artifact_map::{map_build_artifacts, Artifact};

/// The artifact group a split APK belongs to.
pub type SplitArtifactMeta = Artifact;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The path's module, build type or flavour is missing from the mapping.
    #[error("artifact: {path} is not part of the artifact mapping: {mapping}")]
    NotInMapping { path: String, mapping: String },
}

/// Resolve the variant group of `pth` within `pths`.
///
/// The mapping is rebuilt from `pths` and looked up with the module, build
/// type and flavour parsed from `pth`. A miss at any level is an error
/// carrying the pretty-printed mapping.
pub fn create_split_artifact_meta<S: AsRef<str>>(
    pth: &str,
    pths: &[S],
) -> Result<SplitArtifactMeta, ResolveError> {
    let artifacts = map_build_artifacts(pths);
    let info = parse_artifact_info(pth);
    debug!(
        "Resolving {} as module: {}, buildType: {}, productFlavour: {}",
        pth, info.module, info.build_type, info.product_flavour
    );

    artifacts
        .lookup(&info.module, &info.build_type, &info.product_flavour)
        .cloned()
        .ok_or_else(|| ResolveError::NotInMapping {
            path: pth.to_string(),
            mapping: artifacts.to_pretty_json(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_split_group() {
        let pths = [
            "/deploy/app-demo-hdpi-release.apk",
            "/deploy/app-demo-xhdpi-release.apk",
            "/deploy/app-demo-universal-release.apk",
            "/deploy/app-full-hdpi-release.apk",
        ];
        let meta = create_split_artifact_meta("/deploy/app-demo-xhdpi-release.apk", &pths).unwrap();
        assert_eq!(meta.split.len(), 3);
        assert_eq!(
            meta.universal_apk.as_deref(),
            Some("/deploy/app-demo-universal-release.apk")
        );
        assert!(!meta.split.iter().any(|p| p.contains("full")));
    }

    #[test]
    fn test_miss_reports_mapping() {
        let pths = ["/deploy/app-hdpi-debug.apk"];
        let err = create_split_artifact_meta("/deploy/wear-hdpi-debug.apk", &pths).unwrap_err();
        let ResolveError::NotInMapping { path, mapping } = &err;
        assert_eq!(path, "/deploy/wear-hdpi-debug.apk");
        assert!(mapping.contains("/deploy/app-hdpi-debug.apk"));
        assert!(err.to_string().starts_with("artifact: /deploy/wear-hdpi-debug.apk is not part"));
    }

    #[test]
    fn test_miss_on_build_type_level() {
        let pths = ["/deploy/app-hdpi-debug.apk"];
        let result = create_split_artifact_meta("/deploy/app-hdpi-release.apk", &pths);
        assert!(matches!(result, Err(ResolveError::NotInMapping { .. })));
    }

    #[test]
    fn test_miss_on_flavour_level() {
        let pths = ["/deploy/app-demo-hdpi-debug.apk"];
        let result = create_split_artifact_meta("/deploy/app-full-hdpi-debug.apk", &pths);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_list_is_miss() {
        let pths: [&str; 0] = [];
        assert!(create_split_artifact_meta("/deploy/app-hdpi-debug.apk", &pths).is_err());
    }
}

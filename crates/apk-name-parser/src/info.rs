//! Artifact name decomposition.

use serde::{Deserialize, Serialize};

use crate::signing::{parse_signing_info, SigningInfo};
use crate::split::{parse_split_info, SplitInfo};

/// Everything that can be read from an artifact's file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactInfo {
    /// Gradle module (first name segment).
    pub module: String,

    /// Product flavour with split tokens removed; empty when the variant
    /// has no flavour.
    pub product_flavour: String,

    /// Build type (last name segment).
    pub build_type: String,

    pub signing_info: SigningInfo,

    pub split_info: SplitInfo,
}

impl ArtifactInfo {
    /// Whether the name yielded a module or a build type, i.e. it had at
    /// least the `<module>-<build type>` segments.
    pub fn is_recognized(&self) -> bool {
        !self.module.is_empty() || !self.build_type.is_empty()
    }
}

/// Parse an artifact path into its name components.
///
/// Layout (see <https://developer.android.com/studio/build/build-variants>):
/// `<module>-<product flavour?>-<build type>.<apk|aab>`, for example
/// `app-minApi21-demo-hdpi-debug.apk`.
///
/// Artifact names can be customized, so a name with fewer than two
/// segments is not an error: module, flavour and build type stay empty.
pub fn parse_artifact_info(pth: &str) -> ArtifactInfo {
    let (signing_info, base) = parse_signing_info(pth);
    let mut info = ArtifactInfo {
        signing_info,
        ..Default::default()
    };

    let segments: Vec<&str> = base.split('-').collect();
    if segments.len() < 2 {
        return info;
    }

    info.module = segments[0].to_string();
    info.build_type = segments[segments.len() - 1].to_string();
    if segments.len() > 2 {
        let flavour_with_split_params = segments[1..segments.len() - 1].join("-");
        (info.split_info, info.product_flavour) = parse_split_info(&flavour_with_split_params);
    }

    info
}

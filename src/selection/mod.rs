//! Variant selection
//!
//! Picks the variants a CI step should deploy:
//! 1. Filter variants by module, build type and flavour (unset filters match anything)
//! 2. Keep key order (module, build type, flavour) so output is deterministic
//! 3. For each variant, choose the deployable files according to the preference

use serde::{Deserialize, Serialize};

use crate::artifact_map::{Artifact, ArtifactMap, VariantKey};
use crate::config::{Preference, SelectionConfig};

/// A variant matching the selection filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedVariant {
    pub key: VariantKey,

    pub artifact: Artifact,

    /// Paths to deploy for this variant.
    pub deployable: Vec<String>,
}

fn matches(filter: Option<&str>, value: &str) -> bool {
    filter.map_or(true, |expected| expected == value)
}

/// Select the variants of `map` matching `config`.
pub fn select(map: &ArtifactMap, config: &SelectionConfig) -> Vec<SelectedVariant> {
    map.variants()
        .filter(|(key, _)| {
            matches(config.module.as_deref(), &key.module)
                && matches(config.build_type.as_deref(), &key.build_type)
                && matches(config.product_flavour.as_deref(), &key.product_flavour)
        })
        .map(|(key, artifact)| SelectedVariant {
            deployable: deployable_paths(artifact, config.prefer),
            key,
            artifact: artifact.clone(),
        })
        .collect()
}

/// Files to deploy for one variant.
///
/// With [`Preference::Aab`] the bundle wins when present. Otherwise the
/// plain APK, then the split set (which lists the universal APK too), and
/// the bundle only as a last resort.
pub fn deployable_paths(artifact: &Artifact, prefer: Preference) -> Vec<String> {
    if prefer == Preference::Aab {
        if let Some(aab) = &artifact.aab {
            return vec![aab.clone()];
        }
    }
    if let Some(apk) = &artifact.apk {
        return vec![apk.clone()];
    }
    if !artifact.split.is_empty() {
        return artifact.split.clone();
    }
    artifact.aab.iter().cloned().collect()
}

//! Build artifact mapping.
//!
//! Groups build outputs as `module -> build type -> product flavour ->
//! Artifact`. The map is rebuilt from the path list on every query.

mod builder;

use std::collections::BTreeMap;
use std::fmt;

use apk_name_parser::ArtifactInfo;
use serde::{Deserialize, Serialize};

pub use builder::map_build_artifacts;

/// All files belonging to one (module, build type, flavour) variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Non-split APK.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apk: Option<String>,

    /// Android App Bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aab: Option<String>,

    /// Split APK pieces, one spelling per logical piece, first seen first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub split: Vec<String>,

    /// Universal APK of a split build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal_apk: Option<String>,
}

/// Composite key of one build variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub module: String,
    pub build_type: String,
    pub product_flavour: String,
}

impl VariantKey {
    pub fn new(
        module: impl Into<String>,
        build_type: impl Into<String>,
        product_flavour: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            build_type: build_type.into(),
            product_flavour: product_flavour.into(),
        }
    }
}

impl From<&ArtifactInfo> for VariantKey {
    fn from(info: &ArtifactInfo) -> Self {
        Self::new(&info.module, &info.build_type, &info.product_flavour)
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flavour = if self.product_flavour.is_empty() {
            "<none>"
        } else {
            &self.product_flavour
        };
        write!(f, "{} / {} / {}", self.module, self.build_type, flavour)
    }
}

/// Slot that was replaced while building the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwriteKind {
    Aab,
    UniversalApk,
}

impl fmt::Display for OverwriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aab => write!(f, "AAB"),
            Self::UniversalApk => write!(f, "universal APK"),
        }
    }
}

/// A second AAB or universal APK for the same variant. The later path
/// replaced the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOverwrite {
    pub key: VariantKey,
    pub kind: OverwriteKind,
    pub previous: String,
    pub replacement: String,
}

/// Flavour level of the mapping.
pub type FlavourArtifacts = BTreeMap<String, Artifact>;

/// Build type level of the mapping.
pub type BuildTypeArtifacts = BTreeMap<String, FlavourArtifacts>;

/// `module -> build type -> product flavour -> Artifact`.
///
/// Serializes as the nested mapping only; overwrites are reported through
/// [`ArtifactMap::overwrites`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArtifactMap {
    modules: BTreeMap<String, BuildTypeArtifacts>,

    #[serde(skip)]
    overwrites: Vec<SlotOverwrite>,
}

impl ArtifactMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The nested mapping, keyed by module.
    pub fn modules(&self) -> &BTreeMap<String, BuildTypeArtifacts> {
        &self.modules
    }

    /// Look up a variant without creating anything.
    pub fn get(&self, key: &VariantKey) -> Option<&Artifact> {
        self.lookup(&key.module, &key.build_type, &key.product_flavour)
    }

    /// Look up a variant level by level.
    pub fn lookup(&self, module: &str, build_type: &str, product_flavour: &str) -> Option<&Artifact> {
        self.modules
            .get(module)?
            .get(build_type)?
            .get(product_flavour)
    }

    /// Get the variant's slot, creating missing levels.
    pub(crate) fn slot_mut(&mut self, key: &VariantKey) -> &mut Artifact {
        self.modules
            .entry(key.module.clone())
            .or_default()
            .entry(key.build_type.clone())
            .or_default()
            .entry(key.product_flavour.clone())
            .or_default()
    }

    /// Iterate over all variants in key order.
    pub fn variants(&self) -> impl Iterator<Item = (VariantKey, &Artifact)> + '_ {
        self.modules.iter().flat_map(|(module, build_types)| {
            build_types.iter().flat_map(move |(build_type, flavours)| {
                flavours.iter().map(move |(flavour, artifact)| {
                    (VariantKey::new(module, build_type, flavour), artifact)
                })
            })
        })
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.modules
            .values()
            .flat_map(|build_types| build_types.values())
            .map(|flavours| flavours.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Replacements that happened while building the map, in input order.
    pub fn overwrites(&self) -> &[SlotOverwrite] {
        &self.overwrites
    }

    /// Pretty-printed JSON of the mapping, for diagnostics.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("<failed to serialize artifact mapping: {}>", e))
    }
}

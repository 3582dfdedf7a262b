//! Android build artifact map
//!
//! Groups the APK and AAB files of a Gradle build by module, build type and
//! product flavour, resolves density/ABI split APKs into their installable
//! set, and selects what a CI step should deploy.

pub mod artifact_map;
pub mod config;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod selection;

pub use apk_name_parser::{parse_artifact_info, ArtifactInfo, SigningInfo, SplitInfo};
pub use artifact_map::{
    map_build_artifacts, Artifact, ArtifactMap, OverwriteKind, SlotOverwrite, VariantKey,
};
pub use config::{ConfigError, ConfigOverrides, Preference, SelectionConfig};
pub use resolve::{create_split_artifact_meta, ResolveError, SplitArtifactMeta};
pub use scan::{collect_build_outputs, read_path_list, ScanError};
pub use selection::{deployable_paths, select, SelectedVariant};

//! File name parser for Android build outputs.
//!
//! Decomposes an APK/AAB file name produced by Gradle into module, product
//! flavour, build type, signing state and ABI/density split tokens.

mod info;
mod path;
mod signing;
mod split;

pub use info::{parse_artifact_info, ArtifactInfo};
pub use path::{base_name, extension, parent_prefix};
pub use signing::{
    parse_signing_info, SigningInfo, BITRISE_SIGNED_SUFFIX, SIGNING_SUFFIXES, UNSIGNED_SUFFIX,
};
pub use split::{
    parse_split_info, split_dimension, SplitDimension, SplitInfo, SplitToken, SPLIT_TOKENS,
    UNIVERSAL_SPLIT_PARAM,
};

/// Extension of Android App Bundles.
pub const AAB_EXTENSION: &str = ".aab";

/// Extension of APKs.
pub const APK_EXTENSION: &str = ".apk";

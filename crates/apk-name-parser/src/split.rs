//! ABI and screen density split tokens.
//!
//! Gradle appends the split dimensions to the flavour part of the name:
//!
//! - two flavours + density split: `minApi21-full-hdpi`
//! - density and ABI split: `hdpiArmeabi`
//! - flavour + density and ABI split: `demo-hdpiArm64-v8a`
//!
//! When both dimensions are present the second one starts with an upper
//! case letter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Split param of the universal (all ABIs) APK.
pub const UNIVERSAL_SPLIT_PARAM: &str = "universal";

/// Split dimension a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDimension {
    /// Supported ABI (or the universal APK).
    Abi,
    /// ABI no longer supported by the NDK.
    UnsupportedAbi,
    /// Screen density bucket.
    Density,
}

impl fmt::Display for SplitDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abi => write!(f, "abi"),
            Self::UnsupportedAbi => write!(f, "legacy abi"),
            Self::Density => write!(f, "density"),
        }
    }
}

/// A recognized split token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitToken {
    /// Canonical (lower case) spelling.
    pub param: &'static str,
    pub dimension: SplitDimension,
}

const fn token(param: &'static str, dimension: SplitDimension) -> SplitToken {
    SplitToken { param, dimension }
}

/// Split tokens in removal order.
///
/// Longer tokens come before the shorter tokens they contain: removing
/// `xhdpi` from `app-xxxhdpi-debug` first would leave `app-xx-debug`.
pub const SPLIT_TOKENS: &[SplitToken] = &[
    // https://developer.android.com/ndk/guides/abis.html#sa
    token("armeabi-v7a", SplitDimension::Abi),
    token("arm64-v8a", SplitDimension::Abi),
    token("x86_64", SplitDimension::Abi),
    token("x86", SplitDimension::Abi),
    token(UNIVERSAL_SPLIT_PARAM, SplitDimension::Abi),
    token("mips64", SplitDimension::UnsupportedAbi),
    token("mips", SplitDimension::UnsupportedAbi),
    token("armeabi", SplitDimension::UnsupportedAbi),
    // https://developer.android.com/studio/build/configure-apk-splits#configure-density-split
    token("xxxhdpi", SplitDimension::Density),
    token("xxhdpi", SplitDimension::Density),
    token("xhdpi", SplitDimension::Density),
    token("hdpi", SplitDimension::Density),
    token("mdpi", SplitDimension::Density),
    token("ldpi", SplitDimension::Density),
    token("280", SplitDimension::Density),
    token("360", SplitDimension::Density),
    token("420", SplitDimension::Density),
    token("480", SplitDimension::Density),
    token("560", SplitDimension::Density),
];

/// Dimension of a canonical split param, `None` for unknown params.
pub fn split_dimension(param: &str) -> Option<SplitDimension> {
    SPLIT_TOKENS
        .iter()
        .find(|split_token| split_token.param == param)
        .map(|split_token| split_token.dimension)
}

/// Split info derived from the flavour part of the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitInfo {
    /// Canonical tokens in removal order (not file name order).
    #[serde(default)]
    pub split_params: Vec<String>,

    /// `universal` was among the removed tokens.
    #[serde(default)]
    pub universal: bool,
}

impl SplitInfo {
    /// Whether any split token was found.
    pub fn is_split(&self) -> bool {
        !self.split_params.is_empty()
    }
}

fn first_letter_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip split tokens from a flavour string.
///
/// Each token of [`SPLIT_TOKENS`] is removed at most once, trying the
/// verbatim spelling before the capitalized one. Returns the split info and
/// the remaining flavour with one leading and one trailing `-` trimmed.
pub fn parse_split_info(flavour: &str) -> (SplitInfo, String) {
    let mut info = SplitInfo::default();
    let mut flavour = flavour.to_string();

    for split_token in SPLIT_TOKENS {
        let spellings = [split_token.param.to_string(), first_letter_upper(split_token.param)];
        if let Some(spelling) = spellings.iter().find(|s| flavour.contains(s.as_str())) {
            flavour = flavour.replacen(spelling.as_str(), "", 1);

            info.split_params.push(split_token.param.to_string());
            if split_token.param == UNIVERSAL_SPLIT_PARAM {
                info.universal = true;
            }
        }
    }

    let trimmed = flavour.strip_prefix('-').unwrap_or(&flavour);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    (info, trimmed.to_string())
}

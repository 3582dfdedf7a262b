//! Signing state suffixes.
//!
//! An artifact name is either plain (signed by the build), ends in
//! `-unsigned`, or ends in `-bitrise-signed` when an upstream signing step
//! re-signed it.

use serde::{Deserialize, Serialize};

use crate::path::{base_name, extension};

/// Suffix left by the upstream signing step.
pub const BITRISE_SIGNED_SUFFIX: &str = "-bitrise-signed";

/// Suffix Gradle appends to unsigned outputs.
pub const UNSIGNED_SUFFIX: &str = "-unsigned";

/// Every spelling a single logical artifact can carry, plain first.
pub const SIGNING_SUFFIXES: &[&str] = &["", UNSIGNED_SUFFIX, BITRISE_SIGNED_SUFFIX];

/// Signing state derived from the file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningInfo {
    /// Name ended in `-unsigned`.
    pub unsigned: bool,

    /// Name ended in `-bitrise-signed`.
    pub bitrise_signed: bool,
}

impl SigningInfo {
    /// The suffix(es) that were stripped, in file name order.
    pub fn suffix(&self) -> String {
        let mut suffix = String::new();
        if self.unsigned {
            suffix.push_str(UNSIGNED_SUFFIX);
        }
        if self.bitrise_signed {
            suffix.push_str(BITRISE_SIGNED_SUFFIX);
        }
        suffix
    }
}

/// Parse the signing suffixes of a path.
///
/// Returns the signing info and the base name with extension and signing
/// suffixes removed. `-bitrise-signed` is checked first, then `-unsigned`
/// on whatever remains.
pub fn parse_signing_info(pth: &str) -> (SigningInfo, String) {
    let mut info = SigningInfo::default();

    let base = base_name(pth);
    let mut base = base.strip_suffix(extension(pth)).unwrap_or(base);

    if let Some(stripped) = base.strip_suffix(BITRISE_SIGNED_SUFFIX) {
        base = stripped;
        info.bitrise_signed = true;
    }

    if let Some(stripped) = base.strip_suffix(UNSIGNED_SUFFIX) {
        base = stripped;
        info.unsigned = true;
    }

    (info, base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let (info, base) = parse_signing_info("/deploy/app-demo-release.apk");
        assert_eq!(info, SigningInfo::default());
        assert_eq!(base, "app-demo-release");
    }

    #[test]
    fn test_unsigned_suffix() {
        let (info, base) = parse_signing_info("app-release-unsigned.apk");
        assert!(info.unsigned);
        assert!(!info.bitrise_signed);
        assert_eq!(base, "app-release");
    }

    #[test]
    fn test_bitrise_signed_suffix() {
        let (info, base) = parse_signing_info("out/app-release-bitrise-signed.aab");
        assert!(info.bitrise_signed);
        assert!(!info.unsigned);
        assert_eq!(base, "app-release");
    }

    #[test]
    fn test_both_suffixes_stripped_in_order() {
        let (info, base) = parse_signing_info("app-release-unsigned-bitrise-signed.apk");
        assert!(info.unsigned);
        assert!(info.bitrise_signed);
        assert_eq!(base, "app-release");

        // reverse order only strips the trailing one
        let (info, base) = parse_signing_info("app-release-bitrise-signed-unsigned.apk");
        assert!(info.unsigned);
        assert!(!info.bitrise_signed);
        assert_eq!(base, "app-release-bitrise-signed");
    }

    #[test]
    fn test_suffix_round_trip() {
        let paths = [
            "/deploy/app-debug.apk",
            "/deploy/app-release-unsigned.apk",
            "/deploy/app-demo-hdpi-release-bitrise-signed.apk",
            "/deploy/app-release-unsigned-bitrise-signed.aab",
            "/deploy/custom.apk",
            "/deploy/noext",
        ];
        for pth in paths {
            let (info, base) = parse_signing_info(pth);
            let rebuilt = format!("{}{}{}", base, info.suffix(), extension(pth));
            assert_eq!(rebuilt, base_name(pth), "round trip failed for {}", pth);
        }
    }
}

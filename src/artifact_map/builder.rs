//! Folds a path list into an [`ArtifactMap`].

use apk_name_parser::{
    extension, parent_prefix, parse_artifact_info, parse_signing_info, AAB_EXTENSION,
    SIGNING_SUFFIXES,
};
use log::{debug, warn};

use super::{ArtifactMap, OverwriteKind, SlotOverwrite, VariantKey};

/// Map build outputs to `module -> build type -> product flavour -> Artifact`.
///
/// Paths are folded in input order:
/// - `.aab` files fill `aab`; a second AAB for the same variant replaces
///   the first and is reported.
/// - APKs without split tokens fill `apk`. Signed, `-unsigned` and
///   `-bitrise-signed` copies of one APK share a slot and the last one wins
///   without a report.
/// - Split APKs are appended to `split` unless another signing spelling of
///   the same piece is already listed. The universal APK also fills
///   `universal_apk`, reported on replacement like the AAB.
pub fn map_build_artifacts<S: AsRef<str>>(pths: &[S]) -> ArtifactMap {
    let mut map = ArtifactMap::new();
    for pth in pths {
        map.fold_path(pth.as_ref());
    }
    map
}

impl ArtifactMap {
    fn fold_path(&mut self, pth: &str) {
        let info = parse_artifact_info(pth);
        let key = VariantKey::from(&info);
        if !info.is_recognized() {
            debug!("No module or build type in artifact name, grouping under empty keys: {}", pth);
        }

        let slot = self.slot_mut(&key);
        let replaced = if extension(pth) == AAB_EXTENSION {
            slot.aab
                .replace(pth.to_string())
                .map(|previous| (OverwriteKind::Aab, previous))
        } else if !info.split_info.is_split() {
            slot.apk = Some(pth.to_string());
            None
        } else {
            let replaced = if info.split_info.universal {
                slot.universal_apk
                    .replace(pth.to_string())
                    .map(|previous| (OverwriteKind::UniversalApk, previous))
            } else {
                None
            };

            if contains_signing_variant(&slot.split, pth) {
                debug!("Skipping split APK already listed under another signing suffix: {}", pth);
            } else {
                slot.split.push(pth.to_string());
            }
            replaced
        };

        if let Some((kind, previous)) = replaced {
            warn!(
                "Multiple {} generated for module: {}, productFlavour: {}, buildType: {}: {}",
                kind, key.module, key.product_flavour, key.build_type, pth
            );
            self.overwrites.push(SlotOverwrite {
                key,
                kind,
                previous,
                replacement: pth.to_string(),
            });
        }
    }
}

/// Whether `split` already holds `pth`, verbatim or under any single
/// signing suffix.
fn contains_signing_variant(split: &[String], pth: &str) -> bool {
    if split.iter().any(|listed| listed == pth) {
        return true;
    }

    let (_, base) = parse_signing_info(pth);
    let dir = parent_prefix(pth);
    let ext = extension(pth);

    SIGNING_SUFFIXES.iter().any(|suffix| {
        let candidate = format!("{}{}{}{}", dir, base, suffix, ext);
        split.iter().any(|listed| *listed == candidate)
    })
}

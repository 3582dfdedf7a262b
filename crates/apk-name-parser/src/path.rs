//! Path string helpers.
//!
//! Build output paths are handled as plain strings with `/` separators; the
//! files are never touched.

/// Last path component, ignoring trailing separators.
pub fn base_name(pth: &str) -> &str {
    let trimmed = pth.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Extension of the last path component including the leading dot
/// (e.g. `.apk`), or an empty string when there is none.
pub fn extension(pth: &str) -> &str {
    let base = base_name(pth);
    match base.rfind('.') {
        Some(idx) => &base[idx..],
        None => "",
    }
}

/// Everything up to and including the last separator.
///
/// `out/app-debug.apk` yields `out/`, a bare file name yields `""`.
pub fn parent_prefix(pth: &str) -> &str {
    match pth.rfind('/') {
        Some(idx) => &pth[..=idx],
        None => "",
    }
}

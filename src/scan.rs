//! Build output discovery.
//!
//! Collects APK and AAB paths below a deploy directory, or from a newline
//! separated listing. Files are matched by extension only and never opened.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use apk_name_parser::{AAB_EXTENSION, APK_EXTENSION};
use log::debug;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

fn is_build_output(path: &Path) -> bool {
    let name = path.to_string_lossy();
    name.ends_with(APK_EXTENSION) || name.ends_with(AAB_EXTENSION)
}

/// Recursively collect `.apk` and `.aab` files below `dir`, sorted.
pub fn collect_build_outputs(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut outputs = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source.path().unwrap_or(dir).to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_build_output(entry.path()) {
            outputs.push(entry.path().to_string_lossy().into_owned());
        }
    }

    outputs.sort();
    debug!("Found {} build outputs in {}", outputs.len(), dir.display());
    Ok(outputs)
}

/// Read one path per line, trimmed, skipping blank lines.
pub fn read_path_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}

//! Candidate file discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ErrorContext, Result};
use crate::processing::has_supported_extension;

/// List the eligible images directly inside `dir`.
///
/// Only regular files are returned, so subdirectories (including a previous
/// run's output folder) are never candidates. Sorted by file name so runs
/// over the same folder process files in the same order.
pub fn eligible_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).with_file_context(dir)? {
        let path = entry.with_file_context(dir)?.path();

        if path.is_file() && has_supported_extension(&path) {
            files.push(path);
        } else {
            debug!("Skipping {:?}", path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

//! Discovery of timing files in a build tree.

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Extension the build wrapper gives per-target timing files
pub const TIMING_FILE_SUFFIX: &str = ".timing";

/// Recursively find every `*.timing` file under `base_dir`.
///
/// Returned paths are relative to `base_dir`. Traversal order is whatever the
/// filesystem yields; callers that need determinism must sort.
pub fn find_timing_files(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*{}", base_dir.display(), TIMING_FILE_SUFFIX);
    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("bad glob pattern '{}'", pattern))? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let relative = path
            .strip_prefix(base_dir)
            .with_context(|| format!("'{}' is not under '{}'", path.display(), base_dir.display()))?
            .to_path_buf();
        tracing::debug!(file = %relative.display(), "found timing file");
        files.push(relative);
    }
    Ok(files)
}

use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::error::{BuildError, BuildResult};

/// Create a fresh, uniquely named directory under `base` that outlives the run
pub fn unique_dir(base: &Path, prefix: &str) -> BuildResult<PathBuf> {
    let dir = Builder::new().prefix(prefix).tempdir_in(base)?;
    Ok(dir.keep())
}

/// Borrow a path as UTF-8 for passing to external tools
pub fn path_str(path: &Path) -> BuildResult<&str> {
    path.to_str()
        .ok_or_else(|| BuildError::HostError(format!("non-utf8 path: {:?}", path)))
}

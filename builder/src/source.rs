use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

/// Compute the source root of an extracted archive
///
/// Source archives conventionally unpack into a single versioned directory
/// (e.g., `1.0.0.tar.gz` unpacks into `1.0.0/`). Hidden entries are ignored.
/// Anything other than exactly one visible directory is rejected.
pub fn resolve_source_root(extracted: &Path) -> BuildResult<PathBuf> {
    let mut entries = vec![];
    for entry in fs::read_dir(extracted)? {
        let entry = entry?;
        if !entry.file_name().to_string_lossy().starts_with('.') {
            entries.push(entry);
        }
    }
    entries.sort_by_key(|e| e.file_name());

    let entry = match entries.as_slice() {
        [single] => single,
        [] => {
            return Err(BuildError::InvalidLayout(format!(
                "no top-level entry in {}",
                extracted.display()
            )))
        }
        _ => {
            let names: Vec<_> = entries
                .iter()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            return Err(BuildError::InvalidLayout(format!(
                "expect a single top-level entry in {}, found: {}",
                extracted.display(),
                names.join(", ")
            )));
        }
    };

    let root = extracted.join(entry.file_name());
    if !entry.file_type()?.is_dir() {
        return Err(BuildError::InvalidLayout(format!(
            "top-level entry is not a directory: {}",
            root.display()
        )));
    }
    Ok(root)
}

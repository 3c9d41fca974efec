use std::path::PathBuf;

use log::debug;

use crate::error::{BuildError, BuildResult};
use crate::util::process::Runner;

/// Confirm that `program` is available on the host search path
pub fn must_have_bin<R: Runner>(runner: &R, program: &str) -> BuildResult<PathBuf> {
    match runner.which(program) {
        None => Err(BuildError::MissingTool(program.to_string())),
        Some(path) => {
            debug!("found {} at {}", program, path.display());
            Ok(path)
        }
    }
}
